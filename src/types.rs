use crate::coalition::Player;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use {
    serde::{Deserialize, Serialize},
    tabled::Tabled,
};

/// Shapley value allocated to one player
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Tabled))]
pub struct PlayerShare {
    pub player: Player,
    pub value: f64,
}

impl PlayerShare {
    pub fn new(player: Player, value: f64) -> Self {
        PlayerShare { player, value }
    }
}

impl Display for PlayerShare {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.player, self.value)
    }
}

/// Shapley values for every player, in singleton discovery order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Allocation {
    pub shares: Vec<PlayerShare>,
}

impl Allocation {
    pub fn from_shares(shares: Vec<PlayerShare>) -> Self {
        Allocation { shares }
    }

    /// The bare allocation vector
    pub fn values(&self) -> Vec<f64> {
        self.shares.iter().map(|share| share.value).collect()
    }

    pub fn get(&self, player: &str) -> Option<f64> {
        self.shares
            .iter()
            .find(|share| share.player == player)
            .map(|share| share.value)
    }

    pub fn total(&self) -> f64 {
        self.shares.iter().map(|share| share.value).sum()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerShare> {
        self.shares.iter()
    }
}

impl IntoIterator for Allocation {
    type Item = PlayerShare;
    type IntoIter = std::vec::IntoIter<PlayerShare>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.into_iter()
    }
}

impl Display for Allocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let shares: Vec<String> = self.shares.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", shares.join(", "))
    }
}

#[cfg(feature = "serde")]
mod csv_io {
    use super::*;
    use crate::{
        coalition::CoalitionValues,
        error::{OptimumError, Result},
    };
    use std::{io::Read, path::Path};

    #[derive(Debug, Deserialize)]
    struct CoalitionRecord {
        #[serde(rename = "Coalition")]
        coalition: String,
        #[serde(rename = "Value")]
        value: f64,
    }

    impl CoalitionValues {
        /// Read a coalition table from a CSV file with `Coalition,Value` columns
        pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
            let reader =
                csv::Reader::from_path(path).map_err(|e| OptimumError::Csv(e.to_string()))?;
            Self::read_records(reader)
        }

        /// Read a coalition table from any CSV source
        pub fn from_csv_reader<R: Read>(source: R) -> Result<Self> {
            Self::read_records(csv::Reader::from_reader(source))
        }

        fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
            let mut entries = Vec::new();
            for result in reader.deserialize() {
                let record: CoalitionRecord =
                    result.map_err(|e| OptimumError::Csv(e.to_string()))?;
                entries.push((record.coalition, record.value));
            }

            Self::from_keys(entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Allocation {
        Allocation::from_shares(vec![
            PlayerShare::new("a".to_string(), 5000.0),
            PlayerShare::new("b".to_string(), 3750.0),
            PlayerShare::new("c".to_string(), 1250.0),
        ])
    }

    #[test]
    fn test_allocation_accessors() {
        let allocation = sample();

        assert_eq!(allocation.values(), vec![5000.0, 3750.0, 1250.0]);
        assert_eq!(allocation.get("b"), Some(3750.0));
        assert_eq!(allocation.get("z"), None);
        assert_eq!(allocation.total(), 10000.0);
        assert_eq!(allocation.len(), 3);
    }

    #[test]
    fn test_allocation_display() {
        assert_eq!(sample().to_string(), "[a: 5000, b: 3750, c: 1250]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_coalitions_from_csv_reader() {
        use crate::coalition::{Coalition, CoalitionValues};

        let data = "Coalition,Value\na,5000\nb,5000\nc,0\nab,7500\nac,7500\nbc,5000\nabc,10000\n";
        let values = CoalitionValues::from_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(values.len(), 7);
        assert_eq!(
            values.get(&Coalition::new(["a", "c"]).unwrap()),
            Some(7500.0)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_csv_bad_value() {
        use crate::{coalition::CoalitionValues, error::OptimumError};

        let data = "Coalition,Value\na,lots\n";
        let result = CoalitionValues::from_csv_reader(data.as_bytes());
        assert!(matches!(result, Err(OptimumError::Csv(_))));
    }
}
