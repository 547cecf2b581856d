use crate::error::{OptimumError, Result};
use regex::Regex;
use std::{
    collections::{BTreeMap, BTreeSet, btree_map},
    fmt::{Display, Formatter},
};

// For clarity
pub type Player = String;

/// Separators accepted between labels in a coalition key ("A+B", "A, B", "A|B")
const DELIMITER_PATTERN: &str = r"[\s,+|]+";

/// A non-empty set of players.
///
/// Members are kept sorted, so two coalitions built from the same labels in a
/// different order compare equal and hash to the same map slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coalition {
    members: BTreeSet<Player>,
}

impl Coalition {
    pub fn new<I, S>(players: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Player>,
    {
        let members: BTreeSet<Player> = players.into_iter().map(Into::into).collect();
        if members.is_empty() {
            return Err(OptimumError::EmptyCoalition);
        }
        Ok(Self { members })
    }

    pub fn singleton(player: impl Into<Player>) -> Self {
        Self {
            members: BTreeSet::from([player.into()]),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    // Always false once constructed
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }

    pub fn contains(&self, player: &str) -> bool {
        self.members.contains(player)
    }

    /// Members in canonical (lexicographic) order
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.members.iter()
    }

    /// The coalition left after `player` walks out, if anyone remains
    pub fn without(&self, player: &str) -> Option<Coalition> {
        let members: BTreeSet<Player> = self
            .members
            .iter()
            .filter(|member| member.as_str() != player)
            .cloned()
            .collect();
        (!members.is_empty()).then_some(Coalition { members })
    }

    pub fn union(&self, other: &Coalition) -> Coalition {
        Coalition {
            members: self.members.union(&other.members).cloned().collect(),
        }
    }
}

impl Display for Coalition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<&str> = self.members.iter().map(String::as_str).collect();
        write!(f, "{{{}}}", labels.join(", "))
    }
}

/// Worth of each coalition in a cooperative game
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoalitionValues {
    values: BTreeMap<Coalition, f64>,
}

impl CoalitionValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from string keys such as `"A"`, `"AB"` or `"NYC+LON"`.
    ///
    /// Keys with separators are split on them. Other keys are segmented into
    /// labels found in shorter keys; a key that cannot be segmented names a
    /// player on its own. Keys are therefore read shortest first.
    pub fn from_keys<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<f64>,
    {
        let delimiter = Regex::new(DELIMITER_PATTERN)?;

        let mut entries: Vec<(String, f64)> = entries
            .into_iter()
            .map(|(key, value)| (key.as_ref().trim().to_string(), value.into()))
            .collect();
        entries.sort_by_key(|(key, _)| key.chars().count());

        // Longest labels are tried first when segmenting
        let mut labels: Vec<Player> = Vec::new();
        let mut parsed = CoalitionValues::new();

        for (key, value) in entries {
            let members: Vec<Player> = if delimiter.is_match(&key) {
                delimiter
                    .split(&key)
                    .filter(|label| !label.is_empty())
                    .map(str::to_string)
                    .collect()
            } else if let Some(segments) = segment(&key, &labels, &mut Vec::new()) {
                segments
            } else {
                let position = labels
                    .iter()
                    .position(|label| label.chars().count() < key.chars().count())
                    .unwrap_or(labels.len());
                labels.insert(position, key.clone());
                vec![key]
            };

            let coalition = Coalition::new(members)?;
            if let Some(previous) = parsed.get(&coalition) {
                if previous != value {
                    return Err(OptimumError::DuplicateCoalition {
                        coalition: coalition.to_string(),
                    });
                }
            }
            parsed.insert(coalition, value);
        }

        Ok(parsed)
    }

    /// Set a coalition's worth, returning the previous one
    pub fn insert(&mut self, coalition: Coalition, value: f64) -> Option<f64> {
        self.values.insert(coalition, value)
    }

    pub fn get(&self, coalition: &Coalition) -> Option<f64> {
        self.values.get(coalition).copied()
    }

    /// Worth of a coalition, counting undefined coalitions as worthless
    pub fn value_or_zero(&self, coalition: &Coalition) -> f64 {
        self.get(coalition).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Coalition, f64> {
        self.values.iter()
    }

    /// Players owning a singleton coalition, in discovery order
    pub fn singletons(&self) -> Vec<Player> {
        self.values
            .keys()
            .filter(|coalition| coalition.is_singleton())
            .flat_map(|coalition| coalition.players().cloned())
            .collect()
    }

    /// Union of all singleton players, if there is at least one
    pub fn grand_coalition(&self) -> Option<Coalition> {
        Coalition::new(self.singletons()).ok()
    }
}

impl FromIterator<(Coalition, f64)> for CoalitionValues {
    fn from_iter<T: IntoIterator<Item = (Coalition, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CoalitionValues {
    type Item = (&'a Coalition, &'a f64);
    type IntoIter = btree_map::Iter<'a, Coalition, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Split `key` into distinct known labels, preferring longer labels
fn segment(key: &str, labels: &[Player], used: &mut Vec<usize>) -> Option<Vec<Player>> {
    if key.is_empty() {
        return (!used.is_empty()).then(|| used.iter().map(|&i| labels[i].clone()).collect());
    }

    for (i, label) in labels.iter().enumerate() {
        if used.contains(&i) {
            continue;
        }
        if let Some(rest) = key.strip_prefix(label.as_str()) {
            used.push(i);
            if let Some(found) = segment(rest, labels, used) {
                return Some(found);
            }
            used.pop();
        }
    }

    None
}
