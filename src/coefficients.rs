use crate::{
    error::{OptimumError, Result},
    utils::factorial,
};

/// Smallest player count whose factorial no longer fits in an f64
pub const LIMIT_VALUE: usize = 171;

/// Shapley weights per coalition size.
///
/// Entry `k` is `k! (n - k - 1)! / n!`, the probability that a random ordering
/// of all `n` players places a given player right after `k` others, i.e. the
/// weight of that player's marginal contribution to a coalition of size `k + 1`.
pub fn coalition_weights(number_players: usize) -> Result<Vec<f64>> {
    if number_players >= LIMIT_VALUE {
        return Err(OptimumError::TooManyPlayers {
            count: number_players,
            limit: LIMIT_VALUE,
        });
    }

    let total = factorial(number_players);
    let weights: Vec<f64> = (0..number_players)
        .map(|k| factorial(k) * factorial(number_players - k - 1) / total)
        .collect();

    if weights.len() != number_players {
        return Err(OptimumError::InvariantViolation(format!(
            "expected {number_players} coefficients, computed {}",
            weights.len()
        )));
    }

    log::debug!("Computed {number_players} coalition weights");
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_three_players() {
        let weights = coalition_weights(3).unwrap();
        let expected = [1.0 / 3.0, 1.0 / 6.0, 1.0 / 3.0];

        assert_eq!(weights.len(), 3);
        for (w, e) in weights.iter().zip(expected) {
            assert_relative_eq!(*w, e);
        }
    }

    #[test]
    fn test_four_players() {
        let weights = coalition_weights(4).unwrap();
        let expected = [1.0 / 4.0, 1.0 / 12.0, 1.0 / 12.0, 1.0 / 4.0];

        for (w, e) in weights.iter().zip(expected) {
            assert_relative_eq!(*w, e);
        }
    }

    #[test]
    fn test_single_player_gets_everything() {
        assert_eq!(coalition_weights(1).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_no_players() {
        assert!(coalition_weights(0).unwrap().is_empty());
    }

    #[test]
    fn test_weights_are_symmetric() {
        let weights = coalition_weights(9).unwrap();
        for k in 0..9 {
            assert_relative_eq!(weights[k], weights[8 - k]);
        }
    }

    #[test]
    fn test_largest_supported_count() {
        let weights = coalition_weights(LIMIT_VALUE - 1).unwrap();
        assert_eq!(weights.len(), 170);
        assert!(weights.iter().all(|w| w.is_finite() && *w > 0.0));
        assert_relative_eq!(weights[0], 1.0 / 170.0, max_relative = 1e-12);
    }

    #[test]
    fn test_limit_value_rejected() {
        let result = coalition_weights(LIMIT_VALUE);
        assert!(matches!(
            result,
            Err(OptimumError::TooManyPlayers {
                count: 171,
                limit: 171
            })
        ));
        assert!(coalition_weights(500).is_err());
    }
}
