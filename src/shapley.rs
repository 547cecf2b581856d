use crate::{
    coalition::CoalitionValues,
    error::{OptimumError, Result},
    types::{Allocation, PlayerShare},
    utils::round_to,
    validation::{ValidatedGame, check_inputs},
};
use derive_builder::Builder;
use rayon::prelude::*;

/// Decimal digits kept in each player's value unless configured otherwise
pub const DEFAULT_ROUND_PRECISION: u32 = 3;

/// Decimal digits compared when checking allocations against the grand coalition
const EFFICIENCY_PRECISION: u32 = 2;

/// Player count from which per-player sums run on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 8;

/// A cooperative game to be split with Shapley values.
///
/// Both inputs are optional so that an unset mapping or player count is
/// reported as a validation error rather than being unrepresentable.
#[derive(Debug, Clone, Builder)]
pub struct ShapleyGame {
    #[builder(setter(into, strip_option), default)]
    coalitions: Option<CoalitionValues>,
    #[builder(setter(strip_option), default)]
    number_players: Option<usize>,
    #[builder(default = "DEFAULT_ROUND_PRECISION")]
    round_precision: u32,
}

impl ShapleyGame {
    pub fn new(coalitions: Option<CoalitionValues>, number_players: Option<usize>) -> Self {
        Self {
            coalitions,
            number_players,
            round_precision: DEFAULT_ROUND_PRECISION,
        }
    }

    /// Compute Shapley values per player
    pub fn compute(&self) -> Result<Allocation> {
        allocate(
            self.coalitions.as_ref(),
            self.number_players,
            self.round_precision,
        )
    }
}

/// Shapley values of a fully specified game
pub fn shapley_values(
    coalitions: &CoalitionValues,
    number_players: usize,
    round_precision: u32,
) -> Result<Allocation> {
    allocate(Some(coalitions), Some(number_players), round_precision)
}

fn allocate(
    coalitions: Option<&CoalitionValues>,
    number_players: Option<usize>,
    round_precision: u32,
) -> Result<Allocation> {
    let game = check_inputs(coalitions, number_players)?;

    let values: Vec<f64> = if game.players.len() >= PARALLEL_THRESHOLD {
        game.players
            .par_iter()
            .map(|player| round_to(player_value(&game, player), round_precision))
            .collect()
    } else {
        game.players
            .iter()
            .map(|player| round_to(player_value(&game, player), round_precision))
            .collect()
    };

    // Efficiency: the shares must add up to what everyone achieves together
    let allocated: f64 = values.iter().sum();
    if round_to(allocated, EFFICIENCY_PRECISION) != round_to(game.grand_value, EFFICIENCY_PRECISION)
    {
        log::warn!(
            "Allocation {allocated} does not match grand coalition value {}",
            game.grand_value
        );
        return Err(OptimumError::AllocationMismatch {
            allocated,
            grand: game.grand_value,
        });
    }

    log::debug!(
        "Allocated {} among {} players across {} coalitions",
        game.grand_value,
        game.players.len(),
        game.coalitions.len()
    );

    let shares = game
        .players
        .into_iter()
        .zip(values)
        .map(|(player, value)| PlayerShare::new(player, value))
        .collect();

    Ok(Allocation::from_shares(shares))
}

/// Weighted sum of a player's marginal contributions to every coalition they join
fn player_value(game: &ValidatedGame<'_>, player: &str) -> f64 {
    let value = game
        .coalitions
        .iter()
        .filter(|(coalition, _)| coalition.contains(player))
        .filter_map(|(coalition, &worth)| {
            let weight = game.weights.get(coalition.len() - 1)?;
            // A singleton leaves nobody behind, so its full worth is the contribution
            let remainder = coalition
                .without(player)
                .map_or(0.0, |rest| game.coalitions.value_or_zero(&rest));
            Some(weight * (worth - remainder))
        })
        .sum();

    log::trace!("Player {player} contributes {value}");
    value
}
