use crate::{
    coalition::{CoalitionValues, Player},
    coefficients::coalition_weights,
    error::{OptimumError, Result},
};

/// Guard checks run before a Shapley allocation, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    CoalitionsPresent,
    NumberPlayersPresent,
    CoefficientsComputed,
    GrandCoalitionResolved,
    PlayersKnown,
}

pub const CHECKS: [Check; 5] = [
    Check::CoalitionsPresent,
    Check::NumberPlayersPresent,
    Check::CoefficientsComputed,
    Check::GrandCoalitionResolved,
    Check::PlayersKnown,
];

impl Check {
    pub fn name(self) -> &'static str {
        match self {
            Check::CoalitionsPresent => "coalitions present",
            Check::NumberPlayersPresent => "number of players present",
            Check::CoefficientsComputed => "coefficients computed",
            Check::GrandCoalitionResolved => "grand coalition resolved",
            Check::PlayersKnown => "players known",
        }
    }
}

/// Inputs that passed every check, with what the checks derived from them
#[derive(Debug)]
pub struct ValidatedGame<'a> {
    pub coalitions: &'a CoalitionValues,
    /// Singleton players in discovery order
    pub players: Vec<Player>,
    pub weights: Vec<f64>,
    pub grand_value: f64,
}

/// State threaded through the checks
#[derive(Debug, Default)]
pub(crate) struct Validator<'a> {
    coalitions: Option<&'a CoalitionValues>,
    number_players: Option<usize>,
    weights: Option<Vec<f64>>,
    players: Option<Vec<Player>>,
    grand_value: Option<f64>,
}

impl<'a> Validator<'a> {
    pub(crate) fn new(
        coalitions: Option<&'a CoalitionValues>,
        number_players: Option<usize>,
    ) -> Self {
        Self {
            coalitions,
            number_players,
            ..Default::default()
        }
    }

    pub(crate) fn run(&mut self, check: Check) -> Result<()> {
        match check {
            Check::CoalitionsPresent => match self.coalitions {
                Some(coalitions) if !coalitions.is_empty() => Ok(()),
                _ => Err(OptimumError::CoalitionsNotFound),
            },
            Check::NumberPlayersPresent => self
                .number_players
                .map(|_| ())
                .ok_or(OptimumError::NumberPlayersNotFound),
            Check::CoefficientsComputed => {
                let number_players = self.number_players()?;
                let weights = coalition_weights(number_players).map_err(|e| {
                    OptimumError::CoefficientsNotFound {
                        reason: e.to_string(),
                    }
                })?;
                if weights.is_empty() {
                    return Err(OptimumError::CoefficientsNotFound {
                        reason: "no players to weight".to_string(),
                    });
                }
                self.weights = Some(weights);
                Ok(())
            }
            Check::GrandCoalitionResolved => {
                let coalitions = self.coalitions()?;
                let expected = self.number_players()?;
                let players = coalitions.singletons();

                let grand_value = coalitions
                    .grand_coalition()
                    .filter(|_| players.len() == expected)
                    .and_then(|grand| coalitions.get(&grand))
                    .ok_or(OptimumError::GrandCoalitionNotFound {
                        expected,
                        found: players.len(),
                    })?;

                self.players = Some(players);
                self.grand_value = Some(grand_value);
                Ok(())
            }
            Check::PlayersKnown => {
                let coalitions = self.coalitions()?;
                let players = self.players.as_ref().ok_or_else(|| out_of_order(check))?;

                for (coalition, _) in coalitions {
                    if let Some(stranger) = coalition
                        .players()
                        .find(|&member| !players.contains(member))
                    {
                        return Err(OptimumError::UnknownPlayer {
                            coalition: coalition.to_string(),
                            player: stranger.clone(),
                        });
                    }
                }
                Ok(())
            }
        }
    }

    pub(crate) fn finish(self) -> Result<ValidatedGame<'a>> {
        match (self.coalitions, self.weights, self.players, self.grand_value) {
            (Some(coalitions), Some(weights), Some(players), Some(grand_value)) => {
                Ok(ValidatedGame {
                    coalitions,
                    players,
                    weights,
                    grand_value,
                })
            }
            _ => Err(OptimumError::InvariantViolation(
                "validation finished before every check ran".to_string(),
            )),
        }
    }

    fn coalitions(&self) -> Result<&'a CoalitionValues> {
        self.coalitions.ok_or(OptimumError::CoalitionsNotFound)
    }

    fn number_players(&self) -> Result<usize> {
        self.number_players.ok_or(OptimumError::NumberPlayersNotFound)
    }
}

fn out_of_order(check: Check) -> OptimumError {
    OptimumError::InvariantViolation(format!("check '{}' ran out of order", check.name()))
}

/// Validate all inputs for a Shapley allocation
pub fn check_inputs(
    coalitions: Option<&CoalitionValues>,
    number_players: Option<usize>,
) -> Result<ValidatedGame<'_>> {
    let mut validator = Validator::new(coalitions, number_players);
    for check in CHECKS {
        validator.run(check).inspect_err(|e| {
            log::debug!("Check '{}' failed: {e}", check.name());
        })?;
    }
    validator.finish()
}
