//! Game theory solvers
//!
//! Two independent solvers: pure-strategy optimal play in two-person zero-sum
//! matrix games, and Shapley value allocation of a grand coalition's worth
//! among the players of a cooperative game.

pub mod coalition;
pub mod coefficients;
pub mod error;
pub mod matrix_game;
pub mod shapley;
pub mod types;
pub mod utils;
pub mod validation;
pub mod vector_math;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export main types and functions
pub use coalition::{Coalition, CoalitionValues, Player};
pub use coefficients::{LIMIT_VALUE, coalition_weights};
pub use error::{OptimumError, Result};
pub use matrix_game::{GameResult, MatrixGame, PayoffMatrix, solve_matrix_game};
pub use shapley::{ShapleyGame, ShapleyGameBuilder, shapley_values};
pub use types::{Allocation, PlayerShare};
pub use utils::round_to;
pub use vector_math::inner_product;
