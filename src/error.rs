use crate::shapley::ShapleyGameBuilderError;
use thiserror::Error;

/// Error types for the game solvers
#[derive(Debug, Error)]
pub enum OptimumError {
    /// Player count would overflow the factorials behind the weights
    #[error("There are too many players ({count}); reduce the number of players below {limit}.")]
    TooManyPlayers { count: usize, limit: usize },

    /// Coalition mapping missing or empty
    #[error("Coalitions not found.")]
    CoalitionsNotFound,

    /// Player count not supplied
    #[error("Number of players not found.")]
    NumberPlayersNotFound,

    /// Weight coefficients could not be computed
    #[error("Coefficients not found: {reason}")]
    CoefficientsNotFound { reason: String },

    /// Singletons do not add up to a grand coalition present in the mapping
    #[error(
        "Grand coalition not found: {found} singleton coalitions defined for {expected} players."
    )]
    GrandCoalitionNotFound { expected: usize, found: usize },

    /// A coalition names a label that has no singleton coalition
    #[error("Coalition {coalition} contains {player}, which has no singleton coalition.")]
    UnknownPlayer { coalition: String, player: String },

    /// Efficiency axiom violated
    #[error(
        "Allocation does not sum to the grand coalition's value: allocated {allocated}, grand coalition {grand}."
    )]
    AllocationMismatch { allocated: f64, grand: f64 },

    /// Payoff matrix without rows or columns
    #[error("The payoff matrix must have at least one row and one column.")]
    EmptyMatrix,

    /// Payoff matrix rows of different lengths
    #[error("Row {row} of the payoff matrix has {found} entries; expected {expected}.")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Vectors of different lengths
    #[error("Vectors have different dimensions: {left} and {right}.")]
    DimensionMismatch { left: usize, right: usize },

    /// Coalition without members
    #[error("A coalition must contain at least one player.")]
    EmptyCoalition,

    /// Two keys describing the same coalition with different worths
    #[error("Coalition {coalition} is defined twice with different values.")]
    DuplicateCoalition { coalition: String },

    /// Internal consistency check failed
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Coalition key pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Shapley game configuration build error: {0}")]
    ShapleyGameBuild(#[from] ShapleyGameBuilderError),

    /// CSV reading failure
    #[cfg(feature = "serde")]
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, OptimumError>;
