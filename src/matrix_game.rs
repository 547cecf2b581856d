//! Two-person zero-sum games solved in pure strategies.
//!
//! The first player picks a row and secures at least the largest row minimum
//! (the lower value); the second player picks a column and concedes at most
//! the smallest column maximum (the higher value). When both coincide the
//! matrix has a saddle point.

use crate::error::{OptimumError, Result};
use faer::Mat;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rectangular payoff matrix, rows for the first player and columns for the second
#[derive(Debug, Clone)]
pub struct PayoffMatrix {
    payoffs: Mat<f64>,
}

impl PayoffMatrix {
    /// Build from rows, rejecting empty or ragged input
    pub fn from_rows<I, R, T>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        if ncols == 0 {
            return Err(OptimumError::EmptyMatrix);
        }

        for (i, row) in rows.iter().enumerate() {
            let found = row.as_ref().len();
            if found != ncols {
                return Err(OptimumError::RaggedMatrix {
                    row: i,
                    expected: ncols,
                    found,
                });
            }
        }

        let payoffs: Mat<f64> =
            Mat::from_fn(rows.len(), ncols, |i, j| rows[i].as_ref()[j].into());
        Ok(Self { payoffs })
    }

    pub fn nrows(&self) -> usize {
        self.payoffs.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.payoffs.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.payoffs[(row, col)]
    }

    /// A row of the matrix, i.e. one of the first player's strategies
    pub fn row(&self, row: usize) -> Vec<f64> {
        (0..self.ncols()).map(|j| self.payoffs[(row, j)]).collect()
    }

    /// A column of the matrix, i.e. one of the second player's strategies
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.nrows()).map(|i| self.payoffs[(i, col)]).collect()
    }

    pub fn as_mat(&self) -> &Mat<f64> {
        &self.payoffs
    }

    fn row_minima(&self) -> Vec<f64> {
        (0..self.nrows())
            .map(|i| {
                (0..self.ncols())
                    .map(|j| self.payoffs[(i, j)])
                    .fold(f64::INFINITY, f64::min)
            })
            .collect()
    }

    fn column_maxima(&self) -> Vec<f64> {
        (0..self.ncols())
            .map(|j| {
                (0..self.nrows())
                    .map(|i| self.payoffs[(i, j)])
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect()
    }
}

/// Optimal pure strategies of a matrix game
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameResult {
    pub first_strategy: Vec<f64>,
    pub second_strategy: Vec<f64>,
    pub first_index: usize,
    pub second_index: usize,
    pub lower_value: f64,
    pub higher_value: f64,
    pub equilibrium: bool,
}

impl Display for GameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The first player's optimal strategy is row {} {:?} with lower value {}; \
             the second player's optimal strategy is column {} {:?} with higher value {}; ",
            self.first_index + 1,
            self.first_strategy,
            self.lower_value,
            self.second_index + 1,
            self.second_strategy,
            self.higher_value,
        )?;
        if self.equilibrium {
            write!(
                f,
                "the game has a saddle point with value {}.",
                self.lower_value
            )
        } else {
            write!(f, "the game has no saddle point in pure strategies.")
        }
    }
}

/// Zero-sum game between a row player and a column player
#[derive(Debug, Clone)]
pub struct MatrixGame {
    matrix: PayoffMatrix,
}

impl MatrixGame {
    pub fn new(matrix: PayoffMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &PayoffMatrix {
        &self.matrix
    }

    /// Maximin row against minimax column; ties go to the first index
    pub fn result(&self) -> GameResult {
        let row_minima = self.matrix.row_minima();
        let column_maxima = self.matrix.column_maxima();

        let lower_value = row_minima.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let higher_value = column_maxima.iter().copied().fold(f64::INFINITY, f64::min);

        let first_index = first_index_of(&row_minima, lower_value);
        let second_index = first_index_of(&column_maxima, higher_value);

        log::debug!(
            "Solved {}x{} matrix game: lower {lower_value}, higher {higher_value}",
            self.matrix.nrows(),
            self.matrix.ncols()
        );

        GameResult {
            first_strategy: self.matrix.row(first_index),
            second_strategy: self.matrix.column(second_index),
            first_index,
            second_index,
            lower_value,
            higher_value,
            equilibrium: lower_value == higher_value,
        }
    }

    /// The result as a sentence
    pub fn report(&self) -> String {
        self.result().to_string()
    }
}

/// Solve a game given as rows of payoffs
pub fn solve_matrix_game<I, R, T>(rows: I) -> Result<GameResult>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[T]>,
    T: Copy + Into<f64>,
{
    let matrix = PayoffMatrix::from_rows(rows)?;
    Ok(MatrixGame::new(matrix).result())
}

// NaN entries never match; fall back to the first strategy
fn first_index_of(values: &[f64], target: f64) -> usize {
    values.iter().position(|&v| v == target).unwrap_or(0)
}
