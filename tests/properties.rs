//! Property-based tests for both solvers.

use proptest::prelude::*;

use game_optimum::{Coalition, CoalitionValues, round_to, shapley_values, solve_matrix_game};

/// Strategy: a complete cooperative game with integer worths for 1-5 players.
fn game_strategy() -> impl Strategy<Value = (usize, Vec<i32>)> {
    (1..=5usize).prop_flat_map(|n| {
        let coalitions = (1usize << n) - 1;
        (Just(n), prop::collection::vec(-1000..=1000i32, coalitions))
    })
}

fn build_game(n: usize, worths: &[i32]) -> CoalitionValues {
    let players: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
    (1..(1usize << n))
        .map(|mask| {
            let members = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| players[i].clone());
            (Coalition::new(members).unwrap(), worths[mask - 1] as f64)
        })
        .collect()
}

/// Strategy: a payoff matrix with 1-5 rows and 1-5 columns.
fn matrix_strategy() -> impl Strategy<Value = Vec<Vec<i32>>> {
    (1..=5usize, 1..=5usize).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(-50..=50i32, cols), rows)
    })
}

/// Strategy: a matrix together with row and column permutations.
fn permuted_matrix_strategy() -> impl Strategy<Value = (Vec<Vec<i32>>, Vec<usize>, Vec<usize>)> {
    matrix_strategy().prop_flat_map(|matrix| {
        let rows: Vec<usize> = (0..matrix.len()).collect();
        let cols: Vec<usize> = (0..matrix[0].len()).collect();
        (
            Just(matrix),
            Just(rows).prop_shuffle(),
            Just(cols).prop_shuffle(),
        )
    })
}

proptest! {
    // 1. Efficiency: shares add up to the grand coalition
    #[test]
    fn allocation_sums_to_grand_coalition((n, worths) in game_strategy()) {
        let game = build_game(n, &worths);
        let allocation = shapley_values(&game, n, 3).unwrap();

        prop_assert_eq!(allocation.len(), n);
        let grand = worths[(1usize << n) - 2] as f64;
        prop_assert_eq!(round_to(allocation.total(), 2), round_to(grand, 2));
    }

    // 2. Symmetry: relabelling keys in reverse order changes nothing
    #[test]
    fn allocation_ignores_insertion_order((n, worths) in game_strategy()) {
        let game = build_game(n, &worths);
        let reversed: CoalitionValues = game
            .iter()
            .rev()
            .map(|(coalition, value)| (coalition.clone(), *value))
            .collect();

        prop_assert_eq!(
            shapley_values(&game, n, 3).unwrap(),
            shapley_values(&reversed, n, 3).unwrap()
        );
    }

    // 3. Solving is deterministic
    #[test]
    fn matrix_solve_deterministic(matrix in matrix_strategy()) {
        let first = solve_matrix_game(&matrix).unwrap();
        let second = solve_matrix_game(&matrix).unwrap();
        prop_assert_eq!(first, second);
    }

    // 4. Lower value never exceeds higher value
    #[test]
    fn lower_value_bounded_by_higher(matrix in matrix_strategy()) {
        let result = solve_matrix_game(&matrix).unwrap();
        prop_assert!(result.lower_value <= result.higher_value);
        prop_assert_eq!(result.equilibrium, result.lower_value == result.higher_value);
    }

    // 5. Permuting rows and columns keeps both values and permutes the chosen strategies
    #[test]
    fn matrix_values_invariant_under_permutation(
        (matrix, row_order, col_order) in permuted_matrix_strategy()
    ) {
        let permuted: Vec<Vec<i32>> = row_order
            .iter()
            .map(|&i| col_order.iter().map(|&j| matrix[i][j]).collect())
            .collect();

        let original = solve_matrix_game(&matrix).unwrap();
        let shuffled = solve_matrix_game(&permuted).unwrap();

        prop_assert_eq!(original.lower_value, shuffled.lower_value);
        prop_assert_eq!(original.higher_value, shuffled.higher_value);
        prop_assert_eq!(original.equilibrium, shuffled.equilibrium);

        // The chosen row of the shuffled game is a permuted maximin row of the original
        let source_row = row_order[shuffled.first_index];
        let expected_row: Vec<f64> =
            col_order.iter().map(|&j| matrix[source_row][j] as f64).collect();
        prop_assert_eq!(&shuffled.first_strategy, &expected_row);
        let row_min = matrix[source_row].iter().copied().min().unwrap() as f64;
        prop_assert_eq!(row_min, original.lower_value);

        let source_col = col_order[shuffled.second_index];
        let expected_col: Vec<f64> =
            row_order.iter().map(|&i| matrix[i][source_col] as f64).collect();
        prop_assert_eq!(&shuffled.second_strategy, &expected_col);
        let col_max = matrix.iter().map(|row| row[source_col]).max().unwrap() as f64;
        prop_assert_eq!(col_max, original.higher_value);
    }
}
