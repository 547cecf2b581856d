use game_optimum::{CoalitionValues, ShapleyGameBuilder, error::Result, solve_matrix_game};

fn main() -> Result<()> {
    // Matrix game
    let result = solve_matrix_game([
        [0, 23, 2, 423, 34, 4, 2],
        [55, 7, 10, 13, 434, 3434, 34],
        [5, 7, 10, 3, 44, 334, 34],
    ])?;
    println!("{result}");

    // Cooperative game
    let coalitions = CoalitionValues::from_keys([
        ("a", 5000),
        ("b", 5000),
        ("c", 0),
        ("ab", 7500),
        ("ac", 7500),
        ("bc", 5000),
        ("abc", 10_000),
    ])?;

    let allocation = ShapleyGameBuilder::default()
        .coalitions(coalitions)
        .number_players(3)
        .build()?
        .compute()?;

    for share in allocation {
        println!("Player: {}, Shapley: {}", share.player, share.value);
    }

    Ok(())
}
