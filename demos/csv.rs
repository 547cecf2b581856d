use game_optimum::{CoalitionValues, shapley_values};
use std::env;
use tabled::{Table, settings::Style};

fn main() {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| format!("{}/tests/data/airport.csv", env!("CARGO_MANIFEST_DIR")));

    let result = CoalitionValues::from_csv(&path).and_then(|coalitions| {
        let number_players = coalitions.singletons().len();
        shapley_values(&coalitions, number_players, 3)
    });

    match result {
        Err(e) => {
            eprintln!("Error computing Shapley values: {e}");
        }
        Ok(allocation) => {
            let mut table = Table::new(&allocation.shares);
            table.with(Style::psql());
            println!("{table}");
        }
    }
}
