use clap::{Parser, Subcommand};
use game_optimum::{
    CoalitionValues, MatrixGame, PayoffMatrix, ShapleyGameBuilder, VERSION, coalition_weights,
    inner_product,
};
use std::{
    collections::BTreeMap,
    error::Error,
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};
use tabled::{Table, settings::Style};

#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Optimal pure strategies of a zero-sum matrix game.
    Matrix {
        /// JSON file holding the payoff matrix as an array of rows.
        file: PathBuf,

        /// Print a sentence instead of JSON.
        #[arg(short, long)]
        report: bool,
    },

    /// Shapley values of a cooperative game.
    Shapley {
        /// JSON object mapping coalition keys to values, or a CSV file with
        /// `Coalition,Value` columns.
        file: PathBuf,

        /// Number of players in the game.
        #[arg(short, long)]
        players: usize,

        /// Decimal digits kept in each value.
        #[arg(short, long, default_value_t = 3)]
        round: u32,
    },

    /// Shapley weights for each coalition size.
    Weights {
        /// Number of players in the game.
        players: usize,
    },

    /// Inner product of two comma separated vectors, e.g. 1,2 2,3.
    Dot { left: String, right: String },
}

fn parse_vector(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|component| {
            component
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("Invalid vector component '{component}': {e}"))
        })
        .collect()
}

fn read_coalitions(file: &Path) -> Result<CoalitionValues, Box<dyn Error>> {
    if file.extension().is_some_and(|ext| ext == "csv") {
        return Ok(CoalitionValues::from_csv(file)?);
    }

    let contents = fs::read_to_string(file)?;
    let entries: BTreeMap<String, f64> = serde_json::from_str(&contents)?;
    Ok(CoalitionValues::from_keys(entries)?)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Matrix { file, report } => {
            let contents = fs::read_to_string(&file)?;
            let rows: Vec<Vec<f64>> = serde_json::from_str(&contents)?;
            let game = MatrixGame::new(PayoffMatrix::from_rows(&rows)?);

            if report {
                println!("{}", game.report());
            } else {
                println!("{}", serde_json::to_string_pretty(&game.result())?);
            }
        }
        Command::Shapley {
            file,
            players,
            round,
        } => {
            let allocation = ShapleyGameBuilder::default()
                .coalitions(read_coalitions(&file)?)
                .number_players(players)
                .round_precision(round)
                .build()?
                .compute()?;

            let mut table = Table::new(&allocation.shares);
            table.with(Style::psql());
            println!("{table}");
        }
        Command::Weights { players } => {
            let weights = coalition_weights(players)?;
            println!("{}", serde_json::to_string(&weights)?);
        }
        Command::Dot { left, right } => {
            let product = inner_product(&parse_vector(&left)?, &parse_vector(&right)?)?;
            println!("{product}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
