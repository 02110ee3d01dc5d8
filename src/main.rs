mod report;

use clap::{Parser, Subcommand};
use pythagorx::{
    applications, catalog_json, find_application, round_for_display, Bounds, Calculator, Leg,
    SpatialDelta, DISPLAY_DECIMALS,
};
use report::{render_catalog, render_distance, render_triangle};
use std::error::Error;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Pythagorean theorem calculator.
#[derive(Parser, Debug)]
#[command(name = "pythagorx")]
#[command(about = "Compute hypotenuses and distances with validated input")]
struct Args {
    /// Raise the log level (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// What to compute.
    #[command(subcommand)]
    command: Command,
}

/// Subcommands offered by the binary.
#[derive(Subcommand, Debug)]
enum Command {
    /// Hypotenuse of a right triangle with legs in (0, 20].
    Triangle {
        /// First leg.
        a: String,
        /// Second leg.
        b: String,
        /// Print the legs and rounded hypotenuse as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Length of a move by (x, y, z), each component in [-20, 20].
    Distance {
        /// Change along X.
        #[arg(allow_negative_numbers = true)]
        x: String,
        /// Change along Y.
        #[arg(allow_negative_numbers = true)]
        y: String,
        /// Change along Z.
        #[arg(allow_negative_numbers = true)]
        z: String,
    },
    /// List the application cards, or show one of them.
    Catalog {
        /// Identifier of the card to show.
        #[arg(long)]
        id: Option<String>,
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Triangle { a, b, json } => {
            // Start from the default session and feed it the two legs as a
            // learner would type them.
            let mut calculator = Calculator::new();
            calculator.enter(Leg::A, &a)?;
            let triple = calculator.enter(Leg::B, &b)?;
            info!(a = triple.a, b = triple.b, c = triple.c, "triangle computed");

            if json {
                println!("{}", serde_json::to_string_pretty(&triple)?);
            } else {
                print!("{}", render_triangle(&triple));
            }
        }
        Command::Distance { x, y, z } => {
            let delta = SpatialDelta::parse(&x, &y, &z, Bounds::DELTA)?;
            let rounded = round_for_display(delta.distance(), DISPLAY_DECIMALS);
            print!("{}", render_distance(&delta, rounded));
        }
        Command::Catalog { id, json } => {
            if json {
                match id.as_deref() {
                    Some(id) => {
                        let card = find_application(id)
                            .ok_or_else(|| format!("no application card with id `{id}`"))?;
                        println!("{}", serde_json::to_string_pretty(card)?);
                    }
                    None => println!("{}", catalog_json()?),
                }
            } else {
                let text = render_catalog(id.as_deref(), applications()).ok_or_else(|| {
                    format!("no application card with id `{}`", id.unwrap_or_default())
                })?;
                print!("{text}");
            }
        }
    }

    Ok(())
}
