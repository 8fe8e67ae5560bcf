use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use delivery_route::config::Config;
use delivery_route::generation::seeded_rng;
use delivery_route::input::read_points;
use delivery_route::logging::{self, LogFormat};
use delivery_route::session::Session;
use delivery_route::units::DistanceUnit;
use delivery_route::{Error, Result};

/// Plans a delivery round trip with the nearest-neighbor heuristic.
///
/// Locations are either generated at random inside a lat/lon rectangle
/// (Central London by default) or read from a file of `lat,lon` tokens or a
/// JSON array of `{"lat", "lon"}` objects.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// JSON configuration file; flags below override its values
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,
    /// Read locations from this file ("-" for stdin) instead of generating them
    #[clap(short = 'i', long)]
    input: Option<PathBuf>,
    /// The number of delivery locations to generate (1..=100)
    #[clap(short = 'n', long)]
    count: Option<usize>,
    /// An optional seed to make generation reproducible
    #[clap(short = 's', long)]
    seed: Option<u64>,
    /// Distance unit for the report: Kilometers or Miles
    #[clap(short = 'u', long)]
    unit: Option<DistanceUnit>,
    /// Assumed average speed in km/h for the travel time estimate
    #[clap(long)]
    speed: Option<f64>,
    /// Print the report as JSON instead of a table
    #[clap(long)]
    json: bool,
    /// Log line layout: compact or pretty
    #[clap(long, default_value = "compact")]
    log_format: LogFormat,
    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        if let Some(speed) = self.speed {
            config.speed_kmh = speed;
        }
        config.validate()?;
        Ok(config)
    }

    fn run(&self) -> Result<()> {
        let config = self.config()?;
        let mut session = Session::new(config);

        match &self.input {
            Some(path) => {
                let points = read_points(path)?;
                info!("{} locations read from {}", points.len(), path.display());
                session.set_locations(points);
            }
            None => {
                let mut rng = seeded_rng(session.config().seed);
                session.generate(&mut rng)?;
            }
        }

        let report = session.optimize()?;
        if self.json {
            println!("{}", report.to_json()?);
        } else {
            println!("{report}");
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init_logger(
        logging::level_from_verbosity(cli.verbose),
        cli.log_format,
        false,
    ) {
        eprintln!("failed to initialize logger: {e}");
    }

    let result = cli.run();
    if let Err(e) = &result {
        eprintln!("{}", failure_message(e));
    }
    exit_status(&result)
}

/// User-facing text for a failed run; missing input gets a prompt.
fn failure_message(err: &Error) -> String {
    match err {
        Error::EmptyLocations => "Please generate or supply delivery locations first.".to_string(),
        e => format!("error: {e}"),
    }
}

fn exit_status(result: &Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
