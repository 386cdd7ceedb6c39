use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use mortar_calculator::ballistics::firing_solution;
use mortar_calculator::config::{BallisticsConfig, load_ballistics_config};
use mortar_calculator::export::{self, RangeCard};
use mortar_calculator::input::{self, COORDINATE_FIELDS};

/// Compute bearing, elevation, and time of flight for every charge.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Mortar firing-solution calculator (constant gravity, no drag)"
)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    /// Launch and target coordinates: X0 Y0 Z0 XT YT ZT (prompted for when omitted)
    #[arg(
        num_args = 6,
        allow_negative_numbers = true,
        value_names = ["X0", "Y0", "Z0", "XT", "YT", "ZT"]
    )]
    coords: Vec<String>,

    /// Ballistics parameters (TOML or YAML); defaults to the stock mortar
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file (use '-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = match &cli.config {
        Some(path) => load_ballistics_config(path)
            .with_context(|| format!("loading ballistics config {}", path.display()))?,
        None => BallisticsConfig::default(),
    };

    let raw = if cli.coords.is_empty() {
        prompt_coordinates()?
    } else {
        <[String; 6]>::try_from(cli.coords.clone())
            .map_err(|got| anyhow!("expected 6 coordinates, got {}", got.len()))?
    };

    let (launch, target) = match input::parse_coordinates(&raw) {
        Ok(points) => points,
        Err(err) => {
            log::debug!("rejected input for {}: {err:?}", err.field());
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let solution = firing_solution(&launch, &target, &config);
    log::info!(
        "bearing {:.2}°, range {:.2} studs, {} of {} charges feasible",
        solution.bearing_deg,
        solution.horizontal_range,
        solution.feasible().count(),
        solution.charges.len()
    );

    let card = RangeCard::new(&launch, &target, &solution);
    let mut writer = export::writer_for_path(&cli.output)
        .with_context(|| format!("opening {}", cli.output.display()))?;
    match cli.format {
        OutputFormat::Text => export::text::write_card(writer.as_mut(), &card)?,
        OutputFormat::Json => export::json::write_card(writer.as_mut(), &card)?,
        OutputFormat::Csv => export::csv::write_card(writer.as_mut(), &card)?,
    }
    writer.flush()?;

    Ok(())
}

/// Ask for each coordinate on stderr so stdout carries only the range card.
fn prompt_coordinates() -> anyhow::Result<[String; 6]> {
    let stdin = io::stdin();
    let mut values = Vec::with_capacity(COORDINATE_FIELDS.len());
    for field in COORDINATE_FIELDS {
        eprint!("{field}: ");
        io::stderr().flush().context("failed to flush stderr")?;

        let mut line = String::new();
        let bytes = stdin
            .read_line(&mut line)
            .context("could not read coordinates from stdin")?;
        if bytes == 0 {
            return Err(anyhow!("input ended before {field} was entered"));
        }
        values.push(line.trim().to_string());
    }
    <[String; 6]>::try_from(values).map_err(|_| anyhow!("expected 6 coordinates"))
}
