#![forbid(unsafe_code)]

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hydro_decisio::adapters::generator_for;
use hydro_decisio::application::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, GenerateReportCommand,
    GenerateReportHandler,
};
use hydro_decisio::config::{AppConfig, LoggingConfig};
use hydro_decisio::domain::ahp::{AhpEngine, ComparisonMatrix};
use hydro_decisio::domain::analysis::ConsistencyVerdict;
use hydro_decisio::domain::foundation::Percentage;
use hydro_decisio::domain::zone::ZoneCatalog;
use hydro_decisio::ports::ReportFormat;

#[derive(Parser)]
#[command(name = "hydro-decisio", version, about = "AHP decision support for water supply")]
struct Cli {
    /// Configuration file (YAML, TOML or JSON); environment overrides it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a decision file and render the report
    Evaluate {
        /// Decision file (.yaml, .yml or .json)
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List study zones
    Zones,
    /// Compute weights and CR for a raw matrix
    Weights {
        /// Rows separated by ';', entries by ','
        #[arg(long)]
        matrix: String,
        /// Reciprocity tolerance; typed matrices often round 1/9 to 0.111
        #[arg(long, default_value_t = 1e-2)]
        tolerance: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())?;
    config.validate()?;
    init_tracing(&config.logging);

    let catalog = match &config.report.zone_catalog_path {
        Some(path) => ZoneCatalog::from_path(path)?,
        None => ZoneCatalog::builtin()?,
    };

    match cli.command {
        Commands::Evaluate { input, format, out } => {
            let cmd = read_command(&input)?;
            let outcome =
                EvaluateDecisionHandler::new(Arc::new(catalog), &config.engine).handle(cmd)?;

            let report = GenerateReportHandler::new(Arc::from(generator_for(format.into())))
                .handle(GenerateReportCommand {
                    outcome,
                    options: config.report.to_options(),
                })?;

            match out {
                Some(path) => {
                    fs::write(&path, report.content)?;
                    tracing::info!(path = %path.display(), "Report written");
                }
                None => io::stdout().write_all(report.content.as_bytes())?,
            }
        }
        Commands::Zones => {
            let mut stdout = io::stdout().lock();
            for zone in catalog.zones() {
                writeln!(stdout, "{}\t{}, {}", zone.key, zone.city, zone.sector)?;
            }
        }
        Commands::Weights { matrix, tolerance } => {
            let matrix = ComparisonMatrix::parse_with_tolerance(&matrix, tolerance)?;
            let result = AhpEngine::new(config.engine.to_options()).compute_weights(&matrix)?;
            let threshold = config.engine.consistency_threshold;

            let mut stdout = io::stdout().lock();
            for (i, w) in result.weights.iter().enumerate() {
                writeln!(stdout, "w{}\t{}", i + 1, Percentage::from_fraction(*w))?;
            }
            writeln!(stdout, "lambda_max\t{:.4}", result.lambda_max)?;
            writeln!(stdout, "CI\t{:.4}", result.consistency_index)?;
            match result.random_index {
                Some(ri) => writeln!(stdout, "RI\t{:.2}", ri)?,
                None => writeln!(stdout, "RI\tuntabulated (CR = CI)")?,
            }
            writeln!(
                stdout,
                "CR\t{:.4}\t{} (threshold {:.2})",
                result.consistency_ratio,
                ConsistencyVerdict::from_ratio(result.consistency_ratio, threshold).label(),
                threshold
            )?;
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays a clean report.
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn read_command(path: &Path) -> CliResult<EvaluateDecisionCommand> {
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let cmd = if is_json {
        serde_json::from_str(&contents)?
    } else {
        serde_yaml::from_str(&contents)?
    };
    Ok(cmd)
}
