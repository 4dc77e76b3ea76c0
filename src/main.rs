use clap::{Parser, Subcommand};
use pixel_groups::{AverageDivisor, EdgePolicy};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use groupfilter::models::{AppConfig, JobRequest, KindRequest};
use groupfilter::services;

#[derive(Parser, Debug)]
#[command(name = "groupfilter", version)]
#[command(about = "Replace image rows or checkerbox tiles with their average, min, max or sorted values")]
struct Cli {
    /// Source image (PNG or JPEG)
    #[arg(long, visible_alias = "src")]
    source: PathBuf,

    /// Output PNG path (derived from the source name when omitted)
    #[arg(long, visible_alias = "out")]
    output: Option<PathBuf>,

    /// Protect pixels with luma below this value [default: 0]
    #[arg(long, visible_alias = "low")]
    shadow: Option<u8>,

    /// Protect pixels with luma above this value [default: 255]
    #[arg(long, visible_alias = "high")]
    highlight: Option<u8>,

    /// YAML config file (falls back to $GROUPFILTER_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Re-compress the output PNG with oxipng
    #[arg(long)]
    optimize: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Treat every image row as one group
    #[command(visible_alias = "row")]
    RowFilter {
        /// avg, min, max or sort
        #[arg(default_value = "avg")]
        mode: String,
    },
    /// Treat every square tile as one group
    #[command(visible_aliases = ["checkerbox", "check"])]
    CheckerboxFilter {
        /// Tile edge length in pixels [default: 100]
        #[arg(long)]
        size: Option<usize>,

        /// Average divisor: group-size or image-width [default: group-size]
        #[arg(long)]
        divisor: Option<AverageDivisor>,

        /// Trailing partial tiles: crop or partial [default: crop]
        #[arg(long)]
        edges: Option<EdgePolicy>,

        /// avg, min, max or sort
        #[arg(default_value = "avg")]
        mode: String,
    },
}

impl Cli {
    fn into_request(self) -> (Option<PathBuf>, JobRequest) {
        let (mode, kind) = match self.command {
            Commands::RowFilter { mode } => (mode, KindRequest::Row),
            Commands::CheckerboxFilter {
                size,
                divisor,
                edges,
                mode,
            } => (
                mode,
                KindRequest::Checkerbox {
                    size,
                    divisor,
                    edges,
                },
            ),
        };
        let request = JobRequest {
            source: self.source,
            output: self.output,
            shadow: self.shadow,
            highlight: self.highlight,
            mode,
            optimize: self.optimize,
            kind,
        };
        (self.config, request)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groupfilter=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let (config_path, request) = cli.into_request();
    let config = AppConfig::resolve(config_path)?;
    let job = request.resolve(&config)?;
    let outcome = services::run(&job)?;

    println!(
        "Wrote {} ({}x{})",
        outcome.output.display(),
        outcome.width,
        outcome.height
    );
    Ok(())
}
