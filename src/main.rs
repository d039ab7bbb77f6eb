use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tonelab::models::{ConfigOverrides, ConfigSource, MeanMode, PipelineConfig, CONFIG_ENV};
use tonelab::rendering::decode_image;
use tonelab::services::Pipeline;

#[derive(Parser)]
#[command(name = "tonelab")]
#[command(about = "Histogram-driven tone quantization and dithering for still images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every stage and write one PNG per stage
    Run {
        /// Input image (any format the decoder understands)
        image: PathBuf,

        /// Output directory (defaults to the input's directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Black-and-white cut-off as a fraction of full scale (e.g. 0.25)
        #[arg(long)]
        binary_threshold: Option<f32>,

        #[command(flatten)]
        tuning: Tuning,
    },
    /// Print the detected boundary set of an image
    Peaks {
        /// Input image
        image: PathBuf,

        /// Print JSON instead of a plain list
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        tuning: Tuning,
    },
}

/// Peak detector flags shared by `run` and `peaks`
#[derive(Args)]
struct Tuning {
    /// Peak detector half-window radius (1..=127)
    #[arg(long)]
    half_window: Option<usize>,

    /// Prominence threshold above the window mean (e.g. 0.0003)
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Window-mean normalization
    #[arg(long, value_enum)]
    mean: Option<MeanMode>,

    /// YAML config file (overrides TONELAB_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Tuning {
    fn load(&self, binary_threshold: Option<f32>) -> anyhow::Result<PipelineConfig> {
        let source = PipelineConfig::resolve_source(self.config.as_deref());
        let overrides = ConfigOverrides {
            half_window: self.half_window,
            threshold: self.threshold,
            mean: self.mean,
            binary_threshold,
        };
        Ok(PipelineConfig::load(&source)?.with_overrides(&overrides))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            image,
            out_dir,
            binary_threshold,
            tuning,
        }) => {
            init_logging();
            let config = tuning.load(binary_threshold)?;
            run_pipeline_command(&image, out_dir.as_deref(), config)
        }
        Some(Commands::Peaks {
            image,
            json,
            tuning,
        }) => {
            init_logging();
            let config = tuning.load(None)?;
            run_peaks_command(&image, json, config)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonelab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Run all stages and write `<stem><Stage>.png` files
fn run_pipeline_command(
    image: &Path,
    out_dir: Option<&Path>,
    config: PipelineConfig,
) -> anyhow::Result<()> {
    let out_dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => image
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let pipeline = Pipeline::new(config)?;
    for path in pipeline.run_file(image, &out_dir)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Print the boundary set of one image
fn run_peaks_command(image: &Path, json: bool, config: PipelineConfig) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(config)?;
    let decoded = decode_image(image)?;
    let analysis = pipeline.analyze(&decoded)?;

    if json {
        let report = serde_json::json!({
            "image": image.display().to_string(),
            "pixels": analysis.histogram().total(),
            "half_window": pipeline.config().half_window,
            "threshold": pipeline.config().threshold,
            "mean": pipeline.config().mean,
            "boundaries": analysis.boundaries().levels(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", analysis.boundaries());
    }
    Ok(())
}

/// Show version, effective config source and available commands
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_env = std::env::var(CONFIG_ENV).ok();

    println!("tonelab v{VERSION}");
    println!("Histogram peaks, gray reduction and Floyd-Steinberg dithering\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_env.as_deref().unwrap_or("(not set)")
    );

    let source = PipelineConfig::resolve_source(None);
    let status = match &source {
        ConfigSource::File(path) if !path.exists() => format!("{source} (file not found)"),
        _ => source.to_string(),
    };
    println!("\nConfig:  {status}");

    let defaults = PipelineConfig::default();
    println!("\nDefaults:");
    println!(
        "  half_window = {}, threshold = {}, binary_threshold = {}",
        defaults.half_window, defaults.threshold, defaults.binary_threshold
    );

    println!("\nCommands:");
    println!("  tonelab run <IMAGE>     Run every stage and write PNGs");
    println!("  tonelab peaks <IMAGE>   Print the detected boundary set");
    println!("\nRun 'tonelab --help' for more details.");
}
