//! statboard: render a JSON table request to PNG.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use statboard::{read_request, RenderConfig, RenderRequest, Renderer, WidthMode};

/// Render stat tables as PNG images
#[derive(Parser)]
#[command(name = "statboard")]
#[command(version)]
struct Args {
    /// Request JSON file; reads stdin when omitted
    input: Option<PathBuf>,

    /// PNG output file; writes stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Renderer config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TrueType font, overriding the config
    #[arg(long, env = "STATBOARD_FONT")]
    font: Option<PathBuf>,

    /// How wide glyphs are detected, overriding the config
    #[arg(long, value_enum)]
    width_mode: Option<WidthArg>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum WidthArg {
    Utf8,
    EastAsian,
}

impl From<WidthArg> for WidthMode {
    fn from(arg: WidthArg) -> Self {
        match arg {
            WidthArg::Utf8 => WidthMode::Utf8Length,
            WidthArg::EastAsian => WidthMode::EastAsian,
        }
    }
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(args: &Args) -> Result<RenderConfig, String> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path).map_err(|e| e.to_string())?,
        None => RenderConfig::default(),
    };
    if let Some(font) = &args.font {
        config.font_path = font.clone();
    }
    if let Some(mode) = args.width_mode {
        config.width_mode = mode.into();
    }
    Ok(config)
}

fn load_request(args: &Args) -> Result<RenderRequest, String> {
    match &args.input {
        Some(path) => read_request(path).map_err(|e| e.to_string()),
        None => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .map_err(|e| format!("failed to read request from stdin: {e}"))?;
            RenderRequest::from_json(&json).map_err(|e| format!("invalid request: {e}"))
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let config = load_config(args)?;
    let request = load_request(args)?;
    let renderer = Renderer::new(config).map_err(|e| e.to_string())?;

    // Rendered in memory; a failed render leaves no partial file behind.
    let Some(png) = renderer.render(&request).map_err(|e| e.to_string())? else {
        info!("nothing to render");
        return Ok(());
    };

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .map_err(|e| format!("failed to create '{}': {e}", path.display()))?;
            file.write_all(&png)
                .map_err(|e| format!("failed to write '{}': {e}", path.display()))?;
            info!(path = %path.display(), bytes = png.len(), "wrote image");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&png)
                .and_then(|()| stdout.flush())
                .map_err(|e| format!("failed to write stdout: {e}"))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
