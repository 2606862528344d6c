//! justified-grid CLI entry point.
//!
//! Reads a gallery manifest (text or JSON) and prints the computed layout.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use justified_grid::LayoutConfig;
use justified_grid::render_manifest;
use justified_grid::renderers::OutputFormat;

/// Justified-row grid layout for image galleries.
#[derive(Parser, Debug)]
#[command(
    name = "justified-grid",
    version = env!("JUSTIFIED_GRID_VERSION"),
    about = "Lay out gallery items into justified rows"
)]
struct Cli {
    /// Manifest file (reads from stdin if not provided)
    input: Option<String>,

    /// Container width in pixels
    #[arg(short = 'w', long = "width", default_value = "1000")]
    width: f64,

    /// Start from a named option preset (default, gallery, stickers)
    #[arg(long = "preset", default_value = "default")]
    preset: String,

    /// Gap between items and between rows
    #[arg(short = 'g', long = "gap")]
    gap: Option<f64>,

    /// Target row height before justification
    #[arg(long = "row-height")]
    row_height: Option<f64>,

    /// Minimum provisional item width
    #[arg(long = "min-width")]
    min_width: Option<f64>,

    /// Maximum provisional item width
    #[arg(long = "max-width")]
    max_width: Option<f64>,

    /// Output format: json, ascii, svg
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: OutputFormat,

    /// Use plain ASCII instead of Unicode box-drawing characters (ascii format)
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

impl Cli {
    fn config(&self) -> Result<LayoutConfig, String> {
        let mut config = LayoutConfig::preset(&self.preset)
            .ok_or_else(|| {
                format!(
                    "unknown preset '{}'; use default, gallery, or stickers",
                    self.preset
                )
            })?
            .with_container_width(self.width);
        if let Some(gap) = self.gap {
            config.gap = gap;
        }
        if let Some(h) = self.row_height {
            config.target_row_height = h;
        }
        if let Some(w) = self.min_width {
            config.min_item_width = w;
        }
        if let Some(w) = self.max_width {
            config.max_item_width = w;
        }
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    tracing::debug!(?config, "resolved layout options");

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let rendered = match render_manifest(&text, &config, cli.format, !cli.use_ascii) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
