//! image2fbmp - image to framebuffer bitmap converter
//!
//! Converts PNG/JPEG/GIF/BMP/TGA/TIFF/WebP images into `.fbmp` files: a 12-byte
//! header (magic, width, height) followed by raw BGRA8 pixels.
//!
//! # Usage
//!
//! ```bash
//! # Writes input.fbmp next to the source
//! image2fbmp input.png
//!
//! # Explicit output path
//! image2fbmp input.jpg output.fbmp
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "image2fbmp")]
#[command(about = "Convert image files to the .fbmp framebuffer bitmap format")]
#[command(version)]
#[command(after_help = "Examples:\n  image2fbmp input.png\n  image2fbmp input.jpg output.fbmp")]
struct Cli {
    /// Input image file (PNG, JPEG, GIF, BMP, TGA, TIFF, WebP, ICO, PNM)
    input: PathBuf,

    /// Output .fbmp file (defaults to the input path with a .fbmp extension)
    output: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout only carries the result line
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    match image2fbmp::convert(&cli.input, cli.output.as_deref()) {
        Ok(output) => {
            println!(
                "image2fbmp: converted '{}' to '{}'",
                cli.input.display(),
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
