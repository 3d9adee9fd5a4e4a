use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use storeshots::RenderConfig;

/// Generate the six App Store marketing screenshots.
#[derive(Parser)]
#[command(name = "storeshots", version, about)]
struct Args {
    /// Directory the PNGs are written into
    #[arg(long, default_value = "ipad")]
    out_dir: PathBuf,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = RenderConfig {
        out_dir: args.out_dir,
        ..Default::default()
    };

    println!(
        "Generating iPad 13\" screenshots ({}x{}px)...",
        config.canvas.width, config.canvas.height
    );

    let written = storeshots::generate_all(&config).context("screenshot generation failed")?;
    for path in &written {
        if let Some(name) = path.file_name() {
            println!("  {}", name.to_string_lossy());
        }
    }

    println!("\nDone! Screenshots saved to {}", config.out_dir.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("storeshots: {e:#}");
        std::process::exit(1);
    }
}
