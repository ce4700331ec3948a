// Level 5 ("level6" in the game files) of the Windows version of CSI: Crime
// Scene Investigation lacks some panoramas when using the software renderer.
// The full panorama textures are installed though, so the missing 256 pixel
// wide slices are recreated from them in the output directory.
extern crate csi_panorama_patch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use csi_panorama_patch::{install, patch};

/// Recreates the level 5 software renderer panoramas of CSI: Crime Scene Investigation
#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[clap(long)]
    /// Game installation directory (default: $PROGRAMFILES/Ubisoft/369/CSI)
    game_dir: Option<PathBuf>,
    #[clap(long)]
    /// Where to create the panorama folders (default: current directory)
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let game_dir = match args.game_dir {
        Some(dir) => dir,
        None => install::game_dir()?,
    };
    let panorama_dir = install::level6_panorama_dir(&game_dir);

    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    log::debug!("reading panoramas from {}, writing to {}", panorama_dir.display(), output_dir.display());

    patch::patch_level6(&panorama_dir, &output_dir)?;

    println!("{}", patch::copy_instructions(&panorama_dir));
    Ok(())
}
