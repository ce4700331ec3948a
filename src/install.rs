use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

pub const PROGRAM_FILES_VAR: &str = "PROGRAMFILES";

const GAME_SUBDIR: [&str; 3] = ["Ubisoft", "369", "CSI"];
// level 5 of the game is stored as level6
const LEVEL6_PANORAMA_SUBDIR: [&str; 2] = ["level6", "panorama"];

/// Default install location of the game below the given Program Files directory
pub fn game_dir_from(program_files: Option<OsString>) -> Result<PathBuf> {
    let program_files = program_files
        .filter(|p| !p.is_empty())
        .ok_or_else(|| anyhow!("no program files directory found ({} is not set)", PROGRAM_FILES_VAR))?;
    Ok(GAME_SUBDIR.iter().fold(PathBuf::from(program_files), |dir, part| dir.join(part)))
}

pub fn game_dir() -> Result<PathBuf> {
    game_dir_from(std::env::var_os(PROGRAM_FILES_VAR))
}

pub fn level6_panorama_dir(game_dir: &Path) -> PathBuf {
    LEVEL6_PANORAMA_SUBDIR.iter().fold(game_dir.to_path_buf(), |dir, part| dir.join(part))
}
