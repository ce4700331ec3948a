use std::path::Path;

use anyhow::Result;

use crate::panorama::slicer::make_sw_panorama;

pub struct Panorama {
    pub folder: &'static str,
    pub source: &'static str,
}

/// Software renderer panoramas missing from level 5. `leda_SW` does ship with
/// the game, but its first slice is misnamed, so it is rebuilt as well.
pub const PANORAMAS: [Panorama; 3] = [
    Panorama{ folder: "motel6_SW", source: "motel6.jpg" },
    Panorama{ folder: "victim6_SW", source: "victim6.jpg" },
    Panorama{ folder: "leda_SW", source: "leda.jpg" },
];

/// Creates every panorama in order; the first failure stops the run.
pub fn patch_level6(panorama_dir: &Path, output_root: &Path) -> Result<()> {
    for pano in &PANORAMAS {
        make_sw_panorama(pano.folder, &panorama_dir.join(pano.source), output_root)?;
    }
    Ok(())
}

pub fn copy_instructions(panorama_dir: &Path) -> String {
    let folders: Vec<&str> = PANORAMAS.iter().map(|p| p.folder).collect();
    format!("Please copy {} and {} into {}",
        folders[..folders.len() - 1].join(", "), folders[folders.len() - 1], panorama_dir.display())
}
