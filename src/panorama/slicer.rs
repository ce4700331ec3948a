use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageReader};

use crate::panorama::tile::{TileSpec, SOURCE_HEIGHT, SOURCE_WIDTH};

const SW_SUFFIX: &str = "_SW";
const JPEG_QUALITY: u8 = 92;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceOutcome {
    Created,
    AlreadyPresent,
}

/// Name used for the slices inside a software panorama folder: `motel6_SW` -> `motel6`
pub fn image_prefix(folder_name: &str) -> &str {
    folder_name.strip_suffix(SW_SUFFIX).unwrap_or(folder_name)
}

/// Slices `source_image` into `output_root/folder_name/{prefix}{1..8}.jpg`.
///
/// An existing output folder is taken to mean the slices were made by an
/// earlier run; nothing is decoded or written in that case.
pub fn make_sw_panorama(folder_name: &str, source_image: &Path, output_root: &Path) -> Result<SliceOutcome> {
    let prefix = image_prefix(folder_name);
    let pano_dir = output_root.join(folder_name);

    let outcome = if pano_dir.is_dir() {
        log::info!("{} already exists, not slicing {}", pano_dir.display(), source_image.display());
        SliceOutcome::AlreadyPresent
    } else {
        fs::create_dir_all(&pano_dir)
            .with_context(|| format!("cannot create output directory {}", pano_dir.display()))?;
        log::info!("slicing {} into {}", source_image.display(), pano_dir.display());

        let img = load_source(source_image)?;
        for tile in TileSpec::all() {
            let tile_path = pano_dir.join(tile.file_name(prefix));
            write_tile(&img, &tile, &tile_path)?;
            log::debug!("wrote tile {} ({},{} {}x{})", tile_path.display(), tile.x, tile.y, tile.width, tile.height);
        }
        SliceOutcome::Created
    };

    println!("Panorama {} created", folder_name);
    Ok(outcome)
}

fn load_source(path: &Path) -> Result<DynamicImage> {
    // the reader owns the file and is consumed by decode(), closing it either way
    let img = ImageReader::open(path)
        .with_context(|| format!("cannot open source image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("cannot read source image {}", path.display()))?
        .decode()
        .with_context(|| format!("cannot decode source image {}", path.display()))?;

    let (width, height) = img.dimensions();
    if width < SOURCE_WIDTH || height < SOURCE_HEIGHT {
        return Err(anyhow!("source image {} is {}x{}, need at least {}x{}",
            path.display(), width, height, SOURCE_WIDTH, SOURCE_HEIGHT));
    }
    Ok(img)
}

fn write_tile(img: &DynamicImage, tile: &TileSpec, path: &Path) -> Result<()> {
    let slice = img.crop_imm(tile.x, tile.y, tile.width, tile.height).into_rgb8();

    let file = File::create(path)
        .with_context(|| format!("cannot create tile {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
        .encode_image(&slice)
        .with_context(|| format!("cannot encode tile {}", path.display()))?;
    writer.flush()
        .with_context(|| format!("cannot write tile {}", path.display()))?;
    Ok(())
}
