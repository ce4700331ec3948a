//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};

pub const PANORAMA_WIDTH: u32 = 2048;
pub const PANORAMA_HEIGHT: u32 = 512;

/// Horizontal gradient: red rises and blue falls from left to right.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1)) as u8;
        Rgb([v, 128, 255 - v])
    })
}

pub fn write_jpeg(path: &Path, img: &RgbImage) {
    img.save_with_format(path, ImageFormat::Jpeg).expect("cannot write fixture");
}

/// Creates `<game>/level6/panorama` holding a gradient JPEG for each name.
pub fn make_panorama_dir(game_dir: &Path, sources: &[&str]) -> PathBuf {
    let dir = game_dir.join("level6").join("panorama");
    std::fs::create_dir_all(&dir).expect("cannot create panorama dir");
    for source in sources {
        write_jpeg(&dir.join(source), &gradient(PANORAMA_WIDTH, PANORAMA_HEIGHT));
    }
    dir
}

pub fn tile_names(prefix: &str) -> Vec<String> {
    (1..=8).map(|n| format!("{}{}.jpg", prefix, n)).collect()
}

pub fn sorted_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("cannot list dir")
        .map(|e| e.expect("bad dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Mean absolute per-channel difference between column `ax` of `a` and column `bx` of `b`.
pub fn column_distance(a: &RgbImage, ax: u32, b: &RgbImage, bx: u32) -> f64 {
    assert_eq!(a.height(), b.height());
    let mut total = 0u64;
    for y in 0..a.height() {
        let pa = a.get_pixel(ax, y);
        let pb = b.get_pixel(bx, y);
        for c in 0..3 {
            total += (pa[c] as i32 - pb[c] as i32).unsigned_abs() as u64;
        }
    }
    total as f64 / (a.height() * 3) as f64
}
