// The software renderer expects every panorama as 8 vertical strips of
// 256x512 pixels, numbered from 1 left to right.
pub const TILE_COUNT: u32 = 8;
pub const TILE_WIDTH: u32 = 256;
pub const TILE_HEIGHT: u32 = 512;

pub const SOURCE_WIDTH: u32 = TILE_COUNT * TILE_WIDTH;
pub const SOURCE_HEIGHT: u32 = TILE_HEIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpec {
    pub index: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TileSpec {
    pub fn new(index: u32) -> Self {
        TileSpec{ index, x: index * TILE_WIDTH, y: 0, width: TILE_WIDTH, height: TILE_HEIGHT }
    }

    pub fn all() -> impl Iterator<Item = TileSpec> {
        (0..TILE_COUNT).map(TileSpec::new)
    }

    /// Slices are numbered from 1, i.e. `motel61.jpg` .. `motel68.jpg`
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}{}.jpg", prefix, self.index + 1)
    }
}
