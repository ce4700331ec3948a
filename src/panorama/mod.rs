pub mod slicer;
pub mod tile;
