pub mod install;
pub mod panorama;
pub mod patch;
