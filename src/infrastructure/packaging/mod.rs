//! Archive packagers

pub mod zip_packager;

pub use zip_packager::*;
