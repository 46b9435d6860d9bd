//! Infrastructure layer - concrete implementations of domain ports

pub mod output;
pub mod packaging;
pub mod templates;

pub use output::*;
pub use packaging::*;
pub use templates::*;
