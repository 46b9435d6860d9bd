//! Template sources and the Tera resolver

pub mod embedded;
pub mod tera_resolver;

pub use embedded::*;
pub use tera_resolver::*;
