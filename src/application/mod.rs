//! Application layer - the generation facade and its storage helpers

pub mod dto;
pub mod generator;
pub mod scratch;
pub mod storage;

pub use dto::*;
pub use generator::*;
pub use scratch::*;
pub use storage::*;
