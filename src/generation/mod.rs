//! Generation domain module - turns a server configuration into artifacts
//!
//! The artifact set is fixed (see [`artifacts`]); the [`Materializer`] renders
//! it through a [`TemplateResolver`] and hands the result to an
//! [`OutputService`]. Everything here is independent of where the artifacts end
//! up: a project directory, a scratch directory that gets zipped, or nowhere at
//! all for previews.

pub mod artifacts;
pub mod context;
pub mod errors;
pub mod materializer;
pub mod rules;
pub mod traits;
pub mod types;
pub mod utils;

pub use context::*;
pub use errors::*;
pub use materializer::*;
pub use traits::*;
pub use types::*;
