//! mcp-forge turns a declarative description of tools and resources into a
//! ready-to-build TypeScript MCP server project.
//!
//! The pipeline validates a [`ServerConfig`](model::ServerConfig), renders the
//! fixed artifact set (`package.json`, `tsconfig.json`, `index.ts`,
//! `README.md`) through Tera templates, and hands the result to one of three
//! sinks: a project directory, an in-memory preview, or a zip archive.
//! [`GeneratorService`] is the entry point for all three; the [`api`] module
//! exposes it over HTTP.
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod generation;
pub mod infrastructure;
pub mod model;
pub mod settings;

pub use application::{DownloadArchive, GenerateResponse, GeneratorService, PreviewResponse};
pub use generation::{GenerationError, ValidationError};
pub use settings::Settings;
