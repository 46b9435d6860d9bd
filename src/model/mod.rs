//! Configuration model for a generated MCP server
//!
//! These are plain value types deserialized from the inbound payload (JSON over
//! HTTP, JSON or YAML on the CLI). Keys are camelCase on the wire. Every
//! collection is an ordered `Vec`: declaration order is carried through to the
//! generated source.

pub mod resource;
pub mod server;
pub mod tool;

pub use resource::*;
pub use server::*;
pub use tool::*;
