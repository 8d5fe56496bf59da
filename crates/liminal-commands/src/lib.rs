//! Single-character command registry

pub mod registry;

pub use registry::{Category, Command, CommandRegistry};
