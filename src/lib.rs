//! VisiText - Generated Model Metadata
//!
//! Immutable metadata describing a generated model: its type (class,
//! abstract or UML), namespace URI, and root type and name.

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod models;
pub mod output;

pub use models::{ModelInfo, MutantType};
