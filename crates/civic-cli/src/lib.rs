//! Civic request graph CLI library.
//!
//! Loads a report corpus, builds its relationship graph and renders query
//! results for the `civic-graph` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use corpus::{CorpusError, JsonFileSource};
pub use error::{CliError, Result};
pub use output::Formatter;
