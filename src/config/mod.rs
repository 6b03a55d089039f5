#[cfg(feature = "cli")]
pub mod cli;
pub mod dataset;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
