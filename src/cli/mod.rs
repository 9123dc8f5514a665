pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, HealthArgs, ProjectsArgs, ServeArgs, StatsArgs};
pub use output::{OutputFormat, OutputFormatter};
