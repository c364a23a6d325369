pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, GenerateArgs, OutputFormatArg, ScanArgs};
pub use output::{OutputFormat, OutputFormatter, ScanReport};
