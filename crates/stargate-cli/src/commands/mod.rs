// Module exports for CLI subcommands
//
// Each module handles one group of subcommands; main.rs only parses
// arguments and dispatches here.

pub mod fleet;
pub mod gates;
pub mod quote;
pub mod route;
pub mod source;

use stargate_cli::output::OutputFormat;
use stargate_cli::terminal::ColorPalette;

use self::source::SourceOptions;

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub palette: ColorPalette,
    pub source: SourceOptions,
}
