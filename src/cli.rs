use clap::Parser;

pub const DEFAULT_COMMAND: &str = "xdpyinfo | grep dimensions";
pub const COMMAND_ENV: &str = "SCREEN_DIMS_COMMAND";

/// Takes no arguments; only `--help` and `--version` are recognised.
#[derive(Parser)]
#[command(
    name = "screen-dims",
    version,
    about = "Print the screen width and height reported by xdpyinfo"
)]
pub struct Cli {}

/// The display query to run. `SCREEN_DIMS_COMMAND` replaces the xdpyinfo
/// pipeline when set and non-empty.
pub fn query_command() -> String {
    std::env::var(COMMAND_ENV)
        .ok()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_COMMAND.to_string())
}
