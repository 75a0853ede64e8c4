//! Subcommand handlers.

pub mod config;
pub mod eight_bit;
pub mod theme;

use terminal_size::{terminal_size, Width};

/// Warn on stderr when the output medium will mangle the grid: raw escapes
/// going to a pipe, or rows wider than the terminal.
pub(crate) fn check_output_medium(grid_width: usize) {
    if !atty::is(atty::Stream::Stdout) {
        eprintln!("note: stdout is not a terminal; raw escape sequences will be written");
        return;
    }
    if let Some((Width(cols), _)) = terminal_size() {
        if grid_width > cols as usize {
            eprintln!(
                "note: grid rows are {grid_width} columns wide but the terminal has {cols}; rows will wrap"
            );
        }
    }
}
