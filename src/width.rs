//! Where the width of text reports comes from when the caller does not set one.

use terminal_size::{terminal_size, Width};
use tracing::warn;

/// Width used when the terminal cannot be queried.
pub const DEFAULT_WIDTH: usize = 80;

pub trait WidthSource {
    fn width(&self) -> usize;
}

/// The width of the terminal attached to the process.
#[derive(Copy, Clone, Debug, Default)]
pub struct TerminalWidth;

impl WidthSource for TerminalWidth {
    fn width(&self) -> usize {
        match terminal_size() {
            Some((Width(w), _)) if w > 0 => w as usize,
            _ => {
                warn!(
                    default = DEFAULT_WIDTH,
                    "could not determine the terminal width"
                );
                DEFAULT_WIDTH
            }
        }
    }
}

/// Always the same width.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FixedWidth(pub usize);

impl WidthSource for FixedWidth {
    fn width(&self) -> usize {
        self.0
    }
}
