//! Journal, conversions and documents reports over a list of Beancount directives.
//!
//! Reports are looked up by name in a [`ReportRegistry`] and rendered into any `io::Write` sink:
//!
//! ```no_run
//! use beancount_report::{FixedWidth, ReportArgs, ReportFormat, ReportInput, ReportRegistry};
//!
//! # fn main() -> Result<(), beancount_report::ReportError> {
//! let entries = Vec::new();
//! let input = ReportInput::new(&entries);
//! let registry = ReportRegistry::new(FixedWidth(100));
//! let args = ReportArgs::builder().account("Assets:Cash").build();
//! registry.dispatch("journal", args, &input, ReportFormat::Text, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use beancount_core::{realize, Directive, RealAccount};
use beancount_render::{JournalError, RenderError};
use thiserror::Error;

pub mod registry;
pub mod reports;
pub mod width;

pub use registry::{ReportFactory, ReportRegistry};
pub use reports::{ConversionsReport, DocumentsReport, JournalReport, ReportArgs};
pub use width::{FixedWidth, TerminalWidth, WidthSource, DEFAULT_WIDTH};

/// Output formats a report may support.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ReportFormat {
    Text,
    Csv,
    /// An HTML fragment meant to be embedded in a page.
    HtmlDiv,
}

impl ReportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Csv => "csv",
            ReportFormat::HtmlDiv => "htmldiv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            "htmldiv" => Ok(ReportFormat::HtmlDiv),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("unknown report: {0}")]
    UnknownReport(String),
    #[error("Invalid account name: {0}")]
    UnknownAccount(String),
    #[error("invalid render option: {0}")]
    InvalidRenderOption(String),
    #[error("unknown format: {0}")]
    UnknownFormat(String),
    #[error("report {report} does not support the {format} format")]
    UnsupportedFormat {
        report: &'static str,
        format: ReportFormat,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("an io error occurred")]
    Io(#[from] io::Error),
}

impl From<JournalError> for ReportError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::InvalidRenderOption(msg) => ReportError::InvalidRenderOption(msg),
            JournalError::Io(err) => ReportError::Io(err),
            JournalError::Csv(err) => ReportError::Io(err.into()),
            JournalError::Render(err) => ReportError::Render(err),
            JournalError::Overflow(err) => ReportError::Render(RenderError::Overflow(err)),
        }
    }
}

/// The directives a report runs over, together with their account tree.
///
/// The tree is built once, when the input is created, and shared by every report rendered from it.
#[derive(Debug)]
pub struct ReportInput<'r, 'a> {
    entries: &'r [Directive<'a>],
    root: RealAccount<'r, 'a>,
}

impl<'r, 'a> ReportInput<'r, 'a> {
    pub fn new(entries: &'r [Directive<'a>]) -> Self {
        ReportInput {
            entries,
            root: realize(entries),
        }
    }

    pub fn entries(&self) -> &'r [Directive<'a>] {
        self.entries
    }

    pub fn root(&self) -> &RealAccount<'r, 'a> {
        &self.root
    }
}

/// A named report that can render itself in one or more formats.
pub trait Report {
    /// The name the report is registered under.
    fn name(&self) -> &'static str;

    fn formats(&self) -> &'static [ReportFormat];

    fn render(
        &self,
        input: &ReportInput<'_, '_>,
        format: ReportFormat,
        w: &mut dyn Write,
    ) -> Result<(), ReportError>;
}
