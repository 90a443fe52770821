use std::io::Write;

use beancount_core::{Directive, JournalEntry, RealAccount};
use beancount_render::html::{html_entries_table, html_entries_table_with_balance};
use beancount_render::{text_entries_table, OutputFormat, RenderOptions, Verbosity};
use typed_builder::TypedBuilder;

use crate::{Report, ReportError, ReportFormat, ReportInput};

/// Arguments shared by the built-in reports.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct ReportArgs {
    /// Account whose journal is shown; the whole tree when absent.
    #[builder(default, setter(strip_option, into))]
    pub account: Option<String>,
    /// Width of text output. Zero lets the registry pick one.
    #[builder(default)]
    pub width: usize,
    #[builder(default = 2)]
    pub precision: u32,
    #[builder(default)]
    pub render_balance: bool,
    #[builder(default)]
    pub at_cost: bool,
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl Default for ReportArgs {
    fn default() -> Self {
        ReportArgs::builder().build()
    }
}

fn unsupported(report: &'static str, format: ReportFormat) -> ReportError {
    ReportError::UnsupportedFormat { report, format }
}

/// The postings and directives of one account and its sub-accounts, with an optional running
/// balance.
#[derive(Clone, Debug)]
pub struct JournalReport {
    args: ReportArgs,
}

impl JournalReport {
    pub const NAMES: &'static [&'static str] = &["journal", "register", "account"];

    pub fn new(args: ReportArgs) -> Self {
        JournalReport { args }
    }

    fn get_postings<'r, 'a>(
        &self,
        root: &RealAccount<'r, 'a>,
    ) -> Result<Vec<JournalEntry<'r, 'a>>, ReportError> {
        let name = self.args.account.as_deref().unwrap_or("");
        let account = root
            .get(name)
            .ok_or_else(|| ReportError::UnknownAccount(name.to_string()))?;
        Ok(account.get_postings())
    }

    fn options(&self, format: OutputFormat) -> RenderOptions {
        RenderOptions::builder()
            .precision(self.args.precision)
            .show_balance(self.args.render_balance)
            .at_cost(self.args.at_cost)
            .verbosity(self.args.verbosity)
            .width(self.args.width)
            .format(format)
            .build()
    }
}

impl Report for JournalReport {
    fn name(&self) -> &'static str {
        "journal"
    }

    fn formats(&self) -> &'static [ReportFormat] {
        &[ReportFormat::Text, ReportFormat::Csv, ReportFormat::HtmlDiv]
    }

    fn render(
        &self,
        input: &ReportInput<'_, '_>,
        format: ReportFormat,
        w: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let postings = self.get_postings(input.root())?;
        match format {
            ReportFormat::Text => {
                text_entries_table(w, &postings, &self.options(OutputFormat::Text))?
            }
            ReportFormat::Csv => text_entries_table(w, &postings, &self.options(OutputFormat::Csv))?,
            ReportFormat::HtmlDiv => {
                html_entries_table_with_balance(w, &postings, self.args.precision)?
            }
        }
        Ok(())
    }
}

/// Every transaction that converts between currencies at a price.
#[derive(Clone, Debug)]
pub struct ConversionsReport {
    args: ReportArgs,
}

impl ConversionsReport {
    pub const NAME: &'static str = "conversions";

    pub fn new(args: ReportArgs) -> Self {
        ConversionsReport { args }
    }
}

impl Report for ConversionsReport {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formats(&self) -> &'static [ReportFormat] {
        &[ReportFormat::HtmlDiv]
    }

    fn render(
        &self,
        input: &ReportInput<'_, '_>,
        format: ReportFormat,
        w: &mut dyn Write,
    ) -> Result<(), ReportError> {
        if format != ReportFormat::HtmlDiv {
            return Err(unsupported(Self::NAME, format));
        }
        let conversions: Vec<&Directive<'_>> = input
            .entries()
            .iter()
            .filter(|directive| match directive {
                Directive::Transaction(txn) => txn.has_conversion(),
                _ => false,
            })
            .collect();
        html_entries_table(w, &conversions, true, self.args.precision)?;
        Ok(())
    }
}

/// Every `document` directive.
#[derive(Clone, Debug)]
pub struct DocumentsReport {
    args: ReportArgs,
}

impl DocumentsReport {
    pub const NAME: &'static str = "documents";

    pub fn new(args: ReportArgs) -> Self {
        DocumentsReport { args }
    }
}

impl Report for DocumentsReport {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formats(&self) -> &'static [ReportFormat] {
        &[ReportFormat::HtmlDiv]
    }

    fn render(
        &self,
        input: &ReportInput<'_, '_>,
        format: ReportFormat,
        w: &mut dyn Write,
    ) -> Result<(), ReportError> {
        if format != ReportFormat::HtmlDiv {
            return Err(unsupported(Self::NAME, format));
        }
        let documents: Vec<&Directive<'_>> = input
            .entries()
            .iter()
            .filter(|directive| matches!(directive, Directive::Document(_)))
            .collect();
        if documents.is_empty() {
            write!(w, "<p>(No documents.)</p>")?;
        } else {
            html_entries_table(w, &documents, false, self.args.precision)?;
        }
        Ok(())
    }
}
