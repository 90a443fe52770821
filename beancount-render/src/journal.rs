//! Journal (register) tables: one row per posting or directive of an account, rendered as
//! fixed-width text or as CSV.

use std::io::{self, Write};

use beancount_core::{AmountOverflow, Balances, Directive, JournalEntry, Transaction};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::text::{display_width, pad_left, pad_right, truncate, wrap};
use crate::RenderError;

const DATE_WIDTH: usize = 10;
const FLAG_WIDTH: usize = 5;
const MIN_DESCRIPTION_WIDTH: usize = 10;
/// Largest scale a `Decimal` can carry.
const MAX_PRECISION: u32 = 28;

/// Column names of the CSV output, in order.
pub const CSV_HEADER: [&str; 8] = [
    "date",
    "flag",
    "account",
    "description",
    "change",
    "cost",
    "price",
    "balance",
];

/// Which optional columns a text journal shows.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Date, account and change. No flag, no description, no cost and no price.
    Compact,
    /// Date, flag, account, description and change. Cost and price are omitted.
    Normal,
    /// Every column, including the cost and price of each posting.
    Verbose,
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Normal
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

/// Everything that controls how a journal table is rendered.
#[derive(Clone, Debug, Eq, PartialEq, Hash, TypedBuilder, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Fractional digits shown for changes and balances.
    #[builder(default = 2)]
    pub precision: u32,
    /// Adds a running balance column.
    #[builder(default)]
    pub show_balance: bool,
    /// Values postings at cost instead of in units.
    #[builder(default)]
    pub at_cost: bool,
    #[builder(default)]
    pub verbosity: Verbosity,
    /// Total width of a text table. Zero means it has not been resolved yet.
    #[builder(default)]
    pub width: usize,
    #[builder(default)]
    pub format: OutputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::builder().build()
    }
}

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("invalid render option: {0}")]
    InvalidRenderOption(String),
    #[error("an io error occurred")]
    Io(#[from] io::Error),
    #[error("could not write csv output")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Overflow(#[from] AmountOverflow),
}

/// One journal item with every cell already formatted.
#[derive(Debug, Default)]
pub(crate) struct Row {
    pub(crate) date: String,
    pub(crate) flag: String,
    pub(crate) account: String,
    pub(crate) description: String,
    pub(crate) change: Vec<String>,
    pub(crate) cost: String,
    pub(crate) price: String,
    pub(crate) balance: Vec<String>,
}

/// Resolved column widths of a text table. `None` means the column is not shown.
#[derive(Debug)]
struct Layout {
    flag: bool,
    account: usize,
    description: Option<usize>,
    change: usize,
    cost: Option<usize>,
    price: Option<usize>,
    balance: Option<usize>,
}

/// Renders `entries` as a journal table, in the format selected by `options`.
pub fn text_entries_table<W: Write + ?Sized>(
    w: &mut W,
    entries: &[JournalEntry<'_, '_>],
    options: &RenderOptions,
) -> Result<(), JournalError> {
    let rows = rows(entries, options)?;
    match options.format {
        OutputFormat::Text => write_text(w, &rows, options),
        OutputFormat::Csv => write_csv(w, &rows),
    }
}

pub(crate) fn rows(
    entries: &[JournalEntry<'_, '_>],
    options: &RenderOptions,
) -> Result<Vec<Row>, JournalError> {
    if options.precision > MAX_PRECISION {
        return Err(JournalError::InvalidRenderOption(format!(
            "precision {} exceeds the maximum of {}",
            options.precision, MAX_PRECISION
        )));
    }
    let precision = options.precision;
    let mut balances = Balances::new();
    let mut rows = Vec::with_capacity(entries.len());
    for entry in entries {
        let row = match entry {
            JournalEntry::Posting { txn, posting } => {
                let change = match &posting.position {
                    Some(position) if options.at_cost => Some(position.at_cost()?),
                    Some(position) => Some(position.units.clone()),
                    None => None,
                };
                if let Some(change) = &change {
                    balances.add(change)?;
                }
                let cost = posting
                    .position
                    .as_ref()
                    .and_then(|position| position.cost.as_ref())
                    .map(|cost| cost.to_string_with_max_digits(precision))
                    .unwrap_or_default();
                let price = posting
                    .price
                    .as_ref()
                    .map(|price| format!("@ {}", price.to_string_with_precision(precision)))
                    .unwrap_or_default();
                let balance = if options.show_balance {
                    balances
                        .amounts()
                        .map(|amount| amount.to_string_with_precision(precision))
                        .collect()
                } else {
                    Vec::new()
                };
                Row {
                    date: txn.date.to_string(),
                    flag: posting.flag.as_ref().unwrap_or(&txn.flag).to_string(),
                    account: posting.account.to_string(),
                    description: describe_transaction(txn),
                    change: change
                        .iter()
                        .map(|amount| amount.to_string_with_precision(precision))
                        .collect(),
                    cost,
                    price,
                    balance,
                }
            }
            JournalEntry::Directive(directive) => Row {
                date: directive.date().map(|d| d.to_string()).unwrap_or_default(),
                flag: type_keyword(directive)?,
                account: directive
                    .accounts()
                    .first()
                    .map(|account| account.to_string())
                    .unwrap_or_default(),
                description: describe_directive(directive, precision)?,
                ..Row::default()
            },
        };
        rows.push(row);
    }
    Ok(rows)
}

/// The short word shown in the flag column for a directive that is not a posting.
pub(crate) fn type_keyword(directive: &Directive<'_>) -> Result<String, RenderError> {
    use Directive::*;
    let keyword = match directive {
        Balance(_) => "bal",
        Close(_) => "close",
        Document(_) => "doc",
        Event(_) => "event",
        Note(_) => "note",
        Open(_) => "open",
        Pad(_) => "pad",
        Price(_) => "price",
        Transaction(txn) => return Ok(txn.flag.to_string()),
        Unsupported => return Err(RenderError::UnsupportedVariant),
    };
    Ok(keyword.to_string())
}

/// `payee | narration`, or whichever of the two is present.
pub(crate) fn describe_transaction(txn: &Transaction<'_>) -> String {
    let payee = txn.payee.as_deref().filter(|p| !p.is_empty());
    let narration = txn.narration.as_deref().filter(|n| !n.is_empty());
    match (payee, narration) {
        (Some(payee), Some(narration)) => format!("{} | {}", payee, narration),
        (Some(text), None) | (None, Some(text)) => text.to_string(),
        (None, None) => String::new(),
    }
}

pub(crate) fn describe_directive(
    directive: &Directive<'_>,
    precision: u32,
) -> Result<String, RenderError> {
    use Directive::*;
    let description = match directive {
        Balance(balance) => format!(
            "balance {}",
            balance.amount.to_string_with_precision(precision)
        ),
        Close(_) => String::new(),
        Document(document) => document.filename.to_string(),
        Event(event) => format!("{}: {}", event.event_type, event.description),
        Note(note) => note.comment.to_string(),
        Open(open) => open.currencies.join(","),
        Pad(pad) => format!("pad from {}", pad.source_account),
        Price(price) => format!(
            "{} {}",
            price.currency,
            price.amount.to_string_with_precision(precision)
        ),
        Transaction(txn) => describe_transaction(txn),
        Unsupported => return Err(RenderError::UnsupportedVariant),
    };
    Ok(description)
}

fn widest<'r>(cells: impl Iterator<Item = &'r String>) -> usize {
    cells.map(|cell| display_width(cell)).max().unwrap_or(0)
}

fn layout(rows: &[Row], options: &RenderOptions) -> Result<Layout, JournalError> {
    if options.width == 0 {
        return Err(JournalError::InvalidRenderOption(
            "the width of a text journal must be resolved before rendering".to_string(),
        ));
    }
    let verbose = options.verbosity == Verbosity::Verbose;
    let mut layout = Layout {
        flag: options.verbosity != Verbosity::Compact,
        account: widest(rows.iter().map(|row| &row.account)),
        description: None,
        change: widest(rows.iter().flat_map(|row| row.change.iter())),
        // cost and price columns with nothing in them are left out
        cost: if verbose {
            Some(widest(rows.iter().map(|row| &row.cost))).filter(|width| *width > 0)
        } else {
            None
        },
        price: if verbose {
            Some(widest(rows.iter().map(|row| &row.price))).filter(|width| *width > 0)
        } else {
            None
        },
        balance: if options.show_balance {
            Some(widest(rows.iter().flat_map(|row| row.balance.iter())))
        } else {
            None
        },
    };

    let mut fixed = vec![DATE_WIDTH, layout.account, layout.change];
    if layout.flag {
        fixed.push(FLAG_WIDTH);
    }
    fixed.extend(layout.cost);
    fixed.extend(layout.price);
    fixed.extend(layout.balance);
    // one separating space between adjacent columns
    let fixed_width = fixed.iter().sum::<usize>() + fixed.len() - 1;

    if layout.flag {
        let required = fixed_width + 1 + MIN_DESCRIPTION_WIDTH;
        if options.width < required {
            return Err(too_narrow(options.width, required));
        }
        layout.description = Some(options.width - fixed_width - 1);
    } else if options.width < fixed_width {
        return Err(too_narrow(options.width, fixed_width));
    }
    Ok(layout)
}

fn too_narrow(width: usize, required: usize) -> JournalError {
    JournalError::InvalidRenderOption(format!(
        "width {} is not sufficient to render the journal ({} columns required)",
        width, required
    ))
}

fn write_text<W: Write + ?Sized>(
    w: &mut W,
    rows: &[Row],
    options: &RenderOptions,
) -> Result<(), JournalError> {
    let layout = layout(rows, options)?;
    debug!(rows = rows.len(), width = options.width, ?layout, "rendering journal table");

    for row in rows {
        let description = match layout.description {
            Some(width) => wrap(&row.description, width),
            None => Vec::new(),
        };
        let height = description
            .len()
            .max(row.change.len())
            .max(row.balance.len())
            .max(1);

        for i in 0..height {
            let first = i == 0;
            let first_only = |cell: &str| if first { cell.to_string() } else { String::new() };
            let nth = |cells: &[String]| cells.get(i).cloned().unwrap_or_default();

            let mut cells = vec![pad_right(&first_only(&row.date), DATE_WIDTH)];
            if layout.flag {
                cells.push(pad_right(
                    truncate(&first_only(&row.flag), FLAG_WIDTH),
                    FLAG_WIDTH,
                ));
            }
            cells.push(pad_right(&first_only(&row.account), layout.account));
            if let Some(width) = layout.description {
                cells.push(pad_right(&nth(&description), width));
            }
            cells.push(pad_left(&nth(&row.change), layout.change));
            if let Some(width) = layout.cost {
                cells.push(pad_left(&first_only(&row.cost), width));
            }
            if let Some(width) = layout.price {
                cells.push(pad_left(&first_only(&row.price), width));
            }
            if let Some(width) = layout.balance {
                cells.push(pad_left(&nth(&row.balance), width));
            }
            writeln!(w, "{}", cells.join(" ").trim_end())?;
        }
    }
    Ok(())
}

fn write_csv<W: Write + ?Sized>(w: &mut W, rows: &[Row]) -> Result<(), JournalError> {
    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(&CSV_HEADER)?;
    for row in rows {
        writer.write_record(&[
            row.date.as_str(),
            row.flag.as_str(),
            row.account.as_str(),
            row.description.as_str(),
            row.change.join(", ").as_str(),
            row.cost.as_str(),
            row.price.as_str(),
            row.balance.join(", ").as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
