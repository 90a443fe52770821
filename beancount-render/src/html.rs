//! HTML table fragments for lists of directives and for account journals.

use std::io::Write;

use beancount_core::{Directive, JournalEntry, Posting};

use crate::journal::{self, describe_directive, type_keyword, JournalError, RenderOptions};
use crate::RenderError;

/// Escapes the characters that are special in HTML text and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_cells<W: Write + ?Sized>(w: &mut W, cells: &[(&str, &str)]) -> Result<(), RenderError> {
    for (class, text) in cells {
        write!(w, "<td class=\"{}\">{}</td>", class, escape(text))?;
    }
    writeln!(w)?;
    Ok(())
}

/// Writes one row per directive. With `render_postings`, every posting of a transaction follows
/// its transaction as a row of its own.
pub fn html_entries_table<W: Write + ?Sized>(
    w: &mut W,
    entries: &[&Directive<'_>],
    render_postings: bool,
    precision: u32,
) -> Result<(), RenderError> {
    writeln!(w, "<table class=\"entry-table\">")?;
    writeln!(w, "<thead>")?;
    writeln!(
        w,
        "<tr><th class=\"datecell\">Date</th><th class=\"flag\">F</th>\
         <th class=\"description\">Narration/Payee</th><th class=\"position\">Position</th>\
         <th class=\"price\">Price</th><th class=\"cost\">Cost</th></tr>"
    )?;
    writeln!(w, "</thead>")?;

    for directive in entries {
        let date = directive.date().map(|d| d.to_string()).unwrap_or_default();
        let flag = type_keyword(directive)?;
        let mut description = describe_directive(directive, precision)?;
        if !matches!(directive, Directive::Transaction(_)) {
            if let Some(account) = directive.accounts().first() {
                description = format!("{} {}", account, description).trim_end().to_string();
            }
        }

        writeln!(w, "<tr class=\"{}\">", directive.kind())?;
        write_cells(
            w,
            &[
                ("datecell", date.as_str()),
                ("flag", flag.as_str()),
                ("description", description.as_str()),
                ("position", ""),
                ("price", ""),
                ("cost", ""),
            ],
        )?;
        writeln!(w, "</tr>")?;

        if render_postings {
            if let Directive::Transaction(txn) = directive {
                for posting in &txn.postings {
                    write_posting_row(w, posting, precision)?;
                }
            }
        }
    }
    writeln!(w, "</table>")?;
    Ok(())
}

fn write_posting_row<W: Write + ?Sized>(
    w: &mut W,
    posting: &Posting<'_>,
    precision: u32,
) -> Result<(), RenderError> {
    let flag = posting
        .flag
        .as_ref()
        .map(|flag| flag.to_string())
        .unwrap_or_default();
    let account = posting.account.to_string();
    let (units, cost) = match &posting.position {
        Some(position) => (
            position.units.to_string_with_precision(precision),
            position
                .cost
                .as_ref()
                .map(|cost| cost.to_string_with_max_digits(precision))
                .unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };
    let price = posting
        .price
        .as_ref()
        .map(|price| price.to_string_with_precision(precision))
        .unwrap_or_default();

    writeln!(w, "<tr class=\"posting\">")?;
    write_cells(
        w,
        &[
            ("datecell", ""),
            ("flag", flag.as_str()),
            ("description", account.as_str()),
            ("position", units.as_str()),
            ("price", price.as_str()),
            ("cost", cost.as_str()),
        ],
    )?;
    writeln!(w, "</tr>")?;
    Ok(())
}

/// Writes an account journal with its running balance. Multi-currency cells are split with
/// `<br/>`.
pub fn html_entries_table_with_balance<W: Write + ?Sized>(
    w: &mut W,
    entries: &[JournalEntry<'_, '_>],
    precision: u32,
) -> Result<(), JournalError> {
    let options = RenderOptions::builder()
        .precision(precision)
        .show_balance(true)
        .build();
    let rows = journal::rows(entries, &options)?;

    writeln!(w, "<table class=\"entry-table\">")?;
    writeln!(w, "<thead>")?;
    writeln!(
        w,
        "<tr><th class=\"datecell\">Date</th><th class=\"flag\">F</th>\
         <th class=\"account\">Account</th><th class=\"description\">Narration/Payee</th>\
         <th class=\"change\">Change</th><th class=\"balance\">Balance</th></tr>"
    )?;
    writeln!(w, "</thead>")?;
    for (entry, row) in entries.iter().zip(&rows) {
        let class = match entry {
            JournalEntry::Posting { .. } => "posting",
            JournalEntry::Directive(directive) => directive.kind(),
        };
        writeln!(w, "<tr class=\"{}\">", class)?;
        write!(
            w,
            "<td class=\"datecell\">{}</td><td class=\"flag\">{}</td>\
             <td class=\"account\">{}</td><td class=\"description\">{}</td>",
            escape(&row.date),
            escape(&row.flag),
            escape(&row.account),
            escape(&row.description)
        )?;
        writeln!(
            w,
            "<td class=\"change\">{}</td><td class=\"balance\">{}</td>",
            join_lines(&row.change),
            join_lines(&row.balance)
        )?;
        writeln!(w, "</tr>")?;
    }
    writeln!(w, "</table>")?;
    Ok(())
}

fn join_lines(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape(cell))
        .collect::<Vec<_>>()
        .join("<br/>")
}
