use beancount_core::*;
use std::{io, io::Write};
use thiserror::Error;

pub mod errors;
pub mod html;
pub mod journal;
mod text;

pub use errors::{format_errors, render_fileloc};
pub use journal::{text_entries_table, JournalError, OutputFormat, RenderOptions, Verbosity};

#[cfg(test)]
mod tests;

/// Default bound on the fractional digits shown for amounts, costs, prices and balances.
pub const MAXDIGITS_PRINTER: u32 = 8;

/// Renders directives in the syntax the Beancount reader accepts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EntryPrinter {
    max_digits: u32,
}

impl Default for EntryPrinter {
    fn default() -> Self {
        EntryPrinter {
            max_digits: MAXDIGITS_PRINTER,
        }
    }
}

impl EntryPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A printer showing at most `max_digits` fractional digits for every number.
    pub fn with_max_digits(max_digits: u32) -> Self {
        EntryPrinter { max_digits }
    }

    pub fn max_digits(&self) -> u32 {
        self.max_digits
    }

    /// Formats a single directive into a string.
    pub fn format(&self, directive: &Directive<'_>) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(directive, &mut buf)?;
        let s = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(s)
    }
}

/// Formats a directive with the default printer.
pub fn format_entry(directive: &Directive<'_>) -> Result<String, RenderError> {
    EntryPrinter::default().format(directive)
}

/// Writes every directive, each followed by an empty line.
pub fn print_entries<W: Write + ?Sized>(
    w: &mut W,
    directives: &[Directive<'_>],
) -> Result<(), RenderError> {
    let printer = EntryPrinter::default();
    for directive in directives {
        printer.render(directive, w)?;
        writeln!(w)?;
    }
    Ok(())
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
    #[error("could not render unsupported directive")]
    UnsupportedVariant,
    #[error(transparent)]
    Overflow(#[from] AmountOverflow),
}

pub trait Renderer<T, W: Write + ?Sized> {
    type Error;
    fn render(&self, renderable: T, write: &mut W) -> Result<(), Self::Error>;
}

/// A posting together with the running balance of its transaction, if that balance is shown.
#[derive(Copy, Clone, Debug)]
pub struct PostingLine<'p, 'a> {
    pub posting: &'p Posting<'a>,
    pub balance: Option<&'p Balances<'a>>,
}

impl<'a, W: Write + ?Sized> Renderer<&'a Directive<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, directive: &'a Directive<'_>, write: &mut W) -> Result<(), Self::Error> {
        use Directive::*;
        match directive {
            Balance(balance) => self.render(balance, write),
            Close(close) => self.render(close, write),
            Document(document) => self.render(document, write),
            Event(event) => self.render(event, write),
            Note(note) => self.render(note, write),
            Open(open) => self.render(open, write),
            Pad(pad) => self.render(pad, write),
            Price(price) => self.render(price, write),
            Transaction(transaction) => self.render(transaction, write),
            Unsupported => Err(RenderError::UnsupportedVariant),
        }
    }
}

impl<'a, W: Write + ?Sized> Renderer<&'a Transaction<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, transaction: &'a Transaction<'_>, w: &mut W) -> Result<(), Self::Error> {
        let payee = transaction.payee.as_deref().filter(|p| !p.is_empty());
        let narration = transaction.narration.as_deref().filter(|n| !n.is_empty());

        let mut strings = Vec::new();
        if let Some(payee) = payee {
            strings.push(format!("{} |", quote(payee)));
        }
        match narration {
            Some(narration) => strings.push(quote(narration)),
            // A payee keeps the narration slot so it is not read back as the narration.
            None if payee.is_some() => strings.push(quote("")),
            None => {}
        }
        for tag in &transaction.tags {
            strings.push(format!("#{}", tag));
        }
        for link in &transaction.links {
            strings.push(format!("^{}", link));
        }

        if strings.is_empty() {
            writeln!(w, "{} {}", transaction.date, transaction.flag)?;
        } else {
            writeln!(
                w,
                "{} {} {}",
                transaction.date,
                transaction.flag,
                strings.join(" ")
            )?;
        }

        let non_trivial_balance = transaction
            .postings
            .iter()
            .any(Posting::has_nontrivial_balance);
        let mut balances = Balances::new();
        for posting in &transaction.postings {
            let balance = if non_trivial_balance {
                if let Some(weight) = posting.weight()? {
                    balances.add(&weight)?;
                }
                Some(&balances)
            } else {
                None
            };
            self.render(PostingLine { posting, balance }, w)?;
        }
        Ok(())
    }
}

impl<'a, W: Write + ?Sized> Renderer<&'a Posting<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, posting: &'a Posting<'_>, w: &mut W) -> Result<(), Self::Error> {
        self.render(
            PostingLine {
                posting,
                balance: None,
            },
            w,
        )
    }
}

impl<'p, 'a, W: Write + ?Sized> Renderer<PostingLine<'p, 'a>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, line: PostingLine<'p, 'a>, w: &mut W) -> Result<(), Self::Error> {
        let posting = line.posting;
        let flag = match &posting.flag {
            Some(flag) => format!("{} ", flag),
            None => String::new(),
        };
        let flag_posting = format!("{}{:62}", flag, posting.account);

        let (amount_str, cost_str) = match &posting.position {
            Some(position) => position.strs(self.max_digits),
            None => (String::new(), String::new()),
        };

        let price_str = match &posting.price {
            Some(price) => format!("@ {}", price.to_string_with_max_digits(self.max_digits)),
            None => String::new(),
        };

        let balance_str = match line.balance {
            Some(balances) => {
                let amounts: Vec<_> = balances
                    .amounts()
                    .map(|amount| amount.to_string_with_max_digits(self.max_digits))
                    .collect();
                format!("; {:>14}", amounts.join(", "))
            }
            None => String::new(),
        };

        let rendered = format!(
            "  {:64} {:>16} {:>16} {:>16} {:>16}",
            flag_posting, amount_str, cost_str, price_str, balance_str
        );
        writeln!(w, "{}", rendered.trim_end())?;
        Ok(())
    }
}

impl<'a, W: Write + ?Sized> Renderer<&'a Balance<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, balance: &'a Balance<'_>, w: &mut W) -> Result<(), Self::Error> {
        writeln!(
            w,
            "{} balance {:47} {:>16}",
            balance.date,
            balance.account,
            balance.amount.to_string_with_max_digits(self.max_digits)
        )?;
        Ok(())
    }
}

impl<'a, W: Write + ?Sized> Renderer<&'a Note<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, note: &'a Note<'_>, w: &mut W) -> Result<(), Self::Error> {
        writeln!(
            w,
            "{} note {} {}",
            note.date,
            note.account,
            quote(&note.comment)
        )?;
        Ok(())
    }
}

impl<'a, W: Write + ?Sized> Renderer<&'a Document<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, document: &'a Document<'_>, w: &mut W) -> Result<(), Self::Error> {
        writeln!(
            w,
            "{} document {} {}",
            document.date,
            document.account,
            quote(&document.filename)
        )?;
        Ok(())
    }
}

impl<'a, W: Write + ?Sized> Renderer<&'a Pad<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, pad: &'a Pad<'_>, w: &mut W) -> Result<(), Self::Error> {
        writeln!(
            w,
            "{} pad {} {}",
            pad.date, pad.account, pad.source_account
        )?;
        Ok(())
    }
}

impl<'a, W: Write + ?Sized> Renderer<&'a Open<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, open: &'a Open<'_>, w: &mut W) -> Result<(), Self::Error> {
        let line = format!(
            "{} open {:47} {}",
            open.date,
            open.account,
            open.currencies.join(",")
        );
        writeln!(w, "{}", line.trim_end())?;
        Ok(())
    }
}

impl<'a, W: Write + ?Sized> Renderer<&'a Close<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, close: &'a Close<'_>, w: &mut W) -> Result<(), Self::Error> {
        writeln!(w, "{} close {}", close.date, close.account)?;
        Ok(())
    }
}

impl<'a, W: Write + ?Sized> Renderer<&'a Price<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, price: &'a Price<'_>, w: &mut W) -> Result<(), Self::Error> {
        writeln!(
            w,
            "{} price {} {:>16}",
            price.date,
            price.currency,
            price.amount.to_string_with_max_digits(self.max_digits)
        )?;
        Ok(())
    }
}

impl<'a, W: Write + ?Sized> Renderer<&'a Event<'_>, W> for EntryPrinter {
    type Error = RenderError;
    fn render(&self, event: &'a Event<'_>, w: &mut W) -> Result<(), Self::Error> {
        writeln!(
            w,
            "{} event {} {}",
            event.date,
            quote(&event.event_type),
            quote(&event.description)
        )?;
        Ok(())
    }
}
