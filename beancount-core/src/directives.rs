use std::borrow::Cow;

use typed_builder::TypedBuilder;

use super::account::Account;
use super::amount::Amount;
use super::flags::Flag;
use super::posting::Posting;
use super::{Currency, Date, Link, Tag};

/// Enum of all directive types.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive<'a> {
    Balance(Balance<'a>),
    Close(Close<'a>),
    Document(Document<'a>),
    Event(Event<'a>),
    Note(Note<'a>),
    Open(Open<'a>),
    Pad(Pad<'a>),
    Price(Price<'a>),
    Transaction(Transaction<'a>),
    /// A directive this model cannot represent.
    Unsupported,
}

impl<'a> Directive<'a> {
    pub fn date(&self) -> Option<Date> {
        use Directive::*;
        match self {
            Balance(d) => Some(d.date),
            Close(d) => Some(d.date),
            Document(d) => Some(d.date),
            Event(d) => Some(d.date),
            Note(d) => Some(d.date),
            Open(d) => Some(d.date),
            Pad(d) => Some(d.date),
            Price(d) => Some(d.date),
            Transaction(d) => Some(d.date),
            Unsupported => None,
        }
    }

    /// The keyword naming this kind of directive.
    pub fn kind(&self) -> &'static str {
        use Directive::*;
        match self {
            Balance(_) => "balance",
            Close(_) => "close",
            Document(_) => "document",
            Event(_) => "event",
            Note(_) => "note",
            Open(_) => "open",
            Pad(_) => "pad",
            Price(_) => "price",
            Transaction(_) => "txn",
            Unsupported => "unsupported",
        }
    }

    /// The accounts this directive affects, in the order they appear in its text.
    pub fn accounts(&self) -> Vec<&Account<'a>> {
        use Directive::*;
        match self {
            Balance(d) => vec![&d.account],
            Close(d) => vec![&d.account],
            Document(d) => vec![&d.account],
            Note(d) => vec![&d.account],
            Open(d) => vec![&d.account],
            Pad(d) => vec![&d.account, &d.source_account],
            Transaction(d) => d.postings.iter().map(|p| &p.account).collect(),
            Event(_) | Price(_) | Unsupported => Vec::new(),
        }
    }
}

/// Represents a `balance` directive, which is a way for you to input your statement balance into
/// the flow of transactions.
///
/// ```text
/// 2014-08-09 balance Assets:Cash     562.00 USD
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.l0pvgeniwvq8>
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Balance<'a> {
    pub date: Date,
    pub account: Account<'a>,
    pub amount: Amount<'a>,
}

/// Represents a `close` directive.
///
/// ```text
/// 2016-11-28 close Liabilities:CreditCard:CapitalOne
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Close<'a> {
    pub date: Date,
    pub account: Account<'a>,
}

/// Links an external file to an account.
///
/// ```text
/// 2013-11-03 document Liabilities:CreditCard "/home/joe/stmts/apr-2014.pdf"
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Document<'a> {
    pub date: Date,
    pub account: Account<'a>,
    /// Path of the document, as written in the ledger.
    #[builder(setter(into))]
    pub filename: Cow<'a, str>,
}

/// Tracks the value of some variable of your choice over time.
///
/// ```text
/// 2014-07-09 event "location" "Paris, France"
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Event<'a> {
    pub date: Date,
    #[builder(setter(into))]
    pub event_type: Cow<'a, str>,
    #[builder(setter(into))]
    pub description: Cow<'a, str>,
}

/// Attaches a dated comment to an account.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Note<'a> {
    pub date: Date,
    pub account: Account<'a>,
    #[builder(setter(into))]
    pub comment: Cow<'a, str>,
}

/// Represents an `open` directive, optionally constraining the currencies the account may hold.
///
/// ```text
/// 2014-05-01 open Liabilities:CreditCard:CapitalOne     USD
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Open<'a> {
    pub date: Date,
    pub account: Account<'a>,
    #[builder(default)]
    pub currencies: Vec<Currency<'a>>,
}

/// Inserts the transaction needed to make a following `balance` assertion succeed.
///
/// ```text
/// 2002-01-17 pad Assets:US:BofA:Checking Equity:Opening-Balances
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Pad<'a> {
    pub date: Date,
    /// Account being padded.
    pub account: Account<'a>,
    /// Account the padding amount is taken from.
    pub source_account: Account<'a>,
}

/// The price of a commodity on a given date.
///
/// ```text
/// 2014-07-09 price HOOL  579.18 USD
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Price<'a> {
    pub date: Date,
    #[builder(setter(into))]
    pub currency: Currency<'a>,
    pub amount: Amount<'a>,
}

/// A balanced set of postings.
///
/// ```text
/// 2014-05-05 * "Cafe Mogador" "Lamb tagine with wine" #trip ^receipt-1
///   Liabilities:CreditCard:CapitalOne         -37.45 USD
///   Expenses:Restaurant
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.up4dj751q84w>
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Transaction<'a> {
    pub date: Date,
    #[builder(default)]
    pub flag: Flag<'a>,
    #[builder(default, setter(strip_option, into))]
    pub payee: Option<Cow<'a, str>>,
    #[builder(default, setter(strip_option, into))]
    pub narration: Option<Cow<'a, str>>,
    #[builder(default)]
    pub tags: Vec<Tag<'a>>,
    #[builder(default)]
    pub links: Vec<Link<'a>>,
    #[builder(default)]
    pub postings: Vec<Posting<'a>>,
}

impl Transaction<'_> {
    /// Whether any posting converts between currencies at a price.
    pub fn has_conversion(&self) -> bool {
        self.postings.iter().any(|posting| posting.price.is_some())
    }
}
