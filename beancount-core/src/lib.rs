use std::borrow::Cow;

pub use account::{Account, AccountParseError};
pub use account_types::AccountType;
pub use amount::{Amount, AmountOverflow};
pub use balances::Balances;
pub use date::Date;
pub use diagnostic::{FileLoc, LedgerError};
pub use directives::*;
pub use flags::Flag;
pub use position::{Cost, Position};
pub use posting::Posting;
pub use quote::quote;
pub use realization::{realize, JournalEntry, RealAccount};

pub use rust_decimal::Decimal;

pub mod account;
pub mod account_types;
pub mod amount;
pub mod balances;
mod date;
pub mod diagnostic;
pub mod directives;
pub mod flags;
pub mod position;
pub mod posting;
mod quote;
pub mod realization;

pub type Currency<'a> = Cow<'a, str>;

/// Tag associated with a transaction directive.  Tags allow you to mark a subset of transactions,
/// enabling filtering on a tag(s) when generating a report.
///
/// In the below transaction, #berlin-trip-2014 is the tag:
///
/// ```text
///
/// 2014-04-23 * "Flight to Berlin" #berlin-trip-2014
///     Expenses:Flights              -1230.27 USD
///     Liabilities:CreditCard
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.oivvp5olom2v>
pub type Tag<'a> = Cow<'a, str>;

/// Links provide a way to link transactions together.  You may think of the link as a special kind
/// of tag that can be used to group together a set of financially related transactions over time.
///
/// ```text
/// 2014-02-05 * "Invoice for January" ^invoice-pepe-studios-jan14
///     Income:Clients:PepeStudios           -8450.00 USD
///     Assets:AccountsReceivable
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.k4v5vkjukel7>
pub type Link<'a> = Cow<'a, str>;
