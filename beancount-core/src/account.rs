use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;

use thiserror::Error;
use typed_builder::TypedBuilder;

use super::account_types::AccountType;

/// Represents an account.
///
/// Beancount accumulates commodities in accounts.  An account name is a
/// colon-separated list of capitalized words which begin with a letter, and whose first word must
/// be one of the five acceptable account types.
///
/// Some example accounts:
///
/// ```text
/// Assets:US:BofA:Checking
/// Liabilities:CA:RBC:CreditCard
/// Equity:Retained-Earnings
/// Income:US:Acme:Salary
/// Expenses:Food:Groceries
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.17ry42rqbuiu>
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, TypedBuilder)]
pub struct Account<'a> {
    /// Type of the account.
    pub ty: AccountType,

    /// Optional parts of the account following the account type.
    #[builder(default)]
    pub parts: Vec<Cow<'a, str>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AccountParseError {
    #[error("account name is empty")]
    Empty,
    #[error("'{0}' is not a valid account type")]
    InvalidType(String),
    #[error("account '{0}' has an empty component")]
    EmptyComponent(String),
}

impl<'a> Account<'a> {
    /// Iterates over every component of the name, starting with the account type.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.ty.default_name()).chain(self.parts.iter().map(|p| p.as_ref()))
    }
}

impl fmt::Display for Account<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Route through `pad` so width and alignment flags apply to the whole name.
        let name = self.components().collect::<Vec<_>>().join(":");
        f.pad(&name)
    }
}

impl<'a> TryFrom<&'a str> for Account<'a> {
    type Error = AccountParseError;

    fn try_from(name: &'a str) -> Result<Self, Self::Error> {
        if name.is_empty() {
            return Err(AccountParseError::Empty);
        }
        let mut components = name.split(':');
        let root = components.next().unwrap_or_default();
        let ty = AccountType::from_default_name(root)
            .ok_or_else(|| AccountParseError::InvalidType(root.to_string()))?;
        let parts = components
            .map(|part| {
                if part.is_empty() {
                    Err(AccountParseError::EmptyComponent(name.to_string()))
                } else {
                    Ok(Cow::Borrowed(part))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Account { ty, parts })
    }
}
