use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use typed_builder::TypedBuilder;

use super::Currency;

/// A number of units of a certain commodity.
#[derive(Clone, Debug, Eq, PartialEq, Hash, TypedBuilder)]
pub struct Amount<'a> {
    /// The value of the amount.
    pub num: Decimal,

    /// The commodity of the amount.
    #[builder(setter(into))]
    pub currency: Currency<'a>,
}

impl<'a> Amount<'a> {
    pub fn new(num: Decimal, currency: impl Into<Currency<'a>>) -> Self {
        Amount {
            num,
            currency: currency.into(),
        }
    }

    /// Renders the amount keeping its own scale, but never showing more than `max_digits`
    /// fractional digits.
    pub fn to_string_with_max_digits(&self, max_digits: u32) -> String {
        format!("{} {}", format_max_digits(self.num, max_digits), self.currency)
    }

    /// Renders the amount with exactly `precision` fractional digits.
    pub fn to_string_with_precision(&self, precision: u32) -> String {
        format!("{} {}", format_precision(self.num, precision), self.currency)
    }
}

/// An amount computation exceeded the range of `Decimal`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("amount out of range")]
pub struct AmountOverflow;

impl fmt::Display for Amount<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{} {}", self.num, self.currency))
    }
}

fn round(num: Decimal, digits: u32) -> Decimal {
    let mut rounded = num.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // "-0.00" is never a useful rendering
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Formats `num` without inventing trailing zeros, rounding only when it carries more than
/// `max_digits` fractional digits.
pub fn format_max_digits(num: Decimal, max_digits: u32) -> String {
    if num.scale() > max_digits {
        round(num, max_digits).to_string()
    } else {
        num.to_string()
    }
}

/// Formats `num` with exactly `precision` fractional digits.
pub fn format_precision(num: Decimal, precision: u32) -> String {
    format!("{:.*}", precision as usize, round(num, precision))
}
