use std::borrow::Cow;

use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use super::amount::{format_max_digits, Amount, AmountOverflow};
use super::quote::quote;
use super::{Currency, Date};

// Amounts specified as either per-share or total prices or costs are always unsigned.

/// The cost basis of a lot, as computed by booking.
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.mtqrwt24wnzs>
#[derive(Clone, Debug, Eq, PartialEq, Hash, TypedBuilder)]
pub struct Cost<'a> {
    /// Per-unit cost.
    pub number: Decimal,
    /// The type of commodity for this cost.
    #[builder(setter(into))]
    pub currency: Currency<'a>,
    /// The acquisition date of the lot.
    #[builder(default, setter(strip_option))]
    pub date: Option<Date>,
    /// The label of the lot.
    #[builder(default, setter(strip_option, into))]
    pub label: Option<Cow<'a, str>>,
}

impl Cost<'_> {
    /// Renders the cost in the `{number currency[, date][, "label"]}` form.
    pub fn to_string_with_max_digits(&self, max_digits: u32) -> String {
        let mut parts = vec![format!(
            "{} {}",
            format_max_digits(self.number, max_digits),
            self.currency
        )];
        if let Some(date) = &self.date {
            parts.push(date.to_string());
        }
        if let Some(label) = &self.label {
            parts.push(quote(label));
        }
        format!("{{{}}}", parts.join(", "))
    }
}

/// Units of a commodity, optionally held at a cost.
#[derive(Clone, Debug, Eq, PartialEq, Hash, TypedBuilder)]
pub struct Position<'a> {
    pub units: Amount<'a>,
    #[builder(default, setter(strip_option))]
    pub cost: Option<Cost<'a>>,
}

impl<'a> Position<'a> {
    pub fn new(units: Amount<'a>) -> Self {
        Position { units, cost: None }
    }

    /// The rendered units and cost; the cost string is empty when there is no cost.
    pub fn strs(&self, max_digits: u32) -> (String, String) {
        let cost = match &self.cost {
            Some(cost) => cost.to_string_with_max_digits(max_digits),
            None => String::new(),
        };
        (self.units.to_string_with_max_digits(max_digits), cost)
    }

    /// The position valued at cost, or the units themselves when there is no cost.
    pub fn at_cost(&self) -> Result<Amount<'a>, AmountOverflow> {
        match &self.cost {
            Some(cost) => times(&self.units, cost.number, &cost.currency),
            None => Ok(self.units.clone()),
        }
    }

    /// The amount this position contributes to its transaction's balance: the cost if there is
    /// one, otherwise the conversion `price` if there is one, otherwise the units.
    pub fn weight(&self, price: Option<&Amount<'a>>) -> Result<Amount<'a>, AmountOverflow> {
        match (&self.cost, price) {
            (Some(_), _) => self.at_cost(),
            (None, Some(price)) => times(&self.units, price.num, &price.currency),
            (None, None) => Ok(self.units.clone()),
        }
    }
}

fn times<'a>(
    units: &Amount<'a>,
    per_unit: Decimal,
    currency: &Currency<'a>,
) -> Result<Amount<'a>, AmountOverflow> {
    let num = units.num.checked_mul(per_unit).ok_or(AmountOverflow)?;
    Ok(Amount::new(num, currency.clone()))
}
