use std::collections::btree_map::{self, BTreeMap};

use rust_decimal::Decimal;

use super::amount::{Amount, AmountOverflow};
use super::Currency;

/// Running per-currency sums.
///
/// Currencies are never collapsed into one another and are iterated in currency order.
/// A currency whose sum returns to zero keeps its entry.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Balances<'a> {
    sums: BTreeMap<Currency<'a>, Decimal>,
}

impl<'a> Balances<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the sum of its currency. The sums are left unchanged on overflow.
    pub fn add(&mut self, amount: &Amount<'a>) -> Result<(), AmountOverflow> {
        let sum = self.get(&amount.currency).unwrap_or(Decimal::ZERO);
        let sum = sum.checked_add(amount.num).ok_or(AmountOverflow)?;
        self.sums.insert(amount.currency.clone(), sum);
        Ok(())
    }

    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.sums.get(currency).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    pub fn amounts(&self) -> Amounts<'_, 'a> {
        Amounts {
            inner: self.sums.iter(),
        }
    }
}

pub struct Amounts<'b, 'a> {
    inner: btree_map::Iter<'b, Currency<'a>, Decimal>,
}

impl<'b, 'a> Iterator for Amounts<'b, 'a> {
    type Item = Amount<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(currency, num)| Amount::new(*num, currency.clone()))
    }
}
