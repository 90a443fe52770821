use typed_builder::TypedBuilder;

use super::account::Account;
use super::amount::{Amount, AmountOverflow};
use super::flags::Flag;
use super::position::Position;

/// Represents a transaction posting.  Postings represent a single amount being deposited to or
/// withdrawn from an account.
///
/// Postings can optionally carry a cost (attached to the position) or a conversion price. A
/// posting with a price looks like this, where the price is the amount following the `@`:
///
/// ```text
/// 2012-11-03 * "Transfer to account in Canada"
///     Assets:MyBank:Checking            -400.00 USD @ 1.09 CAD
///     Assets:FR:SocGen:Checking          436.01 CAD
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.mtqrwt24wnzs>
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Posting<'a> {
    /// Account being posted to.
    pub account: Account<'a>,

    /// The amount being posted, with its cost.
    #[builder(default, setter(strip_option))]
    pub position: Option<Position<'a>>,

    /// The conversion price of this posting.
    #[builder(default, setter(strip_option))]
    pub price: Option<Amount<'a>>,

    /// Overrides the flag of the parent transaction.
    #[builder(default, setter(strip_option))]
    pub flag: Option<Flag<'a>>,
}

impl<'a> Posting<'a> {
    /// Whether this posting's contribution to the transaction balance differs from its units,
    /// i.e. it is held at cost or converted at a price.
    pub fn has_nontrivial_balance(&self) -> bool {
        self.price.is_some()
            || self
                .position
                .as_ref()
                .map_or(false, |position| position.cost.is_some())
    }

    /// The amount this posting contributes to its transaction's balance, `None` when the posting
    /// has no position.
    pub fn weight(&self) -> Result<Option<Amount<'a>>, AmountOverflow> {
        self.position
            .as_ref()
            .map(|position| position.weight(self.price.as_ref()))
            .transpose()
    }
}
