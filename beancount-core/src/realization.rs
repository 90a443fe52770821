//! A tree of accounts indexing the postings and directives that reference each account.
//!
//! The tree is built once from a flat list of directives and is read-only afterwards.

use std::collections::BTreeMap;

use super::account::Account;
use super::directives::{Directive, Transaction};
use super::posting::Posting;
use super::Date;

/// One line of an account's journal: a posting of a transaction, or a directive that refers to the
/// account directly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum JournalEntry<'r, 'a> {
    Posting {
        txn: &'r Transaction<'a>,
        posting: &'r Posting<'a>,
    },
    Directive(&'r Directive<'a>),
}

impl<'r, 'a> JournalEntry<'r, 'a> {
    pub fn date(&self) -> Option<Date> {
        match self {
            JournalEntry::Posting { txn, .. } => Some(txn.date),
            JournalEntry::Directive(directive) => directive.date(),
        }
    }
}

/// Position of an entry in the input: directive index, then index within the directive.
type Seq = (usize, usize);

#[derive(Clone, Debug, Default)]
pub struct RealAccount<'r, 'a> {
    /// Full account name; empty for the root.
    pub account: String,
    children: BTreeMap<String, RealAccount<'r, 'a>>,
    entries: Vec<(Seq, JournalEntry<'r, 'a>)>,
}

/// Builds the account tree for `directives`.
///
/// Transactions contribute one entry per posting, under the posting's account. `balance`,
/// `close`, `document`, `note` and `open` directives are attached to their account, `pad` to both
/// of its accounts. Prices and events are not attached to any account.
pub fn realize<'r, 'a>(directives: &'r [Directive<'a>]) -> RealAccount<'r, 'a> {
    let mut root = RealAccount::default();
    for (index, directive) in directives.iter().enumerate() {
        match directive {
            Directive::Transaction(txn) => {
                for (sub, posting) in txn.postings.iter().enumerate() {
                    root.get_or_create(&posting.account)
                        .entries
                        .push(((index, sub), JournalEntry::Posting { txn, posting }));
                }
            }
            _ => {
                let mut accounts = directive.accounts();
                accounts.dedup();
                for (sub, account) in accounts.into_iter().enumerate() {
                    root.get_or_create(account)
                        .entries
                        .push(((index, sub), JournalEntry::Directive(directive)));
                }
            }
        }
    }
    root
}

impl<'r, 'a> RealAccount<'r, 'a> {
    fn get_or_create(&mut self, account: &Account<'_>) -> &mut Self {
        let mut node = self;
        for component in account.components() {
            let name = if node.account.is_empty() {
                component.to_string()
            } else {
                format!("{}:{}", node.account, component)
            };
            node = node
                .children
                .entry(component.to_string())
                .or_insert_with(|| RealAccount {
                    account: name,
                    ..RealAccount::default()
                });
        }
        node
    }

    /// Looks up a node by its full account name. The empty name is the node itself.
    pub fn get(&self, name: &str) -> Option<&Self> {
        if name.is_empty() {
            return Some(self);
        }
        name.split(':')
            .try_fold(self, |node, component| node.children.get(component))
    }

    pub fn children(&self) -> impl Iterator<Item = &RealAccount<'r, 'a>> {
        self.children.values()
    }

    /// The entries of this node and all of its descendants, ordered by date and then by their
    /// position in the input.
    pub fn get_postings(&self) -> Vec<JournalEntry<'r, 'a>> {
        let mut collected = Vec::new();
        self.collect(&mut collected);
        collected.sort_by_key(|(seq, entry)| (entry.date(), *seq));
        collected.into_iter().map(|(_, entry)| entry).collect()
    }

    fn collect(&self, out: &mut Vec<(Seq, JournalEntry<'r, 'a>)>) {
        out.extend(self.entries.iter().copied());
        for child in self.children.values() {
            child.collect(out);
        }
    }
}
