use std::borrow::Cow;
use std::fmt;

use typed_builder::TypedBuilder;

use super::directives::Directive;

/// Where in the input a directive or an error came from.
#[derive(Clone, Debug, Eq, PartialEq, Hash, TypedBuilder)]
pub struct FileLoc<'a> {
    #[builder(setter(into))]
    pub filename: Cow<'a, str>,
    pub lineno: usize,
}

impl fmt::Display for FileLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.lineno)
    }
}

/// An error reported against the ledger, optionally carrying the directive that caused it.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct LedgerError<'a> {
    pub fileloc: FileLoc<'a>,
    #[builder(setter(into))]
    pub message: Cow<'a, str>,
    #[builder(default, setter(strip_option))]
    pub entry: Option<Directive<'a>>,
}
