/// Allowed account types.
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.17ry42rqbuiu>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AccountType {
    Assets,
    Liabilities,
    Equity,
    Income,
    Expenses,
}

impl AccountType {
    /// The name used for this account type when no custom root names are configured.
    pub fn default_name(self) -> &'static str {
        match self {
            AccountType::Assets => "Assets",
            AccountType::Liabilities => "Liabilities",
            AccountType::Equity => "Equity",
            AccountType::Income => "Income",
            AccountType::Expenses => "Expenses",
        }
    }

    /// Looks up the account type from its default name.
    pub fn from_default_name(name: &str) -> Option<Self> {
        use AccountType::*;
        [Assets, Liabilities, Equity, Income, Expenses]
            .iter()
            .copied()
            .find(|ty| ty.default_name() == name)
    }
}
