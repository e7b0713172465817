//! Ledger query commands
//!
//! Pass-through views of what hledger reports for the journal.

use std::io::Write;

use crate::error::ToolsResult;
use crate::hledger::{AccountSource, Hledger};

/// Print every known account name, one per line
pub fn handle_accounts_command(accounts: &dyn AccountSource, out: &mut impl Write) -> ToolsResult<()> {
    for name in accounts.list_accounts()? {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Print the balance sheet with percentages as a tree
pub fn handle_balance_command(hledger: &Hledger, out: &mut impl Write) -> ToolsResult<()> {
    let sheet = hledger.balance_sheet()?;
    write!(out, "{}", sheet)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hledger::StaticAccounts;

    #[test]
    fn test_accounts_one_per_line() {
        let source = StaticAccounts(vec!["assets:bank".into(), "income:salary".into()]);
        let mut out = Vec::new();
        handle_accounts_command(&source, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "assets:bank\nincome:salary\n");
    }
}
