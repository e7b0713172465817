//! Transaction validation
//!
//! Checks run in a fixed order and stop at the first failure. The posted
//! amounts are summed but the sum is never required to be zero.

use thiserror::Error;

use super::entry::EntryPair;

/// Why a form cannot be finalized
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("At least 2 account/amount pairs required.")]
    TooFewEntries,

    #[error("Date and description are required.")]
    MissingHeader,

    #[error("All account fields must be filled.")]
    MissingAccount,

    #[error("All amount fields must be filled.")]
    MissingAmount,

    #[error("Amounts must be numeric.")]
    NonNumericAmount,
}

/// Validate a transaction, returning the sum of the amounts that were given
pub fn validate(
    date: &str,
    description: &str,
    entries: &[EntryPair],
) -> Result<f64, ValidationError> {
    if entries.len() < 2 {
        return Err(ValidationError::TooFewEntries);
    }

    if date.trim().is_empty() || description.trim().is_empty() {
        return Err(ValidationError::MissingHeader);
    }

    let last = entries.len() - 1;
    let mut total = 0.0;

    for (i, entry) in entries.iter().enumerate() {
        if entry.account.value().trim().is_empty() {
            return Err(ValidationError::MissingAccount);
        }

        let amount = entry.amount.value().trim();
        if amount.is_empty() {
            if i == last {
                continue;
            }
            return Err(ValidationError::MissingAmount);
        }

        total += parse_amount(amount).ok_or(ValidationError::NonNumericAmount)?;
    }

    Ok(total)
}

/// Parse the leading decimal number of an amount
///
/// Anything after the number, such as a commodity (`1000€`, `50 EUR`), is
/// ignored. Text that does not start with a number is rejected.
pub fn parse_amount(text: &str) -> Option<f64> {
    numeric_prefix(text.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// The longest prefix of `text` shaped like `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }

    if digits == 0 {
        return "";
    }

    // An exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    &text[..end]
}
