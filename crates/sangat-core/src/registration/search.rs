//! Listing filters used when picking records for print.

use std::collections::HashSet;

use super::Registration;
use crate::numeric::from_devanagari_digits;

/// Whether a record matches a free-text search term.
///
/// A blank term matches everything. Otherwise the term matches a
/// case-insensitive substring of the full name, or a substring of the mobile
/// or Aadhaar number. Devanagari digits in the term count as ASCII digits.
pub fn matches(reg: &Registration, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let lower = term.to_lowercase();
    if format!("{} {}", reg.name, reg.surname)
        .to_lowercase()
        .contains(&lower)
    {
        return true;
    }
    let digits = from_devanagari_digits(term);
    reg.mobile_number.contains(&digits) || reg.aadhaar_number.contains(&digits)
}

pub fn filter<'a>(regs: &'a [Registration], term: &str) -> Vec<&'a Registration> {
    regs.iter().filter(|r| matches(r, term)).collect()
}

/// Records whose id is in `ids`, in listing order.
pub fn select<'a, S: AsRef<str>>(regs: &'a [Registration], ids: &[S]) -> Vec<&'a Registration> {
    let wanted: HashSet<&str> = ids.iter().map(|s| s.as_ref()).collect();
    regs.iter().filter(|r| wanted.contains(r.id.as_str())).collect()
}
