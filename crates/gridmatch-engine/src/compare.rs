//! Value comparison under spreadsheet rules. Numbers compare numerically and
//! everything else compares as case-insensitive text; the two classes never
//! cross.

use std::cmp::Ordering;

use gridmatch_model::ScalarValue;

/// How a pair of values relates for comparison purposes.
///
/// `Mixed` pairs (number vs. non-number) are never equal and never ordered;
/// the match engine skips such candidates entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareClass {
    BothNumeric,
    BothText,
    Mixed,
}

/// Classifies a pair of values. Text, booleans, errors and empty cells all
/// fall in the text class via their canonical string form.
pub fn compare_class(a: &ScalarValue, b: &ScalarValue) -> CompareClass {
    match (a.is_number(), b.is_number()) {
        (true, true) => CompareClass::BothNumeric,
        (false, false) => CompareClass::BothText,
        _ => CompareClass::Mixed,
    }
}

/// Spreadsheet equality: numeric equality for number pairs, case-insensitive
/// canonical-text equality otherwise. `Mixed` pairs are never equal.
pub fn equals(a: &ScalarValue, b: &ScalarValue) -> bool {
    match (a, b) {
        (ScalarValue::Number(x), ScalarValue::Number(y)) => x == y,
        _ => match compare_class(a, b) {
            CompareClass::BothText => {
                text_eq_case_insensitive(&a.canonical_text(), &b.canonical_text())
            }
            CompareClass::BothNumeric | CompareClass::Mixed => false,
        },
    }
}

/// Spreadsheet ordering. `None` means the pair is incomparable: a `Mixed`
/// pair, or a NaN on either side.
pub fn order(a: &ScalarValue, b: &ScalarValue) -> Option<Ordering> {
    match (a, b) {
        (ScalarValue::Number(x), ScalarValue::Number(y)) => x.partial_cmp(y),
        _ => match compare_class(a, b) {
            CompareClass::BothText => Some(cmp_case_insensitive(
                &a.canonical_text(),
                &b.canonical_text(),
            )),
            CompareClass::BothNumeric | CompareClass::Mixed => None,
        },
    }
}

fn text_eq_case_insensitive(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    a.chars()
        .flat_map(|c| c.to_uppercase())
        .eq(b.chars().flat_map(|c| c.to_uppercase()))
}

fn cmp_ascii_case_insensitive(a: &str, b: &str) -> Ordering {
    let mut a_iter = a.as_bytes().iter();
    let mut b_iter = b.as_bytes().iter();
    loop {
        match (a_iter.next(), b_iter.next()) {
            (Some(&ac), Some(&bc)) => {
                let ac = ac.to_ascii_uppercase();
                let bc = bc.to_ascii_uppercase();
                match ac.cmp(&bc) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        return cmp_ascii_case_insensitive(a, b);
    }

    let mut a_iter = a.chars().flat_map(|c| c.to_uppercase());
    let mut b_iter = b.chars().flat_map(|c| c.to_uppercase());
    loop {
        match (a_iter.next(), b_iter.next()) {
            (Some(ac), Some(bc)) => match ac.cmp(&bc) {
                Ordering::Equal => continue,
                ord => return ord,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}
