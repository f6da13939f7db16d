//! Currency token normalization.

/// Strips a numeric-looking token down to a plain decimal string.
///
/// Keeps only digits, `.` and `,`, then removes the commas, so `"$1,234.56"`
/// becomes `"1234.56"` and `"₹999"` becomes `"999"`. Purely textual: no
/// rounding and no check that the result is a well-formed number. Idempotent,
/// and empty input yields empty output; callers holding an `Option` map it
/// through this and default to `""`.
pub fn normalize_currency(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    kept.replace(',', "")
}
