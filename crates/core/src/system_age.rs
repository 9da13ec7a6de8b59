//! Equipment age heuristic from a data-plate serial number.
//!
//! Many residential manufacturers encode the production year in the
//! first four digits of the serial number. This is a rough heuristic
//! that varies by manufacturer; when the prefix does not parse as a
//! plausible year the age is simply unknown.

/// Earliest production year the heuristic accepts.
pub const MIN_SERIAL_YEAR: i32 = 1990;

/// Derive equipment age in years from a serial number prefix.
///
/// Returns `Some(current_year - year)` when the first four characters
/// are digits forming a year in `[MIN_SERIAL_YEAR, current_year]`,
/// otherwise `None`.
pub fn age_from_serial(serial_number: &str, current_year: i32) -> Option<i32> {
    let prefix = serial_number.get(..4)?;
    if !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year: i32 = prefix.parse().ok()?;
    if (MIN_SERIAL_YEAR..=current_year).contains(&year) {
        Some(current_year - year)
    } else {
        None
    }
}
