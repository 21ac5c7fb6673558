use chrono::{Days, Months, NaiveDate};

/// Returns true for strings shaped exactly like `DD/MM/YYYY` (zero padded).
pub fn is_ledger_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
}

/// Parse a `DD/MM/YYYY` string into a calendar date.
///
/// Day and month are not range checked: values past the end of the month or
/// year roll over into the following ones, so `31/02/2023` is `2023-03-03`
/// and `00/01/2024` is `2023-12-31`. Returns `None` when the input is not
/// shaped like a ledger date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    if !is_ledger_date(input) {
        return None;
    }

    let day: u32 = input[0..2].parse().ok()?;
    let month: u32 = input[3..5].parse().ok()?;
    let year: i32 = input[6..10].parse().ok()?;

    let first_of_year = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let first_of_month = if month == 0 {
        first_of_year.checked_sub_months(Months::new(1))?
    } else {
        first_of_year.checked_add_months(Months::new(month - 1))?
    };

    if day == 0 {
        first_of_month.checked_sub_days(Days::new(1))
    } else {
        first_of_month.checked_add_days(Days::new(u64::from(day - 1)))
    }
}
