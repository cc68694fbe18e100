use chrono::NaiveDate;

/// Formats a date as abbreviated month plus 4-digit year, e.g. "Mar 2020".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Formats an employment or study range.
///
/// A missing end date reads as the literal "Present"; a missing start
/// date collapses to an empty prefix. The separator is an en-dash with
/// surrounding spaces, which is part of the output contract.
pub fn format_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    let start_text = start.map(format_date).unwrap_or_default();
    let end_text = end.map(format_date).unwrap_or_else(|| "Present".to_string());
    format!("{} – {}", start_text, end_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_ended_range_reads_present() {
        let range = format_date_range(Some(date(2020, 3, 1)), None);
        assert_eq!(range, "Mar 2020 – Present");
    }

    #[test]
    fn closed_range_formats_both_ends() {
        let range = format_date_range(Some(date(2018, 1, 15)), Some(date(2019, 6, 30)));
        assert_eq!(range, "Jan 2018 – Jun 2019");
    }

    #[test]
    fn missing_start_collapses_to_empty_prefix() {
        let range = format_date_range(None, Some(date(2019, 6, 30)));
        assert_eq!(range, " – Jun 2019");
    }
}
