use chrono::{DateTime, Local};

use crate::error::Result;
use crate::extract::{extract_date, extract_description, extract_temperature};
use crate::model::{ForecastEntry, LocationQuery};

pub const NOT_FOUND_MESSAGE: &str = "This location was not found.";

pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, there was an error fetching data. \
     Please check your internet connection, and if that's ok, report this to the developer.";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Upper-case the first letter of every word and lower-case the rest.
///
/// A word starts at any letter that follows a non-letter, so
/// `"o'hare"` becomes `"O'Hare"` and `"winston-salem"` becomes `"Winston-Salem"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

pub fn format_date(date: &DateTime<Local>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render one entry as a display line.
pub fn format_entry(query: &LocationQuery, entry: &ForecastEntry) -> Result<String> {
    let temp = extract_temperature(entry);
    let description = extract_description(entry)?;
    let date = extract_date(entry)?;

    Ok(format!(
        "on {} The temperature in {}, {} will be {:.2}F and {}",
        format_date(&date),
        title_case(&query.city),
        query.country.to_uppercase(),
        temp,
        description,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntryCondition, EntryMain};

    fn fixture() -> ForecastEntry {
        ForecastEntry {
            dt: 1_700_000_000,
            main: EntryMain { temp: 72.5 },
            weather: vec![EntryCondition {
                description: "clear sky".into(),
            }],
        }
    }

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("minneapolis"), "Minneapolis");
        assert_eq!(title_case("new YORK"), "New York");
        assert_eq!(title_case("winston-salem"), "Winston-Salem");
        assert_eq!(title_case("o'hare"), "O'Hare");
        assert_eq!(title_case("  spaced  out "), "  Spaced  Out ");
        assert_eq!(title_case("3rd city"), "3Rd City");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn formats_fixture_line() {
        let query = LocationQuery::new("minneapolis", "us");
        let line = format_entry(&query, &fixture()).unwrap();

        let expected_date = format_date(&extract_date(&fixture()).unwrap());
        assert_eq!(
            line,
            format!(
                "on {expected_date} The temperature in Minneapolis, US will be 72.50F and clear sky"
            )
        );
    }

    #[test]
    fn temperature_is_rounded_to_two_places() {
        let mut e = fixture();
        e.main.temp = 31.006;
        let line = format_entry(&LocationQuery::new("a", "b"), &e).unwrap();
        assert!(line.contains("31.01F"));
    }

    #[test]
    fn same_timestamp_renders_same_date() {
        let query = LocationQuery::new("paris", "fr");
        let mut other = fixture();
        other.main.temp = 10.0;
        other.weather[0].description = "overcast clouds".into();

        let a = format_entry(&query, &fixture()).unwrap();
        let b = format_entry(&query, &other).unwrap();

        let date_of = |line: &str| line[3..22].to_string();
        assert_eq!(date_of(&a), date_of(&b));
    }

    #[test]
    fn entry_without_conditions_fails_to_render() {
        let mut e = fixture();
        e.weather.clear();
        assert!(format_entry(&LocationQuery::new("a", "b"), &e).is_err());
    }
}
