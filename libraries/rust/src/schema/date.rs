use super::ParseError;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date picker value. Anything after the calendar date (a time part
/// separated by a space or `T`) is ignored.
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    let value = value.trim();
    let date_part = value
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .unwrap_or(value);

    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|_| ParseError::Date(value.to_string()))
}

/// Serde adapter for optional date picker values; blank strings read as absent.
pub mod input_date {
    use super::{parse_date, DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;

        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_date(value).map(Some).map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Picker {
        #[serde(default, with = "input_date")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();

        assert_eq!(parse_date("2023-01-10"), Ok(expected));
        assert_eq!(parse_date("2023-01-10 00:00:00"), Ok(expected));
        assert_eq!(parse_date("2023-01-10T09:30:00"), Ok(expected));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(
            parse_date("10/01/2023"),
            Err(ParseError::Date("10/01/2023".to_string()))
        );
    }

    #[test]
    fn test_input_date_blank_is_absent() {
        let picker: Picker = serde_json::from_value(json!({"date": ""})).unwrap();
        assert_eq!(picker.date, None);

        let picker: Picker = serde_json::from_value(json!({})).unwrap();
        assert_eq!(picker.date, None);
    }

    #[test]
    fn test_input_date_serializes_calendar_date() {
        let picker = Picker {
            date: NaiveDate::from_ymd_opt(2023, 1, 1),
        };

        assert_eq!(
            serde_json::to_value(&picker).unwrap(),
            json!({"date": "2023-01-01"})
        );
    }

    #[test]
    fn test_input_date_invalid_is_error() {
        let result: Result<Picker, _> = serde_json::from_value(json!({"date": "yesterday"}));
        assert!(result.is_err());
    }
}
