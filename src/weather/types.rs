use chrono::{Local, LocalResult, TimeZone};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::adapter::FetchError;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("weather fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("missing field in weather payload: {0}")]
    MissingField(&'static str),
    #[error("field {path} in weather payload is not {expected}")]
    FieldType {
        path: &'static str,
        expected: &'static str,
    },
    #[error("timestamp {0} is outside the representable range")]
    InvalidTimestamp(i64),
}

/// Normalized summary of the current weather in one city, as extracted
/// from an OpenWeatherMap `/data/2.5/weather` response.
///
/// Only [`WeatherInfo::from_raw`] produces values of this type; there is
/// no partial construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherInfo {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub description: String,
    pub sunrise: String,
    pub sunset: String,
}

impl WeatherInfo {
    /// Extract the required fields from a parsed API payload. All-or-nothing:
    /// the first missing or wrong-typed field fails the whole conversion.
    pub fn from_raw(payload: &Value) -> Result<Self, WeatherError> {
        Ok(Self {
            temp: number_at(payload, "/main/temp")?,
            temp_min: number_at(payload, "/main/temp_min")?,
            temp_max: number_at(payload, "/main/temp_max")?,
            description: string_at(payload, "/weather/0/main")?,
            sunrise: format_date(integer_at(payload, "/sys/sunrise")?)?,
            sunset: format_date(integer_at(payload, "/sys/sunset")?)?,
        })
    }
}

fn field_at<'a>(payload: &'a Value, path: &'static str) -> Result<&'a Value, WeatherError> {
    payload
        .pointer(path)
        .ok_or(WeatherError::MissingField(path))
}

fn number_at(payload: &Value, path: &'static str) -> Result<f64, WeatherError> {
    field_at(payload, path)?.as_f64().ok_or(WeatherError::FieldType {
        path,
        expected: "a number",
    })
}

fn integer_at(payload: &Value, path: &'static str) -> Result<i64, WeatherError> {
    field_at(payload, path)?.as_i64().ok_or(WeatherError::FieldType {
        path,
        expected: "an integer timestamp",
    })
}

fn string_at(payload: &Value, path: &'static str) -> Result<String, WeatherError> {
    Ok(field_at(payload, path)?
        .as_str()
        .ok_or(WeatherError::FieldType {
            path,
            expected: "a string",
        })?
        .to_string())
}

/// Render a Unix timestamp as `MM/DD/YYYY, HH:MM:SS` in the local timezone.
pub fn format_date(timestamp: i64) -> Result<String, WeatherError> {
    format_date_in(&Local, timestamp)
}

/// Timezone-generic core of [`format_date`], so formatting can be pinned to
/// a fixed offset in tests. An ambiguous local time (DST fold) resolves to
/// the earlier instant; an unrepresentable timestamp is rejected.
pub fn format_date_in<Tz: TimeZone>(tz: &Tz, timestamp: i64) -> Result<String, WeatherError>
where
    Tz::Offset: std::fmt::Display,
{
    let dt = match tz.timestamp_opt(timestamp, 0) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => return Err(WeatherError::InvalidTimestamp(timestamp)),
    };
    Ok(dt.format("%m/%d/%Y, %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;

    fn fixture_payload() -> Value {
        json!({
            "main": {"temp": 16.53, "temp_min": 15.0, "temp_max": 17.78},
            "weather": [{"main": "Clear", "description": "clear sky"}],
            "sys": {"sunrise": 1600412446, "sunset": 1600452509},
        })
    }

    #[test]
    fn from_raw_extracts_all_fields() {
        let info = WeatherInfo::from_raw(&fixture_payload()).expect("well-formed payload");

        assert_eq!(info.temp, 16.53);
        assert_eq!(info.temp_min, 15.0);
        assert_eq!(info.temp_max, 17.78);
        assert_eq!(info.description, "Clear");
        assert_eq!(info.sunrise, format_date(1600412446).expect("sunrise"));
        assert_eq!(info.sunset, format_date(1600452509).expect("sunset"));
    }

    #[test]
    fn from_raw_equality_is_structural() {
        let a = WeatherInfo::from_raw(&fixture_payload()).expect("payload");
        let b = WeatherInfo::from_raw(&fixture_payload()).expect("payload");
        assert_eq!(a, b);
    }

    #[test]
    fn from_raw_fails_on_each_missing_path() {
        let cases = [
            ("/main/temp", json!({"main": {"temp_min": 15.0, "temp_max": 17.78}, "weather": [{"main": "Clear"}], "sys": {"sunrise": 1, "sunset": 2}})),
            ("/main/temp_min", json!({"main": {"temp": 16.53, "temp_max": 17.78}, "weather": [{"main": "Clear"}], "sys": {"sunrise": 1, "sunset": 2}})),
            ("/main/temp_max", json!({"main": {"temp": 16.53, "temp_min": 15.0}, "weather": [{"main": "Clear"}], "sys": {"sunrise": 1, "sunset": 2}})),
            ("/weather/0/main", json!({"main": {"temp": 16.53, "temp_min": 15.0, "temp_max": 17.78}, "weather": [], "sys": {"sunrise": 1, "sunset": 2}})),
            ("/sys/sunrise", json!({"main": {"temp": 16.53, "temp_min": 15.0, "temp_max": 17.78}, "weather": [{"main": "Clear"}], "sys": {"sunset": 2}})),
            ("/sys/sunset", json!({"main": {"temp": 16.53, "temp_min": 15.0, "temp_max": 17.78}, "weather": [{"main": "Clear"}], "sys": {"sunrise": 1}})),
        ];

        for (path, payload) in cases {
            let err = WeatherInfo::from_raw(&payload).expect_err(path);
            match err {
                WeatherError::MissingField(reported) => assert_eq!(reported, path),
                other => panic!("expected MissingField for {path}, got {other:?}"),
            }
        }
    }

    #[test]
    fn from_raw_fails_on_wrong_field_type() {
        let mut payload = fixture_payload();
        payload["main"]["temp"] = json!("warm");

        let err = WeatherInfo::from_raw(&payload).expect_err("non-numeric temp");
        assert!(matches!(
            err,
            WeatherError::FieldType { path: "/main/temp", .. }
        ));
    }

    #[test]
    fn from_raw_fails_on_fractional_timestamp() {
        let mut payload = fixture_payload();
        payload["sys"]["sunrise"] = json!(1600412446.5);

        let err = WeatherInfo::from_raw(&payload).expect_err("fractional timestamp");
        assert!(matches!(
            err,
            WeatherError::FieldType { path: "/sys/sunrise", .. }
        ));
    }

    #[test]
    fn format_date_is_deterministic_at_fixed_offset() {
        let utc_plus_two = FixedOffset::east_opt(2 * 3600).expect("offset");
        let formatted = format_date_in(&utc_plus_two, 1600412446).expect("in range");
        assert_eq!(formatted, "09/18/2020, 06:40:46");
    }

    #[test]
    fn format_date_zero_pads_all_components() {
        let utc = FixedOffset::east_opt(0).expect("offset");
        // 2021-02-03 04:05:06 UTC
        let formatted = format_date_in(&utc, 1612325106).expect("in range");
        assert_eq!(formatted, "02/03/2021, 04:05:06");
    }

    #[test]
    fn format_date_rejects_out_of_range_timestamp() {
        let err = format_date(i64::MAX).expect_err("unrepresentable");
        assert!(matches!(err, WeatherError::InvalidTimestamp(_)));
    }
}
