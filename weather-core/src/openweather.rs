//! OpenWeatherMap "current weather data" (API 2.5).
//!
//! Requests always ask for `units=metric`, so the temperature in the response
//! is already in Celsius.

use std::{fmt, io::Read};

use serde::{
    Deserialize, Deserializer,
    de::{self, IgnoredAny, SeqAccess, Visitor},
};

use crate::{error::ParseError, model::Conditions};

pub const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Request URL for the current conditions at `location`.
///
/// Both arguments are percent-encoded but otherwise not validated: an empty
/// location or token yields an empty `q=` or `appid=` parameter, which the
/// provider rejects.
pub fn format_url(location: &str, token: &str) -> String {
    format_url_with_base(BASE_URL, location, token)
}

/// Same as [`format_url`], against a different endpoint.
pub fn format_url_with_base(base: &str, location: &str, token: &str) -> String {
    format!(
        "{base}?q={}&units=metric&appid={}",
        urlencoding::encode(location),
        urlencoding::encode(token),
    )
}

/// Decode one current-weather JSON document from `reader`.
pub fn parse_json<R: Read>(reader: R) -> Result<Conditions, ParseError> {
    let parsed: OwCurrentResponse = serde_json::from_reader(reader)?;

    Ok(Conditions {
        summary: parsed.weather.main,
        temperature_celsius: parsed.main.temp,
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    #[serde(deserialize_with = "first_weather")]
    weather: OwWeather,
}

// The provider sends a list; only the primary entry matters, the rest are
// skipped without being decoded.
fn first_weather<'de, D>(deserializer: D) -> Result<OwWeather, D::Error>
where
    D: Deserializer<'de>,
{
    struct FirstWeather;

    impl<'de> Visitor<'de> for FirstWeather {
        type Value = OwWeather;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("at least one weather entry")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let first = seq
                .next_element::<OwWeather>()?
                .ok_or_else(|| de::Error::invalid_length(0, &self))?;
            while seq.next_element::<IgnoredAny>()?.is_some() {}

            Ok(first)
        }
    }

    deserializer.deserialize_seq(FirstWeather)
}
