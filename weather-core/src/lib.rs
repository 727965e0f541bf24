//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Request URL formatting and response parsing for OpenWeatherMap current weather
//! - A thin HTTP client gluing the two together
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod openweather;

pub use client::Client;
pub use config::Config;
pub use error::{ClientError, ParseError};
pub use model::Conditions;
pub use openweather::{format_url, parse_json};
