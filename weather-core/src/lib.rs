//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client behind the `WeatherProvider` trait
//! - The merged weather/astronomy snapshot
//! - Condition classification, glyphs, ASCII art and derived indices
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod credentials;
pub mod error;
pub mod icons;
pub mod indices;
pub mod model;
pub mod provider;

pub use condition::ConditionCategory;
pub use config::Config;
pub use error::WeatherError;
pub use icons::{Art, MoonPhase};
pub use indices::{AirQuality, UvRisk};
pub use model::{Astro, Current, Location, Units, WeatherRequest, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
