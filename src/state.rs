//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// City shown when nothing else is configured.
pub const DEFAULT_CITY: &str = "Aydin, TR";

/// Number of forecast slots on the screen.
pub const FORECAST_DAYS: usize = 5;

/// Symbolic weather glyph, identified by a stable token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    SunMax,
    MoonStars,
    CloudSun,
    CloudDrizzle,
    Snow,
    Tornado,
}

impl Icon {
    pub fn id(self) -> &'static str {
        match self {
            Icon::SunMax => "sun.max.fill",
            Icon::MoonStars => "moon.stars.fill",
            Icon::CloudSun => "cloud.sun.fill",
            Icon::CloudDrizzle => "cloud.drizzle.fill",
            Icon::Snow => "snow",
            Icon::Tornado => "tornado",
        }
    }
}

/// One day of the forecast row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForecastEntry {
    /// Short day label, e.g. "TUE" (not validated)
    pub day_of_week: String,
    pub icon: Icon,
    pub temperature: i32,
}

impl ForecastEntry {
    pub fn new(day_of_week: impl Into<String>, icon: Icon, temperature: i32) -> Self {
        Self {
            day_of_week: day_of_week.into(),
            icon,
            temperature,
        }
    }
}

/// Everything a weather provider hands to the screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherReport {
    pub current_temperature: i32,
    pub forecast: [ForecastEntry; FORECAST_DAYS],
}

/// Format a temperature the way every label on the screen shows it.
pub fn format_temperature(value: i32) -> String {
    format!("{value}°")
}

/// Display state - everything the reducer is allowed to change
#[derive(Clone, Debug, PartialEq, Eq, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DisplayState {
    /// Day or night theme
    #[debug(section = "Display", label = "Night")]
    pub is_night: bool,

    /// City shown in the header (read-only for every component)
    #[debug(section = "Display", label = "City")]
    pub city_name: String,
}

impl DisplayState {
    pub fn new(city_name: impl Into<String>) -> Self {
        Self {
            is_night: false,
            city_name: city_name.into(),
        }
    }

    /// Start in the night theme instead of the day theme
    pub fn with_night(mut self, is_night: bool) -> Self {
        self.is_night = is_night;
        self
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}
