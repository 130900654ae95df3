//! Weather data source

use crate::state::{ForecastEntry, Icon, WeatherReport};

/// Supplies the numbers the screen renders.
///
/// The screen asks once, when it is built, and keeps the report for its lifetime.
pub trait WeatherProvider {
    fn report(&self) -> WeatherReport;
}

/// Fixed sample data shown by the board
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleWeather;

impl SampleWeather {
    pub const CURRENT_TEMPERATURE: i32 = 50;
}

impl WeatherProvider for SampleWeather {
    fn report(&self) -> WeatherReport {
        WeatherReport {
            current_temperature: Self::CURRENT_TEMPERATURE,
            forecast: [
                ForecastEntry::new("TUE", Icon::CloudSun, 12),
                ForecastEntry::new("WED", Icon::SunMax, 23),
                ForecastEntry::new("THU", Icon::CloudDrizzle, 34),
                ForecastEntry::new("FRI", Icon::Snow, 45),
                ForecastEntry::new("SAT", Icon::Tornado, 56),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_forecast_order() {
        let report = SampleWeather.report();
        let days: Vec<_> = report
            .forecast
            .iter()
            .map(|entry| (entry.day_of_week.as_str(), entry.temperature))
            .collect();
        assert_eq!(
            days,
            vec![("TUE", 12), ("WED", 23), ("THU", 34), ("FRI", 45), ("SAT", 56)]
        );
    }

    #[test]
    fn test_sample_icons() {
        let icons: Vec<_> = SampleWeather
            .report()
            .forecast
            .iter()
            .map(|entry| entry.icon.id())
            .collect();
        assert_eq!(
            icons,
            vec![
                "cloud.sun.fill",
                "sun.max.fill",
                "cloud.drizzle.fill",
                "snow",
                "tornado"
            ]
        );
    }

    #[test]
    fn test_sample_is_stable() {
        assert_eq!(SampleWeather.report(), SampleWeather.report());
        assert_eq!(SampleWeather.report().current_temperature, 50);
    }
}
