pub mod city_label;
pub mod current_conditions;
pub mod gradient_background;
pub mod toggle_button;
pub mod weather_day_card;
pub mod weather_screen;

use artbox::{Alignment as ArtAlignment, Color as ArtColor, Fill, Renderer, fonts};

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use city_label::{CityLabel, CityLabelProps};
pub use current_conditions::{CurrentConditions, CurrentConditionsProps};
pub use gradient_background::{GradientBackground, GradientBackgroundProps};
pub use toggle_button::{ToggleButton, ToggleButtonProps};
pub use weather_day_card::{WeatherDayCard, WeatherDayCardProps};
pub use weather_screen::{WeatherScreen, WeatherScreenProps};

/// Large white text for the city name and the current temperature.
///
/// Terminus first, miniwi when the area is too short, plain text as a last resort.
pub fn figlet_renderer() -> Renderer {
    Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(Fill::solid(ArtColor::rgb(255, 255, 255)))
}
