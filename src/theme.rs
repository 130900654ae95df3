//! Day and night palettes

use ratatui::style::Color;

use crate::state::{DisplayState, Icon};

pub const DAY_TOP: Color = Color::Rgb(0, 122, 255);
pub const DAY_BOTTOM: Color = Color::Rgb(173, 216, 230);
pub const NIGHT_TOP: Color = Color::Rgb(0, 0, 0);
pub const NIGHT_BOTTOM: Color = Color::Rgb(142, 142, 147);

pub const TEXT: Color = Color::Rgb(255, 255, 255);
pub const BUTTON_TEXT: Color = Color::Rgb(0, 122, 255);
pub const BUTTON_BACKGROUND: Color = Color::Rgb(255, 255, 255);
pub const BUTTON_TITLE: &str = "Change Day";

/// Everything on screen that depends on the night flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub top: Color,
    pub bottom: Color,
    pub current_icon: Icon,
}

impl Theme {
    pub const DAY: Theme = Theme {
        top: DAY_TOP,
        bottom: DAY_BOTTOM,
        current_icon: Icon::SunMax,
    };

    pub const NIGHT: Theme = Theme {
        top: NIGHT_TOP,
        bottom: NIGHT_BOTTOM,
        current_icon: Icon::MoonStars,
    };

    pub fn for_night(is_night: bool) -> Self {
        if is_night {
            Self::NIGHT
        } else {
            Self::DAY
        }
    }

    pub fn for_state(state: &DisplayState) -> Self {
        Self::for_night(state.is_night)
    }
}
