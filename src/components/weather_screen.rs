use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::current_conditions::{self, CurrentConditions, CurrentConditionsProps};
use super::toggle_button::BUTTON_HEIGHT;
use super::weather_day_card::{CARD_HEIGHT, CARD_WIDTH};
use super::{
    CityLabel, CityLabelProps, Component, GradientBackground, GradientBackgroundProps,
    ToggleButton, ToggleButtonProps, WeatherDayCard, WeatherDayCardProps,
};
use crate::action::Action;
use crate::provider::WeatherProvider;
use crate::state::{DisplayState, FORECAST_DAYS, WeatherReport};
use crate::theme::{self, Theme};

/// Rows for the city name: padding plus the tallest FIGlet font.
pub const CITY_HEIGHT: u16 = 7;
/// Gap between forecast cards (16 points).
pub const CARD_SPACING: u16 = 2;

/// Props for WeatherScreen - read-only view of state
pub struct WeatherScreenProps<'a> {
    pub state: &'a DisplayState,
    pub is_focused: bool,
}

/// The root component: background, city, current conditions, forecast row and button
pub struct WeatherScreen {
    report: WeatherReport,
    button: ToggleButton,
}

impl WeatherScreen {
    /// Mount the screen, taking the report from `provider` once.
    pub fn new(provider: &impl WeatherProvider) -> Self {
        Self {
            report: provider.report(),
            button: ToggleButton::new(),
        }
    }

    pub fn report(&self) -> &WeatherReport {
        &self.report
    }

    fn button_props(is_focused: bool) -> ToggleButtonProps<'static> {
        ToggleButtonProps {
            title: theme::BUTTON_TITLE,
            text_color: theme::BUTTON_TEXT,
            background_color: theme::BUTTON_BACKGROUND,
            is_focused,
            on_press: || Action::UiToggleNight,
        }
    }

    fn render_forecast(&self, frame: &mut Frame, area: Rect) {
        let slots = Layout::horizontal([Constraint::Length(CARD_WIDTH); FORECAST_DAYS])
            .flex(Flex::Center)
            .spacing(CARD_SPACING)
            .split(area);

        for (entry, slot) in self.report.forecast.iter().zip(slots.iter()) {
            WeatherDayCard.render(frame, *slot, WeatherDayCardProps { entry });
        }
    }
}

impl Component<Action> for WeatherScreen {
    type Props<'a> = WeatherScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        if let EventKind::Key(key) = event {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Some(Action::Quit);
            }
        }

        self.button
            .handle_event(event, Self::button_props(true))
            .into_iter()
            .next()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherScreenProps<'_>) {
        let theme = Theme::for_state(props.state);

        // The gradient runs under the hint bar too
        GradientBackground.render(
            frame,
            area,
            GradientBackgroundProps {
                top: theme.top,
                bottom: theme.bottom,
            },
        );

        let [body, hints] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        let [city, current, forecast, _, button, _] = Layout::vertical([
            Constraint::Length(CITY_HEIGHT),
            Constraint::Length(current_conditions::preferred_height()),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(body);

        CityLabel.render(
            frame,
            city,
            CityLabelProps {
                city_name: &props.state.city_name,
            },
        );

        CurrentConditions.render(
            frame,
            current,
            CurrentConditionsProps {
                icon: theme.current_icon,
                temperature: self.report.current_temperature,
            },
        );

        self.render_forecast(frame, forecast);

        self.button
            .render(frame, button, Self::button_props(props.is_focused));

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            hints,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("n", "day/night"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
