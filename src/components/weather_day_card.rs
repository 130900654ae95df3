use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::sprites::{self, SpriteSize};
use crate::state::{ForecastEntry, format_temperature};
use crate::theme;

/// One day of the forecast row: label, icon, temperature
pub struct WeatherDayCard;

pub struct WeatherDayCardProps<'a> {
    pub entry: &'a ForecastEntry,
}

/// Card width in cells; the icon box is the same width.
pub const CARD_WIDTH: u16 = 10;
/// Label + icon box + temperature.
pub const CARD_HEIGHT: u16 = 1 + SpriteSize::Card.rows() + 1;

impl Component<Action> for WeatherDayCard {
    type Props<'a> = WeatherDayCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1),                       // Day label
            Constraint::Length(SpriteSize::Card.rows()), // Icon box
            Constraint::Length(1),                       // Temperature
        ])
        .split(area);

        let text_style = Style::default()
            .fg(theme::TEXT)
            .add_modifier(Modifier::BOLD);

        frame.render_widget(
            Paragraph::new(Line::styled(props.entry.day_of_week.as_str(), text_style))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let icon = sprites::get_sprite(props.entry.icon, SpriteSize::Card);
        frame.render_widget(
            Paragraph::new(icon).alignment(Alignment::Center),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(Line::styled(
                format_temperature(props.entry.temperature),
                text_style,
            ))
            .alignment(Alignment::Center),
            chunks[2],
        );
    }
}
