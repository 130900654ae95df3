use artbox::integrations::ratatui::ArtBox;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::{Component, figlet_renderer};
use crate::action::Action;
use crate::sprites::{self, SpriteSize};
use crate::state::{Icon, format_temperature};
use crate::theme;

/// Current icon and temperature
pub struct CurrentConditions;

pub struct CurrentConditionsProps {
    pub icon: Icon,
    pub temperature: i32,
}

/// Gap between the icon and the temperature.
pub const ICON_GAP: u16 = 1;
/// Empty rows below the temperature.
pub const BOTTOM_PADDING: u16 = 2;
/// Tallest FIGlet font in the stack (terminus).
pub const TEMPERATURE_MAX_ROWS: u16 = 6;
/// Columns after the FIGlet digits for the degree mark.
pub const DEGREE_WIDTH: u16 = 1;

/// Rows this component asks for when there is room.
pub fn preferred_height() -> u16 {
    SpriteSize::Hero.rows() + ICON_GAP + TEMPERATURE_MAX_ROWS + BOTTOM_PADDING
}

fn degree_style() -> Style {
    Style::default()
        .fg(theme::TEXT)
        .add_modifier(Modifier::BOLD)
}

/// FIGlet digits with a degree mark on their top row.
///
/// The FIGlet fonts have no `°` glyph, so the mark is drawn as a plain cell.
fn render_temperature(frame: &mut Frame, area: Rect, temperature: i32) {
    let renderer = figlet_renderer();
    let digits = temperature.to_string();

    let mut scratch = String::new();
    let Ok(metrics) = renderer.render_into(
        &digits,
        area.width.saturating_sub(DEGREE_WIDTH),
        area.height,
        &mut scratch,
    ) else {
        frame.render_widget(
            Paragraph::new(Line::styled(format_temperature(temperature), degree_style()))
                .centered(),
            area,
        );
        return;
    };

    let [block] = Layout::vertical([Constraint::Length(metrics.height)])
        .flex(Flex::Center)
        .areas(area);
    let [digits_area, degree_area] = Layout::horizontal([
        Constraint::Length(metrics.width),
        Constraint::Length(DEGREE_WIDTH),
    ])
    .flex(Flex::Center)
    .areas(block);

    frame.render_widget(ArtBox::new(&renderer, &digits), digits_area);
    frame.render_widget(Paragraph::new(Line::styled("°", degree_style())), degree_area);
}

impl Component<Action> for CurrentConditions {
    type Props<'a> = CurrentConditionsProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        // Leave at least one row for the temperature
        let icon_budget = area.height.saturating_sub(ICON_GAP + BOTTOM_PADDING + 1);
        let icon_rows = SpriteSize::for_height(icon_budget).map_or(1, SpriteSize::rows);

        let chunks = Layout::vertical([
            Constraint::Length(icon_rows),
            Constraint::Length(ICON_GAP),
            Constraint::Max(TEMPERATURE_MAX_ROWS),
            Constraint::Length(BOTTOM_PADDING),
        ])
        .split(area);

        match sprites::icon_sprite(props.icon, chunks[0].height) {
            Some(art) => frame.render_widget(
                Paragraph::new(art).alignment(Alignment::Center),
                chunks[0],
            ),
            None => frame.render_widget(
                Paragraph::new(Line::from(sprites::icon_emoji(props.icon)).centered()),
                chunks[0],
            ),
        }

        render_temperature(frame, chunks[2], props.temperature);
    }
}
