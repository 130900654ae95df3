use artbox::integrations::ratatui::ArtBox;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::{Component, figlet_renderer};
use crate::action::Action;

/// Large city name at the top of the screen
pub struct CityLabel;

pub struct CityLabelProps<'a> {
    pub city_name: &'a str,
}

/// Rows of padding above the FIGlet name.
pub const CITY_PADDING: u16 = 1;

impl Component<Action> for CityLabel {
    type Props<'a> = CityLabelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(CITY_PADDING),
            Constraint::Fill(1), // FIGlet city name, artbox picks the best font
        ])
        .split(area);

        let renderer = figlet_renderer();
        frame.render_widget(ArtBox::new(&renderer, props.city_name), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, style::Color};
    use tui_dispatch::testing::*;

    fn render_label(city_name: &str, width: u16, height: u16) -> String {
        let mut render = RenderHarness::new(width, height);
        render.render_to_string_plain(|frame| {
            CityLabel.render(frame, frame.area(), CityLabelProps { city_name });
        })
    }

    fn render_reference(text: &str, width: u16, height: u16) -> String {
        let renderer = figlet_renderer();
        let mut render = RenderHarness::new(width, height);
        render.render_to_string_plain(|frame| {
            frame.render_widget(ArtBox::new(&renderer, text), frame.area());
        })
    }

    #[test]
    fn test_render_matches_figlet_below_padding() {
        let output = render_label("Aydin, TR", 80, 7);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].trim().is_empty(), "Padding row should be blank:\n{output}");

        let reference = render_reference("Aydin, TR", 80, 7 - CITY_PADDING);
        assert!(
            reference.chars().any(|c| !c.is_whitespace()),
            "Reference should draw something"
        );
        assert_eq!(lines[1..].to_vec(), reference.lines().collect::<Vec<_>>());
    }

    #[test]
    fn test_render_follows_city_name() {
        let aydin = render_label("Aydin, TR", 80, 7);
        let izmir = render_label("Izmir, TR", 80, 7);
        assert_ne!(aydin, izmir);

        let reference = render_reference("Izmir, TR", 80, 6);
        let below_padding: Vec<&str> = izmir.lines().skip(1).collect();
        assert_eq!(below_padding, reference.lines().collect::<Vec<_>>());
    }

    #[test]
    fn test_glyphs_are_solid_white() {
        let mut terminal = Terminal::new(TestBackend::new(80, 7)).unwrap();
        terminal
            .draw(|frame| {
                let props = CityLabelProps {
                    city_name: "Aydin, TR",
                };
                CityLabel.render(frame, frame.area(), props);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();

        let glyphs: Vec<Color> = buffer
            .content()
            .iter()
            .filter(|cell| !cell.symbol().trim().is_empty())
            .map(|cell| cell.fg)
            .collect();

        assert!(!glyphs.is_empty());
        assert!(glyphs.iter().all(|fg| *fg == Color::Rgb(255, 255, 255)));
    }
}
