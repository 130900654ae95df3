use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
};

use super::Component;
use crate::action::Action;

/// Full-bleed top-to-bottom gradient
pub struct GradientBackground;

pub struct GradientBackgroundProps {
    pub top: Color,
    pub bottom: Color,
}

/// Linear blend between two colors, `t` in 0.0..=1.0.
///
/// Only RGB colors can be blended; anything else switches at the midpoint.
pub fn blend(top: Color, bottom: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (top, bottom) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => top,
        _ => bottom,
    }
}

/// Background color of the given row in a gradient `height` rows tall.
pub fn row_color(top: Color, bottom: Color, row: u16, height: u16) -> Color {
    if height <= 1 {
        return top;
    }
    blend(top, bottom, row as f32 / (height - 1) as f32)
}

impl Component<Action> for GradientBackground {
    type Props<'a> = GradientBackgroundProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        for row in 0..area.height {
            let color = row_color(props.top, props.bottom, row, area.height);
            let line = Rect::new(area.x, area.y + row, area.width, 1);
            frame.render_widget(Block::default().style(Style::default().bg(color)), line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_blend_endpoints() {
        let top = Color::Rgb(0, 122, 255);
        let bottom = Color::Rgb(173, 216, 230);
        assert_eq!(blend(top, bottom, 0.0), top);
        assert_eq!(blend(top, bottom, 1.0), bottom);
        assert_eq!(blend(top, bottom, 7.0), bottom);
    }

    #[test]
    fn test_blend_midpoint() {
        let mid = blend(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_blend_named_colors_switch() {
        assert_eq!(blend(Color::Blue, Color::Gray, 0.2), Color::Blue);
        assert_eq!(blend(Color::Blue, Color::Gray, 0.8), Color::Gray);
    }

    #[test]
    fn test_row_color_single_row() {
        assert_eq!(row_color(Color::Black, Color::White, 0, 1), Color::Black);
    }

    #[test]
    fn test_render_fills_every_cell() {
        let top = Color::Rgb(0, 0, 0);
        let bottom = Color::Rgb(142, 142, 147);
        let mut terminal = Terminal::new(TestBackend::new(12, 6)).unwrap();
        terminal
            .draw(|frame| {
                GradientBackground.render(
                    frame,
                    frame.area(),
                    GradientBackgroundProps { top, bottom },
                );
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        for x in 0..12 {
            assert_eq!(buffer[(x, 0)].bg, top);
            assert_eq!(buffer[(x, 5)].bg, bottom);
        }
        assert_eq!(buffer[(3, 2)].bg, row_color(top, bottom, 2, 6));
    }
}
