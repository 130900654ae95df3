use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Paragraph},
};
use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;

pub const BUTTON_WIDTH: u16 = 28;
pub const BUTTON_HEIGHT: u16 = 3;

/// Fixed-size pill with a caller-supplied title and colors
#[derive(Default)]
pub struct ToggleButton {
    /// Where the pill was last drawn, for mouse hit testing
    area: Option<Rect>,
}

pub struct ToggleButtonProps<'a> {
    pub title: &'a str,
    pub text_color: Color,
    pub background_color: Color,
    pub is_focused: bool,
    pub on_press: fn() -> Action,
}

impl ToggleButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// The pill's rect, centered in `area` and clipped to it.
    pub fn pill_area(area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(BUTTON_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [pill] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH)])
            .flex(Flex::Center)
            .areas(row);
        pill
    }

    fn hit(&self, column: u16, row: u16) -> bool {
        self.area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}

impl Component<Action> for ToggleButton {
    type Props<'a> = ToggleButtonProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => {
                    Some((props.on_press)())
                }
                _ => None,
            },
            EventKind::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) if self.hit(mouse.column, mouse.row) => {
                    Some((props.on_press)())
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let pill = Self::pill_area(area);
        self.area = Some(pill);

        let style = Style::default()
            .fg(props.text_color)
            .bg(props.background_color);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(style);

        let title = Paragraph::new(props.title)
            .style(style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(title, pill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use tui_dispatch::testing::*;

    fn props(is_focused: bool) -> ToggleButtonProps<'static> {
        ToggleButtonProps {
            title: "Change Day",
            text_color: Color::Blue,
            background_color: Color::White,
            is_focused,
            on_press: || Action::UiToggleNight,
        }
    }

    fn click(column: u16, row: u16) -> EventKind {
        EventKind::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_keys_press_the_button() {
        let mut button = ToggleButton::new();
        for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('n')] {
            let event = EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE));
            let actions: Vec<_> = button.handle_event(&event, props(true)).into_iter().collect();
            actions.assert_count(1);
            actions.assert_first(Action::UiToggleNight);
        }
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut button = ToggleButton::new();
        let actions: Vec<_> = button
            .handle_event(&EventKind::Key(key("n")), props(false))
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_click_inside_pill() {
        let mut button = ToggleButton::new();
        let mut render = RenderHarness::new(40, 7);
        render.render_to_string_plain(|frame| {
            button.render(frame, frame.area(), props(true));
        });

        let pill = button.area().unwrap();
        assert_eq!(pill, Rect::new(6, 2, BUTTON_WIDTH, BUTTON_HEIGHT));

        let actions: Vec<_> = button
            .handle_event(&click(pill.x + 1, pill.y + 1), props(true))
            .into_iter()
            .collect();
        actions.assert_first(Action::UiToggleNight);

        let actions: Vec<_> = button
            .handle_event(&click(0, 0), props(true))
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_click_before_render_is_ignored() {
        let mut button = ToggleButton::new();
        let actions: Vec<_> = button
            .handle_event(&click(10, 3), props(true))
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_title() {
        let mut button = ToggleButton::new();
        let mut render = RenderHarness::new(40, 5);
        let output = render.render_to_string_plain(|frame| {
            button.render(frame, frame.area(), props(true));
        });
        assert!(output.contains("Change Day"), "Should show title:\n{output}");
        assert!(output.contains('╭'), "Should have rounded corners:\n{output}");
    }
}
