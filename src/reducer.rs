//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::DisplayState;
use crate::theme::Theme;

/// The reducer handles all state transitions
pub fn reducer(state: &mut DisplayState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== UI actions =====
        Action::UiToggleNight => {
            state.is_night = !state.is_night;
            tracing::debug!(
                is_night = state.is_night,
                icon = Theme::for_state(state).current_icon.id(),
                "theme toggled"
            );
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}
