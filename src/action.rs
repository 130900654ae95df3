//! Actions - everything the user can ask the screen to do

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== UI category =====
    /// Flip between the day and night theme
    UiToggleNight,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
