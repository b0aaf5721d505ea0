//! Rating Card Component
//!
//! Displays a single mode rating.

use leptos::*;

use crate::state::global::GameMode;

/// Rating card for one game mode
#[component]
pub fn RatingCard(
    mode: GameMode,
    #[prop(into)]
    rating: Signal<i64>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{mode.label()}</span>
                <span class="text-lg">{mode_icon(mode)}</span>
            </div>

            <div class="text-3xl font-bold mt-2">
                {move || {
                    let r = rating.get();
                    if r > 0 {
                        r.to_string()
                    } else {
                        "—".to_string()
                    }
                }}
            </div>
        </div>
    }
}

/// Get icon for a game mode
fn mode_icon(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Bullet => "🚀",
        GameMode::Blitz => "⚡",
        GameMode::Rapid => "⏱️",
        GameMode::Classical => "♟️",
    }
}
