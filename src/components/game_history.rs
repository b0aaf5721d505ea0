//! Game History Component
//!
//! Recent games panel for a profile.

use leptos::*;

use crate::api;
use crate::state::global::GameSummary;

/// Recent games for a profile owner
#[component]
pub fn GameHistory(
    #[prop(into)]
    username: Signal<String>,
) -> impl IntoView {
    let (games, set_games) = create_signal(Vec::<GameSummary>::new());
    let (loading, set_loading) = create_signal(true);

    // Refetch whenever the profile changes
    create_effect(move |_| {
        let name = username.get();
        if name.is_empty() {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_recent_games(&name).await {
                Ok(list) => {
                    set_games.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch games: {}", e).into());
                    set_games.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Games"</h2>

            <div class="space-y-2">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="space-y-3 animate-pulse">
                                {(0..3).map(|_| view! {
                                    <div class="bg-gray-700 rounded h-12" />
                                }).collect_view()}
                            </div>
                        }.into_view();
                    }

                    let mut recent = games.get();
                    recent.sort_by(|a, b| b.played_at.cmp(&a.played_at));
                    let recent: Vec<_> = recent.into_iter().take(10).collect();

                    if recent.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No games yet"</p>
                        }.into_view()
                    } else {
                        recent.into_iter().map(|game| {
                            let time = chrono::DateTime::from_timestamp_millis(game.played_at)
                                .map(|dt| dt.format("%b %d, %H:%M").to_string())
                                .unwrap_or_default();

                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div class="flex items-center space-x-3">
                                        <ResultBadge result=game.result.clone() />
                                        <div>
                                            <span>"vs "{game.opponent}</span>
                                            <span class="text-gray-400 text-sm ml-2 capitalize">{game.mode}</span>
                                        </div>
                                    </div>
                                    <span class="text-gray-400 text-sm">{time}</span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Colored win/loss/draw badge
#[component]
fn ResultBadge(result: String) -> impl IntoView {
    let (text, class) = match result.as_str() {
        "win" => ("W", "bg-green-600"),
        "loss" => ("L", "bg-red-600"),
        "draw" => ("D", "bg-gray-600"),
        _ => ("?", "bg-gray-700"),
    };

    view! {
        <span class=format!(
            "w-6 h-6 flex items-center justify-center rounded text-xs font-bold text-white {}",
            class
        )>
            {text}
        </span>
    }
}
