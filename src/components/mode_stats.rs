//! Mode Statistics Charts
//!
//! Win/draw/loss pie chart cards, one per game mode.

use leptos::*;

use crate::components::pie_chart::{pie_slices, PieChart, PieSlice};
use crate::state::global::{GameMode, ModeStats, ModeStatsSet};

const WIN_COLOR: &str = "#4CAF50";
const DRAW_COLOR: &str = "#9E9E9E";
const LOSS_COLOR: &str = "#F44336";

/// Prepare the win/draw/loss slices for one mode
pub fn mode_slices(stats: &ModeStats) -> Vec<PieSlice> {
    pie_slices(&[
        ("Wins", stats.wins as f64, WIN_COLOR),
        ("Draws", stats.draws as f64, DRAW_COLOR),
        ("Losses", stats.losses() as f64, LOSS_COLOR),
    ])
}

/// Grid of per-mode win/draw/loss charts
#[component]
pub fn ModeStatsCharts(
    #[prop(into)]
    stats: Signal<ModeStatsSet>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
            {GameMode::ALL.into_iter().map(|mode| {
                let mode_stats = create_memo(move |_| stats.get().get(mode).clone());
                view! { <ModeStatsCard mode=mode stats=mode_stats /> }
            }).collect_view()}
        </div>
    }
}

/// One mode's card: header, pie and percentage captions
#[component]
fn ModeStatsCard(
    mode: GameMode,
    #[prop(into)]
    stats: Signal<ModeStats>,
) -> impl IntoView {
    let slices = create_memo(move |_| mode_slices(&stats.get()));

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-semibold">{mode.label()}</h3>
                <span class="text-xs text-gray-400">
                    {move || format!("{} games", stats.get().games_played)}
                </span>
            </div>

            <PieChart slices=slices empty_label="No games yet" />

            {move || {
                let s = stats.get();
                if s.games_played > 0 {
                    view! {
                        <div class="mt-3 text-xs text-gray-400 space-y-1">
                            <div class="flex justify-between">
                                <span>"Win rate"</span>
                                <span class="text-gray-200">{format!("{:.1}%", s.win_percentage)}</span>
                            </div>
                            <div class="flex justify-between">
                                <span>"As white"</span>
                                <span class="text-gray-200">{format!("{:.1}%", s.white_win_percentage)}</span>
                            </div>
                            <div class="flex justify-between">
                                <span>"As black"</span>
                                <span class="text-gray-200">{format!("{:.1}%", s.black_win_percentage)}</span>
                            </div>
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_slices_derives_losses() {
        let stats = ModeStats {
            games_played: 10,
            wins: 7,
            draws: 1,
            ..Default::default()
        };
        let slices = mode_slices(&stats);
        assert_eq!(slices.len(), 3);

        let losses = slices.iter().find(|s| s.label == "Losses").unwrap();
        assert_eq!(losses.value, 2.0);
        assert_eq!(losses.percentage, 20.0);
    }

    #[test]
    fn test_mode_slices_empty_without_games() {
        assert!(mode_slices(&ModeStats::default()).is_empty());
    }
}
