//! DigiQuiz Chart
//!
//! Correct/incorrect pie for the quiz-scoring feature.

use leptos::*;

use crate::components::pie_chart::{pie_slices, PieChart, PieSlice};
use crate::state::global::DigiQuizStats;

/// Prepare the correct/wrong slices
pub fn quiz_slices(stats: &DigiQuizStats) -> Vec<PieSlice> {
    pie_slices(&[
        ("Correct", stats.correct as f64, "#4CAF50"),
        ("Wrong", stats.wrong as f64, "#F44336"),
    ])
}

/// DigiQuiz correctness chart
#[component]
pub fn DigiQuizChart(
    #[prop(into)]
    stats: Signal<DigiQuizStats>,
) -> impl IntoView {
    let slices = create_memo(move |_| quiz_slices(&stats.get()));

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-semibold">"DigiQuiz"</h3>
                <span class="text-xs text-gray-400">
                    {move || {
                        let s = stats.get();
                        format!("{} guesses", s.correct + s.wrong)
                    }}
                </span>
            </div>

            <PieChart slices=slices empty_label="No guesses yet" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_guesses_yields_placeholder_path() {
        // correct=0, wrong=0 must not produce a division-by-zero artifact
        let slices = quiz_slices(&DigiQuizStats { correct: 0, wrong: 0 });
        assert!(slices.is_empty());
    }

    #[test]
    fn test_quiz_percentages() {
        let slices = quiz_slices(&DigiQuizStats { correct: 3, wrong: 1 });
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Correct");
        assert_eq!(slices[0].percentage, 75.0);
        assert_eq!(slices[1].percentage, 25.0);
    }
}
