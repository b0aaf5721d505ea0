//! Pie Chart Component
//!
//! Percentage pie charts using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// One wedge of a prepared pie chart
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
    pub color: &'static str,
}

/// Prepare pie slices from labelled counts.
///
/// Zero-value categories are omitted. A zero total yields no slices at all,
/// which the component renders as a placeholder instead of a chart.
pub fn pie_slices(categories: &[(&str, f64, &'static str)]) -> Vec<PieSlice> {
    let total: f64 = categories.iter().map(|(_, value, _)| value).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    categories
        .iter()
        .filter(|(_, value, _)| *value > 0.0)
        .map(|(label, value, color)| PieSlice {
            label: label.to_string(),
            value: *value,
            percentage: value * 100.0 / total,
            color,
        })
        .collect()
}

/// Pie chart with legend, or a placeholder when there is nothing to chart
#[component]
pub fn PieChart(
    #[prop(into)]
    slices: Signal<Vec<PieSlice>>,
    /// Message shown when all counts are zero
    #[prop(into)]
    empty_label: String,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the slices change
    create_effect(move |_| {
        let slices = slices.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &slices, &empty_label);
        }
    });

    view! {
        <div class="flex flex-col items-center">
            <canvas
                node_ref=canvas_ref
                width="160"
                height="160"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-3 mt-3">
                {move || {
                    slices.get()
                        .into_iter()
                        .map(|slice| {
                            view! {
                                <div class="flex items-center space-x-1">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", slice.color)
                                    />
                                    <span class="text-xs text-gray-300">
                                        {format!("{} {:.1}%", slice.label, slice.percentage)}
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// Draw the pie on canvas, or the placeholder message when empty
fn draw_pie(canvas: &HtmlCanvasElement, slices: &[PieSlice], empty_label: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 4.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    if slices.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("13px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text(empty_label, cx, cy + 4.0);
        ctx.set_text_align("start");
        return;
    }

    // Start at 12 o'clock, sweep clockwise
    let mut start_angle = -std::f64::consts::FRAC_PI_2;

    for slice in slices {
        let sweep = slice.percentage / 100.0 * std::f64::consts::PI * 2.0;
        let end_angle = start_angle + sweep;

        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start_angle, end_angle);
        ctx.close_path();
        ctx.fill();

        // Percentage label inside the wedge, skipped for thin wedges
        if slice.percentage >= 8.0 {
            let mid_angle = start_angle + sweep / 2.0;
            let label_x = cx + mid_angle.cos() * radius * 0.6;
            let label_y = cy + mid_angle.sin() * radius * 0.6;

            ctx.set_fill_style(&"#ffffff".into());
            ctx.set_font("11px sans-serif");
            let _ = ctx.fill_text(&format!("{:.0}%", slice.percentage), label_x - 10.0, label_y + 4.0);
        }

        start_angle = end_angle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_sum_to_100() {
        let slices = pie_slices(&[
            ("Wins", 7.0, "#4CAF50"),
            ("Draws", 1.0, "#9E9E9E"),
            ("Losses", 2.0, "#F44336"),
        ]);
        let total: f64 = slices.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_categories_omitted() {
        let slices = pie_slices(&[
            ("Wins", 5.0, "#4CAF50"),
            ("Draws", 0.0, "#9E9E9E"),
            ("Losses", 5.0, "#F44336"),
        ]);
        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| s.label != "Draws"));
        assert!(slices.iter().all(|s| (s.percentage - 50.0).abs() < 1e-9));
    }

    #[test]
    fn test_all_zero_yields_empty() {
        let slices = pie_slices(&[
            ("Correct", 0.0, "#4CAF50"),
            ("Wrong", 0.0, "#F44336"),
        ]);
        assert!(slices.is_empty());
    }

    #[test]
    fn test_single_category_is_full_circle() {
        let slices = pie_slices(&[("Wins", 3.0, "#4CAF50"), ("Losses", 0.0, "#F44336")]);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].percentage, 100.0);
        assert_eq!(slices[0].value, 3.0);
    }
}
