//! Chart Component
//!
//! Draws a `ChartConfig` (line, radar or bar) on an HTML5 canvas.

use std::f64::consts::PI;

use indeks_desa::charts::{ChartConfig, ChartKind, ACCENT};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 400;

/// Plot area inside the canvas for axis charts
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn for_config(config: &ChartConfig, width: f64, height: f64) -> Self {
        let top = if config.title.is_empty() { 20.0 } else { 56.0 };
        let bottom = if config.label_rotation > 0 { 110.0 } else { 40.0 };
        let left = 50.0;
        Self {
            left,
            top,
            width: width - left - 20.0,
            height: height - top - bottom,
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal centre of category band `index` out of `count`
    fn band_center(&self, index: usize, count: usize) -> f64 {
        let band = self.width / count.max(1) as f64;
        self.left + band * (index as f64 + 0.5)
    }

    fn y_for(&self, fraction: f64) -> f64 {
        self.bottom() - fraction * self.height
    }

    /// Category band under canvas coordinate `x`
    fn band_at(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 || x < self.left || x > self.left + self.width {
            return None;
        }
        let band = self.width / count as f64;
        Some((((x - self.left) / band) as usize).min(count - 1))
    }
}

/// Chart component
#[component]
pub fn Chart(
    /// What to draw
    #[prop(into)]
    config: Signal<ChartConfig>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hovered, set_hovered) = create_signal(None::<usize>);

    // Redraw when the config (data or theme) changes
    create_effect(move |_| {
        let config = config.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &config);
        }
    });

    let on_move = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else { return };
        let client_width = canvas.client_width().max(1) as f64;
        let x = ev.offset_x() as f64 * canvas.width() as f64 / client_width;
        let index = config.with(|config| {
            if config.kind == ChartKind::Radar {
                return None;
            }
            PlotArea::for_config(config, canvas.width() as f64, canvas.height() as f64)
                .band_at(x, config.values.len())
        });
        set_hovered.set(index);
    };

    let tooltip = move || {
        let index = hovered.get()?;
        config.with(|config| config.tooltips.get(index).cloned())
    };

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH.to_string()
                height=CANVAS_HEIGHT.to_string()
                class="w-full h-64 md:h-80 rounded-lg"
                on:mousemove=on_move
                on:mouseleave=move |_| set_hovered.set(None)
            />

            {move || tooltip().map(|text| view! {
                <div class="absolute top-2 right-2 px-3 py-2 rounded-lg shadow text-sm whitespace-pre-line
                            bg-white text-gray-800 border border-gray-200
                            dark:bg-gray-700 dark:text-gray-100 dark:border-gray-600">
                    {text}
                </div>
            })}

            // Radar charts list their values since there is no hover band
            {move || config.with(|config| {
                (config.kind == ChartKind::Radar).then(|| view! { <RadarLegend config=config.clone() /> })
            })}
        </div>
    }
}

#[component]
fn RadarLegend(config: ChartConfig) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 gap-2 mt-4 text-sm">
            {config.categories.iter().zip(config.values.iter()).map(|(label, value)| view! {
                <div class="flex justify-between px-3 py-1 rounded bg-gray-50 dark:bg-gray-700">
                    <span class="text-gray-600 dark:text-gray-300">{label.clone()}</span>
                    <span class="font-semibold">{format!("{:.1}", value)}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, config: &ChartConfig) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let palette = config.palette;

    ctx.set_fill_style(&palette.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if !config.title.is_empty() {
        ctx.set_fill_style(&palette.title.into());
        ctx.set_font(&format!("bold {}px sans-serif", config.title_font_size));
        ctx.set_text_align("center");
        let _ = ctx.fill_text(&config.title, width / 2.0, 30.0);
    }

    if config.values.is_empty() {
        ctx.set_fill_style(&palette.axis_label.into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("Tidak ada data", width / 2.0, height / 2.0);
        return;
    }

    match config.kind {
        ChartKind::Line => {
            let area = PlotArea::for_config(config, width, height);
            draw_value_grid(&ctx, config, &area);
            draw_line(&ctx, config, &area);
            draw_category_labels(&ctx, config, &area);
        }
        ChartKind::Bar => {
            let area = PlotArea::for_config(config, width, height);
            draw_value_grid(&ctx, config, &area);
            draw_bars(&ctx, config, &area);
            draw_category_labels(&ctx, config, &area);
        }
        ChartKind::Radar => draw_radar(&ctx, config, width, height),
    }
}

fn draw_value_grid(ctx: &CanvasRenderingContext2d, config: &ChartConfig, area: &PlotArea) {
    let axis = config.value_axis;
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");

    for i in 0..=5 {
        let fraction = i as f64 / 5.0;
        let y = area.y_for(fraction);
        ctx.set_stroke_style(&palette_line(config, i == 0).into());
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();

        let value = axis.min + fraction * (axis.max - axis.min);
        ctx.set_fill_style(&config.palette.axis_label.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), area.left - 8.0, y + 4.0);
    }
}

fn palette_line(config: &ChartConfig, is_axis: bool) -> &'static str {
    if is_axis {
        config.palette.axis_line
    } else {
        config.palette.split_line
    }
}

fn draw_category_labels(ctx: &CanvasRenderingContext2d, config: &ChartConfig, area: &PlotArea) {
    let count = config.categories.len();
    ctx.set_fill_style(&config.palette.axis_label.into());
    ctx.set_font("12px sans-serif");

    for (i, label) in config.categories.iter().enumerate() {
        let x = area.band_center(i, count);
        let y = area.bottom() + 18.0;
        if config.label_rotation > 0 {
            ctx.save();
            let _ = ctx.translate(x, y);
            let _ = ctx.rotate(-(config.label_rotation as f64).to_radians());
            ctx.set_text_align("right");
            let _ = ctx.fill_text(label, 0.0, 0.0);
            ctx.restore();
        } else {
            ctx.set_text_align("center");
            let _ = ctx.fill_text(label, x, y);
        }
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, config: &ChartConfig, area: &PlotArea) {
    let count = config.values.len();
    let points: Vec<(f64, f64)> = config
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| (area.band_center(i, count), area.y_for(config.value_axis.fraction(*v))))
        .collect();

    // Gradient area under the line
    let gradient = ctx.create_linear_gradient(0.0, area.top, 0.0, area.bottom());
    let _ = gradient.add_color_stop(0.0, "rgba(59, 130, 246, 0.3)");
    let _ = gradient.add_color_stop(1.0, "rgba(59, 130, 246, 0.05)");
    ctx.begin_path();
    trace_path(ctx, &points, config.smooth);
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        ctx.line_to(last.0, area.bottom());
        ctx.line_to(first.0, area.bottom());
    }
    ctx.close_path();
    ctx.set_fill_style(&gradient);
    ctx.fill();

    ctx.set_stroke_style(&ACCENT.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    trace_path(ctx, &points, config.smooth);
    ctx.stroke();

    ctx.set_fill_style(&ACCENT.into());
    for (x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 4.0, 0.0, PI * 2.0);
        ctx.fill();
    }
}

/// Moves through `points`, curving through segment midpoints when smooth
fn trace_path(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)], smooth: bool) {
    let Some((first, rest)) = points.split_first() else { return };
    ctx.move_to(first.0, first.1);

    if !smooth || rest.len() < 2 {
        for (x, y) in rest {
            ctx.line_to(*x, *y);
        }
        return;
    }

    for pair in points.windows(2).skip(1) {
        let (control, next) = (pair[0], pair[1]);
        let mid = ((control.0 + next.0) / 2.0, (control.1 + next.1) / 2.0);
        ctx.quadratic_curve_to(control.0, control.1, mid.0, mid.1);
    }
    if let Some(last) = points.last() {
        ctx.line_to(last.0, last.1);
    }
}

fn draw_bars(ctx: &CanvasRenderingContext2d, config: &ChartConfig, area: &PlotArea) {
    let count = config.values.len();
    let bar_width = area.width / count as f64 * 0.6;

    for (i, value) in config.values.iter().enumerate() {
        let x = area.band_center(i, count) - bar_width / 2.0;
        let y = area.y_for(config.value_axis.fraction(*value));

        match config.point_colors.get(i) {
            Some(colors) => {
                let gradient = ctx.create_linear_gradient(0.0, y, 0.0, area.bottom());
                let _ = gradient.add_color_stop(0.0, colors.top);
                let _ = gradient.add_color_stop(1.0, colors.bottom);
                ctx.set_fill_style(&gradient);
            }
            None => ctx.set_fill_style(&config.point_color(i).into()),
        }
        ctx.fill_rect(x, y, bar_width, area.bottom() - y);
    }
}

fn draw_radar(ctx: &CanvasRenderingContext2d, config: &ChartConfig, width: f64, height: f64) {
    let palette = config.palette;
    let count = config.categories.len();
    let center = (width / 2.0, height / 2.0 + 20.0);
    let radius = width.min(height) * 0.32;
    let angle = |i: usize| -PI / 2.0 + 2.0 * PI * i as f64 / count.max(1) as f64;
    let vertex = |i: usize, r: f64| (center.0 + r * angle(i).cos(), center.1 + r * angle(i).sin());

    // Rings, outermost first so inner fills sit on top
    for ring in (1..=5).rev() {
        let r = radius * ring as f64 / 5.0;
        ctx.begin_path();
        for i in 0..count {
            let (x, y) = vertex(i, r);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.close_path();
        ctx.set_fill_style(&palette.split_area[ring % 2].into());
        ctx.fill();
        ctx.set_stroke_style(&palette.split_line.into());
        ctx.set_line_width(1.0);
        ctx.stroke();
    }

    ctx.set_stroke_style(&palette.axis_line.into());
    ctx.set_fill_style(&palette.axis_label.into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (i, label) in config.categories.iter().enumerate() {
        let (x, y) = vertex(i, radius);
        ctx.begin_path();
        ctx.move_to(center.0, center.1);
        ctx.line_to(x, y);
        ctx.stroke();

        let (lx, ly) = vertex(i, radius + 22.0);
        let _ = ctx.fill_text(label, lx, ly + 4.0);
    }

    let points: Vec<(f64, f64)> = config
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| vertex(i, radius * config.value_axis.fraction(*v)))
        .collect();

    ctx.begin_path();
    for (i, (x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.close_path();
    ctx.set_fill_style(&"rgba(59, 130, 246, 0.2)".into());
    ctx.fill();
    ctx.set_stroke_style(&ACCENT.into());
    ctx.set_line_width(2.0);
    ctx.stroke();

    ctx.set_fill_style(&ACCENT.into());
    for (x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 4.0, 0.0, PI * 2.0);
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indeks_desa::charts::{comparison_chart, trend_chart, ChartTheme};
    use indeks_desa::dataset::Dataset;

    #[test]
    fn test_plot_area_leaves_room_for_rotated_labels() {
        let dataset = Dataset::builtin();
        let line = trend_chart(dataset.trend(), ChartTheme::Light);
        let bars = comparison_chart(dataset.list(), ChartTheme::Light, "");

        let line_area = PlotArea::for_config(&line, 800.0, 400.0);
        let bar_area = PlotArea::for_config(&bars, 800.0, 400.0);
        assert!(bar_area.bottom() < line_area.bottom());
        assert_eq!(bar_area.top, 20.0);
        assert_eq!(line_area.top, 56.0);
    }

    #[test]
    fn test_band_at() {
        let area = PlotArea { left: 50.0, top: 20.0, width: 500.0, height: 300.0 };
        assert_eq!(area.band_at(10.0, 5), None);
        assert_eq!(area.band_at(50.0, 5), Some(0));
        assert_eq!(area.band_at(349.0, 5), Some(2));
        assert_eq!(area.band_at(550.0, 5), Some(4));
        assert_eq!(area.band_at(300.0, 0), None);
        assert_eq!(area.band_center(0, 5), 100.0);
    }
}
