// src/gui/components/charts.rs
//
// 2×2 grid of two-bar charts, painted directly. Each bar is annotated with its
// formatted value; Change and Dividend Yield get a zero baseline.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::compare::{BarChart, Comparison, Rgb};

const CHART_H: f32 = 300.0;
const PAD_L: f32 = 56.0;
const PAD_R: f32 = 16.0;
const PAD_T: f32 = 28.0;
const PAD_B: f32 = 40.0;

pub fn draw(ui: &mut egui::Ui, cmp: &Comparison) {
    for pair in cmp.charts.chunks(2) {
        ui.columns(2, |cols| {
            for (col, chart) in cols.iter_mut().zip(pair) {
                col.label(egui::RichText::new(&chart.heading).strong());
                bar_chart(col, chart);
            }
        });
        ui.add_space(8.0);
    }
}

fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}

fn bar_chart(ui: &mut egui::Ui, chart: &BarChart) {
    let w = ui.available_width().max(200.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(w, CHART_H), Sense::hover());
    let painter = ui.painter_at(rect);
    let fg = ui.visuals().text_color();
    let axis = Stroke::new(1.0, ui.visuals().weak_text_color());

    painter.text(
        Pos2::new(rect.center().x, rect.top() + 4.0),
        Align2::CENTER_TOP,
        chart.title,
        FontId::proportional(14.0),
        fg,
    );

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + PAD_L, rect.top() + PAD_T),
        Pos2::new(rect.right() - PAD_R, rect.bottom() - PAD_B),
    );

    // Value → y, with headroom for annotations.
    let (lo, hi) = chart.value_range();
    let span = (hi - lo).max(f64::EPSILON);
    let (lo, hi) = (lo - span * 0.1 * f64::from(lo < 0.0), hi + span * 0.12);
    let y_of = |v: f64| -> f32 {
        let t = ((v - lo) / (hi - lo)) as f32;
        plot.bottom() - t * plot.height()
    };

    painter.line_segment([plot.left_top(), plot.left_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);

    if chart.zero_line {
        let y0 = y_of(0.0);
        painter.line_segment(
            [Pos2::new(plot.left(), y0), Pos2::new(plot.right(), y0)],
            Stroke::new(1.0, Color32::BLACK),
        );
    }

    let slot_w = plot.width() / chart.bars.len() as f32;
    for (i, bar) in chart.bars.iter().enumerate() {
        let cx = plot.left() + slot_w * (i as f32 + 0.5);
        let half = slot_w * 0.3;
        let (y_val, y_base) = (y_of(bar.value), y_of(0.0));
        let body = Rect::from_min_max(
            Pos2::new(cx - half, y_val.min(y_base)),
            Pos2::new(cx + half, y_val.max(y_base)),
        );
        painter.rect_filled(body, 2.0, color(bar.color));

        // Annotation sits past the bar's end, outside for negatives.
        let (anchor, y_txt) = if bar.value < 0.0 {
            (Align2::CENTER_TOP, body.bottom() + 2.0)
        } else {
            (Align2::CENTER_BOTTOM, body.top() - 2.0)
        };
        painter.text(Pos2::new(cx, y_txt), anchor, &bar.label, FontId::proportional(12.0), fg);

        painter.text(
            Pos2::new(cx, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            &bar.company,
            FontId::proportional(12.0),
            fg,
        );
    }

    painter.text(
        Pos2::new(plot.center().x, rect.bottom() - 2.0),
        Align2::CENTER_BOTTOM,
        chart.x_label,
        FontId::proportional(12.0),
        fg,
    );
    painter.text(
        Pos2::new(rect.left() + 2.0, plot.top() - 4.0),
        Align2::LEFT_BOTTOM,
        chart.y_label,
        FontId::proportional(11.0),
        fg,
    );
}
