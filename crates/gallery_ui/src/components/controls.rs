//! Small painted controls shared by both gallery views

use crate::theme::Theme;
use egui::{Align2, Color32, FontId, Id, Rect, Rounding, Sense, Stroke, Ui};

/// Diameter of arrow and close buttons
pub const BUTTON_SIZE: f32 = 40.0;

/// Circular glyph button. Returns true when clicked while enabled.
///
/// Disabled buttons stay visible at reduced opacity and swallow the click.
pub fn round_button(
    ui: &mut Ui,
    rect: Rect,
    id: Id,
    glyph: &str,
    enabled: bool,
    fill: Color32,
    text: Color32,
) -> bool {
    let sense = if enabled { Sense::click() } else { Sense::hover() };
    let response = ui.interact(rect, id, sense);

    let alpha = match (enabled, response.hovered()) {
        (false, _) => 0.4,
        (true, true) => 1.0,
        (true, false) => 0.85,
    };

    let painter = ui.painter();
    painter.circle_filled(rect.center(), rect.width() / 2.0, fill.gamma_multiply(alpha));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(rect.height() * 0.55),
        text.gamma_multiply(alpha),
    );

    enabled && response.clicked()
}

/// Pill geometry for indicator dot `i` of `len` centred in `row`
pub fn dot_rect(row: Rect, len: usize, active: Option<usize>, i: usize) -> Rect {
    const DOT: f32 = 8.0;
    const ACTIVE: f32 = 16.0;
    const GAP: f32 = 8.0;

    let width = |slot: usize| if active == Some(slot) { ACTIVE } else { DOT };
    let total: f32 = (0..len).map(width).sum::<f32>() + GAP * len.saturating_sub(1) as f32;
    let left = row.center().x - total / 2.0 + (0..i).map(|s| width(s) + GAP).sum::<f32>();

    Rect::from_min_size(
        egui::pos2(left, row.center().y - DOT / 2.0),
        egui::vec2(width(i), DOT),
    )
}

/// Paint one indicator dot. Returns true when clicked.
pub fn dot(ui: &mut Ui, rect: Rect, id: Id, active: bool, theme: &Theme) -> bool {
    // Hit area is larger than the painted pill
    let response = ui.interact(rect.expand(4.0), id, Sense::click());
    let color = if active { theme.accent } else { theme.dot_inactive() };
    ui.painter().rect_filled(rect, Rounding::same(rect.height() / 2.0), color);
    response.clicked()
}

/// Gold selection ring around an active thumbnail
pub fn selection_ring(ui: &Ui, rect: Rect, theme: &Theme) {
    ui.painter()
        .rect_stroke(rect.expand(2.0), Rounding::same(6.0), Stroke::new(2.0, theme.accent));
}
