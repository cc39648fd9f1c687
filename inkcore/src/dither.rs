//! Dithered overlays
//!
//! The theme has no greys and no alpha, so hover and selection emphasis is
//! drawn as checkerboard dot patterns, and floating windows get offset
//! dither strips instead of soft shadows.

use egui::{Color32, Context, Id, LayerId, Order, Painter, Pos2, Rect};

use crate::theme::InkColors;

/// Fill `rect` with a checkerboard of 1px dots. `step` is the distance
/// between dots in a row; rows are offset by half a step.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, step: f32) {
    let mut y = rect.top();
    let mut row = 0u32;
    while y < rect.bottom() {
        let mut x = rect.left() + if row % 2 == 0 { 0.0 } else { step * 0.5 };
        while x < rect.right() {
            let dot = Rect::from_min_size(Pos2::new(x, y), egui::vec2(1.0, 1.0)).intersect(rect);
            if dot.is_positive() {
                painter.rect_filled(dot, 0.0, color);
            }
            x += step;
        }
        y += step * 0.5;
        row += 1;
    }
}

/// Sparse pattern for hovered widgets.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, InkColors::BLACK, 4.0);
}

/// Dense pattern for pressed or selected widgets; draw the label in white
/// on top of it.
pub fn draw_dither_selection(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, InkColors::BLACK, 2.0);
}

fn draw_shadow_strips(ctx: &Context, rect: Rect, offset: f32) {
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("ink_shadow")));
    // Right strip, then bottom strip; together they form an L behind the
    // bottom-right of the window.
    let right = Rect::from_min_max(
        Pos2::new(rect.right(), rect.top() + offset),
        Pos2::new(rect.right() + offset, rect.bottom() + offset),
    );
    let bottom = Rect::from_min_max(
        Pos2::new(rect.left() + offset, rect.bottom()),
        Pos2::new(rect.right(), rect.bottom() + offset),
    );
    draw_dither_rect(&painter, right, InkColors::BLACK, 3.0);
    draw_dither_rect(&painter, bottom, InkColors::BLACK, 3.0);
}

/// Shadow for dialogs.
pub fn draw_window_shadow(ctx: &Context, rect: Rect) {
    draw_shadow_strips(ctx, rect, 4.0);
}

/// Wider shadow for the larger windows (about, shortcuts).
pub fn draw_window_shadow_large(ctx: &Context, rect: Rect) {
    draw_shadow_strips(ctx, rect, 7.0);
}
