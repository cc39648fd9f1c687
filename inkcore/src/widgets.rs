//! Custom widgets for the borderless window

use egui::{Pos2, Rect, Response, Sense, Stroke, Ui, Widget};

use crate::dither;
use crate::theme::InkColors;

/// Action reported by the window control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    None,
    Close,
    Minimize,
}

fn control_button(ui: &mut Ui, draw_glyph: impl FnOnce(&egui::Painter, Rect)) -> Response {
    let size = egui::vec2(14.0, 14.0);
    let (rect, resp) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, InkColors::WHITE);
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, InkColors::BLACK));
        if resp.hovered() {
            dither::draw_dither_hover(painter, rect);
        }
        draw_glyph(painter, rect);
    }
    resp
}

/// Close and minimize buttons at the left edge of the menu bar, followed by
/// a thin separator. Returns what the user clicked.
pub fn window_control_buttons(ui: &mut Ui) -> WindowAction {
    let mut action = WindowAction::None;
    let stroke = Stroke::new(1.0, InkColors::BLACK);

    let close = control_button(ui, |painter, rect| {
        let m = 3.0;
        painter.line_segment(
            [rect.left_top() + egui::vec2(m, m), rect.right_bottom() - egui::vec2(m, m)],
            stroke,
        );
        painter.line_segment(
            [rect.right_top() + egui::vec2(-m, m), rect.left_bottom() + egui::vec2(m, -m)],
            stroke,
        );
    });
    if close.clicked() {
        action = WindowAction::Close;
    }

    ui.add_space(2.0);

    let minimize = control_button(ui, |painter, rect| {
        let m = 3.0;
        painter.line_segment(
            [
                Pos2::new(rect.left() + m, rect.center().y),
                Pos2::new(rect.right() - m, rect.center().y),
            ],
            stroke,
        );
    });
    if minimize.clicked() {
        action = WindowAction::Minimize;
    }

    ui.add_space(4.0);
    let (sep, _) = ui.allocate_exact_size(egui::vec2(4.0, 14.0), Sense::hover());
    if ui.is_rect_visible(sep) {
        ui.painter().vline(sep.center().x, sep.y_range(), stroke);
    }
    ui.add_space(4.0);

    action
}

/// Status bar along the bottom: left-aligned text plus an optional
/// right-aligned secondary text.
pub fn status_bar(ui: &mut Ui, left: &str, right: Option<&str>) {
    egui::Frame::none()
        .fill(InkColors::WHITE)
        .stroke(Stroke::new(1.0, InkColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(left);
                if let Some(right) = right {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Leave room for the size grip in the corner.
                        ui.add_space(18.0);
                        ui.small(right);
                    });
                }
            });
        });
}

/// One row in the file browser. Directories get a folder glyph and files a
/// page glyph, both painted as outlines.
pub struct FileListItem<'a> {
    name: &'a str,
    is_directory: bool,
    selected: bool,
}

impl<'a> FileListItem<'a> {
    pub fn new(name: &'a str, is_directory: bool) -> Self {
        Self { name, is_directory, selected: false }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for FileListItem<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = 20.0;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, InkColors::WHITE);

            let text_color = if self.selected {
                dither::draw_dither_selection(painter, rect);
                InkColors::WHITE
            } else {
                if response.hovered() {
                    dither::draw_dither_hover(painter, rect);
                }
                InkColors::BLACK
            };
            let stroke = Stroke::new(1.0, text_color);

            let glyph = Rect::from_center_size(
                Pos2::new(rect.left() + 12.0, rect.center().y),
                egui::vec2(11.0, 9.0),
            );
            if self.is_directory {
                painter.rect_stroke(glyph, 0.0, stroke);
                // folder tab
                painter.line_segment(
                    [glyph.left_top() + egui::vec2(1.0, -2.0), glyph.left_top() + egui::vec2(5.0, -2.0)],
                    stroke,
                );
            } else {
                let page = Rect::from_center_size(glyph.center(), egui::vec2(8.0, 11.0));
                painter.rect_stroke(page, 0.0, stroke);
                painter.line_segment(
                    [
                        Pos2::new(page.left() + 2.0, page.center().y),
                        Pos2::new(page.right() - 2.0, page.center().y),
                    ],
                    stroke,
                );
            }

            painter.text(
                Pos2::new(rect.left() + 24.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.name,
                egui::FontId::proportional(12.0),
                text_color,
            );
        }

        response
    }
}

/// Resize handle for the bottom-right corner: three diagonal hatch lines.
/// The caller starts a viewport resize when this reports a drag.
pub fn size_grip(ui: &mut Ui) -> Response {
    let size = egui::vec2(14.0, 14.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::drag());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        for i in 0..3 {
            let inset = 2.0 + i as f32 * 4.0;
            painter.line_segment(
                [
                    Pos2::new(rect.right() - inset, rect.bottom() - 1.0),
                    Pos2::new(rect.right() - 1.0, rect.bottom() - inset),
                ],
                Stroke::new(1.0, InkColors::BLACK),
            );
        }
    }
    response
}
