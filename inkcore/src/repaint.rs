//! Repaint governance
//!
//! An idle editor should not redraw. egui wakes on input anyway, so the
//! controller only has to handle the other case: state that changed outside
//! an input event (a session notification, a dialog opened by code) and
//! needs one more frame to show up. Apps call [`RepaintController::mark_needs_repaint`]
//! for those, and the controller issues at most one repaint per request.

/// Drop into the app struct; call [`begin_frame`](Self::begin_frame) first
/// in `update()` and [`end_frame`](Self::end_frame) last.
pub struct RepaintController {
    needs_repaint: bool,
    had_input: bool,
    frame: u64,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self { needs_repaint: false, had_input: false, frame: 0 }
    }

    /// Request one repaint beyond the current frame.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Whether the current frame was driven by user input.
    pub fn had_input(&self) -> bool {
        self.had_input
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        self.had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.any_click()
                || i.raw_scroll_delta != egui::Vec2::ZERO
                || i.pointer.is_moving()
        });
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.needs_repaint {
            self.needs_repaint = false;
            ctx.request_repaint();
        }
        // Otherwise: sleep until the next input event.
    }
}
