//! inkpad theme — paper-like black and white
//!
//! White surfaces, 1px black outlines, no rounding, no smooth shadows.
//! Fonts stay at egui's defaults; a CJK fallback is picked up from disk
//! when one is installed.

use egui::{Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The two colors everything is drawn with. Selection grey is the one
/// exception, so highlighted text stays readable.
pub struct InkColors;

impl InkColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const SELECTION: Color32 = Color32::from_rgb(160, 160, 160);
}

/// Theme configuration for the editor window.
pub struct InkTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for InkTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 20.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl InkTheme {
    /// Look for a CJK-capable fallback font on disk. Nothing is embedded in
    /// the binary; missing fonts simply mean no CJK glyphs.
    fn find_cjk_font() -> Option<Vec<u8>> {
        const CANDIDATES: &[&str] = &[
            "NotoSansCJK-Regular.otf",
            "NotoSansCJK-Subset.otf",
            "NotoSansCJKsc-Regular.otf",
        ];

        let mut search_dirs = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                search_dirs.push(dir.join("fonts"));
                search_dirs.push(dir.to_path_buf());
            }
        }
        search_dirs.push(std::path::PathBuf::from("/usr/share/fonts"));
        search_dirs.push(std::path::PathBuf::from("/usr/local/share/fonts"));

        for dir in search_dirs {
            for name in CANDIDATES {
                if let Ok(data) = std::fs::read(dir.join(name)) {
                    return Some(data);
                }
            }
        }
        None
    }

    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut fonts = FontDefinitions::default();
        if let Some(data) = Self::find_cjk_font() {
            fonts
                .font_data
                .insert("cjk-fallback".to_owned(), FontData::from_owned(data));
            fonts
                .families
                .entry(FontFamily::Proportional)
                .or_default()
                .push("cjk-fallback".to_owned());
            fonts
                .families
                .entry(FontFamily::Monospace)
                .or_default()
                .push("cjk-fallback".to_owned());
        }
        ctx.set_fonts(fonts);

        let mut style = Style::default();
        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = InkColors::WHITE;
        visuals.panel_fill = InkColors::WHITE;
        visuals.faint_bg_color = InkColors::WHITE;
        visuals.extreme_bg_color = InkColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, InkColors::BLACK);

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = InkColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, InkColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, InkColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);

        // Shadows are drawn by hand as dither strips.
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = InkColors::SELECTION;
        visuals.selection.stroke = Stroke::new(1.0, InkColors::BLACK);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Title bar strip below the menu.
    pub fn title_bar_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(InkColors::WHITE)
            .stroke(Stroke::new(1.0, InkColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}

/// Menu bar container: outlined horizontal strip.
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let resp = egui::Frame::none()
        .fill(InkColors::WHITE)
        .stroke(Stroke::new(1.0, InkColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: resp.inner,
        response: resp.response,
    }
}

/// Strip key events that fight the editor, once per frame, before any
/// widget runs.
///
/// - Tab: egui resolves Tab into focus cycling during `begin_frame`, before
///   the app can intercept it. The Tab key event is removed so no widget
///   reacts to it, tab characters in text input are replaced with
///   `tab_spaces` spaces (or dropped when 0), and the pre-Tab focus is
///   re-requested so the cycling is undone on the next frame.
/// - Ctrl+Plus / Ctrl+Minus / Ctrl+Equals: zoom chords, removed.
pub fn consume_special_keys(ctx: &egui::Context, tab_spaces: usize) {
    let tab_pressed = ctx.input(|i| {
        i.events
            .iter()
            .any(|e| matches!(e, egui::Event::Key { key: egui::Key::Tab, pressed: true, .. }))
    });
    let focused_before = if tab_pressed { ctx.memory(|mem| mem.focused()) } else { None };

    ctx.input_mut(|i| {
        let spaces = " ".repeat(tab_spaces);
        let mut kept = Vec::new();
        for event in i.events.iter() {
            match event {
                egui::Event::Key { key: egui::Key::Tab, .. } => {}
                egui::Event::Text(text) if text.contains('\t') => {
                    if tab_spaces > 0 {
                        kept.push(egui::Event::Text(text.replace('\t', &spaces)));
                    }
                }
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command
                        && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals) => {}
                _ => kept.push(event.clone()),
            }
        }
        i.events = kept;
    });

    if tab_pressed {
        if let Some(id) = focused_before {
            ctx.memory_mut(|mem| mem.request_focus(id));
        } else if let Some(id) = ctx.memory(|mem| mem.focused()) {
            ctx.memory_mut(|mem| mem.surrender_focus(id));
        }
    }
}
