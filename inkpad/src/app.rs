//! inkpad application — the borderless window shell around the document
//! session
//!
//! The session module owns the document state; everything here is view
//! plumbing: panels, dialogs, the keyboard map, and the parked-action
//! handling for the unsaved-changes prompt.

use crate::session::{Gate, Resolution, SaveChoice, Session, SessionEvent};
use egui::{Align2, Color32, Context, Key};
use inkcore::repaint::RepaintController;
use inkcore::storage::{config_dir, documents_dir, FileBrowser, RecentFiles};
use inkcore::text::ellipsize_middle;
use inkcore::theme::{consume_special_keys, menu_bar, InkColors, InkTheme};
use inkcore::widgets::{size_grip, status_bar, window_control_buttons, FileListItem, WindowAction};
use std::path::PathBuf;
use unicode_segmentation::UnicodeSegmentation;

/// File extensions offered by the open browser.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];
/// Spaces inserted when Tab is pressed in the editor.
const TAB_SPACES: usize = 4;
/// Longest path shown in the status bar before middle-ellipsis.
const PATH_DISPLAY_CHARS: usize = 48;

#[derive(Clone, Copy, PartialEq)]
enum FileBrowserMode {
    Open,
    SaveAs,
    NewFile,
}

/// A destructive operation parked while the unsaved-changes prompt (or a
/// Save As forced by it) is on screen.
#[derive(Clone, Debug, PartialEq)]
enum FileAction {
    New,
    Open,
    OpenPath(PathBuf),
    CloseFile,
    Quit,
}

/// Keyboard shortcut requests collected while the input state is locked.
#[derive(Clone, Copy)]
enum KeyCommand {
    New,
    Open,
    Save,
    SaveAs,
    CloseFile,
    AlterColor,
    Help,
}

/// Application state.
pub struct InkPadApp {
    session: Session,
    /// Title-bar text; rebuilt from session notifications.
    file_title: String,
    /// Ellipsized path for the status bar, when a file is open.
    path_display: Option<String>,
    recent_files: RecentFiles,
    show_file_browser: bool,
    file_browser: FileBrowser,
    file_browser_mode: FileBrowserMode,
    save_filename: String,
    /// Operation awaiting the unsaved-changes prompt.
    pending: Option<FileAction>,
    show_confirm: bool,
    warning: Option<String>,
    show_color_picker: bool,
    /// Editor background, altered through the color picker. Not persisted.
    background: Color32,
    show_shortcuts: bool,
    show_about: bool,
    close_confirmed: bool,
    repaint: RepaintController,
}

fn text_filter() -> Vec<String> {
    TEXT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl InkPadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config_path = config_dir("inkpad").join("recent.json");
        let recent_files = RecentFiles::load(&config_path).unwrap_or_else(|_| RecentFiles::new(8));

        Self {
            session: Session::new(),
            file_title: "untitled".to_string(),
            path_display: None,
            recent_files,
            show_file_browser: false,
            file_browser: FileBrowser::new(documents_dir()).with_filter(text_filter()),
            file_browser_mode: FileBrowserMode::Open,
            save_filename: String::new(),
            pending: None,
            show_confirm: false,
            warning: None,
            show_color_picker: false,
            background: InkColors::WHITE,
            show_shortcuts: false,
            show_about: false,
            close_confirmed: false,
            repaint: RepaintController::new(),
        }
    }

    // --- guarded operations -------------------------------------------------

    /// Run `action`, or park it behind the unsaved-changes prompt. The gate
    /// runs before any dialog opens and before anything is read, so it
    /// always interrogates the previous document.
    fn begin(&mut self, ctx: &Context, action: FileAction) {
        match self.session.check_unsaved() {
            Gate::Proceed => self.perform(ctx, action),
            Gate::Confirm => {
                self.pending = Some(action);
                self.show_confirm = true;
            }
        }
    }

    fn perform(&mut self, ctx: &Context, action: FileAction) {
        match action {
            FileAction::New => {
                self.file_browser = FileBrowser::new(documents_dir());
                self.file_browser_mode = FileBrowserMode::NewFile;
                self.save_filename = String::new();
                self.show_file_browser = true;
            }
            FileAction::Open => {
                self.file_browser = FileBrowser::new(documents_dir()).with_filter(text_filter());
                self.file_browser_mode = FileBrowserMode::Open;
                self.show_file_browser = true;
            }
            FileAction::OpenPath(path) => self.open_path(&path),
            FileAction::CloseFile => self.session.close(),
            FileAction::Quit => {
                self.close_confirmed = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    /// Continue after the prompt allowed it.
    fn resume(&mut self, ctx: &Context) {
        if self.session.take_pending_cancel() {
            self.pending = None;
            return;
        }
        if let Some(action) = self.pending.take() {
            self.perform(ctx, action);
        }
    }

    fn open_path(&mut self, path: &std::path::Path) {
        if let Err(err) = self.session.open(path) {
            self.warn(err.to_string());
        }
    }

    /// Plain Save. Without a path this is a silent no-op; Save As is the
    /// way to establish one.
    fn do_save(&mut self) {
        if let Err(err) = self.session.save() {
            self.warn(err.to_string());
        }
    }

    fn show_save_as_browser(&mut self) {
        self.file_browser = FileBrowser::new(documents_dir());
        self.file_browser_mode = FileBrowserMode::SaveAs;
        self.save_filename = if self.session.path().is_some() {
            self.file_title.clone()
        } else {
            String::new()
        };
        self.show_file_browser = true;
    }

    fn warn(&mut self, message: String) {
        eprintln!("inkpad: {message}");
        self.warning = Some(message);
        self.repaint.mark_needs_repaint();
    }

    fn save_recent_files(&self) {
        let config_path = config_dir("inkpad").join("recent.json");
        let _ = self.recent_files.save(&config_path);
    }

    /// Apply queued session notifications to the view state.
    fn process_session_events(&mut self) {
        for event in self.session.take_events() {
            match event {
                SessionEvent::PathChanged(Some(path)) => {
                    self.file_title = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "untitled".to_string());
                    self.path_display =
                        Some(ellipsize_middle(&path.display().to_string(), PATH_DISPLAY_CHARS));
                    self.recent_files.add(path);
                    self.save_recent_files();
                }
                SessionEvent::PathChanged(None) => {
                    self.file_title = "untitled".to_string();
                    self.path_display = None;
                }
            }
            self.repaint.mark_needs_repaint();
        }
    }

    fn display_title(&self) -> String {
        if self.session.is_dirty() {
            format!("{}*", self.file_title)
        } else {
            self.file_title.clone()
        }
    }

    // --- input --------------------------------------------------------------

    /// Intercept the Ctrl shortcuts before the text widget consumes them.
    /// Everything else (typing, cursor, clipboard chords) stays with
    /// TextEdit.
    fn handle_keyboard(&mut self, ctx: &Context) {
        consume_special_keys(ctx, TAB_SPACES);

        let mut requests: Vec<KeyCommand> = Vec::new();
        ctx.input_mut(|i| {
            let cmd = i.modifiers.command;
            let shift = i.modifiers.shift;

            let events = std::mem::take(&mut i.events);
            let mut remaining = Vec::new();
            for event in events {
                let mut handled = false;
                if let egui::Event::Key { key, pressed: true, .. } = &event {
                    match key {
                        Key::N if cmd && !shift => {
                            handled = true;
                            requests.push(KeyCommand::New);
                        }
                        Key::O if cmd && shift => {
                            handled = true;
                            requests.push(KeyCommand::CloseFile);
                        }
                        Key::O if cmd => {
                            handled = true;
                            requests.push(KeyCommand::Open);
                        }
                        Key::S if cmd && shift => {
                            handled = true;
                            requests.push(KeyCommand::SaveAs);
                        }
                        Key::S if cmd => {
                            handled = true;
                            requests.push(KeyCommand::Save);
                        }
                        Key::C if cmd && shift => {
                            handled = true;
                            requests.push(KeyCommand::AlterColor);
                        }
                        Key::H if cmd => {
                            handled = true;
                            requests.push(KeyCommand::Help);
                        }
                        _ => {}
                    }
                }
                if !handled {
                    remaining.push(event);
                }
            }
            i.events = remaining;
        });

        for request in requests {
            self.run_command(ctx, request);
        }
    }

    fn run_command(&mut self, ctx: &Context, command: KeyCommand) {
        match command {
            KeyCommand::New => self.begin(ctx, FileAction::New),
            KeyCommand::Open => self.begin(ctx, FileAction::Open),
            KeyCommand::Save => self.do_save(),
            KeyCommand::SaveAs => self.show_save_as_browser(),
            KeyCommand::CloseFile => self.begin(ctx, FileAction::CloseFile),
            KeyCommand::AlterColor => self.show_color_picker = true,
            KeyCommand::Help => self.show_shortcuts = true,
        }
    }

    // --- chrome -------------------------------------------------------------

    fn render_menu_bar(&mut self, ctx: &Context, ui: &mut egui::Ui) -> WindowAction {
        let mut action = WindowAction::None;
        menu_bar(ui, |ui| {
            action = window_control_buttons(ui);

            ui.menu_button("file", |ui| {
                if ui.button("new         ctrl+n").clicked() {
                    self.begin(ctx, FileAction::New);
                    ui.close_menu();
                }
                if ui.button("open...     ctrl+o").clicked() {
                    self.begin(ctx, FileAction::Open);
                    ui.close_menu();
                }
                ui.menu_button("open recent", |ui| {
                    if self.recent_files.files.is_empty() {
                        ui.label("no recent files");
                    } else {
                        for path in self.recent_files.files.clone() {
                            let name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().to_string())
                                .unwrap_or_else(|| "unknown".to_string());
                            if ui.button(&name).clicked() {
                                self.begin(ctx, FileAction::OpenPath(path));
                                ui.close_menu();
                            }
                        }
                    }
                });
                ui.separator();
                if ui.button("save        ctrl+s").clicked() {
                    self.do_save();
                    ui.close_menu();
                }
                if ui.button("save as...  ctrl+shift+s").clicked() {
                    self.show_save_as_browser();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("close file  ctrl+shift+o").clicked() {
                    self.begin(ctx, FileAction::CloseFile);
                    ui.close_menu();
                }
                if ui.button("quit        alt+f4").clicked() {
                    self.begin(ctx, FileAction::Quit);
                    ui.close_menu();
                }
            });

            ui.menu_button("edit", |ui| {
                if ui.button("cut         ctrl+x").clicked() {
                    ui.ctx().input_mut(|i| i.events.push(egui::Event::Cut));
                    ui.close_menu();
                }
                if ui.button("copy        ctrl+c").clicked() {
                    ui.ctx().input_mut(|i| i.events.push(egui::Event::Copy));
                    ui.close_menu();
                }
                if ui.button("paste       ctrl+v").clicked() {
                    // TextEdit pastes natively on the chord; the menu route
                    // reads the system clipboard and injects it as text.
                    let text = arboard::Clipboard::new()
                        .ok()
                        .and_then(|mut c| c.get_text().ok())
                        .unwrap_or_default();
                    if !text.is_empty() {
                        ui.ctx().input_mut(|i| i.events.push(egui::Event::Text(text)));
                    }
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("select all  ctrl+a").clicked() {
                    ui.ctx().input_mut(|i| {
                        i.events.push(egui::Event::Key {
                            key: Key::A,
                            physical_key: Some(Key::A),
                            pressed: true,
                            repeat: false,
                            modifiers: egui::Modifiers::COMMAND,
                        });
                    });
                    ui.close_menu();
                }
            });

            ui.menu_button("view", |ui| {
                if ui.button("background color...  ctrl+shift+c").clicked() {
                    self.show_color_picker = true;
                    ui.close_menu();
                }
            });

            ui.menu_button("help", |ui| {
                if ui.button("keyboard shortcuts  ctrl+h").clicked() {
                    self.show_shortcuts = true;
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("about").clicked() {
                    self.show_about = true;
                    ui.close_menu();
                }
            });
        });
        action
    }

    /// Title strip. Dragging it moves the borderless window; the windowing
    /// backend applies the click offset.
    fn render_title_bar(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        let bar = InkTheme::title_bar_frame().show(ui, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(self.display_title());
            });
        });
        let response = ui.interact(
            bar.response.rect,
            egui::Id::new("title_drag"),
            egui::Sense::drag(),
        );
        if response.drag_started() {
            ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
        }
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let output = egui::TextEdit::multiline(self.session.buffer_mut())
                    .font(egui::FontId::proportional(16.0))
                    .desired_width(available.x)
                    .desired_rows((available.y / 20.0).max(4.0) as usize)
                    .frame(false)
                    .show(ui);
                if output.response.changed() {
                    self.session.mark_dirty();
                }
            });
    }

    // --- dialogs ------------------------------------------------------------

    fn render_file_browser(&mut self, ctx: &Context) {
        let title = match self.file_browser_mode {
            FileBrowserMode::Open => "open file",
            FileBrowserMode::SaveAs => "save as",
            FileBrowserMode::NewFile => "new file",
        };
        let resp = egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("up").clicked() {
                        self.file_browser.navigate_up();
                    }
                    ui.label(self.file_browser.current_dir.to_string_lossy().to_string());
                });
                ui.separator();
                egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                    let entries = self.file_browser.entries.clone();
                    for (idx, entry) in entries.iter().enumerate() {
                        let selected = self.file_browser.selected_index == Some(idx);
                        let response =
                            ui.add(FileListItem::new(&entry.name, entry.is_directory).selected(selected));
                        if response.clicked() {
                            self.file_browser.selected_index = Some(idx);
                        }
                        if response.double_clicked() {
                            if entry.is_directory {
                                self.file_browser.navigate_to(entry.path.clone());
                            } else {
                                match self.file_browser_mode {
                                    FileBrowserMode::Open => {
                                        let path = entry.path.clone();
                                        self.show_file_browser = false;
                                        self.open_path(&path);
                                    }
                                    // In save modes a double-click fills in
                                    // the filename to overwrite.
                                    _ => self.save_filename = entry.name.clone(),
                                }
                            }
                        }
                    }
                });
                if self.file_browser_mode != FileBrowserMode::Open {
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("filename:");
                        ui.text_edit_singleline(&mut self.save_filename);
                    });
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("cancel").clicked() {
                        // An abandoned chooser also abandons whatever was
                        // parked behind it.
                        self.show_file_browser = false;
                        self.pending = None;
                    }
                    let action_label = match self.file_browser_mode {
                        FileBrowserMode::Open => "open",
                        FileBrowserMode::SaveAs => "save",
                        FileBrowserMode::NewFile => "create",
                    };
                    if ui.button(action_label).clicked() {
                        self.confirm_file_browser(ctx);
                    }
                });
            });
        if let Some(r) = &resp {
            inkcore::dither::draw_window_shadow(ctx, r.response.rect);
        }
    }

    /// The browser's accept button. Empty selections and empty filenames
    /// are silent no-ops, not errors.
    fn confirm_file_browser(&mut self, ctx: &Context) {
        match self.file_browser_mode {
            FileBrowserMode::Open => {
                if let Some(entry) = self.file_browser.selected_entry() {
                    if !entry.is_directory {
                        let path = entry.path.clone();
                        self.show_file_browser = false;
                        self.open_path(&path);
                    }
                }
            }
            FileBrowserMode::SaveAs => {
                if !self.save_filename.is_empty() {
                    let path = self.target_save_path();
                    self.show_file_browser = false;
                    match self.session.save_as(&path) {
                        // A Save As launched from the unsaved-changes
                        // prompt resumes the parked operation.
                        Ok(()) => self.resume(ctx),
                        Err(err) => {
                            self.pending = None;
                            self.warn(err.to_string());
                        }
                    }
                }
            }
            FileBrowserMode::NewFile => {
                if !self.save_filename.is_empty() {
                    let path = self.target_save_path();
                    self.show_file_browser = false;
                    if let Err(err) = self.session.create(&path) {
                        self.warn(err.to_string());
                    }
                }
            }
        }
    }

    fn target_save_path(&self) -> PathBuf {
        let mut name = self.save_filename.clone();
        if !name.contains('.') {
            name.push_str(".txt");
        }
        self.file_browser.save_directory().join(name)
    }

    fn render_confirm(&mut self, ctx: &Context) {
        let resp = egui::Window::new("unsaved changes")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("you have unsaved changes.");
                ui.label("save them before continuing?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("don't save").clicked() {
                        self.show_confirm = false;
                        // Discard never fails.
                        let _ = self.session.resolve_choice(SaveChoice::Discard);
                        self.resume(ctx);
                    }
                    if ui.button("cancel").clicked() {
                        self.show_confirm = false;
                        let _ = self.session.resolve_choice(SaveChoice::Cancel);
                        // Consumes the cancel flag and drops the parked
                        // operation; the session is untouched.
                        self.resume(ctx);
                    }
                    if ui.button("save").clicked() {
                        self.show_confirm = false;
                        match self.session.resolve_choice(SaveChoice::Save) {
                            Ok(Resolution::Proceed) => self.resume(ctx),
                            Ok(Resolution::NeedsPath) => self.show_save_as_browser(),
                            Ok(Resolution::Aborted) => {}
                            Err(err) => {
                                self.pending = None;
                                self.warn(err.to_string());
                            }
                        }
                    }
                });
            });
        if let Some(r) = &resp {
            inkcore::dither::draw_window_shadow(ctx, r.response.rect);
        }
    }

    fn render_warning(&mut self, ctx: &Context) {
        let message = match &self.warning {
            Some(message) => message.clone(),
            None => return,
        };
        let resp = egui::Window::new("warning")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.warning = None;
                    }
                });
            });
        if let Some(r) = &resp {
            inkcore::dither::draw_window_shadow(ctx, r.response.rect);
        }
    }

    fn render_color_picker(&mut self, ctx: &Context) {
        let resp = egui::Window::new("background color")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                let mut color = self.background;
                if egui::color_picker::color_picker_color32(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                ) {
                    self.background = color;
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("white").clicked() {
                        self.background = InkColors::WHITE;
                    }
                    if ui.button("done").clicked() {
                        self.show_color_picker = false;
                    }
                });
            });
        if let Some(r) = &resp {
            inkcore::dither::draw_window_shadow(ctx, r.response.rect);
        }
    }

    fn render_shortcuts(&mut self, ctx: &Context) {
        let resp = egui::Window::new("keyboard shortcuts")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                shortcut_row(ui, "ctrl+n", "new file");
                shortcut_row(ui, "ctrl+o", "open file");
                shortcut_row(ui, "ctrl+s", "save");
                shortcut_row(ui, "ctrl+shift+s", "save as");
                shortcut_row(ui, "ctrl+shift+o", "close current file");
                shortcut_row(ui, "ctrl+shift+c", "choose background color");
                shortcut_row(ui, "ctrl+h", "this help");
                shortcut_row(ui, "alt+f4", "quit");
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_shortcuts = false;
                    }
                });
            });
        if let Some(r) = &resp {
            inkcore::dither::draw_window_shadow_large(ctx, r.response.rect);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        let resp = egui::Window::new("about inkpad")
            .collapsible(false)
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("inkpad");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    ui.label("a minimal borderless text editor");
                    ui.label("plain utf-8 files only");
                    ui.add_space(8.0);
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
        if let Some(r) = &resp {
            inkcore::dither::draw_window_shadow(ctx, r.response.rect);
        }
    }
}

fn shortcut_row(ui: &mut egui::Ui, shortcut: &str, description: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(shortcut).monospace().strong());
        ui.add_space(16.0);
        ui.label(description);
    });
}

impl eframe::App for InkPadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.handle_keyboard(ctx);
        self.process_session_events();

        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if let Some(path) = dropped.into_iter().next() {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if TEXT_EXTENSIONS.iter().any(|e| *e == ext) {
                self.begin(ctx, FileAction::OpenPath(path));
            }
        }

        let mut win_action = WindowAction::None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            win_action = self.render_menu_bar(ctx, ui);
        });
        match win_action {
            WindowAction::Close => self.begin(ctx, FileAction::Quit),
            WindowAction::Minimize => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
            }
            WindowAction::None => {}
        }

        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            self.render_title_bar(ctx, ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let text = self.session.text();
            let counts = format!(
                "{} lines  |  {} words, {} chars",
                text.lines().count().max(1),
                text.unicode_words().count(),
                text.chars().count()
            );
            status_bar(ui, &counts, self.path_display.as_deref());
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.background).inner_margin(egui::Margin::same(0.0)))
            .show(ctx, |ui| {
                self.render_editor(ui);
            });

        // Resize grip floating in the corner of the borderless window.
        egui::Area::new(egui::Id::new("size_grip"))
            .anchor(Align2::RIGHT_BOTTOM, [-2.0, -2.0])
            .movable(false)
            .show(ctx, |ui| {
                if size_grip(ui).drag_started() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::BeginResize(
                        egui::viewport::ResizeDirection::SouthEast,
                    ));
                }
            });

        if self.show_file_browser {
            self.render_file_browser(ctx);
        }
        if self.show_confirm {
            self.render_confirm(ctx);
        }
        if self.show_color_picker {
            self.render_color_picker(ctx);
        }
        if self.warning.is_some() {
            self.render_warning(ctx);
        }
        if self.show_shortcuts {
            self.render_shortcuts(ctx);
        }
        if self.show_about {
            self.render_about(ctx);
        }

        // The window close request (close button, alt+f4, window manager)
        // runs through the same gate as everything else.
        if ctx.input(|i| i.viewport().close_requested()) && !self.close_confirmed {
            if self.session.check_unsaved() == Gate::Confirm {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.pending = Some(FileAction::Quit);
                self.show_confirm = true;
            }
        }

        // Outline for the borderless window.
        ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, egui::Id::new("outline")))
            .rect_stroke(ctx.screen_rect(), 0.0, egui::Stroke::new(1.0, InkColors::BLACK));

        if self.session.has_events() {
            self.repaint.mark_needs_repaint();
        }
        self.repaint.end_frame(ctx);
    }
}
