//! Main application state and UI coordination

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::editor::EditorForm;
use crate::core::error::CatalogError;
use crate::core::file_system::{display_name, existing_files, is_xml_file};
use crate::core::language::{available_languages, Labels, LoadedLabels};
use crate::core::session::Session;
use crate::ui::edit_dialog::{EditAction, EditDialog};
use crate::ui::file_dialogs;
use crate::ui::notice::{Notice, NoticeModal, QuitChoice, QuitDialog};
use crate::ui::results_table::ResultsTable;
use crate::ui::search_bar::SearchBar;

const APP_NAME: &str = "Item Management Tool";

/// Main application state
pub struct ItemforgeApp {
    /// Loaded catalog, results and selection
    pub session: Session,
    /// Application configuration
    pub config: AppConfig,
    /// Active language pack
    pub labels: Labels,
    /// Code of the active language pack
    pub language: String,
    /// Text in the query field
    pub query: String,
    /// Open edit window, if any
    pub edit_form: Option<EditorForm>,
    /// Notices waiting to be dismissed, oldest first
    pub notices: VecDeque<Notice>,
    /// Whether the quit confirmation is showing
    pub confirm_quit: bool,
    /// Set once the user confirmed quitting
    allow_close: bool,
    /// Last title sent to the viewport
    window_title: String,
}

impl ItemforgeApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, loaded: LoadedLabels) -> Self {
        Self::apply_theme(&cc.egui_ctx, config.is_dark_theme());

        let mut app = Self {
            session: Session::new(),
            config,
            labels: loaded.labels,
            language: loaded.language,
            query: String::new(),
            edit_form: None,
            notices: VecDeque::new(),
            confirm_quit: false,
            allow_close: false,
            window_title: String::new(),
        };

        if loaded.fell_back {
            app.notify(Notice::error("Language file not found. Defaulting to English."));
        }

        // Reopen last file if it is still there
        if let Some(path) = app.config.last_file.clone().filter(|p| p.is_file()) {
            if let Err(e) = app.session.load(&path) {
                app.report_error("reopen last file", &e);
            }
        }

        app
    }

    fn apply_theme(ctx: &egui::Context, dark: bool) {
        ctx.set_visuals(if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    /// Queue a blocking notice
    pub fn notify(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    fn report_error(&mut self, action: &str, err: &CatalogError) {
        tracing::error!("Failed to {}: {}", action, err);
        self.notify(Notice::error(err.to_string()));
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    /// Ask for a file and load it
    pub fn load_file_dialog(&mut self) {
        let start_dir = self
            .session
            .document()
            .and_then(|d| d.path.as_deref())
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        if let Some(path) = file_dialogs::pick_xml_file(start_dir.as_deref()) {
            self.load_path(path);
        }
    }

    /// Load a catalog, keeping the current one on failure
    pub fn load_path(&mut self, path: PathBuf) {
        match self.session.load(&path) {
            Ok(_) => {
                self.edit_form = None;
                self.config.add_recent_file(path);
                self.save_config();
                self.notify(Notice::info("XML file loaded successfully."));
            }
            Err(e) => self.report_error("load file", &e),
        }
    }

    /// Search with the current query text
    pub fn run_search(&mut self) {
        match self.session.search(&self.query) {
            Ok(0) => self.notify(Notice::info("No items found.")),
            Ok(_) => {}
            Err(e) => self.report_error("search", &e),
        }
    }

    /// Open the edit window for the selected row
    pub fn open_editor(&mut self) {
        match self.session.open_editor() {
            Ok(form) => self.edit_form = Some(form),
            Err(e) => self.report_error("open editor", &e),
        }
    }

    fn commit_edit(&mut self, form: &EditorForm) {
        match self.session.commit(form) {
            Ok(_) => self.notify(Notice::info("Item updated.")),
            Err(e) => self.report_error("update item", &e),
        }
    }

    /// Ask for a destination and save the catalog
    pub fn save_file_dialog(&mut self) {
        let Some(doc) = self.session.document() else {
            self.report_error("save file", &CatalogError::NoDocument);
            return;
        };

        let current = doc.path.clone();
        let Some(path) = file_dialogs::pick_save_path(current.as_deref()) else {
            return;
        };

        match self.session.save_as(&path) {
            Ok(()) => {
                self.config.add_recent_file(path);
                self.save_config();
                self.notify(Notice::info("File saved successfully."));
            }
            Err(e) => self.report_error("save file", &e),
        }
    }

    /// Switch language pack and remember the choice
    pub fn set_language(&mut self, code: &str) {
        match Labels::load(&self.config.get_lang_dir(), code) {
            Ok(loaded) => {
                self.labels = loaded.labels;
                self.language = loaded.language;
                self.config.language = self.language.clone();
                self.save_config();
            }
            Err(e) => {
                tracing::error!("Failed to load language {}: {:#}", code, e);
                self.notify(Notice::error(format!("{:#}", e)));
            }
        }
    }

    fn set_theme(&mut self, ctx: &egui::Context, dark: bool) {
        self.config.ui.theme = if dark { "dark" } else { "light" }.to_string();
        Self::apply_theme(ctx, dark);
        self.save_config();
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let title = match self.session.document() {
            Some(doc) => {
                let marker = if doc.modified { "*" } else { "" };
                format!("{}{} - {}", doc.title(), marker, APP_NAME)
            }
            None => APP_NAME.to_string(),
        };

        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (load, save, edit, dropped) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::O),
                i.modifiers.command && i.key_pressed(egui::Key::S),
                i.modifiers.command && i.key_pressed(egui::Key::E),
                i.raw
                    .dropped_files
                    .iter()
                    .filter_map(|f| f.path.clone())
                    .find(|p| is_xml_file(p)),
            )
        });

        if load {
            self.load_file_dialog();
        }
        if save {
            self.save_file_dialog();
        }
        if edit {
            self.open_editor();
        }
        if let Some(path) = dropped {
            self.load_path(path);
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.allow_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.confirm_quit = true;
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button(format!("{}...", self.labels.load_file)).clicked() {
                        ui.close();
                        self.load_file_dialog();
                    }
                    if ui.button(format!("{}...", self.labels.save_file)).clicked() {
                        ui.close();
                        self.save_file_dialog();
                    }

                    let recent = existing_files(&self.config.recent_files);
                    ui.add_enabled_ui(!recent.is_empty(), |ui| {
                        ui.menu_button("Recent Files", |ui| {
                            for path in recent {
                                if ui
                                    .button(display_name(&path))
                                    .on_hover_text(path.display().to_string())
                                    .clicked()
                                {
                                    ui.close();
                                    self.load_path(path);
                                }
                            }
                        });
                    });

                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ui.close();
                        self.confirm_quit = true;
                    }
                });

                ui.menu_button("View", |ui| {
                    let dark = self.config.is_dark_theme();
                    if ui.selectable_label(dark, "Dark Theme").clicked() {
                        self.set_theme(ui.ctx(), true);
                        ui.close();
                    }
                    if ui.selectable_label(!dark, "Light Theme").clicked() {
                        self.set_theme(ui.ctx(), false);
                        ui.close();
                    }

                    ui.separator();
                    ui.menu_button("Language", |ui| {
                        for code in available_languages(&self.config.get_lang_dir()) {
                            if ui.selectable_label(self.language == code, code.as_str()).clicked() {
                                self.set_language(&code);
                                ui.close();
                            }
                        }
                    });
                });
            });
        });
    }

    /// Render edit, save and load buttons with a status line
    fn render_action_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("action_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button(self.labels.edit_item.as_str()).clicked() {
                    self.open_editor();
                }
                if ui.button(self.labels.save_file.as_str()).clicked() {
                    self.save_file_dialog();
                }
                if ui.button(self.labels.load_file.as_str()).clicked() {
                    self.load_file_dialog();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(doc) = self.session.document() {
                        ui.weak(format!(
                            "{} of {} items",
                            self.session.results().len(),
                            doc.records.len()
                        ));
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    /// Render the windows and modals layered over the main view
    fn render_overlays(&mut self, ctx: &egui::Context) {
        if let Some(form) = self.edit_form.as_mut() {
            match EditDialog::show(ctx, form, &self.labels.edit_item) {
                EditAction::Save => {
                    if let Some(form) = self.edit_form.take() {
                        self.commit_edit(&form);
                    }
                }
                EditAction::Cancel => self.edit_form = None,
                EditAction::None => {}
            }
        }

        if let Some(notice) = self.notices.front() {
            if NoticeModal::show(ctx, notice) {
                self.notices.pop_front();
            }
        } else if self.confirm_quit {
            match QuitDialog::show(ctx, self.session.is_modified()) {
                QuitChoice::Quit => {
                    self.confirm_quit = false;
                    self.allow_close = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                QuitChoice::Stay => self.confirm_quit = false,
                QuitChoice::Pending => {}
            }
        }
    }
}

impl eframe::App for ItemforgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.update_title(ctx);

        self.render_menu_bar(ctx);

        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            SearchBar::show(ui, self);
            ui.add_space(6.0);
        });

        self.render_action_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ResultsTable::show(ui, self);
        });

        self.render_overlays(ctx);
    }
}
