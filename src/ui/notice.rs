//! Blocking notices and the quit confirmation

use eframe::egui;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message the user must dismiss before continuing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "Info",
            NoticeKind::Error => "Error",
        }
    }
}

/// Modal showing one notice
pub struct NoticeModal;

impl NoticeModal {
    /// Show the notice; returns true once dismissed
    pub fn show(ctx: &egui::Context, notice: &Notice) -> bool {
        let mut dismissed = false;

        let response = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
            ui.set_min_width(260.0);
            match notice.kind {
                NoticeKind::Info => ui.heading(notice.title()),
                NoticeKind::Error => ui.heading(
                    egui::RichText::new(notice.title()).color(ui.visuals().error_fg_color),
                ),
            };
            ui.add_space(8.0);
            ui.label(notice.message.as_str());
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

        dismissed || response.should_close()
    }
}

/// Answer from the quit confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitChoice {
    Pending,
    Quit,
    Stay,
}

/// "Do you want to quit?" confirmation
pub struct QuitDialog;

impl QuitDialog {
    pub fn show(ctx: &egui::Context, unsaved_changes: bool) -> QuitChoice {
        let mut choice = QuitChoice::Pending;

        let response = egui::Modal::new(egui::Id::new("quit_modal")).show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.heading("Quit");
            ui.add_space(8.0);
            ui.label("Do you want to quit?");
            if unsaved_changes {
                ui.label(
                    egui::RichText::new("The loaded file has unsaved changes.")
                        .color(ui.visuals().warn_fg_color),
                );
            }
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Cancel").clicked() {
                    choice = QuitChoice::Stay;
                }
                if ui.button("OK").clicked() {
                    choice = QuitChoice::Quit;
                }
            });
        });

        if choice == QuitChoice::Pending && response.should_close() {
            QuitChoice::Stay
        } else {
            choice
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_titles() {
        assert_eq!(Notice::info("Item updated.").title(), "Info");
        assert_eq!(Notice::error("No item selected.").title(), "Error");
    }
}
