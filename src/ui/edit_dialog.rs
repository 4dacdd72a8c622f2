//! Per-record attribute edit window

use eframe::egui;

use crate::core::editor::EditorForm;

/// What the user did with the edit window this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    None,
    Save,
    Cancel,
}

/// Edit window with one text field per attribute
pub struct EditDialog;

impl EditDialog {
    pub fn show(ctx: &egui::Context, form: &mut EditorForm, title: &str) -> EditAction {
        let mut action = EditAction::None;
        let mut open = true;

        egui::Window::new(title)
            .id(egui::Id::new("edit_item_window"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                let id = form.record_id.as_deref().unwrap_or("-");
                ui.label(format!("{} (id {})", form.record_name, id));
                ui.separator();

                if form.fields.is_empty() {
                    ui.label("This item has no attributes.");
                } else {
                    egui::Grid::new("edit_item_fields")
                        .num_columns(2)
                        .spacing([8.0, 6.0])
                        .show(ui, |ui| {
                            for field in &mut form.fields {
                                ui.label(field.key.as_str());
                                ui.add_enabled(
                                    field.editable,
                                    egui::TextEdit::singleline(&mut field.value)
                                        .desired_width(240.0),
                                )
                                .on_disabled_hover_text(
                                    "Repeated key: only the first attribute with this key can be edited",
                                );
                                ui.end_row();
                            }
                        });
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        action = EditAction::Save;
                    }
                    let changed = form.changed_count();
                    if ui
                        .add_enabled(changed > 0, egui::Button::new("Reset"))
                        .clicked()
                    {
                        form.reset();
                    }
                    if ui.button("Cancel").clicked() {
                        action = EditAction::Cancel;
                    }
                    if changed > 0 {
                        ui.weak(format!("{} changed", changed));
                    }
                });
            });

        if !open {
            EditAction::Cancel
        } else {
            action
        }
    }
}
