//! Query input row

use eframe::egui;

use crate::app::ItemforgeApp;

/// Label, query field and search button
pub struct SearchBar;

impl SearchBar {
    pub fn show(ui: &mut egui::Ui, app: &mut ItemforgeApp) {
        let mut submit = false;

        ui.horizontal(|ui| {
            ui.label(app.labels.enter_item_name.as_str());

            let response = ui.add(
                egui::TextEdit::singleline(&mut app.query)
                    .id(egui::Id::new("query_input"))
                    .desired_width(240.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            if ui.button(app.labels.search.as_str()).clicked() {
                submit = true;
            }
        });

        if submit {
            app.run_search();
        }
    }
}
