//! Search results table

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::app::ItemforgeApp;

/// Table of hits with id, name and attributes columns
pub struct ResultsTable;

impl ResultsTable {
    pub fn show(ui: &mut egui::Ui, app: &mut ItemforgeApp) {
        if app.session.document().is_none() {
            Self::show_empty(ui, "No XML file loaded");
            return;
        }

        let row_height = app.config.ui.row_height;
        let selected = app.session.selected();
        let mut clicked = None;
        let mut double_clicked = false;

        let rows = app.session.results();
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(60.0))
            .column(Column::initial(180.0).at_least(80.0))
            .column(Column::remainder())
            .header(row_height, |mut header| {
                header.col(|ui| {
                    ui.strong("ID");
                });
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Attributes");
                });
            })
            .body(|body| {
                body.rows(row_height, rows.len(), |mut row| {
                    let index = row.index();
                    let Some(result) = rows.get(index) else {
                        return;
                    };
                    row.set_selected(selected == Some(index));

                    row.col(|ui| {
                        ui.label(result.id.as_deref().unwrap_or_default());
                    });
                    row.col(|ui| {
                        ui.label(result.name.as_str());
                    });
                    row.col(|ui| {
                        ui.add(egui::Label::new(result.attributes.as_str()).truncate());
                    });

                    let response = row.response();
                    if response.clicked() {
                        clicked = Some(index);
                    }
                    if response.double_clicked() {
                        clicked = Some(index);
                        double_clicked = true;
                    }
                });
            });

        if let Some(index) = clicked {
            app.session.select(Some(index));
            if double_clicked {
                app.open_editor();
            }
        }
    }

    fn show_empty(ui: &mut egui::Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label(message);
        });
    }
}
