//! UI components for Itemforge

pub mod edit_dialog;
pub mod file_dialogs;
pub mod notice;
pub mod results_table;
pub mod search_bar;
