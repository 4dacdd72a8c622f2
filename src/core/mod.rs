//! Core functionality: catalog model, search, editing, configuration and language packs

pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod file_system;
pub mod language;
pub mod search;
pub mod session;
