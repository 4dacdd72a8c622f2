//! Attribute edit form and commit back into the document

use std::collections::HashMap;

use super::document::{Document, Record};
use super::error::CatalogError;

/// One input field in the edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: String,
    /// Current text in the field
    pub value: String,
    /// Value when the form was opened
    pub original: String,
    /// False for a repeated key; edits only reach the first attribute
    pub editable: bool,
}

impl FormField {
    pub fn is_changed(&self) -> bool {
        self.value != self.original
    }
}

/// Editable view of a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorForm {
    /// Id of the record being edited; `None` when the item has no `id`
    pub record_id: Option<String>,
    pub record_name: String,
    pub fields: Vec<FormField>,
}

impl EditorForm {
    /// Build one field per attribute, pre-filled, in document order
    pub fn open(record: &Record) -> Self {
        let mut seen: Vec<&str> = Vec::new();
        let fields = record
            .attributes
            .iter()
            .map(|attr| {
                let editable = !seen.contains(&attr.key());
                seen.push(attr.key());
                FormField {
                    key: attr.key().to_string(),
                    value: attr.value().to_string(),
                    original: attr.value().to_string(),
                    editable,
                }
            })
            .collect();

        Self {
            record_id: record.id().map(str::to_string),
            record_name: record.name().to_string(),
            fields,
        }
    }

    /// Key to new value for every editable field
    pub fn edits(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .filter(|f| f.editable)
            .map(|f| (f.key.clone(), f.value.clone()))
            .collect()
    }

    /// Number of fields whose text differs from the opened value
    pub fn changed_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_changed()).count()
    }

    /// Restore every field to its opened value
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clone_from(&field.original);
        }
    }
}

/// Apply `edits` to the first record with id `selected`.
///
/// Fails with `Selection` when nothing is selected and `Lookup` when the id
/// no longer resolves; neither case mutates the document. Returns the number
/// of attribute values that changed.
pub fn commit(
    doc: &mut Document,
    selected: Option<&str>,
    edits: &HashMap<String, String>,
) -> Result<usize, CatalogError> {
    let id = selected.ok_or(CatalogError::Selection)?;
    let record = doc
        .find_record_by_id_mut(id)
        .ok_or_else(|| CatalogError::Lookup(id.to_string()))?;

    let changed = record.apply_edits(edits);
    if changed > 0 {
        doc.modified = true;
    }
    tracing::info!("Committed {} attribute change(s) to item {}", changed, id);
    Ok(changed)
}
