//! Application session: the loaded document plus search and selection state

use std::path::Path;

use super::document::Document;
use super::editor::{self, EditorForm};
use super::error::CatalogError;
use super::search::{self, ResultRow};

/// Everything load, search, edit and save operate on
#[derive(Debug, Default)]
pub struct Session {
    document: Option<Document>,
    /// Trimmed text of the last successful search
    last_query: Option<String>,
    results: Vec<ResultRow>,
    selected: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn results(&self) -> &[ResultRow] {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_modified(&self) -> bool {
        self.document.as_ref().is_some_and(|d| d.modified)
    }

    /// Replace the document with the one at `path`.
    ///
    /// On failure the current document, results and selection are kept.
    pub fn load(&mut self, path: &Path) -> Result<usize, CatalogError> {
        let doc = Document::load(path)?;
        let count = doc.records.len();
        self.document = Some(doc);
        self.last_query = None;
        self.results.clear();
        self.selected = None;
        Ok(count)
    }

    /// Run a name search and replace the result rows. Returns the hit count.
    pub fn search(&mut self, query: &str) -> Result<usize, CatalogError> {
        let doc = self.document.as_ref().ok_or(CatalogError::NoDocument)?;
        let query = query.trim();
        self.results = search::result_rows(doc, query);
        self.last_query = Some(query.to_string());
        self.selected = None;
        Ok(self.results.len())
    }

    /// Select a result row; out-of-range indices clear the selection
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.results.len());
    }

    /// Open the edit form for the selected row.
    ///
    /// A row without an `id` cannot be resolved and gives `Lookup`.
    pub fn open_editor(&self) -> Result<EditorForm, CatalogError> {
        let doc = self.document.as_ref().ok_or(CatalogError::NoDocument)?;
        let row = self
            .selected
            .and_then(|i| self.results.get(i))
            .ok_or(CatalogError::Selection)?;
        let id = row
            .id
            .as_deref()
            .ok_or_else(|| CatalogError::Lookup(row.name.clone()))?;
        let record = doc
            .find_record_by_id(id)
            .ok_or_else(|| CatalogError::Lookup(id.to_string()))?;
        Ok(EditorForm::open(record))
    }

    /// Write form values back and refresh the result rows
    pub fn commit(&mut self, form: &EditorForm) -> Result<usize, CatalogError> {
        let doc = self.document.as_mut().ok_or(CatalogError::NoDocument)?;
        let id = form
            .record_id
            .as_deref()
            .ok_or_else(|| CatalogError::Lookup(form.record_name.clone()))?;
        let changed = editor::commit(doc, Some(id), &form.edits())?;
        self.refresh_results();
        Ok(changed)
    }

    /// Save the document to `path`
    pub fn save_as(&mut self, path: &Path) -> Result<(), CatalogError> {
        let doc = self.document.as_mut().ok_or(CatalogError::NoDocument)?;
        doc.save_mut(path)
    }

    /// Re-run the last query, keeping the selection when still in range
    fn refresh_results(&mut self) {
        let (Some(doc), Some(query)) = (self.document.as_ref(), self.last_query.as_deref()) else {
            return;
        };
        self.results = search::result_rows(doc, query);
        self.selected = self.selected.filter(|&i| i < self.results.len());
    }
}

#[cfg(test)]
impl Session {
    /// Id of the selected result row
    pub fn selected_id(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.results.get(i))
            .and_then(|row| row.id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SWORD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<items>
  <item id="1" name="Sword">
    <attribute key="damage" value="10"/>
  </item>
  <item id="2" name="Bow">
    <attribute key="range" value="30"/>
  </item>
</items>
"#;

    fn loaded() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.xml");
        fs::write(&path, SWORD).unwrap();
        let mut session = Session::new();
        session.load(&path).unwrap();
        (dir, session)
    }

    #[test]
    fn test_search_before_load() {
        let mut session = Session::new();
        assert!(matches!(session.search("x"), Err(CatalogError::NoDocument)));
    }

    #[test]
    fn test_failed_load_keeps_document() {
        let (dir, mut session) = loaded();
        session.search("").unwrap();
        session.select(Some(1));

        let missing = dir.path().join("missing.xml");
        assert!(matches!(session.load(&missing), Err(CatalogError::NotFound(_))));

        let broken = dir.path().join("broken.xml");
        fs::write(&broken, "<items><item></items>").unwrap();
        assert!(matches!(session.load(&broken), Err(CatalogError::Parse { .. })));

        assert_eq!(session.document().unwrap().records.len(), 2);
        assert_eq!(session.results().len(), 2);
        assert_eq!(session.selected_id(), Some("2"));
    }

    #[test]
    fn test_search_trims_query() {
        let (_dir, mut session) = loaded();
        assert_eq!(session.search("  SWORD ").unwrap(), 1);
        assert_eq!(session.results()[0].id.as_deref(), Some("1"));
        assert_eq!(session.search("axe").unwrap(), 0);
    }

    #[test]
    fn test_open_editor_requires_selection() {
        let (_dir, mut session) = loaded();
        session.search("").unwrap();
        assert!(matches!(session.open_editor(), Err(CatalogError::Selection)));

        session.select(Some(5));
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_edit_save_reload_scenario() {
        let (dir, mut session) = loaded();
        assert_eq!(session.search("sword").unwrap(), 1);
        session.select(Some(0));

        let mut form = session.open_editor().unwrap();
        form.fields[0].value = "15".to_string();
        assert_eq!(session.commit(&form).unwrap(), 1);
        assert!(session.is_modified());
        assert_eq!(session.results()[0].attributes, "{'damage': '15'}");

        let out = dir.path().join("out.xml");
        session.save_as(&out).unwrap();
        assert!(!session.is_modified());

        let reloaded = Document::load(&out).unwrap();
        let sword = reloaded.find_record_by_id("1").unwrap();
        assert_eq!(sword.attribute("damage").unwrap().value(), "15");
    }

    #[test]
    fn test_row_without_id_is_not_editable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranges.xml");
        fs::write(
            &path,
            r#"<items>
  <item fromid="100" toid="105" name="Alpha"><attribute key="weight" value="1"/></item>
  <item fromid="200" toid="205" name="Beta"><attribute key="weight" value="2"/></item>
</items>"#,
        )
        .unwrap();
        let mut session = Session::new();
        session.load(&path).unwrap();

        assert_eq!(session.search("beta").unwrap(), 1);
        session.select(Some(0));
        assert_eq!(session.selected_id(), None);
        assert!(matches!(
            session.open_editor(),
            Err(CatalogError::Lookup(ref name)) if name == "Beta"
        ));

        let form = EditorForm::open(&session.document().unwrap().records[1]);
        assert!(matches!(session.commit(&form), Err(CatalogError::Lookup(_))));

        let doc = session.document().unwrap();
        assert!(!doc.modified);
        assert_eq!(doc.records[0].attributes[0].value(), "1");
        assert_eq!(doc.records[1].attributes[0].value(), "2");
    }

    #[test]
    fn test_save_without_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        assert!(matches!(
            session.save_as(&dir.path().join("x.xml")),
            Err(CatalogError::NoDocument)
        ));
    }
}
