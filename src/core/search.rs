//! Name search over catalog records

use super::document::{Document, Record};

/// Whether `record` matches a query that is already lowercased
fn matches(record: &Record, lowered_query: &str) -> bool {
    let name = record.name().to_lowercase();
    name.contains(lowered_query) || name == lowered_query
}

/// Records whose name contains `query`, ignoring case, in document order.
///
/// The iterator is `Clone`, so a caller can walk the hits more than once.
/// An empty query matches every record.
pub fn search_by_name<'a>(
    doc: &'a Document,
    query: &str,
) -> impl Iterator<Item = &'a Record> + Clone + 'a {
    let lowered = query.to_lowercase();
    doc.records
        .iter()
        .filter(move |record| matches(record, &lowered))
}

/// A search hit as shown in the results table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// `None` for items without an `id`
    pub id: Option<String>,
    pub name: String,
    /// Mapping literal of the record's attributes
    pub attributes: String,
}

impl From<&Record> for ResultRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id().map(str::to_string),
            name: record.name().to_string(),
            attributes: record.attributes_repr(),
        }
    }
}

/// Collect table rows for `query`
pub fn result_rows(doc: &Document, query: &str) -> Vec<ResultRow> {
    search_by_name(doc, query).map(ResultRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Document {
        Document::with_records(vec![
            Record::new("1", "Sword").with_attribute("damage", "10"),
            Record::new("2", "Short Sword"),
            Record::new("3", "Shield"),
            Record::new("4", "SWORDFISH"),
        ])
    }

    fn ids<'a>(hits: impl Iterator<Item = &'a Record>) -> Vec<&'a str> {
        hits.filter_map(Record::id).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let doc = catalog();
        assert_eq!(ids(search_by_name(&doc, "sword")), vec!["1", "2", "4"]);
        assert_eq!(ids(search_by_name(&doc, "SHI")), vec!["3"]);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let doc = catalog();
        assert_eq!(search_by_name(&doc, "").count(), doc.records.len());
    }

    #[test]
    fn test_no_matches_is_empty() {
        let doc = catalog();
        assert_eq!(search_by_name(&doc, "axe").count(), 0);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let doc = catalog();
        let hits = search_by_name(&doc, "sword");
        let first: Vec<_> = hits.clone().collect();
        let second: Vec<_> = hits.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_hit_contains_query_once() {
        let doc = catalog();
        for query in ["s", "or", "sword", "fish", "x", ""] {
            let hits: Vec<_> = search_by_name(&doc, query).collect();
            let expected: Vec<_> = doc
                .records
                .iter()
                .filter(|r| r.name().to_lowercase().contains(&query.to_lowercase()))
                .collect();
            assert_eq!(hits, expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_result_rows() {
        let doc = catalog();
        let rows = result_rows(&doc, "sword");
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            ResultRow {
                id: Some("1".to_string()),
                name: "Sword".to_string(),
                attributes: "{'damage': '10'}".to_string(),
            }
        );
    }
}
