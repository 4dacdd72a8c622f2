//! Item catalog document: parsing, lookup and serialization

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::error::CatalogError;

const ITEM_TAG: &str = "item";
const ATTRIBUTE_TAG: &str = "attribute";

type XmlWriter = Writer<Vec<u8>>;

/// XML attributes of one element, in source order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlAttributes(Vec<(String, String)>);

impl XmlAttributes {
    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first value for `key`, appending when absent
    pub fn set(&mut self, key: &str, value: &str) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => value.clone_into(&mut entry.1),
            None => self.0.push((key.to_string(), value.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn push(&mut self, key: String, value: String) {
        self.0.push((key, value));
    }

    fn to_start<'a>(&'a self, name: &'a str) -> BytesStart<'a> {
        let mut start = BytesStart::new(name);
        for (key, value) in self.iter() {
            start.push_attribute((key, value));
        }
        start
    }
}

/// Content the catalog model does not interpret, kept for saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
}

/// A generic element inside [`Node`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: XmlAttributes,
    pub children: Vec<Node>,
}

/// Content interleaved with typed children; `usize` counts the typed
/// children that precede it
type Extras = Vec<(usize, Node)>;

/// A key/value pair belonging to a record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribute {
    pub attrs: XmlAttributes,
    /// Anything nested inside the `<attribute>` element
    pub children: Vec<Node>,
}

impl Attribute {
    pub fn key(&self) -> &str {
        self.attrs.get("key").unwrap_or_default()
    }

    pub fn value(&self) -> &str {
        self.attrs.get("value").unwrap_or_default()
    }

    pub fn set_value(&mut self, value: &str) {
        self.attrs.set("value", value);
    }
}

/// One catalog item
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub attrs: XmlAttributes,
    /// `<attribute>` children in document order; keys may repeat
    pub attributes: Vec<Attribute>,
    extras: Extras,
}

impl Record {
    /// Value of the `id` XML attribute. Expected to be unique, not enforced
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Match key for searches; empty when absent
    pub fn name(&self) -> &str {
        self.attrs.get("name").unwrap_or_default()
    }

    /// First attribute with the given key, mutably
    pub fn attribute_mut(&mut self, key: &str) -> Option<&mut Attribute> {
        self.attributes.iter_mut().find(|a| a.key() == key)
    }

    /// Overwrite existing attribute values from `edits`.
    ///
    /// Each key touches only the first attribute carrying it. Keys with no
    /// matching attribute are ignored, so the attribute set never grows.
    /// Returns the number of values that actually changed.
    pub fn apply_edits(&mut self, edits: &HashMap<String, String>) -> usize {
        let mut changed = 0;
        for (key, new_value) in edits {
            if let Some(attr) = self.attribute_mut(key) {
                if attr.value() != new_value {
                    attr.set_value(new_value);
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Render attributes as a mapping literal, e.g. `{'damage': '10'}`.
    ///
    /// A repeated key keeps its first position but shows its last value.
    pub fn attributes_repr(&self) -> String {
        let mut entries: Vec<(&str, &str)> = Vec::with_capacity(self.attributes.len());
        for attr in &self.attributes {
            match entries.iter_mut().find(|(k, _)| *k == attr.key()) {
                Some(entry) => entry.1 = attr.value(),
                None => entries.push((attr.key(), attr.value())),
            }
        }

        let body = entries
            .iter()
            .map(|(k, v)| format!("'{}': '{}'", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{}}}", body)
    }
}

/// Root element of the catalog file, kept so saves reproduce it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootElement {
    pub name: String,
    pub attrs: XmlAttributes,
}

impl Default for RootElement {
    fn default() -> Self {
        Self {
            name: "items".to_string(),
            attrs: XmlAttributes::default(),
        }
    }
}

/// A loaded item catalog
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// File the document was loaded from or last saved to
    pub path: Option<PathBuf>,
    pub root: RootElement,
    pub records: Vec<Record>,
    extras: Extras,
    /// Whether the document has unsaved changes
    pub modified: bool,
}

impl Document {
    /// Load and parse a catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = fs::read(path).map_err(|e| CatalogError::from_io(path, e))?;
        let text = String::from_utf8(bytes).map_err(|e| CatalogError::Parse {
            position: e.utf8_error().valid_up_to(),
            message: "file is not valid UTF-8".to_string(),
        })?;

        let mut doc = Self::parse(&text)?;
        doc.path = Some(path.to_path_buf());
        tracing::info!(
            "Loaded {} records from: {}",
            doc.records.len(),
            path.display()
        );
        Ok(doc)
    }

    /// Parse catalog XML held in memory
    pub fn parse(xml: &str) -> Result<Self, CatalogError> {
        let mut reader = Reader::from_str(xml);
        let mut builder = TreeBuilder::default();

        loop {
            let position = reader.buffer_position();
            let event = reader.read_event().map_err(|e| CatalogError::Parse {
                position: reader.buffer_position(),
                message: e.to_string(),
            })?;

            let done = builder
                .feed(event)
                .map_err(|message| CatalogError::Parse { position, message })?;
            if done {
                break;
            }
        }

        builder.finish().map_err(|message| CatalogError::Parse {
            position: xml.len(),
            message,
        })
    }

    /// Serialize to XML with a UTF-8 declaration
    pub fn to_xml(&self) -> Result<String, quick_xml::Error> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let root = self.root.attrs.to_start(&self.root.name);
        if self.records.is_empty() && self.extras.is_empty() {
            writer.write_event(Event::Empty(root))?;
        } else {
            writer.write_event(Event::Start(root))?;
            write_interleaved(&mut writer, &self.records, &self.extras, write_record)?;
            writer.write_event(Event::End(BytesEnd::new(self.root.name.as_str())))?;
        }

        let mut xml = String::from_utf8_lossy(&writer.into_inner()).into_owned();
        xml.push('\n');
        Ok(xml)
    }

    /// Write the full document to `path`
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let xml = self.to_xml().map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::other(e.to_string()),
        })?;
        fs::write(path, xml).map_err(|e| CatalogError::from_io(path, e))?;
        tracing::info!("Saved document: {}", path.display());
        Ok(())
    }

    /// Save to `path`, remember it and clear the modified flag
    pub fn save_mut(&mut self, path: &Path) -> Result<(), CatalogError> {
        self.save(path)?;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// First record whose `id` equals `id`, in document order.
    /// Records without an `id` never match.
    pub fn find_record_by_id(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    /// First record with the given id, mutably
    pub fn find_record_by_id_mut(&mut self, id: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.id() == Some(id))
    }

    /// Get the document title (file name or "Untitled")
    pub fn title(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

fn write_interleaved<T>(
    writer: &mut XmlWriter,
    items: &[T],
    extras: &[(usize, Node)],
    write_item: fn(&mut XmlWriter, &T) -> Result<(), quick_xml::Error>,
) -> Result<(), quick_xml::Error> {
    let mut extras = extras.iter().peekable();
    for (index, item) in items.iter().enumerate() {
        while let Some((_, node)) = extras.next_if(|(pos, _)| *pos <= index) {
            write_node(writer, node)?;
        }
        write_item(writer, item)?;
    }
    for (_, node) in extras {
        write_node(writer, node)?;
    }
    Ok(())
}

fn write_record(writer: &mut XmlWriter, record: &Record) -> Result<(), quick_xml::Error> {
    let start = record.attrs.to_start(ITEM_TAG);
    if record.attributes.is_empty() && record.extras.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    write_interleaved(writer, &record.attributes, &record.extras, write_attribute)?;
    writer.write_event(Event::End(BytesEnd::new(ITEM_TAG)))?;
    Ok(())
}

fn write_attribute(writer: &mut XmlWriter, attr: &Attribute) -> Result<(), quick_xml::Error> {
    write_element(writer, ATTRIBUTE_TAG, &attr.attrs, &attr.children)
}

fn write_element(
    writer: &mut XmlWriter,
    name: &str,
    attrs: &XmlAttributes,
    children: &[Node],
) -> Result<(), quick_xml::Error> {
    let start = attrs.to_start(name);
    if children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_node(writer: &mut XmlWriter, node: &Node) -> Result<(), quick_xml::Error> {
    match node {
        Node::Element(el) => write_element(writer, &el.name, &el.attrs, &el.children),
        Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text))),
        Node::CData(text) => writer.write_event(Event::CData(BytesCData::new(text.as_str()))),
        Node::Comment(text) => writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str()))),
    }
}

/// Element currently open while parsing
enum Frame {
    Root,
    Item(Record),
    Attribute(Attribute),
    Element(Element),
}

/// Incremental tree state fed by reader events
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    root: Option<RootElement>,
    root_closed: bool,
    records: Vec<Record>,
    extras: Extras,
}

impl TreeBuilder {
    /// Consume one event; returns true at end of input
    fn feed(&mut self, event: Event<'_>) -> Result<bool, String> {
        match event {
            Event::Start(ref e) => self.open(e)?,
            Event::Empty(ref e) => {
                self.open(e)?;
                self.close()?;
            }
            Event::End(_) => self.close()?,
            Event::Text(ref e) => {
                let text = e.unescape().map_err(|err| err.to_string())?;
                if !text.trim().is_empty() {
                    self.add_content(Node::Text(text.into_owned()))?;
                }
            }
            Event::CData(ref e) => {
                self.add_content(Node::CData(String::from_utf8_lossy(e).into_owned()))?;
            }
            Event::Comment(ref e) if !self.stack.is_empty() => {
                self.add_content(Node::Comment(String::from_utf8_lossy(e).into_owned()))?;
            }
            Event::Eof => return Ok(true),
            _ => {}
        }
        Ok(false)
    }

    fn open(&mut self, e: &BytesStart<'_>) -> Result<(), String> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let attrs = read_attributes(e)?;

        let frame = match self.stack.last() {
            None => {
                if self.root.is_some() {
                    return Err("more than one root element".to_string());
                }
                self.root = Some(RootElement { name, attrs });
                Frame::Root
            }
            Some(Frame::Root) if name == ITEM_TAG => Frame::Item(Record {
                attrs,
                ..Record::default()
            }),
            Some(Frame::Item(_)) if name == ATTRIBUTE_TAG => Frame::Attribute(Attribute {
                attrs,
                children: Vec::new(),
            }),
            Some(_) => Frame::Element(Element {
                name,
                attrs,
                children: Vec::new(),
            }),
        };
        self.stack.push(frame);
        Ok(())
    }

    fn close(&mut self) -> Result<(), String> {
        let frame = self
            .stack
            .pop()
            .ok_or_else(|| "closing tag without matching opening tag".to_string())?;

        match frame {
            Frame::Root => self.root_closed = true,
            Frame::Item(record) => self.records.push(record),
            Frame::Attribute(attr) => {
                if let Some(Frame::Item(record)) = self.stack.last_mut() {
                    record.attributes.push(attr);
                }
            }
            Frame::Element(el) => self.add_content(Node::Element(el))?,
        }
        Ok(())
    }

    fn add_content(&mut self, node: Node) -> Result<(), String> {
        match self.stack.last_mut() {
            None => return Err("text outside the root element".to_string()),
            Some(Frame::Root) => self.extras.push((self.records.len(), node)),
            Some(Frame::Item(record)) => {
                let position = record.attributes.len();
                record.extras.push((position, node));
            }
            Some(Frame::Attribute(attr)) => attr.children.push(node),
            Some(Frame::Element(el)) => el.children.push(node),
        }
        Ok(())
    }

    fn finish(self) -> Result<Document, String> {
        let root = self.root.ok_or_else(|| "no root element".to_string())?;
        if !self.stack.is_empty() || !self.root_closed {
            return Err(format!("unclosed element in <{}>", root.name));
        }
        Ok(Document {
            path: None,
            root,
            records: self.records,
            extras: self.extras,
            modified: false,
        })
    }
}

fn read_attributes(e: &BytesStart<'_>) -> Result<XmlAttributes, String> {
    let mut out = XmlAttributes::default();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| format!("attribute error: {}", e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| format!("attribute `{}`: {}", key, e))?
            .into_owned();
        out.push(key, value);
    }
    Ok(out)
}

#[cfg(test)]
impl Attribute {
    pub fn new(key: &str, value: &str) -> Self {
        let mut attrs = XmlAttributes::default();
        attrs.set("key", key);
        attrs.set("value", value);
        Self {
            attrs,
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Record {
    pub fn new(id: &str, name: &str) -> Self {
        let mut attrs = XmlAttributes::default();
        attrs.set("id", id);
        attrs.set("name", name);
        Self {
            attrs,
            ..Self::default()
        }
    }

    /// Builder-style attribute append
    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// First attribute with the given key
    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.key() == key)
    }
}

#[cfg(test)]
impl Document {
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<items version="2">
    <item id="1" name="Sword">
        <attribute key="damage" value="10"/>
        <attribute key="weight" value="3"/>
    </item>
    <item id="2" name="Shield"/>
    <item id="7" name="First Seven">
        <attribute key="armor" value="4"/>
    </item>
    <item id="7" name="Second Seven"/>
</items>
"#;

    const TIBIA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<items>
    <!-- ground tiles -->
    <item id="100" name="void" article="a" plural="voids">
        <attribute key="field" value="fire">
            <attribute key="ticks" value="10000"/>
        </attribute>
        <description>Hot &amp; dangerous</description>
        <attribute key="weight" value="0"/>
    </item>
    <item fromid="200" toid="205" name="grass"/>
    <group name="unused"/>
</items>
"#;

    #[test]
    fn test_parse_records_in_order() {
        let doc = Document::parse(SAMPLE).unwrap();
        assert_eq!(doc.root.name, "items");
        assert_eq!(doc.root.attrs.get("version"), Some("2"));
        assert_eq!(doc.records.len(), 4);

        let sword = &doc.records[0];
        assert_eq!(sword.id(), Some("1"));
        assert_eq!(sword.name(), "Sword");
        assert_eq!(
            sword.attributes,
            vec![Attribute::new("damage", "10"), Attribute::new("weight", "3")]
        );
        assert!(doc.records[1].attributes.is_empty());
    }

    #[test]
    fn test_find_record_by_id_returns_first_duplicate() {
        let doc = Document::parse(SAMPLE).unwrap();
        let found = doc.find_record_by_id("7").unwrap();
        assert_eq!(found.name(), "First Seven");
        assert!(doc.find_record_by_id("99").is_none());
    }

    #[test]
    fn test_missing_id_is_absent_not_empty() {
        let doc = Document::parse(
            r#"<items><item fromid="1" toid="3" name="Alpha"/><item name="Beta"><attribute key="k"/></item></items>"#,
        )
        .unwrap();
        assert_eq!(doc.records[0].id(), None);
        assert!(doc.find_record_by_id("").is_none());

        let beta = &doc.records[1];
        assert_eq!(beta.name(), "Beta");
        assert_eq!(beta.attributes[0].key(), "k");
        assert_eq!(beta.attributes[0].value(), "");
    }

    #[test]
    fn test_unknown_content_survives_save() {
        let doc = Document::parse(TIBIA).unwrap();
        let xml = doc.to_xml().unwrap();

        assert!(xml.contains(r#"<item id="100" name="void" article="a" plural="voids">"#));
        assert!(xml.contains(r#"<attribute key="ticks" value="10000"/>"#));
        assert!(xml.contains(r#"<item fromid="200" toid="205" name="grass"/>"#));
        assert!(xml.contains("<description>Hot &amp; dangerous</description>"));
        assert!(xml.contains(r#"<group name="unused"/>"#));
        assert!(xml.contains("<!-- ground tiles -->"));
        assert!(!xml.contains(r#"id="""#));

        let void = &doc.records[0];
        assert_eq!(void.attributes.len(), 2);
        assert_eq!(void.attributes[0].children.len(), 1);

        // Nested attribute stays inside its parent and order is kept
        let field = xml.find(r#"key="field""#).unwrap();
        let ticks = xml.find(r#"key="ticks""#).unwrap();
        let description = xml.find("<description>").unwrap();
        let weight = xml.find(r#"key="weight""#).unwrap();
        assert!(field < ticks && ticks < description && description < weight);

        let reparsed = Document::parse(&xml).unwrap();
        assert_eq!(reparsed.root, doc.root);
        assert_eq!(reparsed.records, doc.records);
        assert_eq!(reparsed.extras, doc.extras);
    }

    #[test]
    fn test_edit_keeps_other_xml_attributes() {
        let mut doc = Document::parse(
            r#"<items><item id="1" name="Sword"><attribute key="damage" value="10" hidden="1"/></item></items>"#,
        )
        .unwrap();
        let edits = HashMap::from([("damage".to_string(), "15".to_string())]);
        doc.records[0].apply_edits(&edits);

        let xml = doc.to_xml().unwrap();
        assert!(xml.contains(r#"<attribute key="damage" value="15" hidden="1"/>"#));
    }

    #[test]
    fn test_nested_items_are_not_records() {
        let doc = Document::parse(
            r#"<items><group><item id="9" name="Hidden"/></group><item id="1" name="Top"/></items>"#,
        )
        .unwrap();
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.records[0].name(), "Top");
    }

    #[test]
    fn test_empty_root() {
        let doc = Document::parse("<catalog/>").unwrap();
        assert_eq!(doc.root.name, "catalog");
        assert!(doc.records.is_empty());
        assert!(doc.to_xml().unwrap().contains("<catalog/>"));
    }

    #[test]
    fn test_malformed_inputs_are_parse_errors() {
        let cases = [
            "",
            "<items>",
            "<items><item id=\"1\"></items>",
            "<items></items><items></items>",
            "stray text<items/>",
            "</items>",
        ];
        for xml in cases {
            assert!(
                matches!(Document::parse(xml), Err(CatalogError::Parse { .. })),
                "expected parse error for {:?}",
                xml
            );
        }
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.xml");
        std::fs::write(&path, b"<items>\xff</items>").unwrap();

        assert!(matches!(
            Document::load(&path),
            Err(CatalogError::Parse { position: 7, .. })
        ));
    }

    #[test]
    fn test_to_xml_has_declaration_and_escapes() {
        let doc = Document::with_records(vec![
            Record::new("1", "Bow & \"Arrow\"").with_attribute("note", "<fast>"),
            Record::new("2", "Empty"),
        ]);

        let xml = doc.to_xml().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("&amp;"));
        assert!(xml.contains("&lt;fast&gt;"));
        assert!(xml.contains(r#"<item id="2" name="Empty"/>"#));

        let reparsed = Document::parse(&xml).unwrap();
        assert_eq!(reparsed.records, doc.records);
    }

    #[test]
    fn test_save_and_reload_preserves_structure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("items.xml");
        std::fs::write(&source, SAMPLE).unwrap();

        let original = Document::load(&source).unwrap();
        let target = dir.path().join("copy.xml");
        original.save(&target).unwrap();

        let reloaded = Document::load(&target).unwrap();
        assert_eq!(reloaded.root, original.root);
        assert_eq!(reloaded.records, original.records);
        assert_eq!(reloaded.path.as_deref(), Some(target.as_path()));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.xml");
        assert!(matches!(
            Document::load(&missing),
            Err(CatalogError::NotFound(ref p)) if p == &missing
        ));
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no_such_dir").join("out.xml");
        let doc = Document::parse(SAMPLE).unwrap();
        assert!(matches!(
            doc.save(&target),
            Err(CatalogError::NotFound(_)) | Err(CatalogError::Io { .. })
        ));
    }

    #[test]
    fn test_save_mut_clears_modified() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("saved.xml");
        let mut doc = Document::parse(SAMPLE).unwrap();
        doc.modified = true;

        doc.save_mut(&target).unwrap();
        assert!(!doc.modified);
        assert_eq!(doc.title(), "saved.xml");
    }

    #[test]
    fn test_apply_edits_first_match_only() {
        let mut record = Record::new("1", "Sword")
            .with_attribute("damage", "10")
            .with_attribute("damage", "20");
        let edits = HashMap::from([
            ("damage".to_string(), "15".to_string()),
            ("nonexistent_key".to_string(), "x".to_string()),
        ]);

        assert_eq!(record.apply_edits(&edits), 1);
        assert_eq!(
            record.attributes,
            vec![Attribute::new("damage", "15"), Attribute::new("damage", "20")]
        );
    }

    #[test]
    fn test_attributes_repr() {
        let record = Record::new("1", "Sword")
            .with_attribute("damage", "10")
            .with_attribute("weight", "3")
            .with_attribute("damage", "12");
        assert_eq!(record.attributes_repr(), "{'damage': '12', 'weight': '3'}");
        assert_eq!(Record::new("2", "Empty").attributes_repr(), "{}");
    }
}
