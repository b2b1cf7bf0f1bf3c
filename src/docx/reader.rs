//! DOCX package reading: body paragraphs and their style names

use std::collections::HashMap;
use std::io::{Read, Seek};
use thiserror::Error;
use zip::ZipArchive;

use super::extract::Block;

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";

/// WordprocessingML main namespace
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

#[derive(Error, Debug)]
pub enum DocxError {
    #[error("Failed to read ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error in {part}: {message}")]
    Xml { part: &'static str, message: String },

    #[error("Not a Word document: {0}")]
    InvalidDocx(String),
}

/// Paragraph style names by style id
#[derive(Debug, Default)]
struct StyleSheet {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleSheet {
    fn parse(xml: &str) -> Result<Self, DocxError> {
        let doc = roxmltree::Document::parse(xml).map_err(|e| DocxError::Xml {
            part: STYLES_PART,
            message: e.to_string(),
        })?;

        let mut sheet = StyleSheet::default();

        for style in doc.descendants().filter(|n| is_w(n, "style")) {
            if style.attribute((W_NS, "type")) != Some("paragraph") {
                continue;
            }
            let Some(id) = style.attribute((W_NS, "styleId")) else {
                continue;
            };

            let name = style
                .children()
                .find(|n| is_w(n, "name"))
                .and_then(|n| n.attribute((W_NS, "val")))
                .map(ui_style_name)
                .unwrap_or_else(|| id.to_string());

            if matches!(style.attribute((W_NS, "default")), Some("1" | "true" | "on")) {
                sheet.default_paragraph = Some(name.clone());
            }
            sheet.names.insert(id.to_string(), name);
        }

        Ok(sheet)
    }

    /// Resolve a paragraph's style id to its name
    ///
    /// Unknown ids fall back to the id itself, which matches the built-in
    /// names for the common cases ("Heading1" still starts with "Heading").
    fn resolve(&self, style_id: Option<&str>) -> Option<String> {
        match style_id {
            Some(id) => Some(self.names.get(id).cloned().unwrap_or_else(|| id.to_string())),
            None => self.default_paragraph.clone(),
        }
    }
}

/// Built-in styles are stored lowercase ("heading 1") but shown as "Heading 1"
fn ui_style_name(name: &str) -> String {
    const BUILT_IN: [&str; 4] = ["heading ", "title", "subtitle", "caption"];

    if BUILT_IN.iter().any(|prefix| name.starts_with(prefix)) {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        name.to_string()
    }
}

fn is_w(node: &roxmltree::Node, local: &str) -> bool {
    node.is_element() && node.tag_name().name() == local && node.tag_name().namespace() == Some(W_NS)
}

/// Read the body paragraphs of a DOCX package in document order
///
/// Only paragraphs that are direct children of the body are returned;
/// paragraphs inside tables, headers, footers and notes are not.
pub fn read_blocks<R: Read + Seek>(reader: R) -> Result<Vec<Block>, DocxError> {
    let mut archive = ZipArchive::new(reader)?;

    let document_xml = match read_part(&mut archive, DOCUMENT_PART)? {
        Some(xml) => xml,
        None => return Err(DocxError::InvalidDocx(format!("missing {}", DOCUMENT_PART))),
    };

    let styles = match read_part(&mut archive, STYLES_PART)? {
        Some(xml) => StyleSheet::parse(&xml)?,
        None => StyleSheet::default(),
    };

    let doc = roxmltree::Document::parse(&document_xml).map_err(|e| DocxError::Xml {
        part: DOCUMENT_PART,
        message: e.to_string(),
    })?;

    let body = doc
        .root_element()
        .children()
        .find(|n| is_w(n, "body"))
        .ok_or_else(|| DocxError::InvalidDocx("document has no body".to_string()))?;

    let blocks = body
        .children()
        .filter(|n| is_w(n, "p"))
        .map(|p| Block {
            text: paragraph_text(&p),
            style: styles.resolve(paragraph_style_id(&p)),
        })
        .collect();

    Ok(blocks)
}

/// Read a part of the package, `None` if the archive has no such entry
fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, DocxError> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(Some(content))
}

fn paragraph_style_id<'a, 'input>(p: &roxmltree::Node<'a, 'input>) -> Option<&'a str> {
    p.children()
        .find(|n| is_w(n, "pPr"))?
        .children()
        .find(|n| is_w(n, "pStyle"))?
        .attribute((W_NS, "val"))
}

fn paragraph_text(p: &roxmltree::Node) -> String {
    let mut text = String::new();
    collect_runs(p, &mut text);
    text
}

/// Append the text of all runs below a paragraph-level container
fn collect_runs(container: &roxmltree::Node, text: &mut String) {
    for child in container.children().filter(|n| n.is_element()) {
        if is_w(&child, "r") {
            run_text(&child, text);
        } else if ["hyperlink", "ins", "smartTag"].iter().any(|name| is_w(&child, name)) {
            collect_runs(&child, text);
        }
    }
}

fn run_text(run: &roxmltree::Node, text: &mut String) {
    for item in run.children().filter(|n| n.is_element()) {
        match item.tag_name().name() {
            _ if item.tag_name().namespace() != Some(W_NS) => {}
            "t" => text.push_str(item.text().unwrap_or("")),
            "tab" | "ptab" => text.push('\t'),
            "br" if is_line_break(&item) => text.push('\n'),
            "cr" => text.push('\n'),
            "noBreakHyphen" => text.push('-'),
            _ => {}
        }
    }
}

/// Page and column breaks carry no text; only text-wrapping breaks do
fn is_line_break(br: &roxmltree::Node) -> bool {
    matches!(br.attribute((W_NS, "type")), None | Some("textWrapping"))
}
