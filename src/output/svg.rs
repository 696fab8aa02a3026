// SVG element tree as produced by `dot -Tsvg`

use crate::error::Result;
use std::path::Path;

/// Namespace of SVG elements
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// Namespace of `xlink:` attributes
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
/// Namespace of `xml:` attributes
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// One element of the rendered image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNode {
    /// Element namespace URI
    pub namespace: Option<String>,
    /// Local tag name (`g`, `ellipse`, `text`, ...)
    pub kind: String,
    /// Attributes in document order
    pub attributes: Vec<Attribute>,
    /// Element children in document order
    pub children: Vec<ImageNode>,
    /// Text before the first child element
    pub text: Option<String>,
}

/// An element attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: Option<String>,
    pub name: String,
    pub value: String,
}

impl ImageNode {
    /// Create an empty SVG element
    pub fn new(kind: &str) -> Self {
        Self {
            namespace: Some(SVG_NAMESPACE.to_string()),
            kind: kind.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push(Attribute {
            namespace: None,
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Add a child element
    pub fn with_child(mut self, child: ImageNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the text content
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Parse an SVG document and return its root element
    pub fn parse(svg: &str) -> Result<Self> {
        // dot writes a DOCTYPE pointing at the SVG 1.1 DTD
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(svg, options)?;
        Ok(Self::from_element(doc.root_element()))
    }

    /// Read and parse an SVG file
    pub fn load(path: &Path) -> Result<Self> {
        let svg = std::fs::read_to_string(path)?;
        Self::parse(&svg)
    }

    fn from_element(node: roxmltree::Node<'_, '_>) -> Self {
        let tag = node.tag_name();

        let attributes = node
            .attributes()
            .map(|attr| Attribute {
                namespace: attr.namespace().map(str::to_string),
                name: attr.name().to_string(),
                value: attr.value().to_string(),
            })
            .collect();

        // Text up to the first child element; comments in between are skipped
        let mut text: Option<String> = None;
        for child in node.children() {
            if child.is_element() {
                break;
            }
            if child.is_text() {
                if let Some(t) = child.text() {
                    text.get_or_insert_with(String::new).push_str(t);
                }
            }
        }

        let children = node
            .children()
            .filter(|c| c.is_element())
            .map(Self::from_element)
            .collect();

        Self {
            namespace: tag.namespace().map(str::to_string),
            kind: tag.name().to_string(),
            attributes,
            children,
            text,
        }
    }

    /// Full tag in `{namespace}name` form
    pub fn tag(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{{{}}}{}", ns, self.kind),
            None => self.kind.clone(),
        }
    }

    /// Text content, if it has anything besides whitespace
    pub fn label(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Whether this element is in the SVG namespace
    pub fn is_svg(&self) -> bool {
        self.namespace.as_deref() == Some(SVG_NAMESPACE)
    }
}
