// Elm code generation
//
// Turns the laid-out SVG into an expression built from the elm/svg
// constructors, and the dependency graph into a `Dict` literal. Lists are
// written one item per line in Elm's leading-comma style.

use crate::analysis::DependencyGraph;
use crate::config::ViewConfig;
use crate::error::{Error, Result};
use crate::output::svg::{Attribute, ImageNode, XLINK_NAMESPACE, XML_NAMESPACE};

const INDENT: &str = "  ";
const TABLE_INDENT: &str = "    ";

/// State carried through one pre-order walk of the image tree
#[derive(Debug, Clone, Default)]
pub struct TraversalContext {
    output: String,
    last_label: String,
}

impl TraversalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start as if `label` had already been seen
    pub fn with_label(label: &str) -> Self {
        Self {
            output: String::new(),
            last_label: label.to_string(),
        }
    }

    /// Most recent non-empty text content, or `""` before any
    pub fn last_label(&self) -> &str {
        &self.last_label
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

/// Translator from the image tree to Elm view code
#[derive(Debug, Clone)]
pub struct SvgTranslator {
    color_function: String,
    model: String,
}

impl SvgTranslator {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            color_function: config.color_function.clone(),
            model: config.model.clone(),
        }
    }

    /// Translate a whole document starting at `root`
    pub fn translate(&self, root: &ImageNode) -> Result<String> {
        let mut ctx = TraversalContext::new();
        self.write_node(&mut ctx, root, 1)?;
        Ok(ctx.into_output())
    }

    /// Append the expression for `node` to `ctx`.
    ///
    /// The constructor name goes at the current write position; its attribute
    /// and child lists follow on new lines, indented one level deeper than
    /// `indent`.
    pub fn write_node(&self, ctx: &mut TraversalContext, node: &ImageNode, indent: usize) -> Result<()> {
        if !node.is_svg() {
            return Err(Error::UnrecognizedElement(node.tag()));
        }

        let pad = INDENT.repeat(indent + 1);
        ctx.output.push_str(&constructor_name(&node.kind));
        ctx.output.push('\n');

        if node.attributes.is_empty() {
            ctx.output.push_str(&pad);
            ctx.output.push_str("[]\n");
        } else {
            for (i, attr) in node.attributes.iter().enumerate() {
                let name = attribute_name(node, attr)?;
                let value = self.attribute_value(&node.kind, attr, &ctx.last_label);
                ctx.output.push_str(&pad);
                ctx.output.push_str(if i == 0 { "[ " } else { ", " });
                ctx.output.push_str(&format!("{} {}\n", name, value));
            }
            ctx.output.push_str(&pad);
            ctx.output.push_str("]\n");
        }

        if let Some(label) = node.label() {
            ctx.last_label = label.to_string();
            ctx.output.push_str(&pad);
            ctx.output.push_str(&format!("[ Svg.text {} ]\n", elm_string(label)));
        } else if node.children.is_empty() {
            ctx.output.push_str(&pad);
            ctx.output.push_str("[]\n");
        } else {
            for (i, child) in node.children.iter().enumerate() {
                ctx.output.push_str(&pad);
                ctx.output.push_str(if i == 0 { "[ " } else { ", " });
                self.write_node(ctx, child, indent + 2)?;
            }
            ctx.output.push_str(&pad);
            ctx.output.push_str("]\n");
        }

        Ok(())
    }

    /// Ellipse fills are looked up at runtime by node label; every other
    /// value is a string literal.
    fn attribute_value(&self, kind: &str, attr: &Attribute, label: &str) -> String {
        if kind == "ellipse" && attr.namespace.is_none() && attr.name == "fill" {
            format!("({} {} {})", self.color_function, self.model, elm_string(label))
        } else {
            elm_string(&attr.value)
        }
    }
}

impl Default for SvgTranslator {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

/// Elm constructor for an SVG element
pub fn constructor_name(kind: &str) -> String {
    match kind {
        "title" | "path" | "svg" => format!("Svg.{}", kind),
        "text" => "Svg.text_".to_string(),
        _ => kind.to_string(),
    }
}

/// Elm attribute function for an SVG attribute
fn attribute_name(node: &ImageNode, attr: &Attribute) -> Result<String> {
    let qualified = match attr.namespace.as_deref() {
        None => attr.name.clone(),
        Some(XLINK_NAMESPACE) => format!("xlink-{}", attr.name),
        Some(XML_NAMESPACE) => format!("xml-{}", attr.name),
        Some(ns) => {
            return Err(Error::UnrecognizedAttribute {
                element: node.tag(),
                attribute: format!("{{{}}}{}", ns, attr.name),
            })
        }
    };

    let name = dehyphenate(&qualified);
    Ok(match name.as_str() {
        "type" | "in" => format!("{}_", name),
        _ => name,
    })
}

/// Convert a hyphenated name to camelCase: `text-anchor` becomes `textAnchor`.
///
/// Every hyphen is removed and the character after it upper-cased.
pub fn dehyphenate(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Quote a string as an Elm string literal
pub fn elm_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Items of the `Dict.fromList` literal mapping each module to its
/// in-project dependencies
pub fn dependency_table(graph: &DependencyGraph) -> String {
    if graph.is_empty() {
        return format!("{}[]", TABLE_INDENT);
    }

    let mut out = String::new();
    for (i, (name, deps)) in graph.modules().enumerate() {
        let deps: Vec<String> = deps.iter().map(|d| elm_string(d)).collect();
        out.push_str(TABLE_INDENT);
        out.push_str(if i == 0 { "[ " } else { ", " });
        out.push_str(&format!("({}, [{}])\n", elm_string(name), deps.join(", ")));
    }
    out.push_str(TABLE_INDENT);
    out.push(']');
    out
}
