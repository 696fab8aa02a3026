// Template engine for the generated Elm file

use crate::config::ViewConfig;
use crate::error::Result;
use tera::{Context, Tera};

const VIEW_TEMPLATE: &str = "reduced_digraph.elm";

/// Template engine wrapping Tera with the embedded Elm template
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create a new template engine with the embedded template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(
            VIEW_TEMPLATE,
            include_str!("../../templates/reduced_digraph.elm.tera"),
        )?;
        Ok(Self { tera })
    }

    /// Render the Elm source holding the dependency table and the view
    pub fn render_view(&self, config: &ViewConfig, dependency_table: &str, view: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("table_name", &config.table_name);
        context.insert("model", &config.model);
        context.insert("dependency_table", dependency_table);
        context.insert("view", view);

        Ok(self.tera.render(VIEW_TEMPLATE, &context)?)
    }
}
