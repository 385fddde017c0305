//! Theme engine - converts composed element trees into the final HTML page.

mod html;

pub use html::{html_escape, render_element};

use anyhow::{Context, Result};
use tera::{Context as TeraContext, Tera};

/// Built-in page layout: sidebar, topbar, routed content region.
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Tera-backed page renderer.
#[derive(Debug)]
pub struct ThemeEngine {
    tera: Tera,
}

impl ThemeEngine {
    /// Create the engine with the built-in page template.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("page.html", PAGE_TEMPLATE)
            .context("failed to register page template")?;
        Ok(Self { tera })
    }

    /// Render the full page.
    ///
    /// `context` carries the pass-through store snapshots and the render
    /// timestamp; sidebar and content arrive pre-rendered since the element
    /// renderer has already escaped them.
    pub fn render_page(
        &self,
        app_title: &str,
        page_title: &str,
        sidebar_html: &str,
        content_html: &str,
        context: &mut TeraContext,
    ) -> Result<String> {
        context.insert("app_title", app_title);
        context.insert("page_title", page_title);
        context.insert("sidebar", sidebar_html);
        context.insert("content", content_html);

        self.tera
            .render("page.html", context)
            .context("failed to render page template")
    }
}
