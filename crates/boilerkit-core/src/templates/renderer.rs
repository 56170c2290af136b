//! Handlebars-based renderer for the owner/year substitution pass.
//!
//! The boilerplate resolver leaves `{{owner}}`/`{{year}}` placeholders in the
//! selected template body; this renderer is the downstream collaborator that
//! substitutes them. It wraps the [`handlebars::Handlebars`] engine with
//! **strict mode** enabled, so any `{{variable}}` referenced in a template
//! must be present in the data context — otherwise rendering returns an error
//! instead of silently emitting an empty string. A silently missing variable
//! would produce a half-rendered license header that nobody notices until the
//! generated file is reviewed.
//!
//! The conditional copyright line uses `{{#if owner}}`: Handlebars treats an
//! empty string as falsy, so the line appears exactly when an owner is set.
//! Callers must always supply both `owner` and `year` keys (empty owner is
//! fine, a missing key is a strict-mode error).

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{BoilerkitError, Result};

/// Template renderer for license header placeholder substitution.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| BoilerkitError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::embedded;
    use serde_json::json;

    #[test]
    fn test_owner_line_present_when_owner_set() {
        let renderer = TemplateRenderer::new();
        let data = json!({ "owner": "Acme Inc", "year": "2018" });
        let output = renderer.render(embedded::APACHE2_LICENSE, &data).unwrap();
        assert!(output.contains("Copyright 2018 Acme Inc.\n\nLicensed under the Apache License"));
    }

    #[test]
    fn test_owner_line_absent_when_owner_empty() {
        let renderer = TemplateRenderer::new();
        let data = json!({ "owner": "", "year": "2018" });
        let output = renderer.render(embedded::APACHE2_LICENSE, &data).unwrap();
        assert!(!output.contains("Copyright"));
        assert!(output.contains("Licensed under the Apache License"));
    }

    #[test]
    fn test_none_template_with_owner() {
        let renderer = TemplateRenderer::new();
        let data = json!({ "owner": "Acme Inc", "year": "2018" });
        let output = renderer.render(embedded::NONE_LICENSE, &data).unwrap();
        assert_eq!(output, "/*\nCopyright 2018 Acme Inc.\n*/\n");
    }

    #[test]
    fn test_none_template_without_owner() {
        let renderer = TemplateRenderer::new();
        let data = json!({ "owner": "", "year": "2018" });
        let output = renderer.render(embedded::NONE_LICENSE, &data).unwrap();
        assert_eq!(output, "/*\n*/\n");
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("Hello {{missing}}", &json!({}));
        assert!(matches!(result, Err(BoilerkitError::TemplateRender(_))));
    }
}
