//! License boilerplate header selection.
//!
//! A [`Boilerplate`] describes the header to prepend to generated source
//! files: which license template to use, the copyright owner and year, and
//! where the resolved header file should live. [`Boilerplate::resolve`] fills
//! in the defaults and selects the template body; the body still contains
//! `{{owner}}`/`{{year}}` placeholders, which a downstream
//! [`TemplateRenderer`](crate::templates::renderer::TemplateRenderer) pass
//! substitutes.
//!
//! ## Unrecognized license kinds
//!
//! Selection is a partial function: a license other than `apache2` or `none`
//! assigns **no** template body and is **not** an error. Callers that pass an
//! unrecognized kind get an empty header back. Existing integrations depend on
//! this, so it is preserved and pinned by tests rather than turned into an
//! error.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::templates::embedded;

/// Default destination for the resolved boilerplate file, relative to the
/// scaffolded project root.
pub const DEFAULT_BOILERPLATE_PATH: &str = "hack/boilerplate.go.txt";

/// License kind selecting the Apache-2.0 header template. Also the default
/// when the license field is empty.
pub const LICENSE_APACHE2: &str = "apache2";

/// License kind selecting the minimal copyright-line-only template.
pub const LICENSE_NONE: &str = "none";

/// Configuration for a boilerplate header file.
///
/// All fields are optional; [`resolve`](Self::resolve) fills in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Boilerplate {
    /// Destination path for the generated boilerplate file.
    /// Empty means [`DEFAULT_BOILERPLATE_PATH`].
    pub path: PathBuf,

    /// Pre-supplied boilerplate content. When non-empty it is used verbatim
    /// and template selection (including the owner/year placeholders) is
    /// bypassed entirely.
    pub literal: String,

    /// License to use: `"apache2"` (default when empty) or `"none"`.
    pub license: String,

    /// Copyright owner, e.g. `"The Kubernetes Authors"`.
    pub owner: String,

    /// Copyright year as a 4-digit string. Empty means the current year.
    pub year: String,

    /// Selected template body, populated by [`resolve`](Self::resolve).
    /// Contains Handlebars placeholders, not substituted values.
    #[serde(skip)]
    pub template_body: String,
}

impl Boilerplate {
    /// Resolve defaults and select the template body.
    ///
    /// Literal boilerplate short-circuits: the text is trusted verbatim and
    /// neither the year default nor template selection runs. Otherwise the
    /// license kind picks a template; an unrecognized kind leaves
    /// `template_body` untouched (see the module docs).
    ///
    /// This operation currently cannot fail; the `Result` keeps the calling
    /// convention uniform with [`load_literal`].
    pub fn resolve(mut self) -> Result<Boilerplate> {
        if self.path.as_os_str().is_empty() {
            self.path = PathBuf::from(DEFAULT_BOILERPLATE_PATH);
        }

        if !self.literal.is_empty() {
            self.template_body = self.literal.clone();
            return Ok(self);
        }

        if self.year.is_empty() {
            self.year = current_year();
        }

        match template_for(&self.license) {
            Some(body) => self.template_body = body.to_string(),
            None => {
                tracing::warn!(
                    license = %self.license,
                    "unrecognized license kind, leaving template body unset"
                );
            }
        }

        Ok(self)
    }
}

/// Partial mapping from license kind to embedded template body.
fn template_for(license: &str) -> Option<&'static str> {
    match license {
        "" | LICENSE_APACHE2 => Some(embedded::APACHE2_LICENSE),
        LICENSE_NONE => Some(embedded::NONE_LICENSE),
        _ => None,
    }
}

/// The current calendar year as a 4-digit decimal string.
fn current_year() -> String {
    chrono::Local::now().year().to_string()
}

/// Read caller-supplied literal boilerplate text from disk.
///
/// I/O failures (missing file, unreadable file) propagate unchanged.
pub fn load_literal(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// The default destination path for the boilerplate file, obtained by
/// resolving an empty configuration.
pub fn default_path() -> Result<PathBuf> {
    Ok(Boilerplate::default().resolve()?.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_defaults_to_apache2() {
        let resolved = Boilerplate::default().resolve().unwrap();
        assert_eq!(resolved.path, PathBuf::from("hack/boilerplate.go.txt"));
        assert_eq!(resolved.template_body, embedded::APACHE2_LICENSE);
    }

    #[test]
    fn test_explicit_apache2_matches_empty() {
        let resolved = Boilerplate {
            license: "apache2".into(),
            ..Boilerplate::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(resolved.template_body, embedded::APACHE2_LICENSE);
    }

    #[test]
    fn test_license_none_is_minimal() {
        let resolved = Boilerplate {
            license: "none".into(),
            ..Boilerplate::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(resolved.template_body, embedded::NONE_LICENSE);
        assert!(!resolved.template_body.contains("Apache License"));
        assert!(resolved.template_body.contains("{{#if owner}}"));
    }

    #[test]
    fn test_unrecognized_license_is_silent_noop() {
        let result = Boilerplate {
            license: "bogus".into(),
            ..Boilerplate::default()
        }
        .resolve();
        assert!(result.is_ok());
        assert_eq!(result.unwrap().template_body, "");
    }

    #[test]
    fn test_literal_bypasses_template_selection() {
        let resolved = Boilerplate {
            literal: "// custom header\n".into(),
            license: "bogus".into(),
            owner: "Acme Inc".into(),
            ..Boilerplate::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(resolved.template_body, "// custom header\n");
        // Literal text short-circuits before the year default runs.
        assert_eq!(resolved.year, "");
    }

    #[test]
    fn test_year_defaults_to_current() {
        let resolved = Boilerplate::default().resolve().unwrap();
        assert_eq!(resolved.year, chrono::Local::now().year().to_string());
        assert_eq!(resolved.year.len(), 4);
    }

    #[test]
    fn test_explicit_year_kept() {
        let resolved = Boilerplate {
            year: "2018".into(),
            ..Boilerplate::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(resolved.year, "2018");
    }

    #[test]
    fn test_explicit_path_kept() {
        let resolved = Boilerplate {
            path: PathBuf::from("hack/custom.txt"),
            ..Boilerplate::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(resolved.path, PathBuf::from("hack/custom.txt"));
    }

    #[test]
    fn test_load_literal_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "// project header").unwrap();
        let contents = load_literal(file.path()).unwrap();
        assert_eq!(contents, "// project header");
    }

    #[test]
    fn test_load_literal_missing_file() {
        let result = load_literal(Path::new("/nonexistent/boilerplate.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_path() {
        let path = default_path();
        assert!(path.is_ok());
        assert_eq!(path.unwrap(), PathBuf::from("hack/boilerplate.go.txt"));
    }
}
