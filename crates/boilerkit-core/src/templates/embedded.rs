//! Compile-time embedded license header templates.
//!
//! Each constant loads a template file from `templates/licenses/` via
//! [`include_str!`]. The paths are relative to this source file
//! (`crates/boilerkit-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!`
//! path here, and do NOT modify template files without checking that the
//! Handlebars variables still match what the renderer passes in.

/// Apache-2.0 header: optional owner-guarded copyright line followed by the
/// full Apache 2.0 permissive-license boilerplate.
pub const APACHE2_LICENSE: &str =
    include_str!("../../../../templates/licenses/apache2.tmpl");

/// Minimal header: only the optional owner-guarded copyright line.
pub const NONE_LICENSE: &str = include_str!("../../../../templates/licenses/none.tmpl");
