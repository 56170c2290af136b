//! Core library for boilerkit.
//!
//! Resolves the copyright/license boilerplate header that a code-scaffolding
//! tool prepends to generated source files. The [`boilerplate`] module selects
//! a header template (or accepts caller-supplied literal text), and the
//! [`templates`] module holds the embedded template bodies plus the Handlebars
//! renderer that performs the final owner/year substitution.
//!
//! Writing the resolved header to disk is deliberately left to the caller;
//! this crate only produces the text and the destination path.

pub mod boilerplate;
pub mod error;
pub mod templates;
