//! License header templates for boilerkit.
//!
//! Template bodies are embedded into the binary at compile-time via
//! [`include_str!`] in the [`embedded`] module, then rendered at runtime with
//! [Handlebars](https://handlebarsjs.com/) via the
//! [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Templates use Handlebars syntax. Available variables:
//! - `{{owner}}` — copyright holder; the whole copyright line is guarded by
//!   `{{#if owner}}` so it only appears when an owner is set
//! - `{{year}}` — 4-digit copyright year
//!
//! ## Adding a new template
//!
//! 1. Create the `.tmpl` file under `templates/licenses/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Map a license kind to it in `boilerplate::template_for`
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`]
//! must stay in sync. The `include_str!` paths are relative to this file and
//! checked at compile-time.

pub mod embedded;
pub mod renderer;
