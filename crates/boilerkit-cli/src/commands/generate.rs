use std::path::PathBuf;

use anyhow::Result;

use boilerkit_core::boilerplate::{self, Boilerplate};
use boilerkit_core::templates::renderer::TemplateRenderer;

use crate::output;
use crate::BoilerplateArgs;

/// Resolve the boilerplate header, substitute owner/year, and write it to its
/// destination (or stdout).
///
/// This command is the "external collaborator" that the core library leaves
/// file writes and placeholder substitution to. Literal boilerplate text is
/// trusted verbatim and skips the substitution pass.
pub fn run(args: &BoilerplateArgs, to_stdout: bool) -> Result<()> {
    let mut config = Boilerplate {
        path: PathBuf::from(&args.path),
        license: args.license.clone(),
        owner: args.owner.clone(),
        year: args.year.clone(),
        ..Boilerplate::default()
    };

    if let Some(file) = &args.boilerplate_file {
        config.literal = boilerplate::load_literal(file)?;
    }

    let resolved = config.resolve()?;

    if resolved.template_body.is_empty() {
        output::print_warning(&format!(
            "unrecognized license '{}' produced an empty header",
            resolved.license
        ));
    }

    let header = if resolved.literal.is_empty() {
        let renderer = TemplateRenderer::new();
        let data = serde_json::json!({
            "owner": resolved.owner,
            "year": resolved.year,
        });
        renderer.render(&resolved.template_body, &data)?
    } else {
        resolved.template_body.clone()
    };

    if to_stdout {
        print!("{header}");
        return Ok(());
    }

    if let Some(parent) = resolved.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&resolved.path, header)?;

    output::print_success(&format!(
        "wrote boilerplate to {}",
        resolved.path.display()
    ));
    Ok(())
}
