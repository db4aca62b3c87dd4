//! File generation: read `<dest>.in`, render, write `<dest>` atomically.
//!
//! A destination path `X` is always generated from the template `X.in`
//! sitting next to it. Rendering happens fully in memory; the destination
//! is then written through a temporary file in the same directory and
//! renamed into place, so no partially substituted file is ever visible to
//! other processes — on any failure the previous destination (or its
//! absence) is untouched.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ConfgenError, Result};
use crate::properties::PropertyTable;
use crate::renderer::{self, Template};

/// Suffix appended to a destination path to locate its template.
pub const TEMPLATE_SUFFIX: &str = ".in";

/// Template path for a destination: `config.hpp` -> `config.hpp.in`.
pub fn template_path(dest: &Path) -> PathBuf {
    let mut path = dest.as_os_str().to_owned();
    path.push(TEMPLATE_SUFFIX);
    PathBuf::from(path)
}

/// Generate `dest` from `<dest>.in` using the given property table.
///
/// Fails without touching `dest` if the template is missing, malformed, or
/// references an undefined key.
pub fn generate_file(dest: &Path, properties: &PropertyTable) -> Result<()> {
    let src = template_path(dest);
    let text = std::fs::read_to_string(&src).map_err(|e| ConfgenError::TemplateNotFound {
        path: src.clone(),
        source: e,
    })?;

    let template = Template::with_source(text, src.display().to_string());
    let rendered = renderer::render(&template, properties)?;

    write_atomic(dest, &rendered)?;
    tracing::info!(
        template = %src.display(),
        dest = %dest.display(),
        "generated file"
    );
    Ok(())
}

/// Write `contents` to `dest` via a temp file in the same directory plus
/// rename, so the destination appears all at once.
fn write_atomic(dest: &Path, contents: &str) -> Result<()> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(dest).map_err(|e| ConfgenError::Io(e.error))?;
    Ok(())
}
