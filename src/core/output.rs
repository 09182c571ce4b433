//! Rendering and writing decoded responses.

use serde_json::Value;
use std::{fs, io::Write, path::Path};

use crate::Result;

/// Render JSON for display, pretty-printed unless `compact`.
pub fn render_json(value: &Value, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}

/// Write a string to file, creating parent directories as needed.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Send rendered JSON to `path` if given, stdout otherwise.
pub fn emit_json(value: &Value, compact: bool, path: Option<&Path>) -> Result<()> {
    let mut rendered = render_json(value, compact)?;
    rendered.push('\n');

    match path {
        Some(path) => write_string(path, &rendered)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
