pub mod dump;
pub mod schema;

use std::{fs, path::Path};

use anyhow::Result;

/// Join per-file sections, prefixing each with its path when there are several.
pub fn render_sections(sections: &[(&Path, String)]) -> String {
    if let [(_, text)] = sections {
        return text.clone();
    }
    sections
        .iter()
        .map(|(path, text)| format!("==> {} <==\n{text}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `text` to `output`, or stdout if not specified.
pub fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}
