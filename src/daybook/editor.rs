use crate::error::{DaybookError, Result};
use std::env;
use std::path::Path;
use std::process::Command;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(editor) = env::var("VISUAL") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(DaybookError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Reveals the journal by opening it in the user's editor and waiting
/// for the editor to close.
pub fn reveal<P: AsRef<Path>>(file_path: P) -> Result<()> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| DaybookError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(DaybookError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(())
}
