use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, warning};
use std::path::Path;

/// A missing file is always writable, an existing one only with `force`
/// or after the user agrees to overwrite it.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    if !confirm("Overwrite?") {
        return Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ));
    }

    info("Existing file will be overwritten.");
    Ok(())
}
