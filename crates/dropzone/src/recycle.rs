use crate::Trash;
use notch_core::{NotchError, Result};
use std::path::Path;

/// The platform recycle bin / freedesktop trash.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTrash;

impl Trash for SystemTrash {
    fn move_to_trash(&self, path: &Path) -> Result<()> {
        trash::delete(path).map_err(|e| NotchError::Trash(e.to_string()))
    }
}
