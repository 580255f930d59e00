//! Resolution of diagram identifiers to static wiring diagram resources.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SizingError;
use crate::sizing::diagram::DiagramId;

/// Source of wiring diagram documents.
///
/// Selection stays in [`crate::sizing::diagram`]; implementors only answer
/// whether a resource exists for an identifier and return its contents.
pub trait DiagramStore: Send + Sync {
    /// Returns the diagram document for `id`.
    ///
    /// # Errors
    ///
    /// Returns `SizingError::DiagramNotFound` if no resource backs `id`.
    fn fetch(&self, id: DiagramId) -> Result<String, SizingError>;
}

/// Diagrams stored as `<root>/<identifier>.html` files.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location a diagram is expected at, whether or not it exists.
    pub fn path_for(&self, id: DiagramId) -> PathBuf {
        self.root.join(format!("{id}.html"))
    }

    /// Identifiers with no backing file, for startup diagnostics.
    pub fn missing(&self) -> Vec<DiagramId> {
        DiagramId::ALL
            .into_iter()
            .filter(|id| !self.path_for(*id).is_file())
            .collect()
    }
}

impl DiagramStore for DirectoryStore {
    fn fetch(&self, id: DiagramId) -> Result<String, SizingError> {
        let path = self.path_for(id);
        match fs::read_to_string(&path) {
            Ok(doc) => Ok(doc),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SizingError::DiagramNotFound(id)),
            Err(e) => Err(SizingError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetches_existing_diagram() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("conexion_20_paneles.html"), "<p>20</p>").unwrap();

        let store = DirectoryStore::new(dir.path());
        assert_eq!(store.fetch(DiagramId::TwentyPanels).unwrap(), "<p>20</p>");
    }

    #[test]
    fn missing_file_is_diagram_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        assert!(matches!(
            store.fetch(DiagramId::Default),
            Err(SizingError::DiagramNotFound(DiagramId::Default))
        ));
    }

    #[test]
    fn reports_missing_identifiers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("conexion_10_paneles.html"), "x").unwrap();
        let store = DirectoryStore::new(dir.path());
        assert_eq!(
            store.missing(),
            vec![DiagramId::TwentyPanels, DiagramId::Default]
        );
    }

    #[test]
    fn shipped_diagrams_are_complete() {
        let store = DirectoryStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static/diagrams"));
        assert!(store.missing().is_empty());
    }
}
