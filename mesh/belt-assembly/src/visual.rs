//! Visual handle for a line's combined geometry.

use belt_mesh::TriMesh;

/// Handle to a line's renderable geometry.
///
/// The core never holds a live rendering-engine object. Each line owns
/// one `LineVisual`; batching installs combined meshes into it and the
/// host layer polls [`revision`](Self::revision) to learn when its
/// GPU-side copy is stale.
///
/// # Example
///
/// ```
/// use belt_assembly::LineVisual;
/// use belt_mesh::TriMesh;
///
/// let mut visual = LineVisual::new();
/// assert_eq!(visual.revision(), 0);
///
/// visual.replace(TriMesh::new());
/// assert_eq!(visual.revision(), 1);
/// assert!(visual.mesh().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineVisual {
    mesh: Option<TriMesh>,
    revision: u64,
}

impl LineVisual {
    /// Create an empty visual with nothing to render.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mesh: None,
            revision: 0,
        }
    }

    /// The installed combined mesh, if any.
    #[inline]
    #[must_use]
    pub const fn mesh(&self) -> Option<&TriMesh> {
        self.mesh.as_ref()
    }

    /// Counter bumped every time the renderable content changes.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Discard the installed mesh.
    ///
    /// The revision is bumped only if there was something to discard.
    pub fn clear(&mut self) {
        if self.mesh.take().is_some() {
            self.revision += 1;
        }
    }

    /// Replace the installed mesh, discarding any previous one.
    pub fn replace(&mut self, mesh: TriMesh) {
        self.mesh = Some(mesh);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_empty_keeps_revision() {
        let mut visual = LineVisual::new();
        visual.clear();
        assert_eq!(visual.revision(), 0);
    }

    #[test]
    fn test_replace_then_clear_bumps_revision() {
        let mut visual = LineVisual::new();

        visual.replace(TriMesh::new());
        assert_eq!(visual.revision(), 1);

        visual.clear();
        assert!(visual.mesh().is_none());
        assert_eq!(visual.revision(), 2);
    }

    #[test]
    fn test_replace_discards_previous() {
        let mut visual = LineVisual::new();
        visual.replace(TriMesh::new());
        visual.replace(TriMesh::new());

        assert_eq!(visual.revision(), 2);
        assert!(visual.mesh().is_some());
    }
}
