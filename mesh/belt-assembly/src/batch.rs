//! Mesh batching for finished lines.
//!
//! Batching is a pure flattening step: it walks every resolved point of
//! every connection in a finished line, stamps the straight or corner
//! prefab under that point's placement transform, and merges the
//! instances into one combined mesh. No geometry is computed beyond
//! transform composition.

use belt_mesh::{SegmentProfile, TriMesh, Vector3, corner_segment, straight_segment};
use nalgebra::{Isometry3, Translation3, UnitQuaternion};
use tracing::{info, warn};

use crate::error::{AssemblyError, AssemblyResult};
use crate::line::AssemblyLine;

/// Source geometry stamped at every route point.
///
/// Prefabs are authored to fit one unit cell, centered on the cell
/// origin: the straight prefab runs east, the corner prefab joins a
/// west entry to a north exit. Rotation indices orient them for the
/// other cardinals.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPrefabs {
    straight: TriMesh,
    corner: TriMesh,
    basis_correction: UnitQuaternion<f64>,
}

impl SegmentPrefabs {
    /// Generate prefabs from a cross-section profile.
    #[must_use]
    pub fn from_profile(profile: SegmentProfile) -> Self {
        Self::from_meshes(straight_segment(profile), corner_segment(profile))
    }

    /// Use caller-supplied prefab meshes, e.g. imported artist assets.
    #[must_use]
    pub fn from_meshes(straight: TriMesh, corner: TriMesh) -> Self {
        Self {
            straight,
            corner,
            basis_correction: UnitQuaternion::identity(),
        }
    }

    /// Fixed rotation composed after each point's orientation, for
    /// prefab meshes authored in a different basis.
    #[must_use]
    pub fn with_basis_correction(mut self, correction: UnitQuaternion<f64>) -> Self {
        self.basis_correction = correction;
        self
    }

    /// The straight segment prefab.
    #[must_use]
    pub const fn straight(&self) -> &TriMesh {
        &self.straight
    }

    /// The corner segment prefab.
    #[must_use]
    pub const fn corner(&self) -> &TriMesh {
        &self.corner
    }

    /// The basis-correction rotation.
    #[must_use]
    pub const fn basis_correction(&self) -> UnitQuaternion<f64> {
        self.basis_correction
    }
}

impl Default for SegmentPrefabs {
    fn default() -> Self {
        Self::from_profile(SegmentProfile::new())
    }
}

/// Placement parameters for batching.
///
/// # Example
///
/// ```
/// use belt_assembly::BatchConfig;
/// use belt_mesh::Vector3;
///
/// let config = BatchConfig::new()
///     .with_placement_offset(Vector3::new(-0.5, -0.5, 0.0))
///     .with_scale(1.0);
/// assert!(config.validate().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchConfig {
    placement_offset: Vector3<f64>,
    scale: f64,
}

impl BatchConfig {
    /// Create a config with the default placement offset, which centers
    /// a prefab on a unit cell, and unit scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            placement_offset: Vector3::new(-0.5, -0.5, 0.0),
            scale: 1.0,
        }
    }

    /// Set the offset added to every placed point.
    #[must_use]
    pub const fn with_placement_offset(mut self, offset: Vector3<f64>) -> Self {
        self.placement_offset = offset;
        self
    }

    /// Set the uniform scale applied to every prefab instance.
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// The offset added to every placed point.
    #[must_use]
    pub const fn placement_offset(&self) -> Vector3<f64> {
        self.placement_offset
    }

    /// The uniform scale applied to every prefab instance.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Validate the config, returning a list of issues (empty if valid).
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.scale.is_finite() || self.scale <= 0.0 {
            issues.push(format!("scale must be positive, got {}", self.scale));
        }
        if !(self.placement_offset.x.is_finite()
            && self.placement_offset.y.is_finite()
            && self.placement_offset.z.is_finite())
        {
            issues.push(format!(
                "placement offset must be finite, got {:?}",
                self.placement_offset
            ));
        }

        issues
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Flattens a finished line's resolved points into one combined mesh.
///
/// # Example
///
/// ```
/// use belt_assembly::{AssemblyLine, MeshBatcher, SegmentPrefabs};
/// use belt_grid::GridPoint;
/// use belt_route::RouteStrategy;
///
/// let mut line = AssemblyLine::new();
/// line.add_connection(
///     GridPoint::new(0, 0, 0),
///     GridPoint::new(2, 0, 0),
///     RouteStrategy::SolutionA,
/// )
/// .unwrap();
/// line.set_finished(true).unwrap();
///
/// let batcher = MeshBatcher::new(SegmentPrefabs::default());
/// let mesh = batcher.build_line_mesh(&line).unwrap();
/// assert_eq!(mesh.face_count(), 36); // three straight cells
/// ```
#[derive(Debug, Clone)]
pub struct MeshBatcher {
    prefabs: SegmentPrefabs,
    config: BatchConfig,
}

impl MeshBatcher {
    /// Create a batcher stamping the given prefabs with default
    /// placement.
    #[must_use]
    pub fn new(prefabs: SegmentPrefabs) -> Self {
        Self {
            prefabs,
            config: BatchConfig::new(),
        }
    }

    /// Replace the placement configuration.
    #[must_use]
    pub const fn with_config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    /// The placement configuration.
    #[must_use]
    pub const fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// The prefabs being stamped.
    #[must_use]
    pub const fn prefabs(&self) -> &SegmentPrefabs {
        &self.prefabs
    }

    /// Build the combined mesh for a finished line.
    ///
    /// Instances are merged per connection in chain order, per point in
    /// route order. Rebuilding the same finished line again produces a
    /// content-equal mesh.
    ///
    /// # Errors
    ///
    /// - [`AssemblyError::LineNotFinished`] if the line is still being
    ///   drawn.
    /// - [`AssemblyError::EmptyLine`] if the line has no connections.
    pub fn build_line_mesh(&self, line: &AssemblyLine) -> AssemblyResult<TriMesh> {
        if !line.is_finished() {
            warn!("Refusing to batch an unfinished line");
            return Err(AssemblyError::LineNotFinished);
        }
        if line.is_empty() {
            return Err(AssemblyError::EmptyLine);
        }

        let mut combined = TriMesh::new();
        let mut instances = 0_usize;

        for connection in line.connections() {
            debug_assert!(connection.is_resolved(), "finished line left unresolved");

            for point in connection.points() {
                let prefab = if point.is_corner() {
                    &self.prefabs.corner
                } else {
                    &self.prefabs.straight
                };

                let placement = Isometry3::from_parts(
                    Translation3::from(point.point().to_vector() + self.config.placement_offset),
                    point.rotation() * self.prefabs.basis_correction,
                );

                combined.merge(&prefab.transformed(&placement, self.config.scale));
                instances += 1;
            }
        }

        info!(
            instances,
            vertices = combined.vertex_count(),
            faces = combined.face_count(),
            "Batched line mesh"
        );

        Ok(combined)
    }

    /// Rebuild a line's geometry and install it in the line's visual,
    /// discarding whatever was there.
    ///
    /// # Errors
    ///
    /// Same conditions as [`build_line_mesh`](Self::build_line_mesh).
    pub fn rebuild(&self, line: &mut AssemblyLine) -> AssemblyResult<()> {
        let mesh = self.build_line_mesh(line)?;
        line.visual_mut().replace(mesh);
        Ok(())
    }
}

impl Default for MeshBatcher {
    fn default() -> Self {
        Self::new(SegmentPrefabs::default())
    }
}
