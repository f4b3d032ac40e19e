//! Isometric bounding-box computation from orthogonal extents.
//!
//! Converts real-world width/depth/height into the screen-space bounding box
//! of their isometric projection, with both horizontal axes drawn at ±30°
//! from the horizontal. Pure geometry — no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use isolayout::Dimensions;
//!
//! let bbox = Dimensions::new(50.0, 50.0, 50.0).project();
//!
//! // 2 × 50·cos 30° ≈ 86.60 wide, 50 + 2 × 50·sin 30° = 100.0 tall
//! assert!((bbox.iso_width - 86.60).abs() < 0.01);
//! assert!((bbox.iso_height - 100.0).abs() < 1e-9);
//! ```

#[allow(unused_imports)]
use num_traits::Float;

/// Isometric axis angle in degrees: both horizontal axes are drawn at ±30°
/// from the horizontal.
pub const ISO_ANGLE_DEG: f64 = 30.0;

/// Orthogonal extents of the object to draw, in millimeters.
///
/// All components are expected to be finite and ≥ 0. Raw user entries are
/// clamped by the `form` module before they reach this type — the projection
/// itself does not reject negative values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dimensions {
    /// Extent along the left-leaning horizontal axis (mm).
    pub width: f64,
    /// Extent along the right-leaning horizontal axis (mm).
    pub depth: f64,
    /// Vertical extent (mm).
    pub height: f64,
}

impl Dimensions {
    /// Create new dimensions.
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Bounding box of this object's isometric projection.
    pub fn project(&self) -> ProjectionBox {
        project_isometric(self.width, self.depth, self.height)
    }
}

/// Bounding box of an isometric projection, in millimeters.
///
/// Derived from [`Dimensions`], never mutated after creation. Both fields are
/// ≥ 0 by construction — each is a sum of absolute values, plus a
/// non-negative height for the vertical extent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ProjectionBox {
    /// Horizontal extent of the projection (mm).
    pub iso_width: f64,
    /// Vertical extent of the projection (mm).
    pub iso_height: f64,
}

/// Compute the projected bounding box for `width` × `depth` × `height` extents.
///
/// The horizontal extent is the sum of the two horizontal-axis projections;
/// the vertical extent is the true height plus the vertical contribution of
/// each horizontal axis. Absolute values keep the formula total over signed
/// input, although callers are expected to clamp negatives to zero first.
///
/// Total over finite input — no error cases, no side effects.
pub fn project_isometric(width: f64, depth: f64, height: f64) -> ProjectionBox {
    let (sin, cos) = ISO_ANGLE_DEG.to_radians().sin_cos();
    ProjectionBox {
        iso_width: (width * cos).abs() + (depth * cos).abs(),
        iso_height: height + (width * sin).abs() + (depth * sin).abs(),
    }
}
