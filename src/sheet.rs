//! Scaled sheet formats and centering-margin layout.
//!
//! Given a projection bounding box, a drawing scale, and a base sheet format,
//! computes the scaled sheet and the symmetric margins that center the
//! projection on it — or reports by how much the projection overflows.
//!
//! # Example
//!
//! ```
//! use isolayout::{Dimensions, SheetFormat, compute_layout};
//!
//! let bbox = Dimensions::new(50.0, 50.0, 50.0).project();
//! let layout = compute_layout(bbox, 1.0, SheetFormat::BASE).unwrap();
//!
//! assert!((layout.margin_left - 91.70).abs() < 0.01);
//! assert!((layout.margin_top - 46.5).abs() < 1e-9);
//! ```

use core::fmt;

use crate::projection::ProjectionBox;

/// Sheet dimensions in millimeters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetFormat {
    /// Sheet width (mm).
    pub width: f64,
    /// Sheet height (mm).
    pub height: f64,
}

impl SheetFormat {
    /// The reference sheet at scale 1:1 — 270 × 193 mm, a standard landscape
    /// sheet minus the title-block allowance.
    pub const BASE: Self = Self {
        width: 270.0,
        height: 193.0,
    };

    /// Create a new format.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale this format for a `drawing : real` ratio.
    ///
    /// Scaling is inverse: 2:1 (`scale = 2.0`) halves the physical sheet the
    /// drawing needs, 1:10 (`scale = 0.1`) enlarges it tenfold. The result is
    /// expressed in the same drawing units as the projection box.
    pub fn at_scale(self, scale: f64) -> Result<Self, LayoutError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(LayoutError::NonPositiveScale);
        }
        Ok(Self {
            width: self.width / scale,
            height: self.height / scale,
        })
    }
}

/// Computed placement of a projection on a scaled sheet.
///
/// Margins are symmetric: `margin_left` also applies to the right edge and
/// `margin_top` to the bottom. All fields are full-precision; rounding
/// happens only at presentation time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetLayout {
    /// The projection bounding box being placed.
    pub projection: ProjectionBox,
    /// The scaled sheet format.
    pub format: SheetFormat,
    /// Left (and right) margin centering the projection horizontally (mm).
    pub margin_left: f64,
    /// Top (and bottom) margin centering the projection vertically (mm).
    pub margin_top: f64,
}

impl SheetLayout {
    /// Right margin — equal to [`margin_left`](Self::margin_left) by construction.
    pub fn margin_right(&self) -> f64 {
        self.margin_left
    }

    /// Bottom margin — equal to [`margin_top`](Self::margin_top) by construction.
    pub fn margin_bottom(&self) -> f64 {
        self.margin_top
    }

    /// Whether the projection touches the sheet edge on either axis.
    pub fn is_tight(&self) -> bool {
        self.margin_left == 0.0 || self.margin_top == 0.0
    }
}

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// Scale was zero, negative, or non-finite.
    NonPositiveScale,
    /// The projection does not fit the scaled sheet.
    ///
    /// Each excess is the distance in millimeters by which that axis misses,
    /// 0 on an axis that fits — enough for a caller to suggest a smaller
    /// scale. Resolved only by the user changing scale or dimensions and
    /// recalculating.
    Overflow {
        /// How far `iso_width` exceeds the scaled format width (mm).
        width_excess: f64,
        /// How far `iso_height` exceeds the scaled format height (mm).
        height_excess: f64,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale => write!(f, "scale must be a positive, finite number"),
            Self::Overflow {
                width_excess,
                height_excess,
            } => write!(
                f,
                "dimensions exceed the format size by {width_excess:.2} × {height_excess:.2} mm; \
                 adjust the scale or reduce the dimensions"
            ),
        }
    }
}

impl core::error::Error for LayoutError {}

/// Compute the scaled sheet and centering margins for a projection.
///
/// The fit check is strict: a projection exactly as large as the sheet fits,
/// with zero margins. On overflow no partial result is produced — the caller
/// keeps whatever it was previously displaying.
pub fn compute_layout(
    projection: ProjectionBox,
    scale: f64,
    base: SheetFormat,
) -> Result<SheetLayout, LayoutError> {
    let format = base.at_scale(scale)?;

    if projection.iso_width > format.width || projection.iso_height > format.height {
        return Err(LayoutError::Overflow {
            width_excess: (projection.iso_width - format.width).max(0.0),
            height_excess: (projection.iso_height - format.height).max(0.0),
        });
    }

    Ok(SheetLayout {
        projection,
        format,
        margin_left: (format.width - projection.iso_width) / 2.0,
        margin_top: (format.height - projection.iso_height) / 2.0,
    })
}
