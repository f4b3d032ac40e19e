//! Form-input normalization, scale presets, and the printable result report.
//!
//! The presentation layer gathers three textual dimension fields and a scale
//! selection. This module turns those raw entries into core types: an entry
//! that does not parse, or parses negative, is clamped to zero — never an
//! error — with a non-fatal warning recording what was discarded.
//!
//! # Example
//!
//! ```
//! use isolayout::form::{FormInput, ScalePreset};
//!
//! let input = FormInput::new("50", "50", "50", ScalePreset::OneToOne);
//! let (layout, warnings) = input.calculate();
//!
//! assert!(warnings.is_empty());
//! let layout = layout.unwrap();
//! assert!((layout.margin_left - 91.70).abs() < 0.01);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::projection::Dimensions;
use crate::sheet::{LayoutError, SheetFormat, SheetLayout, compute_layout};

/// Clamp a raw textual entry to a usable dimension value.
///
/// Returns 0 when the text does not parse as a number, when the parsed value
/// is negative, or when it is non-finite; otherwise the parsed value
/// unchanged. This runs before any [`Dimensions`] is built — the projection
/// core does not defend against invalid input itself.
pub fn normalize(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Non-fatal warning produced while resolving raw form input.
///
/// The recovered value is always 0; warnings only record what was discarded
/// so a caller can echo it back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputWarning {
    /// The entry did not parse as a finite number.
    NotNumeric {
        /// Which form field the entry came from.
        field: &'static str,
        /// The raw entry, trimmed.
        value: String,
    },
    /// The entry parsed, but the value was negative.
    NegativeClamped {
        /// Which form field the entry came from.
        field: &'static str,
        /// The raw entry, trimmed.
        value: String,
    },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric { field, value } => {
                write!(f, "{field}: {value:?} is not a number, using 0")
            }
            Self::NegativeClamped { field, value } => {
                write!(f, "{field}: {value} is negative, using 0")
            }
        }
    }
}

/// Drawing scales exposed by the form, as `drawing : real` ratios.
///
/// A presentation-layer restriction only — [`compute_layout`] accepts any
/// positive scale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScalePreset {
    /// 2:1 — drawing at twice real size.
    TwoToOne,
    /// 1:1 — true size.
    #[default]
    OneToOne,
    /// 1:2 — half real size.
    OneToTwo,
    /// 1:5 — a fifth of real size.
    OneToFive,
    /// 1:10 — a tenth of real size.
    OneToTen,
}

impl ScalePreset {
    /// All presets, in the order the form lists them.
    pub const ALL: [Self; 5] = [
        Self::TwoToOne,
        Self::OneToOne,
        Self::OneToTwo,
        Self::OneToFive,
        Self::OneToTen,
    ];

    /// Numeric `drawing : real` factor.
    pub const fn factor(self) -> f64 {
        match self {
            Self::TwoToOne => 2.0,
            Self::OneToOne => 1.0,
            Self::OneToTwo => 0.5,
            Self::OneToFive => 0.2,
            Self::OneToTen => 0.1,
        }
    }

    /// Selector label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TwoToOne => "2:1",
            Self::OneToOne => "1:1",
            Self::OneToTwo => "1:2",
            Self::OneToFive => "1:5",
            Self::OneToTen => "1:10",
        }
    }

    /// Parse a preset from its label (`"1:2"`) or its factor text (`"0.5"`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.label() == s)
            .or_else(|| {
                let v = s.parse::<f64>().ok()?;
                Self::ALL.iter().copied().find(|p| p.factor() == v)
            })
    }
}

impl fmt::Display for ScalePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw form state: three textual dimension fields and a scale selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FormInput<'a> {
    /// Raw width entry (mm).
    pub width: &'a str,
    /// Raw depth entry (mm).
    pub depth: &'a str,
    /// Raw height entry (mm).
    pub height: &'a str,
    /// Selected drawing scale.
    pub scale: ScalePreset,
}

impl<'a> FormInput<'a> {
    /// Create a form snapshot from raw field contents.
    pub const fn new(width: &'a str, depth: &'a str, height: &'a str, scale: ScalePreset) -> Self {
        Self {
            width,
            depth,
            height,
            scale,
        }
    }

    /// Normalize all three fields into [`Dimensions`], collecting warnings.
    pub fn resolve(&self) -> ResolvedForm {
        let mut warnings = Vec::new();
        let dimensions = Dimensions::new(
            resolve_field("width", self.width, &mut warnings),
            resolve_field("depth", self.depth, &mut warnings),
            resolve_field("height", self.height, &mut warnings),
        );
        ResolvedForm {
            dimensions,
            scale: self.scale.factor(),
            warnings,
        }
    }

    /// Resolve, project, and lay out on the base sheet in one step.
    pub fn calculate(&self) -> (Result<SheetLayout, LayoutError>, Vec<InputWarning>) {
        let resolved = self.resolve();
        (resolved.layout(), resolved.warnings)
    }
}

/// Outcome of normalizing a [`FormInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedForm {
    /// Clamped dimensions, ready for projection.
    pub dimensions: Dimensions,
    /// Numeric scale factor from the selected preset.
    pub scale: f64,
    /// What was discarded during normalization.
    pub warnings: Vec<InputWarning>,
}

impl ResolvedForm {
    /// Project the dimensions and place them on the base sheet.
    pub fn layout(&self) -> Result<SheetLayout, LayoutError> {
        compute_layout(self.dimensions.project(), self.scale, SheetFormat::BASE)
    }
}

/// Normalize a single field like [`normalize`], recording a warning when a
/// non-blank entry was discarded. A blank field is an empty form slot, not a
/// typo, so it clamps silently.
fn resolve_field(field: &'static str, raw: &str, warnings: &mut Vec<InputWarning>) -> f64 {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        Ok(v) if v.is_finite() => {
            warnings.push(InputWarning::NegativeClamped {
                field,
                value: String::from(trimmed),
            });
            0.0
        }
        _ if trimmed.is_empty() => 0.0,
        _ => {
            warnings.push(InputWarning::NotNumeric {
                field,
                value: String::from(trimmed),
            });
            0.0
        }
    }
}

/// Printable result block, rounded to two decimals the way the form displays
/// it. The underlying [`SheetLayout`] stays full-precision.
#[derive(Copy, Clone, Debug)]
pub struct Report<'a> {
    layout: &'a SheetLayout,
}

impl<'a> Report<'a> {
    /// Wrap a layout for display.
    pub const fn new(layout: &'a SheetLayout) -> Self {
        Self { layout }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = self.layout;
        writeln!(f, "Format dimensions:")?;
        writeln!(f, "  width:  {:.2} mm", l.format.width)?;
        writeln!(f, "  height: {:.2} mm", l.format.height)?;
        writeln!(f, "Projected dimensions:")?;
        writeln!(f, "  width:  {:.2} mm", l.projection.iso_width)?;
        writeln!(f, "  height: {:.2} mm", l.projection.iso_height)?;
        writeln!(f, "Suggested margins:")?;
        writeln!(f, "  top and bottom: {:.2} mm", l.margin_top)?;
        write!(f, "  left and right: {:.2} mm", l.margin_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    // ── normalize ───────────────────────────────────────────────────────

    #[test]
    fn normalize_accepts_plain_numbers() {
        assert_eq!(normalize("12.5"), 12.5);
        assert_eq!(normalize(" 7 "), 7.0);
        assert_eq!(normalize("0"), 0.0);
    }

    #[test]
    fn normalize_clamps_negative_to_zero() {
        assert_eq!(normalize("-5"), 0.0);
        assert_eq!(normalize("-0.001"), 0.0);
    }

    #[test]
    fn normalize_clamps_garbage_to_zero() {
        assert_eq!(normalize("abc"), 0.0);
        assert_eq!(normalize(""), 0.0);
        assert_eq!(normalize("12,5"), 0.0);
        assert_eq!(normalize("inf"), 0.0);
        assert_eq!(normalize("NaN"), 0.0);
    }

    // ── ScalePreset ─────────────────────────────────────────────────────

    #[test]
    fn preset_factors_match_labels() {
        let expect = [
            (ScalePreset::TwoToOne, "2:1", 2.0),
            (ScalePreset::OneToOne, "1:1", 1.0),
            (ScalePreset::OneToTwo, "1:2", 0.5),
            (ScalePreset::OneToFive, "1:5", 0.2),
            (ScalePreset::OneToTen, "1:10", 0.1),
        ];
        for (preset, label, factor) in expect {
            assert_eq!(preset.label(), label);
            assert_eq!(preset.factor(), factor);
        }
    }

    #[test]
    fn preset_parses_labels_and_factors() {
        assert_eq!(ScalePreset::parse("1:5"), Some(ScalePreset::OneToFive));
        assert_eq!(ScalePreset::parse(" 2:1 "), Some(ScalePreset::TwoToOne));
        assert_eq!(ScalePreset::parse("0.5"), Some(ScalePreset::OneToTwo));
        assert_eq!(ScalePreset::parse("1"), Some(ScalePreset::OneToOne));
        assert_eq!(ScalePreset::parse("1:3"), None);
        assert_eq!(ScalePreset::parse("x"), None);
    }

    #[test]
    fn default_preset_is_true_scale() {
        assert_eq!(ScalePreset::default(), ScalePreset::OneToOne);
    }

    // ── FormInput::resolve ──────────────────────────────────────────────

    #[test]
    fn resolve_clean_input_has_no_warnings() {
        let r = FormInput::new("100", "80.5", "60", ScalePreset::OneToTwo).resolve();
        assert_eq!(r.dimensions, Dimensions::new(100.0, 80.5, 60.0));
        assert_eq!(r.scale, 0.5);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn resolve_warns_on_garbage_and_negative() {
        let r = FormInput::new("abc", "-3", "60", ScalePreset::OneToOne).resolve();
        assert_eq!(r.dimensions, Dimensions::new(0.0, 0.0, 60.0));
        assert_eq!(
            r.warnings,
            alloc::vec![
                InputWarning::NotNumeric {
                    field: "width",
                    value: String::from("abc"),
                },
                InputWarning::NegativeClamped {
                    field: "depth",
                    value: String::from("-3"),
                },
            ]
        );
    }

    #[test]
    fn blank_fields_clamp_silently() {
        let r = FormInput::new("", "  ", "50", ScalePreset::OneToOne).resolve();
        assert_eq!(r.dimensions, Dimensions::new(0.0, 0.0, 50.0));
        assert!(r.warnings.is_empty());
    }

    // ── Report ──────────────────────────────────────────────────────────

    #[test]
    fn report_rounds_to_two_decimals() {
        let (layout, _) = FormInput::new("50", "50", "50", ScalePreset::OneToOne).calculate();
        let layout = layout.unwrap();
        let report = Report::new(&layout).to_string();
        assert!(report.contains("width:  86.60 mm"));
        assert!(report.contains("left and right: 91.70 mm"));
        assert!(report.contains("top and bottom: 46.50 mm"));
        assert!(report.contains("270.00 mm"));
    }
}
