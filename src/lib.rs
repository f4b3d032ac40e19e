//! Isometric projection extents and sheet margin computation for drafting layouts.
//!
//! Pure geometry — no pixel operations, no allocations in the core, `no_std`
//! compatible. Given the orthogonal extents of an object, the crate computes
//! the bounding box of its 30° isometric projection and the margins that
//! center that projection on a scaled drawing sheet.
//!
//! # Modules
//!
//! - [`projection`] — isometric bounding-box computation from orthogonal extents
//! - [`sheet`] — scaled sheet formats and centering-margin layout
//! - [`form`] — textual input normalization, scale presets, result report (feature `form`)
//! - [`svg`] — sheet preview rendering (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod projection;
pub mod sheet;

#[cfg(feature = "form")]
pub mod form;

#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from the projection and sheet modules
pub use projection::{Dimensions, ProjectionBox, project_isometric};
pub use sheet::{LayoutError, SheetFormat, SheetLayout, compute_layout};
