//! Page-wide tuning constants.
//!
//! Observer thresholds and the nav hover fade live here so the widgets stay
//! consistent when these numbers get adjusted.

/// Opacity applied to the non-hovered nav links and the logo while one link
/// is hovered.
pub const NAV_FADE_OPACITY: f64 = 0.5;

/// Fraction of a section that must be visible before it is revealed.
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.15;

/// Fraction of a lazy image that must be visible before the real source is
/// swapped in.
pub const LAZY_IMAGE_THRESHOLD: f64 = 0.2;
