use i_overlay::core::fill_rule::FillRule as OverlayFillRule;
use i_overlay::core::overlay_rule::OverlayRule;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    Union,
    Intersection,
    Difference,
    Xor,
}

impl BooleanOp {
    pub(crate) fn overlay_rule(self) -> OverlayRule {
        match self {
            Self::Union => OverlayRule::Union,
            Self::Intersection => OverlayRule::Intersect,
            Self::Difference => OverlayRule::Difference,
            Self::Xor => OverlayRule::Xor,
        }
    }
}

/// Rule deciding which regions of overlapping contours count as filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillRule {
    /// Filled where the ray crossing count is odd.
    #[default]
    EvenOdd,
    /// Filled where the winding number is non-zero.
    NonZero,
    /// Filled where the winding number is positive.
    Positive,
    /// Filled where the winding number is negative.
    Negative,
}

impl FillRule {
    pub(crate) fn overlay_fill_rule(self) -> OverlayFillRule {
        match self {
            Self::EvenOdd => OverlayFillRule::EvenOdd,
            Self::NonZero => OverlayFillRule::NonZero,
            Self::Positive => OverlayFillRule::Positive,
            Self::Negative => OverlayFillRule::Negative,
        }
    }
}
