use i_overlay::mesh::style::{LineCap, LineJoin};

/// Shape of the corner inserted where two offset edges meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinType {
    /// Sharp corners, cut back once they exceed the miter limit.
    #[default]
    Miter,
    /// Circular arcs.
    Round,
    /// Corners cut flat.
    Square,
}

/// How the ends of the offset input are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndType {
    /// Input encloses an area; the area grows or shrinks.
    ClosedPolygon,
    /// Input is a closed ring used as a line; both sides are traced.
    ClosedLine,
    /// Open line with square caps extended by the offset distance.
    OpenSquare,
    /// Open line with round caps.
    OpenRound,
    /// Open line cut flat at its end points.
    OpenButt,
}

/// Parameters for offsetting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetParams {
    /// Corner style.
    pub join: JoinType,
    /// Maximum miter length as a multiple of the offset distance.
    pub miter_limit: f64,
    /// Angular step in radians used to approximate round joins and caps.
    pub arc_step: f64,
    /// End treatment for open paths. When unset, open paths get square caps
    /// with miter joins and round caps otherwise.
    pub end: Option<EndType>,
}

impl Default for OffsetParams {
    fn default() -> Self {
        Self {
            join: JoinType::Miter,
            miter_limit: 1.2,
            arc_step: 0.1,
            end: None,
        }
    }
}

impl OffsetParams {
    /// Parameters with the given join style and default limits.
    #[must_use]
    pub fn with_join(mut self, join: JoinType) -> Self {
        self.join = join;
        self
    }

    #[must_use]
    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    #[must_use]
    pub fn with_arc_step(mut self, arc_step: f64) -> Self {
        self.arc_step = arc_step;
        self
    }

    /// Treats open paths as `end` describes: capped lines for the `Open*`
    /// variants, a ring for [`EndType::ClosedLine`] and an area for
    /// [`EndType::ClosedPolygon`].
    #[must_use]
    pub fn with_end(mut self, end: EndType) -> Self {
        self.end = Some(end);
        self
    }

    /// End treatment of an open path under these parameters.
    #[must_use]
    pub fn open_end(&self) -> EndType {
        self.end.unwrap_or(match self.join {
            JoinType::Miter => EndType::OpenSquare,
            JoinType::Round | JoinType::Square => EndType::OpenRound,
        })
    }

    /// Smallest corner angle that still gets a sharp miter.
    ///
    /// A miter at interior angle `θ` is `1 / sin(θ / 2)` times the offset
    /// distance long, so the limit converts to `θ = 2·asin(1 / limit)`.
    #[must_use]
    pub fn min_miter_angle(&self) -> f64 {
        if self.miter_limit <= 1.0 {
            return std::f64::consts::PI;
        }
        2.0 * (1.0 / self.miter_limit).asin()
    }

    pub(crate) fn line_join(&self) -> LineJoin<f64> {
        match self.join {
            JoinType::Miter => LineJoin::Miter(self.min_miter_angle()),
            JoinType::Round => LineJoin::Round(self.arc_step),
            JoinType::Square => LineJoin::Bevel,
        }
    }

    pub(crate) fn line_cap(&self, end: EndType) -> LineCap<[f64; 2], f64> {
        match end {
            EndType::OpenRound => LineCap::Round(self.arc_step),
            EndType::OpenSquare => LineCap::Square,
            EndType::OpenButt | EndType::ClosedLine | EndType::ClosedPolygon => LineCap::Butt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = OffsetParams::default();
        assert_eq!(params.join, JoinType::Miter);
        assert!((params.miter_limit - 1.2).abs() < 1e-12);
        assert_eq!(params.open_end(), EndType::OpenSquare);
    }

    #[test]
    fn end_override() {
        let round = OffsetParams::default().with_join(JoinType::Round);
        assert_eq!(round.open_end(), EndType::OpenRound);
        assert_eq!(round.with_end(EndType::OpenButt).open_end(), EndType::OpenButt);
    }

    #[test]
    fn miter_limit_to_angle() {
        let params = OffsetParams::default().with_miter_limit(2.0);
        // 1 / sin(30°) == 2
        assert!((params.min_miter_angle() - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
        let blunt = OffsetParams::default().with_miter_limit(1.0);
        assert!((blunt.min_miter_angle() - std::f64::consts::PI).abs() < 1e-12);
    }
}
