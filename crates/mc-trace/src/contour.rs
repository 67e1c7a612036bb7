use mc_core::{Coord, Dims};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceOutcome {
    /// The walk re-entered its seed; the sequence ends with the seed again.
    ///
    /// Closing only means the walk got back to the seed. On thin or
    /// diagonal-only shapes that can happen before every boundary pixel was
    /// visited, so a closed sequence is not guaranteed to be the full outline.
    Closed,
    DeadEnd,
    Revisited,
    StepLimit,
}

impl TraceOutcome {
    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::DeadEnd => "dead_end",
            Self::Revisited => "revisited",
            Self::StepLimit => "step_limit",
        }
    }
}

/// One traced walk. `points` always starts with the seed, so it is never
/// empty for contours produced by a trace or a scan; [`Contour::seed`] panics
/// on a hand-built contour without points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<Coord>,
    pub outcome: TraceOutcome,
    /// Pixels claimed for this contour. For a bare trace this is the boundary
    /// itself; the scanner adds the interior of the seed's region.
    pub region_size: usize,
}

impl Contour {
    pub fn is_closed(&self) -> bool {
        self.outcome.is_closed()
    }

    pub fn seed(&self) -> Coord {
        self.points[0]
    }

    /// Boundary pixels without the closing repeat of the seed.
    pub fn boundary(&self) -> &[Coord] {
        match self.points.split_last() {
            Some((_, head)) if self.is_closed() => head,
            _ => &self.points,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContourSet {
    pub dims: Dims,
    pub intensity: u8,
    pub contours: Vec<Contour>,
}

impl ContourSet {
    pub fn count(&self) -> usize {
        self.contours.len()
    }

    pub fn num_closed(&self) -> usize {
        self.contours.iter().filter(|c| c.is_closed()).count()
    }

    pub fn num_open(&self) -> usize {
        self.count() - self.num_closed()
    }

    pub fn iter_closed(&self) -> impl Iterator<Item = &Contour> {
        self.contours.iter().filter(|c| c.is_closed())
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }
}
