//! Size negotiation between a renderable and its host

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero or negative
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Host constraint for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The host dictates the size
    Exactly(i32),
    /// The host offers up to this many pixels
    AtMost(i32),
    /// No constraint; the value is only a hint
    Unspecified(i32),
}

/// Constraints for both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub width: MeasureSpec,
    pub height: MeasureSpec,
}

impl Constraints {
    pub const fn new(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self { width, height }
    }

    pub const fn exactly(width: i32, height: i32) -> Self {
        Self::new(MeasureSpec::Exactly(width), MeasureSpec::Exactly(height))
    }

    pub const fn unspecified() -> Self {
        Self::new(MeasureSpec::Unspecified(0), MeasureSpec::Unspecified(0))
    }
}

/// Measurement bookkeeping for a renderable.
///
/// An axis constrained by `AtMost` collapses to the previously measured value
/// (limited to the bound) instead of taking the whole offered space. Axes are
/// resolved independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    minimum: Size,
    measured: Size,
}

impl Measurement {
    pub fn new(minimum: Size) -> Self {
        let minimum = Size::new(minimum.width.max(0), minimum.height.max(0));
        Self {
            minimum,
            measured: minimum,
        }
    }

    /// The most recent measured size
    pub fn measured(&self) -> Size {
        self.measured
    }

    /// Resolve constraints and remember the result
    pub fn measure(&mut self, constraints: Constraints) -> Size {
        let size = Size::new(
            resolve(constraints.width, self.minimum.width, self.measured.width),
            resolve(constraints.height, self.minimum.height, self.measured.height),
        );
        log::trace!("Measured {:?} -> {:?}", constraints, size);
        self.measured = size;
        size
    }
}

fn resolve(spec: MeasureSpec, minimum: i32, previous: i32) -> i32 {
    match spec {
        MeasureSpec::Exactly(n) => n.max(0),
        MeasureSpec::AtMost(n) => previous.min(n).max(0),
        MeasureSpec::Unspecified(_) => minimum,
    }
}
