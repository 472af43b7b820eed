//! Per-decoration measurement state for the two-phase measure/relayout cycle.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered width of one decoration, as known to its control instance.
pub enum MeasureState {
    /// Not laid out yet; slot padding uses the static table.
    #[default]
    Unmeasured,
    /// Last observed rendered width in pixels.
    Measured(u32),
}

impl MeasureState {
    /// Records a width read from the DOM.
    ///
    /// Returns `true` when the state changed and the control must re-resolve its padding. Zero
    /// widths are ignored: the decoration has not been laid out, and a measured slot never falls
    /// back to `Unmeasured`.
    pub fn observe(&mut self, width: u32) -> bool {
        if width == 0 || *self == Self::Measured(width) {
            return false;
        }
        *self = Self::Measured(width);
        true
    }

    /// Width to feed the slot resolver.
    pub fn width(self) -> Option<u32> {
        match self {
            Self::Unmeasured => None,
            Self::Measured(width) => Some(width),
        }
    }
}
