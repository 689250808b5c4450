use crate::quantity::round_to;

quantity!(
    /// State of charge or any other share, in percent.
    Percent, via: f64, suffix: "%", precision: 1
);

impl Percent {
    pub const FULL: Self = Self(100.0);

    pub const fn from_proportion(proportion: f64) -> Self {
        Self(proportion * 100.0)
    }

    pub fn round_to_tenths(self) -> Self {
        Self(round_to(self.0, 1))
    }
}
