use crate::quantity::round_to;

quantity!(
    /// Ground distance in statute miles.
    Miles, via: f64, suffix: "mi", precision: 1
);

impl Miles {
    pub const KILOMETRES_PER_MILE: f64 = 1.609_344;

    pub const fn from_kilometres(kilometres: f64) -> Self {
        Self(kilometres / Self::KILOMETRES_PER_MILE)
    }

    pub const fn from_metres(metres: f64) -> Self {
        Self::from_kilometres(metres / 1000.0)
    }

    pub fn round_to_tenths(self) -> Self {
        Self(round_to(self.0, 1))
    }
}

quantity!(Kilometres, via: f64, suffix: "km", precision: 1);

impl Kilometres {
    pub fn round_to_tenths(self) -> Self {
        Self(round_to(self.0, 1))
    }
}

impl From<Kilometres> for Miles {
    fn from(kilometres: Kilometres) -> Self {
        Self::from_kilometres(kilometres.0)
    }
}
