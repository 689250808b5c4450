use crate::quantity::round_to;

quantity!(
    /// Amount in pounds sterling.
    Cost, via: f64, suffix: "GBP", precision: 2
);

impl Cost {
    pub fn round_to_pennies(self) -> Self {
        Self(round_to(self.0, 2))
    }
}
