use std::ops::Div;

use crate::quantity::round_to;

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 2);

impl KilowattHours {
    pub fn round_to_hundredths(self) -> Self {
        Self(round_to(self.0, 2))
    }
}

impl Div for KilowattHours {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
