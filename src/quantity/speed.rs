use std::ops::Div;

use crate::quantity::{
    distance::{Kilometres, Miles},
    time::Minutes,
};

quantity!(MilesPerHour, via: f64, suffix: "mph", precision: 1);

quantity!(KilometresPerHour, via: f64, suffix: "km/h", precision: 1);

impl Div<MilesPerHour> for Miles {
    type Output = Minutes;

    fn div(self, rhs: MilesPerHour) -> Self::Output {
        Minutes::from_hours(self.0 / rhs.0)
    }
}

impl Div<KilometresPerHour> for Kilometres {
    type Output = Minutes;

    fn div(self, rhs: KilometresPerHour) -> Self::Output {
        Minutes::from_hours(self.0 / rhs.0)
    }
}
