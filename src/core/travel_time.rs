use std::ops::Div;

use crate::quantity::time::Minutes;

/// Constant-speed travel time, used with the approximate distance.
///
/// The distance and the speed must share a unit, which the `Div` bound enforces.
#[derive(Copy, Clone, Debug)]
pub struct TravelTimeModel<S> {
    pub average_speed: S,
}

impl<S: Copy> TravelTimeModel<S> {
    pub fn estimate<D: Div<S, Output = Minutes>>(self, distance: D) -> Minutes {
        distance / self.average_speed
    }
}
