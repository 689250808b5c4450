#[macro_use]
mod macros;

pub mod cost;
pub mod distance;
pub mod energy;
pub mod percent;
pub mod price;
pub mod speed;
pub mod time;
mod zero;

pub use self::zero::Zero;

/// Round half away from zero to the given number of decimal places.
fn round_to(value: f64, decimal_places: i32) -> f64 {
    let scale = 10_f64.powi(decimal_places);
    (value * scale).round() / scale
}
