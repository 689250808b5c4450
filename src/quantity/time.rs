quantity!(Minutes, via: i64, suffix: "min", precision: 0);

impl Minutes {
    /// Whole minutes, rounded half away from zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_hours(hours: f64) -> Self {
        Self((hours * 60.0).round() as i64)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn from_seconds(seconds: f64) -> Self {
        Self((seconds / 60.0).round() as i64)
    }

    #[allow(clippy::cast_precision_loss)]
    pub const fn as_hours(self) -> f64 {
        self.0 as f64 / 60.0
    }
}
