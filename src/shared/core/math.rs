/// Round to two decimal places, the precision every user-facing metric
/// in this API is reported with.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
