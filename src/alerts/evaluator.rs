/// Strict greater-than trigger test. A value sitting exactly on the threshold
/// does not trigger, so a metric oscillating at the limit does not alternate
/// between tick outcomes. There is no hysteresis band.
pub fn exceeds(value: f32, threshold: f32) -> bool {
    value > threshold
}
