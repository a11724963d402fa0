/// Linear map of `value` from the `input` range onto the `output` range.
/// The result is clamped to the output range; ranges may be descending.
pub fn remap(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_start == in_end {
        return out_start;
    }
    let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + progress * (out_end - out_start)
}
