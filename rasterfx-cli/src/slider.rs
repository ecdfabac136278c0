use rasterfx::FilterKind;

/// Odd kernel sides selectable from the slider, one per 16 slider steps.
pub const LOWPASS_CHOICES: [u32; 16] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25, 27, 29, 31];

/// Map a 0–255 slider position to the scalar parameter of `kind`.
///
/// - threshold: the slider value itself
/// - saturation: `slider / 256 * 2`, so the range is `[0, 2)` with 1 at mid-travel
/// - lowpass: `LOWPASS_CHOICES[slider / 16]`
///
/// `none` and `convolve` take no scalar and map to `None`.
pub fn scale_slider(kind: FilterKind, slider: u8) -> Option<f64> {
    match kind {
        FilterKind::Threshold => Some(f64::from(slider)),
        FilterKind::Saturation => Some(f64::from(slider) / 256.0 * 2.0),
        FilterKind::Lowpass => Some(f64::from(LOWPASS_CHOICES[usize::from(slider / 16)])),
        FilterKind::None | FilterKind::Convolve => None,
    }
}
