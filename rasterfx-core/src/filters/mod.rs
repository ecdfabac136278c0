pub(crate) mod lowpass;
pub(crate) mod saturation;
pub(crate) mod threshold;
