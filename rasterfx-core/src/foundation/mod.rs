pub(crate) mod buffer;
pub(crate) mod error;
pub(crate) mod math;
