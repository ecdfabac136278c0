//! rasterfx is a pixel filtering engine for in-memory RGBA8 images.
//!
//! A collaborator decodes an image into a [`PixelBuffer`]; rasterfx turns it into a new buffer of
//! the same dimensions; the collaborator displays or encodes the result.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: a filter name and scalar parameter (or a [`FilterSpec`]) become a typed
//!    [`Filter`].
//! 2. **Apply**: [`apply_filter`] / [`FilterContext::apply`] run the filter and return a freshly
//!    allocated buffer. Inputs are never mutated.
//!
//! Filters:
//!
//! - [`threshold`]: per-channel or luma binarization.
//! - [`saturation`]: luma-weighted color matrix blended with identity.
//! - [`lowpass`]: box average built on the zero-padded correlation engine ([`convolve()`]).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: every filter is a function of its inputs; no shared mutable state.
//! - **Explicit overflow policy**: out-of-range channel values are stored according to
//!   [`ChannelPolicy`], never treated as errors.
//! - **No file formats**: decoding and encoding belong to the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod convolve;
mod dispatch;
mod filters;
mod foundation;

pub use convolve::engine::{convolve, convolve_in_pool};
pub use convolve::kernel::Kernel;
pub use dispatch::apply::{FilterContext, apply_chain, apply_filter, dispatch};
pub use dispatch::filter::{Filter, FilterKind, FilterSpec, parse_filter};
pub use dispatch::settings::FilterSettings;
pub use filters::lowpass::{DEFAULT_LOWPASS_SIZE, MAX_LOWPASS_SIZE, lowpass, lowpass_kernel};
pub use filters::saturation::{DEFAULT_SATURATION, SaturationMatrix, saturation};
pub use filters::threshold::{DEFAULT_THRESHOLD, ThresholdMode, threshold};
pub use foundation::buffer::{Channel, PixelBuffer};
pub use foundation::error::{RasterFxError, RasterFxResult};
pub use foundation::math::ChannelPolicy;
