use super::*;
use crate::{
    convolve::kernel::Kernel, filters::threshold::ThresholdMode, foundation::math::ChannelPolicy,
};

fn sample(width: u32, height: u32) -> PixelBuffer {
    let data: Vec<u8> = (0..width * height * 4)
        .map(|i| (i * 89 % 251) as u8)
        .collect();
    PixelBuffer::new(width, height, data).unwrap()
}

#[test]
fn none_is_a_byte_identical_copy() {
    let src = sample(5, 3);
    assert_eq!(apply_filter(&Filter::None, &src).unwrap(), src);
    assert_eq!(dispatch("none", None, &src).unwrap(), src);
}

#[test]
fn dispatch_resolves_names_and_reports_unknown_ones() {
    let src = sample(2, 2);
    let by_name = dispatch("threshold", Some(100.0), &src).unwrap();
    let direct = threshold(&src, 100.0, ThresholdMode::PerChannel);
    assert_eq!(by_name, direct);

    let err = dispatch("posterize", None, &src).unwrap_err();
    assert!(matches!(err, RasterFxError::UnknownFilter(_)));
}

#[test]
fn every_filter_preserves_dimensions() {
    let src = sample(7, 4);
    let filters = [
        Filter::None,
        Filter::Threshold {
            value: 128.0,
            mode: ThresholdMode::Luma,
        },
        Filter::Saturation { level: 2.0 },
        Filter::Lowpass { size: 3 },
        Filter::Convolve {
            kernel: Kernel::new(vec![1.0, 0.0, 0.0, -1.0]).unwrap(),
        },
    ];
    for f in &filters {
        let out = apply_filter(f, &src).unwrap();
        assert_eq!((out.width(), out.height()), (7, 4), "{f:?}");
    }
}

#[test]
fn chain_feeds_each_output_into_the_next_filter() {
    let src = sample(4, 4);
    let chain = [
        Filter::Saturation { level: 0.0 },
        Filter::Threshold {
            value: 128.0,
            mode: ThresholdMode::PerChannel,
        },
    ];
    let out = apply_chain(&chain, &src).unwrap();
    let manual = apply_filter(&chain[1], &apply_filter(&chain[0], &src).unwrap()).unwrap();
    assert_eq!(out, manual);

    assert_eq!(apply_chain(&[], &src).unwrap(), src);
}

#[test]
fn chain_stops_at_first_error() {
    let src = sample(2, 2);
    let chain = [Filter::Saturation { level: 1.5 }, Filter::Lowpass { size: 0 }];
    let err = apply_chain(&chain, &src).unwrap_err();
    assert!(matches!(err, RasterFxError::InvalidParameter(_)));
}

#[test]
fn parallel_context_matches_sequential() {
    let src = sample(23, 11);
    let seq = FilterContext::new(FilterSettings::default()).unwrap();
    let par = FilterContext::new(FilterSettings {
        parallel: true,
        threads: Some(4),
        ..FilterSettings::default()
    })
    .unwrap();

    for f in [
        Filter::Lowpass { size: 5 },
        Filter::Convolve {
            kernel: Kernel::new(vec![0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0]).unwrap(),
        },
    ] {
        assert_eq!(seq.apply(&f, &src).unwrap(), par.apply(&f, &src).unwrap());
    }
}

#[test]
fn context_uses_configured_channel_policy() {
    let src = PixelBuffer::new(1, 1, vec![200, 100, 50, 255]).unwrap();
    let wrap = FilterContext::new(FilterSettings {
        channel_policy: ChannelPolicy::Wrap,
        ..FilterSettings::default()
    })
    .unwrap();
    assert_eq!(wrap.settings().channel_policy, ChannelPolicy::Wrap);

    let out = wrap.apply(&Filter::Saturation { level: 2.0 }, &src).unwrap();
    assert_eq!(out.data(), &[17, 73, 230, 255]);

    let out = apply_filter(&Filter::Saturation { level: 2.0 }, &src).unwrap();
    assert_eq!(out.data(), &[255, 73, 0, 255]);
}

#[test]
fn context_rejects_zero_threads() {
    let err = FilterContext::new(FilterSettings {
        parallel: true,
        threads: Some(0),
        ..FilterSettings::default()
    })
    .err()
    .unwrap();
    assert!(matches!(err, RasterFxError::Settings(_)));
}
