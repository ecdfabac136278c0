use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> PixelBuffer {
    PixelBuffer::new(width, height, px.repeat((width * height) as usize)).unwrap()
}

#[test]
fn white_stays_white_at_default_cutoff() {
    let src = solid(3, 3, [255, 255, 255, 255]);
    let out = threshold(&src, DEFAULT_THRESHOLD, ThresholdMode::PerChannel);
    assert_eq!(out, src);
}

#[test]
fn white_turns_black_at_255_cutoff() {
    let src = solid(3, 3, [255, 255, 255, 255]);
    let out = threshold(&src, 255.0, ThresholdMode::PerChannel);
    assert_eq!(out, solid(3, 3, [0, 0, 0, 255]));
}

#[test]
fn per_channel_compares_each_channel_strictly() {
    let src = PixelBuffer::new(2, 1, vec![128, 129, 0, 40, 200, 100, 250, 0]).unwrap();
    let out = threshold(&src, 128.0, ThresholdMode::PerChannel);
    assert_eq!(out.data(), &[0, 255, 0, 40, 255, 0, 255, 0]);
}

#[test]
fn luma_mode_sets_all_channels_together() {
    // Pure green has luma 182.4, pure blue 18.4.
    let src = PixelBuffer::new(2, 1, vec![0, 255, 0, 9, 0, 0, 255, 10]).unwrap();
    let out = threshold(&src, 100.0, ThresholdMode::Luma);
    assert_eq!(out.data(), &[255, 255, 255, 9, 0, 0, 0, 10]);

    let per_channel = threshold(&src, 100.0, ThresholdMode::PerChannel);
    assert_eq!(per_channel.data(), &[0, 255, 0, 9, 0, 0, 255, 10]);
}

#[test]
fn per_channel_is_idempotent() {
    let data: Vec<u8> = (0..64u32).map(|i| (i * 97 % 256) as u8).collect();
    let src = PixelBuffer::new(4, 4, data).unwrap();
    for cutoff in [0.0, 64.0, 128.0, 200.5, 255.0] {
        let once = threshold(&src, cutoff, ThresholdMode::PerChannel);
        let twice = threshold(&once, cutoff, ThresholdMode::PerChannel);
        assert_eq!(once, twice, "cutoff {cutoff}");
    }
}

#[test]
fn input_is_not_mutated() {
    let src = solid(2, 2, [10, 200, 130, 77]);
    let before = src.clone();
    let _ = threshold(&src, 128.0, ThresholdMode::Luma);
    assert_eq!(src, before);
}
