use super::*;

#[test]
fn size_one_is_identity_on_opaque_images() {
    let src = PixelBuffer::new(
        2,
        2,
        vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 255, 255, 255,
        ],
    )
    .unwrap();
    let out = lowpass(&src, 1, ChannelPolicy::Clamp).unwrap();
    assert_eq!(out, src);
}

#[test]
fn averages_with_zero_padding() {
    // 3x1 row, 3x3 box: the middle pixel sees three samples of nine.
    let src = PixelBuffer::new(3, 1, [90u8, 180, 9, 0].repeat(3)).unwrap();
    let out = lowpass(&src, 3, ChannelPolicy::Clamp).unwrap();
    assert_eq!(out.pixel(1, 0), Some([30, 60, 3, 255]));
    assert_eq!(out.pixel(0, 0), Some([20, 40, 2, 255]));
}

#[test]
fn default_size_blurs_a_single_bright_pixel() {
    let mut src = PixelBuffer::zeroed(7, 7).unwrap();
    src.set_pixel(3, 3, [250, 250, 250, 255]);
    let out = lowpass(&src, DEFAULT_LOWPASS_SIZE, ChannelPolicy::Clamp).unwrap();

    // 250 / 25 = 10 inside the 5x5 neighbourhood, 0 outside it.
    assert_eq!(out.pixel(1, 1), Some([10, 10, 10, 255]));
    assert_eq!(out.pixel(5, 5), Some([10, 10, 10, 255]));
    assert_eq!(out.pixel(0, 3), Some([0, 0, 0, 255]));
    assert_eq!(out.pixel(6, 6), Some([0, 0, 0, 255]));
}

#[test]
fn rejects_zero_and_oversized_kernels() {
    let src = PixelBuffer::zeroed(2, 2).unwrap();
    for size in [0, MAX_LOWPASS_SIZE + 1] {
        let err = lowpass(&src, size, ChannelPolicy::Clamp).unwrap_err();
        assert!(matches!(err, RasterFxError::InvalidParameter(_)), "size {size}");
    }
    assert_eq!(lowpass_kernel(4).unwrap().half_side(), 2);
}
