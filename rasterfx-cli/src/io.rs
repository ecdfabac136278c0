use std::path::Path;

use anyhow::Context as _;
use rasterfx::PixelBuffer;

/// Decode an image file into straight-alpha RGBA8.
pub fn load_image(path: &Path) -> anyhow::Result<PixelBuffer> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes).with_context(|| format!("decode image '{}'", path.display()))
}

/// Decode encoded image bytes into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> anyhow::Result<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::new(width, height, rgba.into_raw())?)
}

/// Encode `buf` at its own dimensions; the format follows the file extension.
pub fn save_image(path: &Path, buf: &PixelBuffer) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer(
        path,
        buf.data(),
        buf.width(),
        buf.height(),
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("write image '{}'", path.display()))
}
