use rasterfx::{Filter, FilterContext, FilterSettings, PixelBuffer, ThresholdMode};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let (w, h) = (64u32, 32u32);
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[(x * 4) as u8, (y * 8) as u8, 128, 255]);
        }
    }
    let src = PixelBuffer::new(w, h, data)?;

    let ctx = FilterContext::new(FilterSettings {
        parallel: true,
        ..FilterSettings::default()
    })?;
    let chain = [
        Filter::Saturation { level: 1.5 },
        Filter::Lowpass { size: 7 },
        Filter::Threshold {
            value: 110.0,
            mode: ThresholdMode::Luma,
        },
    ];
    let out = ctx.apply_chain(&chain, &src)?;

    let white = out.data().chunks_exact(4).filter(|px| px[0] == 255).count();
    println!("{white} of {} pixels above cutoff", w * h);
    Ok(())
}
