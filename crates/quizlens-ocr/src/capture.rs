use anyhow::{Context, Result};
use quizlens_types::CaptureRegion;
use xcap::Monitor;

/// Full-display raster in RGBA, kept around while the user draws a selection
pub struct RawImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Capture the entire primary monitor as raw RGBA
pub fn capture_primary_screen_raw() -> Result<RawImage> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    let monitor = monitors.first().context("No monitor found")?;

    let image = monitor.capture_image().context("Failed to capture screen")?;
    Ok(RawImage {
        width: image.width(),
        height: image.height(),
        data: image.into_raw(),
    })
}

/// Crop a captured raster to a pixel region and encode the crop as PNG
pub fn crop_to_png(image: &RawImage, region: CaptureRegion) -> Result<Vec<u8>> {
    let raster =
        xcap::image::RgbaImage::from_raw(image.width, image.height, image.data.clone())
            .context("Raster dimensions do not match buffer length")?;

    let cropped = xcap::image::imageops::crop_imm(
        &raster,
        region.x,
        region.y,
        region.width,
        region.height,
    )
    .to_image();

    encode_png(&cropped)
}

fn encode_png(image: &xcap::image::RgbaImage) -> Result<Vec<u8>> {
    use xcap::image::ImageEncoder;
    let mut buffer = Vec::new();
    xcap::image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            xcap::image::ExtendedColorType::Rgba8,
        )
        .context("Failed to encode PNG")?;
    Ok(buffer)
}
