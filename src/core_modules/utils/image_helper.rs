// Debug snapshot helper: dumps a frame buffer to a PNG on disk so the
// annotated output of the selection stage can be inspected while tuning.

pub mod image_helper {
    use image::ImageEncoder;

    /// Saves a single-channel binary frame (one byte per pixel) as a
    /// grayscale PNG. Intended for frames annotated by the hull overlay.
    pub fn save_binary_frame(
        name: &str,
        width: u32,
        height: u32,
        buffer: &[u8],
    ) -> Result<(), image::error::ImageError> {
        let output = std::fs::File::create(name)?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(buffer, width, height, image::ExtendedColorType::L8)?;

        Ok(())
    }
}
