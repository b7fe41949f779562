use crate::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::DynamicImage;
use std::io::Cursor;

/// Decodes a base64 payload into an in-memory image. Fails if the payload is
/// not valid base64 or the decoded bytes are not a supported image format.
/// Decode failure is terminal for the request; there are no retries.
pub fn decode_base64_image(payload: &str) -> Result<DynamicImage> {
    let bytes = STANDARD.decode(payload)?;
    let image = image::load_from_memory(&bytes)?;
    Ok(image)
}

/// Re-encodes a decoded image as base64 PNG, the wire format the model
/// runtime accepts for image attachments.
pub fn to_png_base64(image: &DynamicImage) -> Result<String> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(STANDARD.encode(&buf))
}
