//! PNG encoding of a finished canvas.

use std::io::{BufWriter, Write};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::error::EncodeError;

/// Encode `image` as 8-bit RGB PNG into `sink`.
///
/// The buffered writer is flushed whether or not encoding succeeded; the
/// encoding error wins when both fail.
pub(super) fn encode_png<W: Write>(image: &RgbImage, sink: W) -> Result<(), EncodeError> {
    let mut out = BufWriter::new(sink);
    let encoded = PngEncoder::new(&mut out).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    );
    let flushed = out.flush();
    encoded?;
    flushed?;
    Ok(())
}
