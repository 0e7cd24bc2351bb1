//! Inline image rendering: path expansion, probing, scaling, compositing.
//!
//! Every failure in here degrades to [`ImageFormat::ZERO`] — the row keeps
//! laying out with zero advance and the frame is never aborted. Failures
//! are reported through `tracing` only.

use crate::geometry::{ImageFormat, Offset};
use crate::surface::DrawSurface;
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Shell-style expansion of `~` and environment references.
///
/// Expansion failure is not fatal: the original string comes back unchanged
/// and the existence check decides what happens next.
fn expand_path(raw: &str) -> Cow<'_, str> {
    match shellexpand::full(raw) {
        Ok(expanded) => expanded,
        Err(e) => {
            warn!(path = raw, error = %e, "image path expansion failed");
            Cow::Borrowed(raw)
        }
    }
}

/// First-byte magic sniff, mirroring the launcher's historical format
/// table. Returns the detected format name, or `None` for anything the
/// surface cannot be expected to decode.
fn sniff_format(path: &Path) -> Option<&'static str> {
    let mut magic = [0_u8; 1];
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot probe image file");
            return None;
        }
    };
    if file.read_exact(&mut magic).is_err() {
        return None;
    }
    match magic[0] {
        0x89 => Some("png"),
        0xFF => Some("jpeg"),
        b'G' => Some("gif"),
        _ => None,
    }
}

/// Draw one inline image at `offset`, downscaled to fit inside `bounds`.
///
/// Returns the drawn dimensions, [`ImageFormat::ZERO`] when nothing was
/// drawn. The image's top-left corner lands at `(offset.x, offset.image_y)`.
pub fn draw_image<S: DrawSurface>(
    surface: &mut S,
    raw_path: &str,
    offset: Offset,
    bounds: ImageFormat,
) -> ImageFormat {
    let expanded = expand_path(raw_path);
    let path = Path::new(expanded.as_ref());

    if !path.exists() {
        warn!(path = %path.display(), "cannot open image file");
        return ImageFormat::ZERO;
    }

    let Some(format) = sniff_format(path) else {
        debug!(path = %path.display(), "unknown image format");
        return ImageFormat::ZERO;
    };
    debug!(path = %path.display(), format, "drawing inline image");

    let image = match surface.load_image(path) {
        Ok(image) => image,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "image decoding failed");
            return ImageFormat::ZERO;
        }
    };

    let natural = surface.image_size(&image);
    let fitted = natural.fit_within(bounds);
    if fitted != natural {
        debug!(
            width = fitted.width,
            height = fitted.height,
            "resizing image to fit"
        );
    }
    let scaled = surface.scale_image(&image, fitted);
    surface.composite_image(&scaled, offset.x, offset.image_y);
    fitted
}
