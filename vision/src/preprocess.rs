use anyhow::{bail, Ok};
use opencv::{core::{Mat, MatTraitConst, Size}, imgproc::{resize, INTER_LINEAR}};

/// Height that keeps the aspect ratio when scaling `width` to `target_width`.
/// Rounds down. `None` for a non-positive width or a height beyond `i32`.
pub fn scaled_height(width: i32, height: i32, target_width: i32) -> Option<i32> {
    if width <= 0 {
        return None;
    }
    i32::try_from(height as i64 * target_width as i64 / width as i64).ok()
}

/// Scales `img` to `target_width`, preserving the aspect ratio.
pub fn resize_to_width(img: &Mat, target_width: i32) -> anyhow::Result<Mat> {
    if target_width <= 0 {
        bail!("Target width must be positive, got {target_width}");
    }
    let size = img.size()?;
    if size.width <= 0 || size.height <= 0 {
        bail!("Cannot resize an empty frame ({}x{})", size.width, size.height);
    }

    let target_height = match scaled_height(size.width, size.height, target_width) {
        Some(h) if h > 0 => h,
        _ => bail!(
            "Frame of {}x{} cannot be scaled to width {target_width}",
            size.width,
            size.height
        ),
    };
    let mut resized = Mat::default();
    resize(img, &mut resized, Size::new(target_width, target_height), 0.0, 0.0, INTER_LINEAR)?;

    Ok(resized)
}
