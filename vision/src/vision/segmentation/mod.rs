use anyhow::{bail, Ok};
use opencv::{
    core::{in_range, Mat, MatTraitConst, CV_8UC3},
    imgproc::{cvt_color, COLOR_BGR2HSV},
};

use crate::config::{DetectorConfig, HsvRange};

/// Binary masks (255 in range, 0 otherwise) for the two tracked colours.
pub struct ColorMasks {
    pub blue: Mat,
    pub orange: Mat,
}

/// Splits a BGR frame into one mask per configured colour range.
/// The frame is only read.
pub fn segment(frame: &Mat, config: &DetectorConfig) -> anyhow::Result<ColorMasks> {
    if frame.typ() != CV_8UC3 {
        bail!("Expected a BGR frame (CV_8UC3), got type {}", frame.typ());
    }

    let mut img_hsv = Mat::default();
    cvt_color(frame, &mut img_hsv, COLOR_BGR2HSV, 0)?;

    masks_from_hsv(&img_hsv, config)
}

fn masks_from_hsv(img_hsv: &Mat, config: &DetectorConfig) -> anyhow::Result<ColorMasks> {
    Ok(ColorMasks {
        blue: mask_for(img_hsv, &config.blue)?,
        orange: mask_for(img_hsv, &config.orange)?,
    })
}

fn mask_for(img_hsv: &Mat, range: &HsvRange) -> anyhow::Result<Mat> {
    let mut mask = Mat::default();
    in_range(img_hsv, &range.lower_scalar(), &range.upper_scalar(), &mut mask)?;
    Ok(mask)
}
