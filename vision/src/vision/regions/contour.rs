use anyhow::{bail, Ok};
use opencv::{
    core::{Mat, MatTraitConst, Point, Vector, CV_8UC1},
    imgproc::{bounding_rect, contour_area, find_contours_def, CHAIN_APPROX_SIMPLE, RETR_EXTERNAL},
};

use crate::{utils::bbox_from_rect, vision::collision::BoundingBox};

/// Closed outer boundary of one connected region.
#[derive(Debug, Clone)]
pub struct Contour {
    pub points: Vector<Point>,
}

impl Contour {
    pub fn new(points: Vector<Point>) -> Self {
        Self { points }
    }

    /// Absolute enclosed polygon area.
    pub fn area(&self) -> anyhow::Result<f64> {
        Ok(contour_area(&self.points, false)?)
    }

    /// Smallest upright rectangle covering every point.
    pub fn bounding_box(&self) -> anyhow::Result<BoundingBox> {
        let rect = bounding_rect(&self.points)?;
        Ok(bbox_from_rect(&rect))
    }
}

/// Outer contours of the foreground regions in a binary mask. Holes are
/// ignored and straight runs are compressed to their end points.
pub fn extract_contours(mask: &Mat) -> anyhow::Result<Vec<Contour>> {
    if mask.typ() != CV_8UC1 {
        bail!("Expected a binary mask (CV_8UC1), got type {}", mask.typ());
    }

    let mut contours: Vector<Vector<Point>> = Vector::new();
    find_contours_def(mask, &mut contours, RETR_EXTERNAL, CHAIN_APPROX_SIMPLE)?;

    Ok(contours.iter().map(Contour::new).collect())
}
