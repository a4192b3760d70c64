pub mod contour;
pub mod selector;

use contour::{extract_contours, Contour};
use opencv::core::Mat;
use selector::select_largest;

use super::collision::BoundingBox;

/// Bounding box of the largest external region in `mask`, if any.
pub fn largest_region(mask: &Mat) -> anyhow::Result<Option<BoundingBox>> {
    let candidates = extract_contours(mask)?
        .into_iter()
        .map(|c| {
            let area = c.area()?;
            anyhow::Ok((c, area))
        })
        .collect::<anyhow::Result<Vec<(Contour, f64)>>>()?;

    select_largest(candidates)
        .map(|(contour, _area)| contour.bounding_box())
        .transpose()
}

#[cfg(test)]
mod tests {
    use opencv::core::{Rect, Scalar, CV_8UC1};
    use opencv::imgproc::{rectangle, FILLED, LINE_8};

    use super::*;

    #[test]
    fn picks_the_biggest_blob() {
        let mut mask = Mat::new_rows_cols_with_default(120, 120, CV_8UC1, Scalar::all(0.0)).unwrap();
        rectangle(&mut mask, Rect::new(5, 5, 10, 10), Scalar::all(255.0), FILLED, LINE_8, 0).unwrap();
        rectangle(&mut mask, Rect::new(40, 30, 60, 50), Scalar::all(255.0), FILLED, LINE_8, 0).unwrap();
        rectangle(&mut mask, Rect::new(5, 100, 20, 10), Scalar::all(255.0), FILLED, LINE_8, 0).unwrap();

        assert_eq!(largest_region(&mask).unwrap(), Some(BoundingBox::new(40, 30, 60, 50)));
    }

    #[test]
    fn empty_mask_has_no_region() {
        let mask = Mat::new_rows_cols_with_default(50, 50, CV_8UC1, Scalar::all(0.0)).unwrap();
        assert_eq!(largest_region(&mask).unwrap(), None);
    }
}
