use anyhow::Ok;
use opencv::{
    core::{Mat, Point, Scalar},
    imgproc::{put_text, rectangle_points, FONT_HERSHEY_SIMPLEX, LINE_8, LINE_AA},
};

use crate::vision::{collision::BoundingBox, tracker::FrameEvents};

pub const COLLISION_TEXT: &str = "COLLISION DETECTED";
pub const PASSED_BARRIER_TEXT: &str = "PASSED BARRIER";

const BOX_THICKNESS: i32 = 2;

// Colours are BGR
fn blue_box_color() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

fn orange_box_color() -> Scalar {
    Scalar::new(0.0, 165.0, 255.0, 0.0)
}

fn collision_text_color() -> Scalar {
    Scalar::new(0.0, 0.0, 255.0, 0.0)
}

fn passed_text_color() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

/// Outlines run from `(x, y)` to `(x + width, y + height)`.
fn draw_box(frame: &mut Mat, bbox: &BoundingBox, color: Scalar) -> anyhow::Result<()> {
    let top_left = Point::new(bbox.x, bbox.y);
    let bottom_right = Point::new(bbox.right(), bbox.bottom());
    rectangle_points(frame, top_left, bottom_right, color, BOX_THICKNESS, LINE_8, 0)?;
    Ok(())
}

pub fn draw_boxes(frame: &mut Mat, blue: Option<&BoundingBox>, orange: Option<&BoundingBox>) -> anyhow::Result<()> {
    if let Some(blue) = blue {
        draw_box(frame, blue, blue_box_color())?;
    }
    if let Some(orange) = orange {
        draw_box(frame, orange, orange_box_color())?;
    }
    Ok(())
}

/// Text to overlay for a frame, if any. Passing the barrier takes precedence.
pub fn overlay_text(events: &FrameEvents) -> Option<(&'static str, Point, Scalar)> {
    if events.passed_barrier {
        Some((PASSED_BARRIER_TEXT, Point::new(50, 100), passed_text_color()))
    } else if events.collision {
        Some((COLLISION_TEXT, Point::new(50, 50), collision_text_color()))
    } else {
        None
    }
}

pub fn draw_events(frame: &mut Mat, events: &FrameEvents) -> anyhow::Result<()> {
    if let Some((text, origin, color)) = overlay_text(events) {
        put_text(frame, text, origin, FONT_HERSHEY_SIMPLEX, 1.0, color, 2, LINE_AA, false)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use opencv::core::{MatTraitConst, Vec3b, CV_8UC3};

    use super::*;

    #[test]
    fn text_follows_events() {
        let none = FrameEvents::default();
        let collision = FrameEvents { collision: true, passed_barrier: false };
        let passed = FrameEvents { collision: false, passed_barrier: true };

        assert!(overlay_text(&none).is_none());
        assert_eq!(overlay_text(&collision).map(|t| t.0), Some(COLLISION_TEXT));
        assert_eq!(overlay_text(&passed).map(|t| t.0), Some(PASSED_BARRIER_TEXT));
    }

    #[test]
    fn boxes_are_drawn_in_role_colours() {
        let mut frame = Mat::new_rows_cols_with_default(100, 100, CV_8UC3, Scalar::all(0.0)).unwrap();
        let blue = BoundingBox::new(10, 10, 20, 20);
        let orange = BoundingBox::new(50, 50, 20, 20);

        draw_boxes(&mut frame, Some(&blue), Some(&orange)).unwrap();

        assert_eq!(*frame.at_2d::<Vec3b>(10, 10).unwrap(), Vec3b::from([0, 255, 0]));
        assert_eq!(*frame.at_2d::<Vec3b>(50, 50).unwrap(), Vec3b::from([0, 165, 255]));
        // The far corner is x + width, y + height.
        assert_eq!(*frame.at_2d::<Vec3b>(30, 30).unwrap(), Vec3b::from([0, 255, 0]));
        assert_eq!(*frame.at_2d::<Vec3b>(70, 70).unwrap(), Vec3b::from([0, 165, 255]));
        // Outline only.
        assert_eq!(*frame.at_2d::<Vec3b>(20, 20).unwrap(), Vec3b::from([0, 0, 0]));
    }

    #[test]
    fn only_present_boxes_are_drawn() {
        let mut frame = Mat::new_rows_cols_with_default(100, 100, CV_8UC3, Scalar::all(0.0)).unwrap();
        let orange = BoundingBox::new(50, 50, 20, 20);

        draw_boxes(&mut frame, None, Some(&orange)).unwrap();

        assert_eq!(*frame.at_2d::<Vec3b>(50, 50).unwrap(), Vec3b::from([0, 165, 255]));
        assert_eq!(*frame.at_2d::<Vec3b>(10, 10).unwrap(), Vec3b::from([0, 0, 0]));
    }
}
