use opencv::core::Rect;

use crate::vision::collision::BoundingBox;

pub fn bbox_from_rect(rect: &Rect) -> BoundingBox {
    BoundingBox::new(rect.x, rect.y, rect.width, rect.height)
}
