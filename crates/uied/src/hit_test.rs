//! Hit-testing for finding elements at specific surface positions
//!
//! Z-order is creation order: the painter draws elements first to last, so
//! the last-created element containing a point is the one visible on top.

use crate::element::ElementId;
use crate::primitives::Point;
use crate::registry::Registry;

/// Topmost element whose bounds contain `point`
pub fn hit_test(registry: &Registry, point: Point) -> Option<ElementId> {
    registry
        .iter()
        .rev()
        .find(|(_, element)| element.bounds().contains(point))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Element, Rect, Widget};

    fn boxed(registry: &mut Registry, x: f32, y: f32, w: f32, h: f32) -> ElementId {
        registry.create(Element::new(
            Widget::Label,
            Rect::from_xywh(x, y, w, h),
            Color::default(),
            "",
        ))
    }

    #[test]
    fn test_later_element_wins() {
        let mut registry = Registry::new();
        let below = boxed(&mut registry, 0.0, 0.0, 100.0, 100.0);
        let above = boxed(&mut registry, 50.0, 50.0, 100.0, 100.0);

        assert_eq!(hit_test(&registry, Point::new(75.0, 75.0)), Some(above));
        assert_eq!(hit_test(&registry, Point::new(10.0, 10.0)), Some(below));
    }

    #[test]
    fn test_miss() {
        let mut registry = Registry::new();
        boxed(&mut registry, 0.0, 0.0, 10.0, 10.0);

        assert_eq!(hit_test(&registry, Point::new(11.0, 5.0)), None);
        assert_eq!(hit_test(&Registry::new(), Point::zero()), None);
    }
}
