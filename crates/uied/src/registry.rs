//! Append-only element storage
//!
//! Handles are creation indices. Nothing is ever removed or reordered, so a
//! handle stays valid for the lifetime of the registry.

use crate::element::{Element, ElementId};
use crate::error::UiError;

#[derive(Debug, Default)]
pub struct Registry {
    elements: Vec<Element>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle
    pub fn create(&mut self, element: Element) -> ElementId {
        let id = ElementId::new(self.elements.len());
        log::debug!("registered {:?} element {}", element.kind(), id);
        self.elements.push(element);
        id
    }

    pub fn get(&self, id: ElementId) -> Result<&Element, UiError> {
        let len = self.elements.len();
        self.elements
            .get(id.index())
            .ok_or(UiError::OutOfRange { id, len })
    }

    pub fn get_mut(&mut self, id: ElementId) -> Result<&mut Element, UiError> {
        let len = self.elements.len();
        self.elements
            .get_mut(id.index())
            .ok_or(UiError::OutOfRange { id, len })
    }

    /// Elements in creation order (bottom to top)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (ElementId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| (ElementId::new(index), element))
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (ElementId, &mut Element)> {
        self.elements
            .iter_mut()
            .enumerate()
            .map(|(index, element)| (ElementId::new(index), element))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Rect, Widget};

    fn label(text: &str) -> Element {
        Element::new(Widget::Label, Rect::default(), Color::default(), text)
    }

    #[test]
    fn test_handles_strictly_increase() {
        let mut registry = Registry::new();
        let ids: Vec<_> = (0..10).map(|i| registry.create(label(&i.to_string()))).collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(ids[0].index(), 0);
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn test_get_returns_created_element() {
        let mut registry = Registry::new();
        let a = registry.create(label("a"));
        let b = registry.create(label("b"));

        assert_eq!(registry.get(a).unwrap().text(), "a");
        assert_eq!(registry.get(b).unwrap().text(), "b");
    }

    #[test]
    fn test_out_of_range() {
        let mut registry = Registry::new();
        registry.create(label("a"));

        let bogus = ElementId::new(5);
        assert_eq!(
            registry.get(bogus).unwrap_err(),
            UiError::OutOfRange { id: bogus, len: 1 }
        );
        assert!(registry.get_mut(bogus).is_err());
    }
}
