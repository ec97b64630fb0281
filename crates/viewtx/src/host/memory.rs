//! In-memory document host.
//!
//! Records every style container, element and transition call so tests and
//! the CLI can inspect what a real document would have received.

use super::{dispatch_once, ElementHost, StyleHost, TransitionHost};
use crate::result::{ViewTxError, ViewTxResult};
use std::cell::{Cell, RefCell};

/// Handle to a style container in a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(usize);

/// Handle to an element in a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
struct StyleContainer {
    marker: String,
    text: String,
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    class_name: Option<String>,
    style: Option<String>,
    transition_name: Option<String>,
    children: Vec<ElementId>,
}

#[derive(Debug, Default)]
struct DocumentState {
    containers: Vec<StyleContainer>,
    elements: Vec<ElementData>,
}

/// Document double that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: RefCell<DocumentState>,
    transitions_supported: Cell<bool>,
    transition_runs: Cell<usize>,
    transition_throws: Cell<bool>,
    head_missing: Cell<bool>,
}

impl MemoryDocument {
    /// Empty document without transition support
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty document whose transition capability is `supported`
    #[must_use]
    pub fn with_transitions(supported: bool) -> Self {
        let document = Self::new();
        document.set_transitions_supported(supported);
        document
    }

    /// Toggle the transition capability
    pub fn set_transitions_supported(&self, supported: bool) {
        self.transitions_supported.set(supported);
    }

    /// Make the transition mechanism fail before it runs the update, like a
    /// `startViewTransition` that throws
    pub fn set_transition_throws(&self, throws: bool) {
        self.transition_throws.set(throws);
    }

    /// Simulate a document without a `<head>`, so style containers cannot be created
    pub fn set_head_missing(&self, missing: bool) {
        self.head_missing.set(missing);
    }

    /// Number of updates run through the transition mechanism
    #[must_use]
    pub fn transition_runs(&self) -> usize {
        self.transition_runs.get()
    }

    /// Number of style containers ever created
    #[must_use]
    pub fn style_container_count(&self) -> usize {
        self.state.borrow().containers.len()
    }

    /// Handles of every style container, in creation order
    #[must_use]
    pub fn style_container_ids(&self) -> Vec<ContainerId> {
        (0..self.style_container_count()).map(ContainerId).collect()
    }

    /// Text of a style container
    #[must_use]
    pub fn style_text(&self, container: ContainerId) -> Option<String> {
        self.state
            .borrow()
            .containers
            .get(container.0)
            .map(|c| c.text.clone())
    }

    /// Marker attribute a style container was created with
    #[must_use]
    pub fn style_marker(&self, container: ContainerId) -> Option<String> {
        self.state
            .borrow()
            .containers
            .get(container.0)
            .map(|c| c.marker.clone())
    }

    /// Text of every style container, in creation order
    #[must_use]
    pub fn all_style_text(&self) -> String {
        self.state
            .borrow()
            .containers
            .iter()
            .map(|c| c.text.as_str())
            .collect()
    }

    /// Create a detached element with the given tag
    pub fn create_element(&self, tag: &str) -> ElementId {
        let mut state = self.state.borrow_mut();
        state.elements.push(ElementData {
            tag: tag.to_string(),
            class_name: None,
            style: None,
            transition_name: None,
            children: Vec::new(),
        });
        ElementId(state.elements.len() - 1)
    }

    /// Tag name of an element
    #[must_use]
    pub fn tag(&self, element: ElementId) -> Option<String> {
        self.with_element(element, |e| e.tag.clone())
    }

    /// `view-transition-name` of an element, if set
    #[must_use]
    pub fn transition_name(&self, element: ElementId) -> Option<String> {
        self.with_element(element, |e| e.transition_name.clone())
            .flatten()
    }

    /// Class attribute of an element
    #[must_use]
    pub fn class_name(&self, element: ElementId) -> Option<String> {
        self.with_element(element, |e| e.class_name.clone())
            .flatten()
    }

    /// Inline style attribute of an element
    #[must_use]
    pub fn inline_style(&self, element: ElementId) -> Option<String> {
        self.with_element(element, |e| e.style.clone()).flatten()
    }

    /// Children of an element, in append order
    #[must_use]
    pub fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.with_element(element, |e| e.children.clone())
            .unwrap_or_default()
    }

    fn with_element<T>(&self, element: ElementId, f: impl FnOnce(&ElementData) -> T) -> Option<T> {
        self.state.borrow().elements.get(element.0).map(f)
    }

    fn unknown_element(element: ElementId) -> ViewTxError {
        ViewTxError::host(format!("unknown element #{}", element.0))
    }
}

impl StyleHost for MemoryDocument {
    type Container = ContainerId;

    fn create_style_container(&self, marker_attribute: &str) -> ViewTxResult<ContainerId> {
        if self.head_missing.get() {
            return Err(ViewTxError::host("document has no <head>"));
        }
        let mut state = self.state.borrow_mut();
        state.containers.push(StyleContainer {
            marker: marker_attribute.to_string(),
            text: String::new(),
        });
        Ok(ContainerId(state.containers.len() - 1))
    }

    fn append_css(&self, container: &ContainerId, css: &str) -> ViewTxResult<()> {
        let mut state = self.state.borrow_mut();
        let target = state
            .containers
            .get_mut(container.0)
            .ok_or_else(|| ViewTxError::host(format!("unknown style container #{}", container.0)))?;
        target.text.push_str(css);
        Ok(())
    }
}

impl ElementHost for MemoryDocument {
    type Element = ElementId;

    fn create_container_element(
        &self,
        class_name: Option<&str>,
        style: Option<&str>,
    ) -> ViewTxResult<ElementId> {
        let id = self.create_element("div");
        let mut state = self.state.borrow_mut();
        if let Some(data) = state.elements.get_mut(id.0) {
            data.class_name = class_name.map(str::to_string);
            data.style = style.map(str::to_string);
        }
        Ok(id)
    }

    fn append_child(&self, parent: &ElementId, child: &ElementId) -> ViewTxResult<()> {
        let mut state = self.state.borrow_mut();
        if state.elements.get(child.0).is_none() {
            return Err(Self::unknown_element(*child));
        }
        state
            .elements
            .get_mut(parent.0)
            .ok_or_else(|| Self::unknown_element(*parent))?
            .children
            .push(*child);
        Ok(())
    }

    fn set_transition_name(&self, element: &ElementId, name: &str) -> ViewTxResult<()> {
        self.state
            .borrow_mut()
            .elements
            .get_mut(element.0)
            .ok_or_else(|| Self::unknown_element(*element))?
            .transition_name = Some(name.to_string());
        Ok(())
    }
}

impl TransitionHost for MemoryDocument {
    fn supports_transition(&self) -> bool {
        self.transitions_supported.get()
    }

    fn run_in_transition(&self, update: Box<dyn FnOnce()>) -> Result<(), Box<dyn FnOnce()>> {
        if !self.transitions_supported.get() {
            return Err(update);
        }
        // No snapshots here: the update runs immediately.
        dispatch_once(update, |runner| {
            if self.transition_throws.get() {
                return Err(());
            }
            self.transition_runs.set(self.transition_runs.get() + 1);
            runner();
            Ok(())
        })
        .map_err(|(update, ())| update)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn style_containers_accumulate_text() {
        let doc = MemoryDocument::new();
        let id = doc.create_style_container("data-view-transitions").unwrap();
        doc.append_css(&id, "a{}").unwrap();
        doc.append_css(&id, "b{}").unwrap();
        assert_eq!(doc.style_text(id).unwrap(), "a{}b{}");
        assert_eq!(doc.style_marker(id).unwrap(), "data-view-transitions");
        assert_eq!(doc.style_container_count(), 1);
    }

    #[test]
    fn missing_head_fails_container_creation() {
        let doc = MemoryDocument::new();
        doc.set_head_missing(true);
        assert!(doc.create_style_container("m").is_err());
        assert_eq!(doc.style_container_count(), 0);
    }

    #[test]
    fn elements_record_attributes_and_children() {
        let doc = MemoryDocument::new();
        let parent = doc
            .create_container_element(Some("stack"), Some("display: grid"))
            .unwrap();
        let child = doc.create_element("span");
        doc.append_child(&parent, &child).unwrap();
        doc.set_transition_name(&child, "label").unwrap();

        assert_eq!(doc.tag(parent).unwrap(), "div");
        assert_eq!(doc.class_name(parent).unwrap(), "stack");
        assert_eq!(doc.inline_style(parent).unwrap(), "display: grid");
        assert_eq!(doc.children(parent), vec![child]);
        assert_eq!(doc.transition_name(child).unwrap(), "label");
        assert_eq!(doc.transition_name(parent), None);
    }

    #[test]
    fn unknown_element_is_a_host_error() {
        let doc = MemoryDocument::new();
        let other = MemoryDocument::new();
        let foreign = other.create_element("p");
        assert!(doc.set_transition_name(&foreign, "x").is_err());
    }

    #[test]
    fn run_in_transition_hands_back_callback_when_unsupported() {
        let doc = MemoryDocument::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let returned = doc
            .run_in_transition(Box::new(move || h.set(h.get() + 1)))
            .unwrap_err();
        assert_eq!(hits.get(), 0);
        returned();
        assert_eq!(hits.get(), 1);
        assert_eq!(doc.transition_runs(), 0);
    }

    #[test]
    fn run_in_transition_counts_runs() {
        let doc = MemoryDocument::with_transitions(true);
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        assert!(doc
            .run_in_transition(Box::new(move || h.set(h.get() + 1)))
            .is_ok());
        assert_eq!(hits.get(), 1);
        assert_eq!(doc.transition_runs(), 1);
    }

    #[test]
    fn throwing_mechanism_hands_back_callback() {
        let doc = MemoryDocument::with_transitions(true);
        doc.set_transition_throws(true);
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let returned = doc
            .run_in_transition(Box::new(move || h.set(h.get() + 1)))
            .unwrap_err();
        assert_eq!(hits.get(), 0);
        assert_eq!(doc.transition_runs(), 0);
        returned();
        assert_eq!(hits.get(), 1);
    }
}
