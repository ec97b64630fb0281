//! Wrapper element that carries a transition binding.

use crate::animation::TransitionSpec;
use crate::binding::{TransitionBinding, TransitionController, Trigger, UpdateEffects};
use crate::host::{DocumentHost, ElementHost};
use crate::result::ViewTxResult;
use std::fmt;
use std::rc::Rc;

/// Properties of a [`TransitionContainer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerProps {
    /// Transition applied to the wrapper
    pub spec: TransitionSpec,
    /// Optional class attribute
    pub class_name: Option<String>,
    /// Optional inline style
    pub style: Option<String>,
}

impl ContainerProps {
    /// Props with no class or inline style
    #[must_use]
    pub fn new(spec: TransitionSpec) -> Self {
        Self {
            spec,
            class_name: None,
            style: None,
        }
    }

    /// Set the class attribute
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the inline style
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// A `<div>` bound to a transition group.
pub struct TransitionContainer<H: DocumentHost> {
    host: Rc<H>,
    element: H::Element,
    binding: TransitionBinding<H>,
    trigger: Trigger<H>,
}

impl<H: DocumentHost> fmt::Debug for TransitionContainer<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionContainer")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

impl<H: DocumentHost> TransitionContainer<H> {
    /// Create the wrapper element, bind `props.spec` and mount it.
    ///
    /// # Errors
    ///
    /// Propagates host failures from creating, injecting or tagging.
    pub fn render(controller: &TransitionController<H>, props: ContainerProps) -> ViewTxResult<Self> {
        let host = Rc::clone(controller.host());
        let element =
            host.create_container_element(props.class_name.as_deref(), props.style.as_deref())?;
        let (mut binding, trigger) = controller.bind(props.spec)?;
        binding.mount(element.clone())?;
        Ok(Self {
            host,
            element,
            binding,
            trigger,
        })
    }

    /// The wrapper element
    #[must_use]
    pub fn element(&self) -> &H::Element {
        &self.element
    }

    /// Trigger for this container's transitions
    #[must_use]
    pub fn trigger(&self) -> &Trigger<H> {
        &self.trigger
    }

    /// Underlying binding
    #[must_use]
    pub fn binding(&self) -> &TransitionBinding<H> {
        &self.binding
    }

    /// Append a child element to the wrapper
    ///
    /// # Errors
    ///
    /// Propagates host failures.
    pub fn append_child(&self, child: &H::Element) -> ViewTxResult<()> {
        self.host.append_child(&self.element, child)
    }

    /// Re-render with a new spec
    ///
    /// # Errors
    ///
    /// Propagates host failures from injecting or tagging.
    pub fn update(&mut self, spec: TransitionSpec) -> ViewTxResult<UpdateEffects> {
        self.binding.update(spec)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::animation::{AnimationConfig, AnimationKind};
    use crate::host::MemoryDocument;
    use std::cell::Cell;

    fn props(name: &str) -> ContainerProps {
        ContainerProps::new(
            TransitionSpec::new(name, AnimationKind::SlideUp, AnimationConfig::default()).unwrap(),
        )
    }

    #[test]
    fn render_creates_tagged_div() {
        let ctl = TransitionController::new(MemoryDocument::new());
        let container = TransitionContainer::render(
            &ctl,
            props("panel").with_class_name("panel").with_style("padding: 8px"),
        )
        .unwrap();

        let doc = ctl.host();
        let el = *container.element();
        assert_eq!(doc.tag(el).unwrap(), "div");
        assert_eq!(doc.class_name(el).unwrap(), "panel");
        assert_eq!(doc.inline_style(el).unwrap(), "padding: 8px");
        assert_eq!(doc.transition_name(el).unwrap(), "panel");
        assert!(doc.all_style_text().contains("::view-transition-old(panel)"));
    }

    #[test]
    fn render_without_class_or_style() {
        let ctl = TransitionController::new(MemoryDocument::new());
        let container = TransitionContainer::render(&ctl, props("bare")).unwrap();
        assert_eq!(ctl.host().class_name(*container.element()), None);
        assert_eq!(ctl.host().inline_style(*container.element()), None);
    }

    #[test]
    fn children_are_appended() {
        let ctl = TransitionController::new(MemoryDocument::new());
        let container = TransitionContainer::render(&ctl, props("list")).unwrap();
        let child = ctl.host().create_element("li");
        container.append_child(&child).unwrap();
        assert_eq!(ctl.host().children(*container.element()), vec![child]);
    }

    #[test]
    fn update_renames_wrapper() {
        let ctl = TransitionController::new(MemoryDocument::new());
        let mut container = TransitionContainer::render(&ctl, props("old")).unwrap();
        let effects = container.update(props("new").spec).unwrap();
        assert!(effects.retagged);
        assert_eq!(
            ctl.host().transition_name(*container.element()).unwrap(),
            "new"
        );
        assert_eq!(container.binding().spec().name(), "new");
    }

    #[test]
    fn container_trigger_runs_callback() {
        let ctl = TransitionController::new(MemoryDocument::with_transitions(true));
        let container = TransitionContainer::render(&ctl, props("t")).unwrap();
        let hit = Rc::new(Cell::new(false));
        let h = Rc::clone(&hit);
        container.trigger().start(move || h.set(true));
        assert!(hit.get());
        assert_eq!(ctl.host().transition_runs(), 1);
    }
}
