//! Transition bindings: per-element integration of catalog, injector and host.
//!
//! A binding mirrors the effect model of component frameworks:
//!
//! - inject effect, keyed on `(name, animation, config)`: generate CSS and
//!   hand it to the shared [`StyleInjector`]
//! - tag effect, keyed on `name`: write `view-transition-name` on the
//!   mounted element
//!
//! [`TransitionBinding::update`] re-runs each effect only when its key
//! changed by value.

use crate::animation::{generate_css, TransitionSpec};
use crate::host::{DocumentHost, ElementHost, StyleHost, TransitionHost};
use crate::injector::{InjectorConfig, StyleInjector};
use crate::result::ViewTxResult;
use std::fmt;
use std::rc::Rc;

/// Boxed trigger signature: takes the state-changing callback.
pub type StartTransitionFn = Box<dyn Fn(Box<dyn FnOnce()>)>;

/// Composition root: one host, one injector, any number of bindings.
pub struct TransitionController<H: DocumentHost> {
    host: Rc<H>,
    injector: Rc<StyleInjector<H>>,
}

impl<H: DocumentHost> Clone for TransitionController<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
            injector: Rc::clone(&self.injector),
        }
    }
}

impl<H: DocumentHost> fmt::Debug for TransitionController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionController")
            .field("injector", &self.injector)
            .finish_non_exhaustive()
    }
}

impl<H: DocumentHost> TransitionController<H> {
    /// Controller with the default injector config
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, InjectorConfig::default())
    }

    /// Controller with an explicit injector config
    #[must_use]
    pub fn with_config(host: H, config: InjectorConfig) -> Self {
        let host = Rc::new(host);
        let injector = Rc::new(StyleInjector::with_config(Rc::clone(&host), config));
        Self { host, injector }
    }

    /// Controller over an existing host and injector
    #[must_use]
    pub fn from_parts(host: Rc<H>, injector: Rc<StyleInjector<H>>) -> Self {
        Self { host, injector }
    }

    /// Shared host
    #[must_use]
    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Shared injector
    #[must_use]
    pub fn injector(&self) -> &Rc<StyleInjector<H>> {
        &self.injector
    }

    /// Bind `spec`, running the inject effect for the first render.
    ///
    /// # Errors
    ///
    /// Propagates host failures from injecting the CSS.
    pub fn bind(&self, spec: TransitionSpec) -> ViewTxResult<(TransitionBinding<H>, Trigger<H>)> {
        let binding = TransitionBinding {
            host: Rc::clone(&self.host),
            injector: Rc::clone(&self.injector),
            spec,
            element: None,
        };
        binding.inject(&binding.spec)?;
        tracing::debug!(
            name = binding.spec.name(),
            animation = %binding.spec.animation(),
            "bound transition"
        );
        Ok((binding, self.trigger()))
    }

    /// Trigger that runs callbacks through this controller's host
    #[must_use]
    pub fn trigger(&self) -> Trigger<H> {
        Trigger {
            host: Rc::clone(&self.host),
        }
    }
}

/// Which effects an [`TransitionBinding::update`] re-ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateEffects {
    /// CSS was regenerated and offered to the injector
    pub reinjected: bool,
    /// The mounted element's transition name was rewritten
    pub retagged: bool,
}

/// Handle attached to exactly one element.
pub struct TransitionBinding<H: StyleHost + ElementHost> {
    host: Rc<H>,
    injector: Rc<StyleInjector<H>>,
    spec: TransitionSpec,
    element: Option<H::Element>,
}

impl<H: StyleHost + ElementHost> fmt::Debug for TransitionBinding<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionBinding")
            .field("spec", &self.spec)
            .field("mounted", &self.element.is_some())
            .finish_non_exhaustive()
    }
}

impl<H: StyleHost + ElementHost> TransitionBinding<H> {
    /// Current spec
    #[must_use]
    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    /// Mounted element, if any
    #[must_use]
    pub fn element(&self) -> Option<&H::Element> {
        self.element.as_ref()
    }

    /// Attach the element and tag it with the transition name.
    ///
    /// # Errors
    ///
    /// Propagates host failures from writing the transition name.
    pub fn mount(&mut self, element: H::Element) -> ViewTxResult<()> {
        self.host.set_transition_name(&element, self.spec.name())?;
        self.element = Some(element);
        Ok(())
    }

    /// Detach the element. Injected CSS stays in the document.
    pub fn unmount(&mut self) -> Option<H::Element> {
        self.element.take()
    }

    /// Apply a new spec, re-running only the effects whose keys changed.
    ///
    /// The spec is committed after both effects succeed, so a failed update
    /// is retried by calling `update` again with the same spec.
    ///
    /// # Errors
    ///
    /// Propagates host failures from injecting or tagging.
    pub fn update(&mut self, spec: TransitionSpec) -> ViewTxResult<UpdateEffects> {
        let mut effects = UpdateEffects::default();

        if spec != self.spec {
            self.inject(&spec)?;
            effects.reinjected = true;
        }

        if spec.name() != self.spec.name() {
            if let Some(element) = self.element.as_ref() {
                self.host.set_transition_name(element, spec.name())?;
                effects.retagged = true;
            }
        }

        self.spec = spec;
        Ok(effects)
    }

    fn inject(&self, spec: &TransitionSpec) -> ViewTxResult<()> {
        let css = generate_css(spec);
        self.injector.inject_once(&css, &spec.fingerprint())
    }
}

/// Runs a state change inside the host transition mechanism when available.
pub struct Trigger<H: TransitionHost> {
    host: Rc<H>,
}

impl<H: TransitionHost> Clone for Trigger<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
        }
    }
}

impl<H: TransitionHost> fmt::Debug for Trigger<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger").finish_non_exhaustive()
    }
}

impl<H: TransitionHost + 'static> Trigger<H> {
    /// Run `callback` as a transition.
    ///
    /// Capability is checked on every call. Without it the callback runs
    /// synchronously before `start` returns. Panics from the callback are
    /// not caught.
    pub fn start<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        if !self.host.supports_transition() {
            tracing::debug!("view transitions unavailable, running update directly");
            callback();
            return;
        }

        tracing::debug!("starting view transition");
        if let Err(callback) = self.host.run_in_transition(Box::new(callback)) {
            tracing::debug!("transition mechanism declined update, running directly");
            callback();
        }
    }

    /// Box this trigger as a [`StartTransitionFn`]
    #[must_use]
    pub fn into_fn(self) -> StartTransitionFn {
        Box::new(move |callback| self.start(callback))
    }
}
