//! Interactive session state.
//!
//! A [`Session`] owns one [`CircuitView`] per circuit the user has opened.
//! Input edits arrive as [`InputChange`] events; each one replaces the
//! view's inputs, re-evaluates through the dispatch table and, if the view is
//! on screen, hands it to the session's [`RenderAdapter`].
//!
//! Views start hidden. The adapter calls [`Session::became_visible`] once it
//! can actually draw a view (for example after a canvas gets laid out), which
//! renders the current state exactly once.

mod view;

pub use view::CircuitView;

use crate::error::Result;
use crate::render::{Headless, RenderAdapter};
use crate::signal::{CircuitKind, InputSet, OutputSet, Signal};

/// Configuration for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Raising one priority encoder line lowers all the others.
    pub exclusive_encoder_inputs: bool,
    /// New decoder and multiplexer views start with their enable pin high.
    pub enables_high: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            exclusive_encoder_inputs: true,
            enables_high: true,
        }
    }
}

impl SessionConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether encoder request lines are mutually exclusive.
    pub fn with_exclusive_encoder_inputs(mut self, exclusive: bool) -> Self {
        self.exclusive_encoder_inputs = exclusive;
        self
    }

    /// Set whether enable pins start high.
    pub fn with_enables_high(mut self, high: bool) -> Self {
        self.enables_high = high;
        self
    }

    /// The inputs a freshly opened (or reset) view starts from.
    pub fn initial_inputs(&self, kind: CircuitKind) -> InputSet {
        let mut inputs = InputSet::new(kind);
        if self.enables_high {
            if let Some(pin) = kind.enable_pin() {
                inputs = inputs.with(pin, Signal::High).unwrap_or(inputs);
            }
        }
        inputs
    }
}

/// An edit to one input pin of one circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChange {
    /// Drive a pin to a value
    Set {
        kind: CircuitKind,
        name: String,
        value: Signal,
    },
    /// Flip a pin
    Toggle { kind: CircuitKind, name: String },
}

impl InputChange {
    /// Create a set event
    pub fn set(kind: CircuitKind, name: impl Into<String>, value: Signal) -> Self {
        Self::Set {
            kind,
            name: name.into(),
            value,
        }
    }

    /// Create a toggle event
    pub fn toggle(kind: CircuitKind, name: impl Into<String>) -> Self {
        Self::Toggle {
            kind,
            name: name.into(),
        }
    }

    /// The circuit the event targets.
    pub fn kind(&self) -> CircuitKind {
        match self {
            Self::Set { kind, .. } | Self::Toggle { kind, .. } => *kind,
        }
    }

    /// The pin the event targets.
    pub fn name(&self) -> &str {
        match self {
            Self::Set { name, .. } | Self::Toggle { name, .. } => name,
        }
    }
}

/// Open circuit views plus the adapter that draws them.
pub struct Session<R: RenderAdapter = Headless> {
    config: SessionConfig,
    views: [Option<CircuitView>; 5],
    adapter: R,
}

impl Session<Headless> {
    /// Create a session without a display.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_adapter(config, Headless)
    }
}

impl Default for Session<Headless> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<R: RenderAdapter> Session<R> {
    /// Create a session that renders through `adapter`.
    pub fn with_adapter(config: SessionConfig, adapter: R) -> Self {
        Self {
            config,
            views: Default::default(),
            adapter,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Open a view, creating it from the initial inputs if needed.
    pub fn open(&mut self, kind: CircuitKind) -> &CircuitView {
        open_slot(&mut self.views, &self.config, kind)
    }

    /// An already opened view.
    pub fn view(&self, kind: CircuitKind) -> Option<&CircuitView> {
        self.views[kind.index()].as_ref()
    }

    /// Iterate the opened views.
    pub fn views(&self) -> impl Iterator<Item = &CircuitView> {
        self.views.iter().flatten()
    }

    /// Apply an input edit and return the recomputed outputs.
    ///
    /// An unknown pin name leaves the view untouched.
    pub fn apply(&mut self, change: &InputChange) -> Result<OutputSet> {
        let kind = change.kind();
        let name = change.name();
        let exclusive =
            self.config.exclusive_encoder_inputs && kind == CircuitKind::PriorityEncoder8to3;

        let view = open_slot(&mut self.views, &self.config, kind);
        let mut inputs = *view.inputs();
        let value = match change {
            InputChange::Set { value, .. } => *value,
            InputChange::Toggle { .. } => !inputs.get(name)?,
        };

        if exclusive && value.is_high() {
            // Validate before wiping the other lines
            inputs.get(name)?;
            inputs.clear();
        }
        inputs.set(name, value)?;

        log::debug!("{}: {}={}", kind, name, value);
        let outputs = view.replace_inputs(inputs);
        if view.is_visible() {
            self.adapter.render(view)?;
        }
        Ok(outputs)
    }

    /// Notification from the adapter that a view is now on screen.
    ///
    /// Renders the view's current state once.
    pub fn became_visible(&mut self, kind: CircuitKind) -> Result<()> {
        let view = open_slot(&mut self.views, &self.config, kind);
        view.set_visible(true);
        log::debug!("{} became visible", kind);
        self.adapter.render(view)
    }

    /// Notification from the adapter that a view left the screen.
    pub fn became_hidden(&mut self, kind: CircuitKind) {
        match self.views[kind.index()].as_mut() {
            Some(view) => {
                view.set_visible(false);
                log::debug!("{} became hidden", kind);
            }
            None => log::warn!("hide notification for unopened {} view ignored", kind),
        }
    }

    /// Restore a view's initial inputs.
    pub fn reset(&mut self, kind: CircuitKind) -> Result<OutputSet> {
        let initial = self.config.initial_inputs(kind);
        let view = open_slot(&mut self.views, &self.config, kind);
        let outputs = view.replace_inputs(initial);
        log::debug!("{} reset", kind);
        if view.is_visible() {
            self.adapter.render(view)?;
        }
        Ok(outputs)
    }

    /// The render adapter.
    pub fn adapter(&self) -> &R {
        &self.adapter
    }

    /// Consume the session, returning the adapter.
    pub fn into_adapter(self) -> R {
        self.adapter
    }
}

fn open_slot<'a>(
    views: &'a mut [Option<CircuitView>; 5],
    config: &SessionConfig,
    kind: CircuitKind,
) -> &'a mut CircuitView {
    views[kind.index()].get_or_insert_with(|| {
        log::debug!("opening {} view", kind);
        CircuitView::new(config.initial_inputs(kind))
    })
}
