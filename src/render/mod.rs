//! Boundary between the evaluators and whatever draws them.
//!
//! A [`RenderAdapter`] receives a [`CircuitView`] whenever a visible view
//! changes, or when a view first becomes visible. Adapters own all layout and
//! presentation; the evaluators emit no drawing instructions.

mod text;

pub use text::{seven_segment_art, TextRenderer};

use crate::error::Result;
use crate::session::CircuitView;

/// Something that presents circuit views.
pub trait RenderAdapter {
    /// Present the current state of a view.
    fn render(&mut self, view: &CircuitView) -> Result<()>;
}

/// Adapter that draws nothing, for sessions driven without a display.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl RenderAdapter for Headless {
    fn render(&mut self, _view: &CircuitView) -> Result<()> {
        Ok(())
    }
}

