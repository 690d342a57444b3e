//! Driving a session from a parsed script.

use super::ast::{Action, Stimulus};
use crate::error::Result;
use crate::render::RenderAdapter;
use crate::session::{InputChange, Session};
use crate::signal::{CircuitKind, OutputSet};

/// Outputs of a circuit after one script step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Script line of the step
    pub line: usize,
    /// Circuit the step targeted
    pub kind: CircuitKind,
    /// Outputs once the step was applied
    pub outputs: OutputSet,
}

impl Stimulus {
    /// Apply every step to `session`, collecting the outputs after each.
    ///
    /// Stops at the first error, which is usually a failing render adapter.
    pub fn run<R: RenderAdapter>(&self, session: &mut Session<R>) -> Result<Vec<StepOutcome>> {
        let mut outcomes = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let kind = step.kind;
            log::debug!("line {}: {:?} on {}", step.line, step.action, kind);

            let outputs = match &step.action {
                Action::Select => {
                    session.became_visible(kind)?;
                    *session.open(kind).outputs()
                }
                Action::Hide => {
                    session.became_hidden(kind);
                    *session.open(kind).outputs()
                }
                Action::Reset => session.reset(kind)?,
                Action::Assign(assignments) => {
                    let mut outputs = *session.open(kind).outputs();
                    for (pin, value) in assignments {
                        outputs = session.apply(&InputChange::set(kind, pin.as_str(), *value))?;
                    }
                    outputs
                }
                Action::Toggle(pins) => {
                    let mut outputs = *session.open(kind).outputs();
                    for pin in pins {
                        outputs = session.apply(&InputChange::toggle(kind, pin.as_str()))?;
                    }
                    outputs
                }
            };

            outcomes.push(StepOutcome {
                line: step.line,
                kind,
                outputs,
            });
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use crate::dsl::parse;
    use crate::render::TextRenderer;
    use crate::session::{Session, SessionConfig};
    use crate::signal::{Readout, Signal};

    #[test]
    fn test_run_mux_script() {
        let script = ".circuit mux\nI3=1 S0=1 S1=1\nEN=0\n.toggle EN\n";
        let stimulus = parse(script).unwrap();
        let mut session = Session::new(SessionConfig::default());
        let outcomes = stimulus.run(&mut session).unwrap();

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[1].outputs.get("Y"), Some(Signal::High));
        assert_eq!(outcomes[1].outputs.get("Y'"), Some(Signal::Low));
        assert_eq!(outcomes[2].outputs.values(), &[Signal::Low, Signal::Low]);
        assert_eq!(outcomes[3].outputs.get("Y"), Some(Signal::High));
        assert_eq!(outcomes[3].outputs.readout(), Some(Readout::Selected(3)));
        assert_eq!(outcomes[3].line, 4);
    }

    #[test]
    fn test_run_renders_visible_steps() {
        let script = ".circuit gray\nG2=1\n.hide\nG1=1\n";
        let stimulus = parse(script).unwrap();
        let renderer = TextRenderer::new(Vec::new());
        let mut session = Session::with_adapter(SessionConfig::default(), renderer);
        stimulus.run(&mut session).unwrap();

        let text = String::from_utf8(session.into_adapter().into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "gray: G2=0 G1=0 G0=0 -> B2=0 B1=0 B0=0",
                "gray: G2=1 G1=0 G0=0 -> B2=1 B1=1 B0=1",
            ]
        );
    }
}
