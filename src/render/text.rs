//! Plain-text rendering for terminals and logs.

use std::io::Write;

use super::RenderAdapter;
use crate::error::{LogicLabError, Result};
use crate::session::CircuitView;
use crate::signal::{CircuitKind, OutputSet};

/// Writes one line per render: `<circuit>: <inputs> -> <outputs>`.
///
/// BCD views can additionally print an ASCII digit underneath.
pub struct TextRenderer<W: Write> {
    out: W,
    draw_segments: bool,
}

impl<W: Write> TextRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            draw_segments: false,
        }
    }

    /// Also draw the 7-segment glyph for BCD views.
    pub fn with_segment_art(mut self, enabled: bool) -> Self {
        self.draw_segments = enabled;
        self
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderAdapter for TextRenderer<W> {
    fn render(&mut self, view: &CircuitView) -> Result<()> {
        let outputs = view.outputs();
        writeln!(self.out, "{}: {} -> {}", view.kind(), view.inputs(), outputs)
            .map_err(|e| LogicLabError::render(e.to_string()))?;

        if self.draw_segments && view.kind() == CircuitKind::BcdTo7Segment {
            for line in seven_segment_art(outputs) {
                writeln!(self.out, "    {}", line)
                    .map_err(|e| LogicLabError::render(e.to_string()))?;
            }
        }
        Ok(())
    }
}

/// Three text rows picturing the lit segments of a BCD output set.
///
/// Other circuits yield blank rows.
pub fn seven_segment_art(outputs: &OutputSet) -> [String; 3] {
    let lit = |name: &str| {
        outputs.kind() == CircuitKind::BcdTo7Segment
            && outputs.get(name).map_or(false, |s| s.is_high())
    };
    let mark = |name: &str, on: char| if lit(name) { on } else { ' ' };

    [
        format!(" {} ", mark("a", '_')),
        format!("{}{}{}", mark("f", '|'), mark("g", '_'), mark("b", '|')),
        format!("{}{}{}", mark("e", '|'), mark("d", '_'), mark("c", '|')),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits;
    use crate::signal::{InputSet, Signal};

    fn bcd(value: usize) -> OutputSet {
        let bits: [Signal; 4] = crate::signal::from_index(value);
        circuits::evaluate(&InputSet::from_values(CircuitKind::BcdTo7Segment, &bits))
    }

    #[test]
    fn test_art_for_digits() {
        assert_eq!(seven_segment_art(&bcd(8)), [" _ ", "|_|", "|_|"]);
        assert_eq!(seven_segment_art(&bcd(1)), ["   ", "  |", "  |"]);
        assert_eq!(seven_segment_art(&bcd(4)), ["   ", "|_|", "  |"]);
    }

    #[test]
    fn test_art_blank_for_invalid() {
        assert_eq!(seven_segment_art(&bcd(12)), ["   ", "   ", "   "]);
    }

    #[test]
    fn test_render_line() {
        let inputs = InputSet::new(CircuitKind::GrayToBinary3bit)
            .with("G1", Signal::High)
            .unwrap();
        let view = CircuitView::new(inputs);
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&view).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "gray: G2=0 G1=1 G0=0 -> B2=0 B1=1 B0=1\n");
    }

    #[test]
    fn test_render_with_segments() {
        let inputs = InputSet::new(CircuitKind::BcdTo7Segment)
            .with("A", Signal::High)
            .unwrap();
        let view = CircuitView::new(inputs);
        let mut renderer = TextRenderer::new(Vec::new()).with_segment_art(true);
        renderer.render(&view).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "bcd: A=1 B=0 C=0 D=0 -> a=0 b=1 c=1 d=0 e=0 f=0 g=0 [1]");
        assert_eq!(lines.len(), 4);
    }
}
