//! Parser for stimulus scripts.

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{LogicLabError, Result};
use crate::signal::{CircuitKind, Signal};

/// Parser for stimulus scripts.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    circuit: Option<CircuitKind>,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            circuit: None,
        })
    }

    /// Parse the entire script.
    pub fn parse(&mut self) -> Result<Stimulus> {
        let mut stimulus = Stimulus::default();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {}
                TokenKind::Directive => {
                    let step = self.parse_directive()?;
                    stimulus.steps.push(step);
                }
                TokenKind::Identifier => {
                    let step = self.parse_assignments()?;
                    stimulus.steps.push(step);
                }
                _ => {
                    return Err(LogicLabError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.expect_line_end()?;
        }

        Ok(stimulus)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(LogicLabError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn expect_line_end(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(LogicLabError::parse(
                self.current.line,
                format!("unexpected {:?} at end of line", self.current.text),
            )),
        }
    }

    fn selected(&self, line: usize) -> Result<CircuitKind> {
        self.circuit
            .ok_or_else(|| LogicLabError::parse(line, "no circuit selected (use '.circuit <name>')"))
    }

    fn pin(&self, kind: CircuitKind, token: &Token) -> Result<String> {
        if kind.input_index(&token.text).is_none() {
            return Err(LogicLabError::parse(
                token.line,
                format!("circuit '{}' has no input '{}'", kind, token.text),
            ));
        }
        Ok(token.text.clone())
    }

    fn parse_directive(&mut self) -> Result<Step> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        let action = match directive.to_lowercase().as_str() {
            ".circuit" => {
                let name = self.expect(TokenKind::Identifier)?;
                let kind = CircuitKind::from_name(&name.text).ok_or_else(|| {
                    LogicLabError::parse(line, format!("unknown circuit: {}", name.text))
                })?;
                self.circuit = Some(kind);
                Action::Select
            }
            ".hide" => Action::Hide,
            ".reset" => Action::Reset,
            ".toggle" => {
                let kind = self.selected(line)?;
                let mut pins = Vec::new();
                while self.current.kind == TokenKind::Identifier {
                    pins.push(self.pin(kind, &self.current)?);
                    self.advance()?;
                }
                if pins.is_empty() {
                    return Err(LogicLabError::parse(line, ".toggle needs at least one pin"));
                }
                Action::Toggle(pins)
            }
            _ => {
                return Err(LogicLabError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        };

        Ok(Step {
            kind: self.selected(line)?,
            action,
            line,
        })
    }

    fn parse_assignments(&mut self) -> Result<Step> {
        let line = self.current.line;
        let kind = self.selected(line)?;
        let mut assignments = Vec::new();

        while self.current.kind == TokenKind::Identifier {
            let pin = self.pin(kind, &self.current)?;
            self.advance()?;
            self.expect(TokenKind::Equals)?;
            let value = self.expect(TokenKind::Number)?;
            let signal = value.text.parse::<Signal>().map_err(|_| {
                LogicLabError::parse(
                    value.line,
                    format!("{} must be 0 or 1, got {}", pin, value.text),
                )
            })?;
            assignments.push((pin, signal));
        }

        Ok(Step {
            kind,
            action: Action::Assign(assignments),
            line,
        })
    }
}
