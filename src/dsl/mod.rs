//! Stimulus scripts: scripted sequences of input changes.
//!
//! The language is line-oriented and human-editable. Each line either
//! selects a circuit, changes inputs of the selected circuit, or is blank.
//!
//! # Grammar Overview
//!
//! ```text
//! script      = { line }
//! line        = [ directive | assignments ] [ comment ] newline
//! comment     = ('#' | ';') { any_char }
//! directive   = ".circuit" circuit_name
//!             | ".toggle" pin { pin }
//!             | ".reset"
//!             | ".hide"
//! assignments = pin '=' bit { [','] pin '=' bit }
//! bit         = "0" | "1"
//! ```
//!
//! Circuit names are `decoder`, `encoder`, `gray`, `mux` and `bcd`. Pin names
//! are the circuit's input names and are case-sensitive.
//!
//! # Example
//!
//! ```text
//! # Route I3 through the multiplexer, then disable it
//! .circuit mux
//! I3=1 S0=1 S1=1
//! EN=0
//! .toggle EN
//! ```
//!
//! Selecting a circuit puts it on screen; every later step on that circuit is
//! rendered until `.hide`.

mod ast;
mod lexer;
mod parser;
mod run;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use run::StepOutcome;

use crate::error::Result;

/// Parse a stimulus script.
pub fn parse(input: &str) -> Result<Stimulus> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a stimulus script file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Stimulus> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::LogicLabError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}
