//! Error types for the Logic Lab evaluators and their front ends.
//!
//! The evaluators themselves cannot fail. Errors only arise at the edges:
//! converting raw values into signals, addressing pins by name, parsing
//! stimulus scripts and handing outputs to a render adapter.

use thiserror::Error;

/// Result type alias using [`LogicLabError`].
pub type Result<T> = std::result::Result<T, LogicLabError>;

/// Unified error type for all Logic Lab operations.
#[derive(Error, Debug)]
pub enum LogicLabError {
    // ============ Signal Errors ============
    /// A value other than 0 or 1 was offered as a signal
    #[error("Invalid signal value {value} (expected 0 or 1)")]
    InvalidSignal { value: i64 },

    /// Pin name not present on the circuit
    #[error("Circuit '{circuit}' has no signal named '{name}'")]
    UnknownSignal { circuit: String, name: String },

    /// Command line assignment not of the form `PIN=BIT`
    #[error("Invalid assignment '{text}' (expected PIN=BIT)")]
    InvalidAssignment { text: String },

    /// Unknown circuit short name
    #[error("Unknown circuit '{name}' (expected one of: decoder, encoder, gray, mux, bcd)")]
    UnknownCircuit { name: String },

    // ============ Stimulus Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    // ============ I/O Errors ============
    /// Error reading a stimulus file
    #[error("Failed to read stimulus file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A render adapter could not present a view
    #[error("Render error: {message}")]
    RenderError { message: String },
}

impl LogicLabError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an unknown signal error
    pub fn unknown_signal(circuit: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownSignal {
            circuit: circuit.into(),
            name: name.into(),
        }
    }

    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::RenderError {
            message: message.into(),
        }
    }
}

