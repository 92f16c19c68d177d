//! # Overview
//!
//! This module defines the `miette`-based diagnostic type for the tristate
//! parser. There is exactly one domain failure: the input could not be
//! case-folded because it is not text. Unrecognized text is never an error.
//!
//! The command-line front end adds one more failure mode, an I/O error
//! while writing results.
//!
//! # Construction
//!
//! - Use [`TriStateError::not_text`] to build a not-text error from the
//!   rendered input and its type name. The context (source snippet, span and
//!   help line) is filled in for you.
//! - `std::io::Error` converts through `?`.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

pub type SourceArc = Arc<NamedSource<String>>;

/// A byte range inside the rendered input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Type-safe error classification that corresponds to `TriStateError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// The input exposes no case-folding operation.
    TypeError,
    /// Output could not be written.
    Io,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::TypeError => "TypeError",
            ErrorType::Io => "Io",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// The rendered input (if any).
    pub source: Option<SourceArc>,
    /// The span of the offending input inside `source`.
    pub span: Option<Span>,
    /// An optional help message.
    pub help: Option<String>,
}

impl ErrorContext {
    /// Creates a context with source, span, and help message.
    pub fn with_all(source: SourceArc, span: Span, help: String) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: Some(help),
        }
    }
}

/// Every failure the tristate library and binary can report.
#[derive(Debug, Error)]
pub enum TriStateError {
    #[error("{rendered} must be of type string")]
    NotText {
        rendered: String,
        type_name: &'static str,
        ctx: ErrorContext,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TriStateError {
    /// Builds a not-text error for an input rendered as `rendered`.
    pub fn not_text(rendered: impl Into<String>, type_name: &'static str) -> Self {
        let rendered = rendered.into();
        let span = Span {
            start: 0,
            end: rendered.len(),
        };
        let help = format!(
            "expected text such as \"yes\" or \"no\", got a value of type {type_name}"
        );
        let ctx = ErrorContext::with_all(to_error_source(&rendered), span, help);
        TriStateError::NotText {
            rendered,
            type_name,
            ctx,
        }
    }

    fn ctx(&self) -> Option<&ErrorContext> {
        match self {
            TriStateError::NotText { ctx, .. } => Some(ctx),
            TriStateError::Io(_) => None,
        }
    }

    /// Returns the type-safe error classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            TriStateError::NotText { .. } => ErrorType::TypeError,
            TriStateError::Io(_) => ErrorType::Io,
        }
    }
}

impl Diagnostic for TriStateError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            TriStateError::NotText { .. } => "tristate::not_text",
            TriStateError::Io(_) => "tristate::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.ctx()?
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.ctx()?
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let TriStateError::NotText { type_name, ctx, .. } = self else {
            return None;
        };
        let span = ctx.span?;
        // Zero-width spans still get a one-column caret.
        let len = if span.end > span.start {
            span.end - span.start
        } else {
            1
        };
        let label = LabeledSpan::new(Some(format!("this is a {type_name}")), span.start, len);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Converts a rendered input into an `Arc<NamedSource<String>>` for use in error contexts.
pub fn to_error_source<S: AsRef<str>>(source: S) -> SourceArc {
    Arc::new(NamedSource::new("input", source.as_ref().to_string()))
}
