//! Collecting scanner errors into a [`DiagnosticCollection`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::scanner::ErrorCallback;
use tslex_core::TextSpan;
use tslex_diagnostics::{Diagnostic, DiagnosticCollection};

/// A shared diagnostic buffer that hands out scanner error callbacks.
///
/// ```ignore
/// let sink = DiagnosticSink::new();
/// scanner.set_on_error(Some(sink.callback()));
/// // ... scan ...
/// let diagnostics = sink.take();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    diagnostics: Rc<RefCell<DiagnosticCollection>>,
    file: Option<String>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `file` to every diagnostic collected from now on.
    pub fn for_file(file: impl Into<String>) -> Self {
        Self {
            diagnostics: Rc::default(),
            file: Some(file.into()),
        }
    }

    /// A callback that appends to this sink.
    pub fn callback(&self) -> ErrorCallback {
        let diagnostics = Rc::clone(&self.diagnostics);
        let file = self.file.clone();
        Box::new(move |message, start, length, arg0| {
            let span = TextSpan::new(start as u32, length as u32);
            let args: Vec<&str> = arg0.into_iter().collect();
            let mut diagnostic = Diagnostic::with_span(span, message, &args);
            if let Some(file) = &file {
                diagnostic = diagnostic.in_file(file.clone());
            }
            diagnostics.borrow_mut().add(diagnostic);
        })
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Error codes collected so far, in report order.
    pub fn codes(&self) -> Vec<u32> {
        self.diagnostics.borrow().codes()
    }

    /// Move the collected diagnostics out, leaving the sink empty.
    pub fn take(&self) -> DiagnosticCollection {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tslex_diagnostics::messages;

    #[test]
    fn test_callback_records_span_and_argument() {
        let sink = DiagnosticSink::for_file("a.ts");
        let mut callback = sink.callback();
        callback(&messages::_0_EXPECTED, 3, 0, Some("}"));
        callback(&messages::INVALID_CHARACTER, 5, 1, None);
        assert_eq!(sink.codes(), vec![1005, 1127]);

        let collected = sink.take();
        assert!(sink.is_empty());
        let first = &collected.diagnostics()[0];
        assert_eq!(first.span, Some(TextSpan::new(3, 0)));
        assert_eq!(first.message_text, "'}' expected.");
        assert_eq!(first.file.as_deref(), Some("a.ts"));
    }
}
