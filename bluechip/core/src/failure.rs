/// Number of trace lines shown under the failure message in development.
const TRACE_EXCERPT_LINES: usize = 3;

/// Leading text the renderer puts in front of a captured error.
const CAPTURED_PREFIX: &str = "Encountered error: ";

/// What the top-level fallback knows about an unexpected rendering failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub message: String,
    pub trace: Option<String>,
}

impl FailureReport {
    /// Creates a report with a message and no trace.
    pub fn new(message: impl Into<String>) -> Self {
        FailureReport {
            message: message.into(),
            trace: None,
        }
    }

    /// Builds a report from the multi-line text of a captured error.
    ///
    /// The first line, minus the renderer's prefix, becomes the message. The
    /// whole text is kept as the trace.
    pub fn from_captured(text: &str) -> Self {
        let headline = text.lines().next().unwrap_or_default();
        let message = headline.strip_prefix(CAPTURED_PREFIX).unwrap_or(headline).trim();
        let message = if message.is_empty() {
            "Unknown error"
        } else {
            message
        };
        FailureReport::new(message).with_trace(text)
    }

    /// Attaches a diagnostic trace whose first line repeats the message.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// The frames right after the headline of the trace, which repeats the
    /// message itself.
    pub fn trace_excerpt(&self) -> Option<String> {
        let trace = self.trace.as_deref()?;
        let excerpt = trace
            .lines()
            .skip(1)
            .take(TRACE_EXCERPT_LINES)
            .collect::<Vec<_>>()
            .join("\n");
        (!excerpt.trim().is_empty()).then_some(excerpt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_excerpt_three_lines_after_headline() {
        let report = FailureReport::new("boom").with_trace(
            "Error: boom\n  at render\n  at Home\n  at Shell\n  at App",
        );

        assert_eq!(
            report.trace_excerpt().as_deref(),
            Some("  at render\n  at Home\n  at Shell")
        );
    }

    #[test]
    fn cannot_excerpt_without_frames() {
        assert_eq!(FailureReport::new("boom").trace_excerpt(), None);
        assert_eq!(
            FailureReport::new("boom").with_trace("Error: boom").trace_excerpt(),
            None
        );
    }

    #[test]
    fn can_split_captured_error_into_message_and_trace() {
        // Arrange
        let text = "Encountered error: Custom { kind: Other, error: \"boom\" }\n\
                    In scope: ScopeId(5, \"Boom\")\n\
                    Backtrace: disabled backtrace\n\
                    Context: ";

        // Act
        let report = FailureReport::from_captured(text);

        // Assert
        assert_eq!(report.message, "Custom { kind: Other, error: \"boom\" }");
        assert_eq!(report.trace.as_deref(), Some(text));
        assert_eq!(
            report.trace_excerpt().as_deref(),
            Some("In scope: ScopeId(5, \"Boom\")\nBacktrace: disabled backtrace\nContext: ")
        );
    }

    #[test]
    fn can_keep_unprefixed_headline_as_message() {
        let report = FailureReport::from_captured("boom\n  at render");

        assert_eq!(report.message, "boom");
        assert_eq!(report.trace_excerpt().as_deref(), Some("  at render"));
    }

    #[test]
    fn can_fall_back_to_unknown_error_for_blank_text() {
        assert_eq!(FailureReport::from_captured("").message, "Unknown error");
        assert_eq!(
            FailureReport::from_captured("Encountered error: \nIn scope: x").message,
            "Unknown error"
        );
    }
}
