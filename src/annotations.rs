//! Per-pass aggregation of findings into editor-style annotations.
//!
//! An `AnnotationSet` is rebuilt from scratch on every lint pass. It holds,
//! per severity bucket, a line-indexed list of messages plus a line-indexed
//! list of half-open column ranges to underline.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Finding, LintSeverity};

/// Line number -> messages reported on that line
pub type LineMessages = BTreeMap<usize, Vec<String>>;

/// Line number -> half-open `[start, end)` column ranges to underline
pub type LineUnderlines = BTreeMap<usize, Vec<(usize, usize)>>;

/// The aggregate result of one lint pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnnotationSet {
    pub error_messages: LineMessages,
    pub violation_messages: LineMessages,
    pub warning_messages: LineMessages,

    pub error_underlines: LineUnderlines,
    pub violation_underlines: LineUnderlines,
    pub warning_underlines: LineUnderlines,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finding in its severity bucket.
    ///
    /// Messages are appended as-is: recording an identical finding twice
    /// yields two entries. Underlines are only recorded when the finding
    /// carries a column; the range covers a single character.
    pub fn record(&mut self, finding: &Finding) {
        let (messages, underlines) = self.bucket_mut(finding.severity);

        messages
            .entry(finding.line)
            .or_default()
            .push(finding.message.clone());

        if let Some(column) = finding.column {
            underlines
                .entry(finding.line)
                .or_default()
                .push((column, column + 1));
        }
    }

    fn bucket_mut(&mut self, severity: LintSeverity) -> (&mut LineMessages, &mut LineUnderlines) {
        match severity {
            LintSeverity::Error => (&mut self.error_messages, &mut self.error_underlines),
            LintSeverity::Violation => {
                (&mut self.violation_messages, &mut self.violation_underlines)
            }
            LintSeverity::Warning => (&mut self.warning_messages, &mut self.warning_underlines),
        }
    }

    fn messages(&self, severity: LintSeverity) -> &LineMessages {
        match severity {
            LintSeverity::Error => &self.error_messages,
            LintSeverity::Violation => &self.violation_messages,
            LintSeverity::Warning => &self.warning_messages,
        }
    }

    /// Number of messages recorded in one severity bucket
    pub fn count(&self, severity: LintSeverity) -> usize {
        self.messages(severity).values().map(Vec::len).sum()
    }

    pub fn error_count(&self) -> usize {
        self.count(LintSeverity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(LintSeverity::Warning)
    }

    pub fn violation_count(&self) -> usize {
        self.count(LintSeverity::Violation)
    }

    pub fn is_empty(&self) -> bool {
        self.error_messages.is_empty()
            && self.violation_messages.is_empty()
            && self.warning_messages.is_empty()
    }

    /// All lines that carry at least one message, in ascending order
    pub fn annotated_lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self
            .error_messages
            .keys()
            .chain(self.violation_messages.keys())
            .chain(self.warning_messages.keys())
            .copied()
            .collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }
}
