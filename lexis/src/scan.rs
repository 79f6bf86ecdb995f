//! The scan loop.
//!
//! [`Fragments`] walks the input once, asking the resolver for a match at
//! every offset. Characters nothing matches are buffered and handed out
//! as a single unknown fragment right before the next match (or at the
//! end of input). Positions are attached later by
//! [`annotate`](crate::annotate::annotate).

use crate::compile::CompiledRuleTable;
use crate::cursor::Cursor;
use crate::options::TieBreak;
use crate::resolver::resolve;
use log::trace;
use std::sync::Arc;

/// Where a fragment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Text matched by an emitted rule.
    Matched,
    /// Text matched by an ignored rule.
    Ignored,
    /// A run of characters no rule matched.
    Unknown,
    /// The zero-length end-of-input marker.
    Eof,
}

/// A piece of scanned input before line and column are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'input> {
    pub kind: Arc<str>,
    pub value: &'input str,
    pub offset: usize,
    pub origin: Origin,
}

impl Fragment<'_> {
    pub fn is_ignored(&self) -> bool {
        self.origin == Origin::Ignored
    }

    pub fn is_unknown(&self) -> bool {
        self.origin == Origin::Unknown
    }

    pub fn is_eof(&self) -> bool {
        self.origin == Origin::Eof
    }
}

/// Scan-time settings resolved from [`LexerOptions`](crate::LexerOptions).
#[derive(Debug, Clone)]
pub(crate) struct ScanSettings {
    pub(crate) unknown: Arc<str>,
    pub(crate) eof: Option<Arc<str>>,
    pub(crate) tie_break: TieBreak,
}

/// Lazily scans an input into fragments.
#[derive(Debug, Clone)]
pub struct Fragments<'l, 'input> {
    table: &'l CompiledRuleTable,
    settings: &'l ScanSettings,
    cursor: Cursor<'input>,
    pending: Option<Fragment<'input>>,
    finished: bool,
}

impl<'l, 'input> Fragments<'l, 'input> {
    pub(crate) fn new(
        table: &'l CompiledRuleTable,
        settings: &'l ScanSettings,
        input: &'input str,
    ) -> Self {
        Self {
            table,
            settings,
            cursor: Cursor::new(input),
            pending: None,
            finished: false,
        }
    }

    /// The unknown run from `start` up to the cursor.
    fn unknown(&self, start: usize) -> Fragment<'input> {
        trace!("unknown input at {}..{}", start, self.cursor.offset());

        Fragment {
            kind: Arc::clone(&self.settings.unknown),
            value: self.cursor.slice_from(start),
            offset: start,
            origin: Origin::Unknown,
        }
    }
}

impl<'input> Iterator for Fragments<'_, 'input> {
    type Item = Fragment<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(fragment) = self.pending.take() {
            return Some(fragment);
        }
        if self.finished {
            return None;
        }

        let mut unknown_start = None;

        while !self.cursor.is_eof() {
            let offset = self.cursor.offset();

            let Some(found) = resolve(
                self.table,
                self.cursor.input(),
                offset,
                self.settings.tie_break,
            ) else {
                // Always a full char, so the cursor stays on a boundary.
                unknown_start.get_or_insert(offset);
                self.cursor.advance();
                continue;
            };

            let matched = Fragment {
                kind: Arc::clone(found.rule.kind()),
                value: found.text,
                offset,
                origin: if found.rule.ignore() {
                    Origin::Ignored
                } else {
                    Origin::Matched
                },
            };
            let unknown = unknown_start.map(|start| self.unknown(start));
            self.cursor.advance_by(found.text.len());

            return match unknown {
                Some(fragment) => {
                    self.pending = Some(matched);
                    Some(fragment)
                }
                None => Some(matched),
            };
        }

        if let Some(start) = unknown_start {
            return Some(self.unknown(start));
        }

        self.finished = true;
        let offset = self.cursor.offset();
        self.settings.eof.as_ref().map(|kind| Fragment {
            kind: Arc::clone(kind),
            value: "",
            offset,
            origin: Origin::Eof,
        })
    }
}
