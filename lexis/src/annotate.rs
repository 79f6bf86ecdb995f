//! Line/column annotation of scanned fragments.

use crate::scan::Fragment;
use crate::token::Token;
use lexis_common::{LineTracker, Position};

/// Iterator adapter that turns fragments into positioned tokens.
///
/// Every fragment moves the tracker, ignored ones included, but only
/// fragments that are not ignored come out as tokens.
#[derive(Debug, Clone)]
pub struct Annotate<I> {
    fragments: I,
    tracker: LineTracker,
}

/// Attaches line and column to each fragment, in scan order.
pub fn annotate<'input, I>(fragments: I) -> Annotate<I::IntoIter>
where
    I: IntoIterator<Item = Fragment<'input>>,
{
    Annotate {
        fragments: fragments.into_iter(),
        tracker: LineTracker::new(),
    }
}

impl<'input, I> Iterator for Annotate<I>
where
    I: Iterator<Item = Fragment<'input>>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let fragment = self.fragments.next()?;
            let start = self.tracker.advance(fragment.value);

            if fragment.is_ignored() {
                continue;
            }

            let position = Position::at(start.line, start.column, fragment.offset);
            return Some(Token::from_fragment(fragment, position));
        }
    }
}
