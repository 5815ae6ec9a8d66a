use std::iter::FusedIterator;

use crate::delimiter::Delimiter;
use crate::error::SplitError;

/// Lazily splits a borrowed `&str` on a [`Delimiter`].
///
/// Segments are sub-slices of the original input; nothing is copied or
/// allocated. Segments borrow only from the input (`'a`), so they stay usable
/// after the delimiter is gone.
///
/// `remainder` is `None` once every segment has been handed out. `Some("")`
/// is a real, still-owed trailing segment, e.g. the second piece of `"a,"`.
#[derive(Debug, Clone)]
pub struct StrSplit<'a, D> {
    remainder: Option<&'a str>,
    delimiter: D,
}

impl<'a, D: Delimiter> StrSplit<'a, D> {
    /// Creates a splitter over `input`.
    ///
    /// An empty `input` produces no segments at all. An empty `delimiter` is
    /// rejected, since it would match forever without advancing.
    pub fn new(input: &'a str, delimiter: D) -> Result<Self, SplitError> {
        if delimiter.is_empty() {
            tracing::debug!("rejecting empty delimiter");
            return Err(SplitError::EmptyDelimiter);
        }

        tracing::trace!(input_len = input.len(), "creating splitter");
        let remainder = if input.is_empty() { None } else { Some(input) };
        Ok(StrSplit {
            remainder,
            delimiter,
        })
    }
}

impl<'a, D> StrSplit<'a, D> {
    /// The part of the input not yet yielded, or `None` once exhausted.
    pub fn remainder(&self) -> Option<&'a str> {
        self.remainder
    }

    pub fn is_exhausted(&self) -> bool {
        self.remainder.is_none()
    }
}

impl<'a, D: Delimiter> Iterator for StrSplit<'a, D> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let remainder = self.remainder?;
        if let Some((start, end)) = self.delimiter.find_next(remainder) {
            self.remainder = Some(&remainder[end..]);
            Some(&remainder[..start])
        } else {
            tracing::trace!("splitter exhausted");
            self.remainder.take()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remainder {
            None => (0, Some(0)),
            Some(remainder) => (1, Some(remainder.len() + 1)),
        }
    }
}

impl<D: Delimiter> FusedIterator for StrSplit<'_, D> {}

/// Shorthand for [`StrSplit::new`].
pub fn split<D: Delimiter>(input: &str, delimiter: D) -> Result<StrSplit<'_, D>, SplitError> {
    StrSplit::new(input, delimiter)
}

/// Everything in `input` before the first `c`, or all of `input` if `c` never
/// occurs.
pub fn until_char(input: &str, c: char) -> &str {
    StrSplit::new(input, c)
        .ok()
        .and_then(|mut parts| parts.next())
        .unwrap_or("")
}
