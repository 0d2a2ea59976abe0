//! Pattern scanner: tokenizes a route pattern into literal characters and
//! named parameter tags.
//!
//! A tag is a `:` followed by at least one character, terminated by `/`,
//! another `:`, or the end of the pattern. A `:` sitting directly on a
//! delimiter is a malformed tag: it is counted, replayed as a literal
//! character, and binds no parameter. Tags cannot nest; a `:` always closes
//! the tag being scanned and is then re-examined as a tag opener itself.
//!
//! The scanner is polymorphic over two caller-supplied callbacks so the same
//! walk serves both compiler passes: collecting parameter names, and
//! rewriting the pattern into its matchable form.

/// Upper bound on bound parameters per pattern.
///
/// Exceeding it is a registration error (see
/// [`PatternError::TooManyParams`](crate::PatternError::TooManyParams)); the
/// scanner itself keeps scanning and only caps the `processed` counter.
pub const MAX_ROUTE_PARAMS: usize = 16;

/// Tag counters reported by a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Every `:` seen, well-formed or not.
    pub found: usize,
    /// Well-formed tags, with the counter (not the callback) capped at
    /// [`MAX_ROUTE_PARAMS`]; the tag callback still fires for every
    /// well-formed tag past the cap.
    pub processed: usize,
    /// `:` occurrences with no name character before the next delimiter.
    pub malformed: usize,
}

impl ScanReport {
    /// Number of well-formed tags in the pattern, ignoring the processing cap.
    #[inline]
    pub fn well_formed(&self) -> usize {
        self.found - self.malformed
    }
}

/// Walks `pattern` once, firing `on_literal(index, char)` for every character
/// outside a tag construct and `on_tag(index, name)` for every well-formed
/// tag (`index` is the byte offset of the opening `:`).
pub fn scan<L, T>(pattern: &str, mut on_literal: L, mut on_tag: T) -> ScanReport
where
    L: FnMut(usize, char),
    T: FnMut(usize, &str),
{
    let mut report = ScanReport::default();
    let mut chars = pattern.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if c != ':' {
            on_literal(index, c);
            continue;
        }

        report.found += 1;

        // The name runs up to the next delimiter, which stays in the
        // iterator: a closing '/' is emitted as a literal, a closing ':'
        // opens the next tag.
        let name_start = index + 1;
        let mut name_end = name_start;
        while let Some(&(at, next)) = chars.peek() {
            if next == '/' || next == ':' {
                break;
            }
            chars.next();
            name_end = at + next.len_utf8();
        }

        if name_end == name_start {
            report.malformed += 1;
            on_literal(index, ':');
            continue;
        }

        if report.processed < MAX_ROUTE_PARAMS {
            report.processed += 1;
        }
        on_tag(index, &pattern[name_start..name_end]);
    }

    report
}
