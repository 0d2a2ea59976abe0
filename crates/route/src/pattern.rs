//! Pattern compiler and route matcher.
//!
//! [`RoutePattern::compile`] runs the scanner twice over the user pattern:
//! once to collect parameter names in positional order, once to derive the
//! matchable form, where every literal character is copied verbatim and every
//! well-formed tag becomes a capturing wildcard group. The derived form is
//! anchored and compiled with [`regex::Regex`], giving full-string match
//! semantics with one capturing group per parameter, left to right.
//!
//! Matching produces an immutable [`MatchResult`] holding the capture spans;
//! the argument binder consumes it to cut the parameter values out of the
//! path. No state is shared between calls, so one compiled pattern can serve
//! any number of threads at once.

use crate::args::RouteArgs;
use crate::error::{MatchError, PatternError};
use crate::scanner::{self, ScanReport, MAX_ROUTE_PARAMS};
use regex::Regex;
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::error;

/// Source of per-pattern identities; see [`MatchResult`].
static NEXT_PATTERN_ID: AtomicU64 = AtomicU64::new(0);

/// Capturing template substituted for every well-formed tag: zero or more
/// printable characters.
const GROUP_TEMPLATE: &str = "([[:print:]]*)";

/// A compiled route pattern.
///
/// Owns the original pattern string, the derived matchable string, the
/// ordered parameter names and the compiled matcher. Parameter names line up
/// positionally with the capturing groups of the matcher.
///
/// Note a known sharp edge inherited from the pattern syntax: no escaping is
/// defined, so regex metacharacters in the user pattern flow into the derived
/// expression untouched.
#[derive(Debug)]
pub struct RoutePattern {
    id: u64,
    source: String,
    derived: String,
    params: Vec<String>,
    matcher: Regex,
    report: ScanReport,
}

/// Capture spans of one successful match: immutable, produced by
/// [`RoutePattern::find`] and consumed by [`RoutePattern::fetch`].
///
/// Carries the identity of the pattern that produced it, so the binder can
/// reject a result applied against the wrong pattern. Span 0 is the whole
/// match; span `n` belongs to the `n`-th parameter. Offsets are byte
/// positions into the matched path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pattern_id: u64,
    spans: Vec<Option<(usize, usize)>>,
}

impl MatchResult {
    /// Returns the (start, end) byte span of the given capture group, or
    /// `None` if the group did not participate in the match.
    pub fn span(&self, group: usize) -> Option<(usize, usize)> {
        self.spans.get(group).copied().flatten()
    }

    /// Number of capture groups, the whole-match group included.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl RoutePattern {
    /// Compiles a route pattern string.
    ///
    /// Malformed tags (`::`, a trailing `:`) are counted and replayed as
    /// literals, never an error; a pattern with zero tags compiles to a
    /// literal matcher of itself. Registration fails if the pattern names
    /// more than [`MAX_ROUTE_PARAMS`] parameters or if the derived
    /// expression does not compile.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        // Pass 1: collect parameter names in positional order.
        let mut params: Vec<String> = Vec::new();
        let report = scanner::scan(pattern, |_, _| {}, |_, name| params.push(name.to_owned()));

        if report.well_formed() > MAX_ROUTE_PARAMS {
            return Err(PatternError::TooManyParams {
                pattern: pattern.to_owned(),
                found: report.well_formed(),
                max: MAX_ROUTE_PARAMS,
            });
        }

        // Pass 2: derive the matchable form, anchored for full-string
        // semantics. Both callbacks append to the same buffer, hence the
        // RefCell.
        let mut buffer = String::with_capacity(pattern.len() + params.len() * GROUP_TEMPLATE.len() + 2);
        buffer.push('^');
        let buffer = RefCell::new(buffer);
        scanner::scan(pattern, |_, c| buffer.borrow_mut().push(c), |_, _| buffer.borrow_mut().push_str(GROUP_TEMPLATE));
        let mut derived = buffer.into_inner();
        derived.push('$');

        let matcher = Regex::new(&derived).map_err(|source| PatternError::Regex {
            pattern: pattern.to_owned(),
            source,
        })?;

        let id = NEXT_PATTERN_ID.fetch_add(1, Ordering::Relaxed);
        Ok(Self { id, source: pattern.to_owned(), derived, params, matcher, report })
    }

    /// The user-supplied pattern string.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The derived matchable form, anchors included.
    pub fn derived(&self) -> &str {
        &self.derived
    }

    /// Parameter names in capture order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Tag counters observed while compiling.
    pub fn scan_report(&self) -> ScanReport {
        self.report
    }

    /// Tests whether `path` matches this pattern as a whole.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    /// Runs the matcher and returns the capture spans of a successful match,
    /// or `None` on a routing miss.
    pub fn find(&self, path: &str) -> Option<MatchResult> {
        self.matcher.captures(path).map(|caps| MatchResult {
            pattern_id: self.id,
            spans: (0..caps.len()).map(|group| caps.get(group).map(|m| (m.start(), m.end()))).collect(),
        })
    }

    /// Binds parameter names to the path substrings delimited by the capture
    /// spans of `found`, in order.
    ///
    /// A result produced by another pattern is rejected up front as
    /// [`MatchError::ForeignResult`], and a span that does not land on
    /// character boundaries of `path` is rejected as
    /// [`MatchError::InvalidSpan`]. A parameter whose capture group carries
    /// no span means the compiled pattern and its parameter list disagree;
    /// that is a route-internal fault, logged and surfaced as
    /// [`MatchError::CaptureMismatch`], never silently truncated.
    pub fn fetch<'route, 'path>(
        &'route self,
        path: &'path str,
        found: &MatchResult,
    ) -> Result<RouteArgs<'route, 'path>, MatchError> {
        if found.pattern_id != self.id {
            error!(
                pattern = %self.source,
                "match result was produced by a different pattern"
            );
            return Err(MatchError::ForeignResult { pattern: self.source.clone() });
        }
        let mut args = RouteArgs::with_capacity(self.params.len());
        for (position, name) in self.params.iter().enumerate() {
            match found.span(position + 1) {
                Some((start, end)) => match path.get(start..end) {
                    Some(value) => args.push(name, value),
                    None => {
                        error!(
                            pattern = %self.source,
                            start,
                            end,
                            "capture span does not fit the fetched path"
                        );
                        return Err(MatchError::InvalidSpan {
                            pattern: self.source.clone(),
                            start,
                            end,
                        });
                    }
                },
                None => {
                    error!(
                        pattern = %self.source,
                        bound = position,
                        expected = self.params.len(),
                        "capture group has no span, compiled pattern is inconsistent"
                    );
                    return Err(MatchError::CaptureMismatch {
                        pattern: self.source.clone(),
                        bound: position,
                        expected: self.params.len(),
                    });
                }
            }
        }
        Ok(args)
    }
}
