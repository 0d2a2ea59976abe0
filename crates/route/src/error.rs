use thiserror::Error;

/// Registration-time failure: the pattern could not be turned into a usable
/// matcher. The offending registration is rejected, previously registered
/// bindings are unaffected.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("pattern '{pattern}' compiles to an invalid expression: {source}")]
    Regex {
        pattern: String,
        source: regex::Error,
    },

    #[error("pattern '{pattern}' names {found} parameters, the limit is {max}")]
    TooManyParams { pattern: String, found: usize, max: usize },
}

/// Internal matcher fault, distinct from a routing miss. Indicates an
/// inconsistent compiled pattern or a misused match result, not a normal
/// "no such route" outcome.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("pattern '{pattern}' bound {bound} of {expected} parameters")]
    CaptureMismatch {
        pattern: String,
        bound: usize,
        expected: usize,
    },

    #[error("match result was not produced by pattern '{pattern}'")]
    ForeignResult { pattern: String },

    #[error("capture span {start}..{end} of pattern '{pattern}' is out of bounds for the fetched path")]
    InvalidSpan {
        pattern: String,
        start: usize,
        end: usize,
    },
}

/// Outcome of a failed resolution.
///
/// `NotFound` is the normal miss, to be turned into a 404 by the server
/// adapter; `Matcher` is a server-side fault the adapter should map to a
/// 5xx-class response.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no registered route matches the request path")]
    NotFound,

    #[error("matcher failure: {0}")]
    Matcher(#[from] MatchError),
}
