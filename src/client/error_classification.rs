//! Status classification for the retry loop.
//!
//! A single pure predicate decides, per response, whether the call succeeded,
//! must stop, or may be attempted again.

/// Outcome class of one HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// 2xx: decode the body and return.
    Success,
    /// 429, 5xx and anything below 200: consume one retry.
    Retryable,
    /// 4xx other than 429: return immediately.
    Terminal,
}

impl Disposition {
    pub fn is_retryable(self) -> bool {
        matches!(self, Disposition::Retryable)
    }
}

/// Classifies a final HTTP status code.
///
/// Sub-200 statuses fall through to `Retryable`; HTTP clients rarely surface
/// them as a final status.
pub fn classify_status(status: u16) -> Disposition {
    match status {
        200..=299 => Disposition::Success,
        429 => Disposition::Retryable,
        400..=499 => Disposition::Terminal,
        _ => Disposition::Retryable,
    }
}
