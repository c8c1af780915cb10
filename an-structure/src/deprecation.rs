//! Accessors for retired filesystem concepts.
//!
//! Old call sites keep working against the current accessor set: a retired
//! accessor always answers `None` and logs one compatibility notice per
//! call.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Log target used for deprecation notices.
pub const NOTICE_TARGET: &str = "an_structure::deprecated";

/// A retired accessor and why it was retired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation {
    /// Accessor name.
    pub accessor: &'static str,
    /// Version in which it was retired.
    pub since: &'static str,
    /// Retirement rationale.
    pub reason: &'static str,
}

impl Deprecation {
    /// Mirrored publish share, retired when publishing stopped copying to it.
    pub const PUBLISHED_ROOT: Self = Self {
        accessor: "published_root",
        since: "0.1.0",
        reason: "publishing stopped copying to a separate share in 2017",
    };

    /// Web-based dailies review.
    pub const DAILIES_URL: Self = Self {
        accessor: "dailies_url",
        since: "0.1.0",
        reason: "web dailies review has been retired",
    };
}

impl fmt::Display for Deprecation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}() is deprecated since {}: {}",
            self.accessor, self.since, self.reason
        )
    }
}

/// Answers deprecated calls and counts them.
///
/// # Examples
///
/// ```
/// use an_structure::{Deprecation, DeprecationShim};
///
/// let shim = DeprecationShim::new();
/// let answer: Option<String> = shim.call(&Deprecation::DAILIES_URL);
/// assert!(answer.is_none());
/// assert_eq!(shim.notices(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DeprecationShim {
    notices: AtomicUsize,
}

impl DeprecationShim {
    /// Create a shim with no recorded notices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the call, emit the notice and return `None`.
    pub fn call<T>(&self, deprecation: &Deprecation) -> Option<T> {
        self.notices.fetch_add(1, Ordering::Relaxed);
        log::warn!(target: NOTICE_TARGET, "{deprecation}");
        None
    }

    /// Number of deprecated calls answered so far.
    #[must_use]
    pub fn notices(&self) -> usize {
        self.notices.load(Ordering::Relaxed)
    }
}

impl Clone for DeprecationShim {
    fn clone(&self) -> Self {
        Self {
            notices: AtomicUsize::new(self.notices()),
        }
    }
}
