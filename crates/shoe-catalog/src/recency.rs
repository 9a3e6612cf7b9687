//! Recency window used to decide whether a shoe is a new release.

use chrono::{DateTime, Duration, Utc};

use crate::error::CatalogError;

/// Default window length: one month.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// A "released recently" threshold anchored at a fixed instant.
///
/// A release date is new when `now - release_date < window`. Dates after
/// `now` are therefore always new.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    window: Duration,
    now: DateTime<Utc>,
}

impl RecencyWindow {
    /// Create a window of `days` anchored at the current time.
    ///
    /// Fails when `days` does not fit in a [`Duration`].
    pub fn days(days: i64) -> Result<Self, CatalogError> {
        let window = Duration::try_days(days).ok_or(CatalogError::InvalidWindow(days))?;
        Ok(Self::new(window))
    }

    /// The default one-month window anchored at the current time.
    pub fn last_month() -> Self {
        Self::new(Duration::days(DEFAULT_WINDOW_DAYS))
    }

    fn new(window: Duration) -> Self {
        Self {
            window,
            now: Utc::now(),
        }
    }

    /// Re-anchor the window at `now`.
    pub fn anchored_at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Length of the window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Instant the window is measured from.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Check whether `release_date` falls inside the window.
    pub fn is_new(&self, release_date: DateTime<Utc>) -> bool {
        self.now.signed_duration_since(release_date) < self.window
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::last_month()
    }
}

/// Check whether a shoe released at `release_date` is new as of now.
pub fn is_new_shoe(release_date: DateTime<Utc>) -> bool {
    RecencyWindow::last_month().is_new(release_date)
}
