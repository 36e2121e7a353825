//! Table configuration options.

use core::time::Duration;

/// Configuration options for a [`Table`](crate::Table).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default().with_auto_restart_after(Some(Duration::from_secs(3)));
/// assert_eq!(options.auto_restart_after, Some(Duration::from_secs(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Delay between a round resolving and the table clearing itself.
    /// `None` disables the automatic restart.
    pub auto_restart_after: Option<Duration>,
}

impl TableOptions {
    /// Default delay before a resolved round is cleared.
    pub const DEFAULT_AUTO_RESTART: Duration = Duration::from_secs(7);

    /// Sets the automatic restart delay.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_auto_restart_after(None);
    /// assert_eq!(options.auto_restart_after, None);
    /// ```
    #[must_use]
    pub const fn with_auto_restart_after(mut self, delay: Option<Duration>) -> Self {
        self.auto_restart_after = delay;
        self
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            auto_restart_after: Some(Self::DEFAULT_AUTO_RESTART),
        }
    }
}
