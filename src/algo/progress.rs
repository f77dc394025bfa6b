//! Progress reporting for batch border processing.
//!
//! ```
//! use enclose::algo::Progress;
//!
//! let progress = Progress::new(|current, total, border| {
//!     println!("[{}/{}] {}", current, total, border);
//! });
//! progress.report(1, 4, "precentral");
//! ```

/// A progress callback invoked as work items complete.
///
/// The callback receives:
/// - `current`: Number of finished items
/// - `total`: Total number of items
/// - `message`: Name of the item that just finished
///
/// Reports may arrive from worker threads, out of order.
pub struct Progress {
    callback: Box<dyn Fn(usize, usize, &str) + Send + Sync>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Report progress.
    #[inline]
    pub fn report(&self, current: usize, total: usize, message: &str) {
        (self.callback)(current, total, message);
    }

    /// Create a no-op progress reporter that discards all updates.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}
