use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Progress callback: receives the number of output rows completed so far
/// across the whole multiplication.
///
/// It is invoked from whichever worker thread finished the row, possibly
/// concurrently, so values can arrive out of order. Only the last value seen
/// after `multiply` returns is guaranteed to equal the total row count.
pub type ProgressFn<'a> = dyn Fn(usize) + Send + Sync + 'a;

/// Shared completed-row counter threaded through the task tree by reference.
pub struct Progress<'a> {
    completed: AtomicUsize,
    callback: Option<&'a ProgressFn<'a>>,
}

impl<'a> Progress<'a> {
    pub fn new(callback: Option<&'a ProgressFn<'a>>) -> Self {
        Progress {
            completed: AtomicUsize::new(0),
            callback,
        }
    }

    /// Records one finished row and notifies the callback with the new total.
    ///
    /// A panicking callback is caught and discarded; it never unwinds into
    /// the task that computed the row.
    pub fn row_completed(&self) -> usize {
        let completed = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(callback) = self.callback {
            let _ = panic::catch_unwind(AssertUnwindSafe(|| callback(completed)));
        }
        completed
    }

    /// Number of rows recorded so far.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for Progress<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress")
            .field("completed", &self.completed())
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_counts_without_callback() {
        let progress = Progress::new(None);
        assert_eq!(progress.row_completed(), 1);
        assert_eq!(progress.row_completed(), 2);
        assert_eq!(progress.completed(), 2);
    }

    #[test]
    fn test_callback_sees_new_total() {
        let seen = Mutex::new(Vec::new());
        let cb: &ProgressFn<'_> = &|n| seen.lock().unwrap().push(n);
        let progress = Progress::new(Some(cb));
        progress.row_completed();
        progress.row_completed();
        progress.row_completed();
        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_panicking_callback_is_swallowed() {
        let cb: &ProgressFn<'_> = &|n| {
            if n == 2 {
                panic!("callback failure");
            }
        };
        let progress = Progress::new(Some(cb));
        progress.row_completed();
        progress.row_completed();
        assert_eq!(progress.row_completed(), 3);
    }

    #[test]
    fn test_concurrent_increments() {
        let progress = Progress::new(None);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..250 {
                        progress.row_completed();
                    }
                });
            }
        });
        assert_eq!(progress.completed(), 1000);
    }
}
