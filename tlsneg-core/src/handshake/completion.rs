//! Handshake completion flag.

use std::sync::{Arc, Mutex, MutexGuard};

/// Shared "handshake complete" flag.
///
/// Clones share the same flag, so a liveness check on another thread can
/// observe completion while the handshake thread sets it. Only the handshake
/// itself can set it.
#[derive(Debug, Clone, Default)]
pub struct CompletionFlag {
    complete: Arc<Mutex<bool>>,
}

impl CompletionFlag {
    /// Create an unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        // A panic while holding the lock cannot leave a bool half-written.
        self.complete.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Check if the handshake has completed.
    pub fn is_complete(&self) -> bool {
        *self.lock()
    }

    /// Set the flag. Returns `true` only for the call that changed it.
    pub(crate) fn mark_complete(&self) -> bool {
        let mut complete = self.lock();
        !std::mem::replace(&mut *complete, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_only_first_mark_wins() {
        let flag = CompletionFlag::new();
        assert!(!flag.is_complete());
        assert!(flag.mark_complete());
        assert!(!flag.mark_complete());
        assert!(flag.is_complete());
    }

    #[test]
    fn test_concurrent_marks() {
        let flag = CompletionFlag::new();
        let winners: usize = (0..8)
            .map(|_| {
                let flag = flag.clone();
                thread::spawn(move || flag.mark_complete())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap() as usize)
            .sum();
        assert_eq!(winners, 1);
        assert!(flag.is_complete());
    }
}
