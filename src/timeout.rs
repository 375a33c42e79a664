use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Runs `f` on a worker thread and waits at most `limit` for its result.
///
/// Returns `None` when the deadline passes or the worker panics. A worker that
/// misses the deadline is left running detached; its result is dropped.
pub fn run_with_timeout<T, F>(limit: Duration, f: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(f());
    });
    rx.recv_timeout(limit).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_result_within_limit() {
        assert_eq!(run_with_timeout(Duration::from_secs(5), || 6 * 7), Some(42));
    }

    #[test]
    fn gives_up_after_limit() {
        let slow = || {
            thread::sleep(Duration::from_secs(2));
            1
        };
        assert_eq!(run_with_timeout(Duration::from_millis(50), slow), None);
    }

    #[test]
    fn panicking_worker_yields_none() {
        let r: Option<i32> = run_with_timeout(Duration::from_secs(5), || panic!("boom"));
        assert_eq!(r, None);
    }
}
