//! Worker pool selection for per-file stages.

/// Run `op` on a dedicated rayon pool of `threads` workers, or on the global
/// pool when `threads` is 0.
pub fn install<T, F>(threads: usize, op: F) -> T
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    if threads == 0 {
        return op();
    }
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(op),
        Err(e) => {
            tracing::warn!(threads, error = %e, "failed to build worker pool, using global pool");
            op()
        }
    }
}
