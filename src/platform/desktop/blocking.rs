use std::time::Instant;

use anyhow::Context;
use tracing::debug;

/// Runs a short synchronous call in place, logging how long it held the
/// caller. Anything that can wait on the backend goes through
/// [`run_in_background`] instead.
pub fn run_blocking<F, T>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let result = f();
    debug!(
        label,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "blocking call finished"
    );
    result
}

/// Moves a slow backend call onto tokio's blocking pool so the caller (the UI
/// thread) keeps rendering while it runs. Both a failed call and a panicked
/// task come back as errors.
pub async fn run_in_background<F, T, E>(label: &'static str, f: F) -> anyhow::Result<T>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<anyhow::Error> + Send + 'static,
{
    let started = Instant::now();
    let joined = tokio::task::spawn_blocking(f)
        .await
        .with_context(|| format!("background task {label} did not finish"))?;
    debug!(
        label,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "background call finished"
    );
    joined.map_err(Into::into)
}
