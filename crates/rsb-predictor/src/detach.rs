use std::future::Future;

/// Runs a best-effort call without making the caller wait for it.
///
/// The task is spawned on the ambient tokio runtime; its result is only
/// logged and never reaches caller-visible state. Outside a runtime the
/// call is skipped.
pub fn detach<F>(label: &'static str, task: F)
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Err(_) => log::debug!("[predictor] no runtime, skipping {}", label),
        Ok(handle) => {
            handle.spawn(async move {
                match task.await {
                    Ok(()) => log::trace!("[predictor] {} delivered", label),
                    Err(e) => log::debug!("[predictor] {} dropped: {}", label, e),
                }
            });
        }
    }
}
