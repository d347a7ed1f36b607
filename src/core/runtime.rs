use std::future::Future;

/// Hand `task` to the current thread's executor and return immediately.
///
/// Natively this needs to run inside a `tokio::task::LocalSet`.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_local<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    tokio::task::spawn_local(task);
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_local<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(task);
}
