//! Async sleep for the current target

/// Resolve after `ms` milliseconds
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }

    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    {
        let _ = ms;
    }
}
