//! Frame timing for animations.

/// Milliseconds on a monotonic clock. Only differences are meaningful.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    ORIGIN.elapsed().as_secs_f64() * 1_000.0
}

/// Resolve at the next paint opportunity.
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    use wasm_bindgen::{closure::Closure, JsCast};

    let (tx, rx) = futures_channel::oneshot::channel::<()>();
    let callback = Closure::once(move |_: f64| {
        let _ = tx.send(());
    });

    let scheduled = web_sys::window()
        .map(|window| window.request_animation_frame(callback.as_ref().unchecked_ref()))
        .is_some_and(|handle| handle.is_ok());

    if scheduled {
        let _ = rx.await;
    }
}

/// Desktop webviews don't expose a frame callback to Rust; tick at ~60 Hz instead.
#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    tokio::time::sleep(std::time::Duration::from_millis(FRAME_INTERVAL_MS)).await;
}

#[cfg(not(target_arch = "wasm32"))]
const FRAME_INTERVAL_MS: u64 = 16;
