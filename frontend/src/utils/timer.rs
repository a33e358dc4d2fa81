//! Browser timers. On the host target callbacks run synchronously so the
//! code paths that schedule them stay testable.

#[cfg(target_arch = "wasm32")]
pub fn run_after(millis: u32, callback: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, callback).forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn run_after(_millis: u32, callback: impl FnOnce() + 'static) {
    callback();
}

/// Repeating timer, cancelled when the returned guard is dropped.
#[cfg(target_arch = "wasm32")]
pub type IntervalGuard = gloo_timers::callback::Interval;

#[cfg(not(target_arch = "wasm32"))]
pub struct IntervalGuard;

#[cfg(target_arch = "wasm32")]
pub fn every(millis: u32, callback: impl FnMut() + 'static) -> IntervalGuard {
    gloo_timers::callback::Interval::new(millis, callback)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn every(_millis: u32, _callback: impl FnMut() + 'static) -> IntervalGuard {
    IntervalGuard
}
