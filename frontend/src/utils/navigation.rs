//! Full-page navigation helpers.
//!
//! Redirects replace the current history entry so the back button never
//! lands on a page the guard just refused.

#[cfg(target_arch = "wasm32")]
pub fn replace(path: &str) {
    log::debug!("Navigating to {}", path);
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if location.pathname().ok().as_deref() == Some(path) {
            return;
        }
        let _ = location.replace(path);
    }
}

/// Replaces the location once `millis` have elapsed.
pub fn replace_after(path: &'static str, millis: u32) {
    super::timer::run_after(millis, move || replace(path));
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static HISTORY: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
}

#[cfg(not(target_arch = "wasm32"))]
pub fn replace(path: &str) {
    log::debug!("Navigating to {}", path);
    HISTORY.with(|history| history.borrow_mut().push(path.to_string()));
}

/// Drains the navigations recorded on the host target.
#[cfg(not(target_arch = "wasm32"))]
pub fn take_history() -> Vec<String> {
    HISTORY.with(|history| std::mem::take(&mut *history.borrow_mut()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn replace_is_recorded_on_host() {
        let _ = take_history();
        replace("/login");
        replace("/profile");
        assert_eq!(take_history(), vec!["/login".to_string(), "/profile".to_string()]);
        assert!(take_history().is_empty());
    }
}
