//! Access to the browser's `localStorage`.

use web_sys::Storage;

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<Storage, String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err("localStorage is disabled".to_string()),
        Err(_) => Err("localStorage access was denied".to_string()),
    }
}

/// Host builds have no browser; callers fall back to an in-memory session.
#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage() -> Result<Storage, String> {
    Err("localStorage is only available in the browser".to_string())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn host_reports_storage_unavailable() {
        let err = local_storage().unwrap_err();
        assert!(err.contains("browser"));
    }
}
