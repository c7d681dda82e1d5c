//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only web-sys glue so the session store can persist the
//! token without repeating it. Outside the browser every call is a no-op.

/// Read the raw string stored under `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
