//! Browser clipboard writes.
//!
//! TRADE-OFFS
//! ==========
//! The async Clipboard API needs a secure context and user permission, so a
//! write can fail at any time. Callers get a typed error and decide what to
//! show; SSR and native test builds always report the API as unavailable.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Why a clipboard write did not happen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No window, or the browser exposes no `navigator.clipboard`.
    #[error("clipboard API is unavailable in this environment")]
    Unavailable,
    /// The browser rejected the write (permission denied, insecure context).
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns [`ClipboardError::Unavailable`] outside a browser with the
/// Clipboard API, or [`ClipboardError::Rejected`] when the write promise
/// rejects.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let clipboard = window.navigator().clipboard().ok_or(ClipboardError::Unavailable)?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("clipboard unavailable outside the browser; dropped {} bytes", text.len());
        Err(ClipboardError::Unavailable)
    }
}
