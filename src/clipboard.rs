// SPDX-License-Identifier: MPL-2.0
//! Clipboard copy strategies.
//!
//! The copy chain is ordered on purpose: the direct platform clipboard always
//! runs first, and only when it reports failure does the caller fall back to
//! the windowing runtime's asynchronous clipboard, then to a manual-copy
//! prompt. The order is part of the product's behavior, not an accident of
//! which API happened to be handy.

use crate::error::CopyError;

/// A synchronous copy strategy. The trait seam keeps the feedback state
/// machine testable without touching a real clipboard.
pub trait Strategy {
    fn copy(&mut self, text: &str) -> Result<(), CopyError>;
}

/// The direct platform clipboard, via `arboard`.
pub struct SystemClipboard;

impl Strategy for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), CopyError> {
        // The handle is scoped to this call and released whether or not the
        // write goes through.
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CopyError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| CopyError::WriteFailed(e.to_string()))?;
        tracing::info!(length = text.len(), "copied text to system clipboard");
        Ok(())
    }
}

#[cfg(test)]
pub mod test_support {
    //! Scripted strategies for exercising the fallback chain in tests.

    use super::Strategy;
    use crate::error::CopyError;

    /// Records what was copied and always succeeds.
    #[derive(Default)]
    pub struct RecordingClipboard {
        pub copied: Vec<String>,
    }

    impl Strategy for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<(), CopyError> {
            self.copied.push(text.to_owned());
            Ok(())
        }
    }

    /// Always fails, as on a platform without a clipboard.
    pub struct UnavailableClipboard;

    impl Strategy for UnavailableClipboard {
        fn copy(&mut self, _text: &str) -> Result<(), CopyError> {
            Err(CopyError::Unavailable("no clipboard on this platform".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{RecordingClipboard, UnavailableClipboard};
    use super::*;

    #[test]
    fn recording_clipboard_captures_text() {
        let mut clipboard = RecordingClipboard::default();
        clipboard.copy("hello").expect("recording copy succeeds");
        assert_eq!(clipboard.copied, vec!["hello".to_string()]);
    }

    #[test]
    fn unavailable_clipboard_reports_unavailable() {
        let mut clipboard = UnavailableClipboard;
        let err = clipboard.copy("hello").unwrap_err();
        assert!(matches!(err, CopyError::Unavailable(_)));
    }
}
