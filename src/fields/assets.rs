//! Editor assets and their loaders
//!
//! Editors are not usable until their assets have loaded. Loading is async so
//! a front end can keep drawing (with an empty placeholder) while it runs.

use super::FieldKind;
use crate::error::FormResult;
use async_trait::async_trait;

/// One key binding hint shown while an editor is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

const fn hint(key: &'static str, action: &'static str) -> KeyHint {
    KeyHint { key, action }
}

const COLOR_HINTS: &[KeyHint] = &[
    hint("e", "Hex"),
    hint("←/→", "Swatch"),
    hint("space", "Apply"),
    hint("r/g/b", "Channel +"),
    hint("R/G/B", "Channel -"),
];

const TOGGLE_HINTS: &[KeyHint] = &[hint("space", "Toggle"), hint("e", "Edit")];

const VALUE_HINTS: &[KeyHint] = &[hint("e", "Edit")];

/// Assets an editor needs before it can be mounted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorAssets {
    pub kind: FieldKind,
    pub hints: Vec<KeyHint>,
}

impl EditorAssets {
    /// The assets bundled with the binary for a kind
    pub fn builtin(kind: FieldKind) -> Self {
        let hints = match kind {
            FieldKind::Color => COLOR_HINTS,
            FieldKind::OnOff | FieldKind::Toggle => TOGGLE_HINTS,
            _ => VALUE_HINTS,
        };
        Self {
            kind,
            hints: hints.to_vec(),
        }
    }
}

/// Source of editor assets
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetLoader: Send + Sync {
    async fn load(&self, kind: FieldKind) -> FormResult<EditorAssets>;
}

/// Loader serving the bundled assets
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssetLoader;

#[async_trait]
impl AssetLoader for BuiltinAssetLoader {
    async fn load(&self, kind: FieldKind) -> FormResult<EditorAssets> {
        // Resolve on a later turn of the event loop, like any real fetch
        tokio::task::yield_now().await;
        tracing::debug!("Loaded bundled assets for {} editor", kind);
        Ok(EditorAssets::builtin(kind))
    }
}
