//! Field dispatch
//!
//! [`resolve`] maps a descriptor's type tag to an editor kind; it is a pure
//! function of the tag. [`Dispatcher`] adds lazy asset loading on top: the
//! first time a kind is requested its assets load in the background and the
//! field shows an empty placeholder until they arrive.

use super::assets::{AssetLoader, BuiltinAssetLoader, EditorAssets};
use super::{EditorSettings, EditorView, FieldEditor, FieldKind, instantiate};
use crate::error::{FormError, FormResult};
use crate::schema::FieldDescriptor;
use crate::store::ConfigStore;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Placeholder for a type tag with no registered editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedField {
    pub type_name: String,
}

impl UnsupportedField {
    pub fn text(&self) -> String {
        format!("Unsupported type: {}", self.type_name)
    }
}

/// Dispatch result for one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Editor(FieldKind),
    Unsupported(UnsupportedField),
}

/// Select the editor kind for a descriptor
pub fn resolve(descriptor: &FieldDescriptor) -> Resolution {
    match FieldKind::parse_optional(&descriptor.type_name) {
        Some(kind) => Resolution::Editor(kind),
        None => Resolution::Unsupported(UnsupportedField {
            type_name: descriptor.type_name.clone(),
        }),
    }
}

/// An editor together with its loaded assets
pub struct MountedField {
    pub editor: Box<dyn FieldEditor>,
    pub assets: Arc<EditorAssets>,
}

/// One field's place in the form
pub enum FieldSlot {
    /// Editor assets are still loading
    Loading {
        descriptor: FieldDescriptor,
        kind: FieldKind,
    },
    Mounted(MountedField),
    Unsupported {
        descriptor: FieldDescriptor,
        placeholder: UnsupportedField,
    },
}

/// Renderable description of a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotView {
    /// Nothing to draw yet
    Loading,
    Unsupported(String),
    Editor(EditorView),
}

impl FieldSlot {
    pub fn descriptor(&self) -> &FieldDescriptor {
        match self {
            FieldSlot::Loading { descriptor, .. } | FieldSlot::Unsupported { descriptor, .. } => {
                descriptor
            }
            FieldSlot::Mounted(mounted) => mounted.editor.descriptor(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FieldSlot::Loading { .. })
    }

    pub fn editor(&self) -> Option<&dyn FieldEditor> {
        match self {
            FieldSlot::Mounted(mounted) => Some(mounted.editor.as_ref()),
            _ => None,
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut dyn FieldEditor> {
        match self {
            FieldSlot::Mounted(mounted) => Some(mounted.editor.as_mut()),
            _ => None,
        }
    }

    pub fn assets(&self) -> Option<&EditorAssets> {
        match self {
            FieldSlot::Mounted(mounted) => Some(mounted.assets.as_ref()),
            _ => None,
        }
    }

    pub fn view(&self) -> SlotView {
        match self {
            FieldSlot::Loading { .. } => SlotView::Loading,
            FieldSlot::Mounted(mounted) => SlotView::Editor(mounted.editor.view()),
            FieldSlot::Unsupported { placeholder, .. } => SlotView::Unsupported(placeholder.text()),
        }
    }
}

enum AssetState {
    Loading(oneshot::Receiver<FormResult<EditorAssets>>),
    Ready(Arc<EditorAssets>),
    Failed,
}

/// Mounts editors for descriptors, loading editor assets on demand
pub struct Dispatcher {
    loader: Arc<dyn AssetLoader>,
    assets: HashMap<FieldKind, AssetState>,
    settings: EditorSettings,
}

impl Dispatcher {
    pub fn new(loader: Arc<dyn AssetLoader>) -> Self {
        Self {
            loader,
            assets: HashMap::new(),
            settings: EditorSettings::default(),
        }
    }

    /// Dispatcher backed by the bundled assets
    pub fn with_builtin_assets() -> Self {
        Self::new(Arc::new(BuiltinAssetLoader))
    }

    pub fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Whether assets for `kind` are loaded
    pub fn is_ready(&self, kind: FieldKind) -> bool {
        matches!(self.assets.get(&kind), Some(AssetState::Ready(_)))
    }

    /// Number of asset loads still in flight
    pub fn pending_loads(&self) -> usize {
        self.assets
            .values()
            .filter(|state| matches!(state, AssetState::Loading(_)))
            .count()
    }

    /// Resolve a descriptor and mount its editor if the assets are ready
    ///
    /// Must be called within a tokio runtime; a missing kind starts a load.
    pub fn mount(&mut self, descriptor: &FieldDescriptor, store: &ConfigStore) -> FieldSlot {
        match resolve(descriptor) {
            Resolution::Unsupported(placeholder) => {
                tracing::debug!(
                    field = %descriptor.id,
                    "No editor for type '{}'",
                    placeholder.type_name
                );
                FieldSlot::Unsupported {
                    descriptor: descriptor.clone(),
                    placeholder,
                }
            }
            Resolution::Editor(kind) => match self.ready_assets(kind) {
                Some(assets) => FieldSlot::Mounted(self.build(kind, descriptor, store, assets)),
                None => {
                    self.request(kind);
                    FieldSlot::Loading {
                        descriptor: descriptor.clone(),
                        kind,
                    }
                }
            },
        }
    }

    /// Mount a loading slot once its assets are ready
    ///
    /// Returns true if the slot changed. A slot whose load failed is retried.
    pub fn promote(&mut self, slot: &mut FieldSlot, store: &ConfigStore) -> bool {
        let FieldSlot::Loading { descriptor, kind } = slot else {
            return false;
        };
        let kind = *kind;

        match self.ready_assets(kind) {
            Some(assets) => {
                let mounted = self.build(kind, descriptor, store, assets);
                *slot = FieldSlot::Mounted(mounted);
                true
            }
            None => {
                self.request(kind);
                false
            }
        }
    }

    /// Collect finished loads without waiting. Returns how many completed.
    pub fn poll_loads(&mut self) -> usize {
        let loading: Vec<FieldKind> = self
            .assets
            .iter()
            .filter(|(_, state)| matches!(state, AssetState::Loading(_)))
            .map(|(kind, _)| *kind)
            .collect();

        let mut completed = 0;
        for kind in loading {
            let outcome = match self.assets.get_mut(&kind) {
                Some(AssetState::Loading(rx)) => match rx.try_recv() {
                    Ok(result) => result,
                    Err(oneshot::error::TryRecvError::Empty) => continue,
                    Err(oneshot::error::TryRecvError::Closed) => Err(lost_load(kind)),
                },
                _ => continue,
            };
            self.finish(kind, outcome);
            completed += 1;
        }
        completed
    }

    /// Wait for every in-flight load. Returns how many completed.
    pub async fn settle(&mut self) -> usize {
        let loading: Vec<FieldKind> = self
            .assets
            .iter()
            .filter(|(_, state)| matches!(state, AssetState::Loading(_)))
            .map(|(kind, _)| *kind)
            .collect();

        let mut receivers = Vec::with_capacity(loading.len());
        for kind in loading {
            if let Some(AssetState::Loading(rx)) = self.assets.remove(&kind) {
                receivers.push(async move { (kind, rx.await) });
            }
        }

        let results = join_all(receivers).await;
        let completed = results.len();
        for (kind, received) in results {
            let outcome = received.unwrap_or_else(|_| Err(lost_load(kind)));
            self.finish(kind, outcome);
        }
        completed
    }

    fn ready_assets(&self, kind: FieldKind) -> Option<Arc<EditorAssets>> {
        match self.assets.get(&kind) {
            Some(AssetState::Ready(assets)) => Some(Arc::clone(assets)),
            _ => None,
        }
    }

    fn build(
        &self,
        kind: FieldKind,
        descriptor: &FieldDescriptor,
        store: &ConfigStore,
        assets: Arc<EditorAssets>,
    ) -> MountedField {
        tracing::debug!(field = %descriptor.id, "Mounting {} editor", kind);
        MountedField {
            editor: instantiate(kind, descriptor, store, self.settings),
            assets,
        }
    }

    /// Start loading assets for `kind` unless loaded or already loading
    fn request(&mut self, kind: FieldKind) {
        if matches!(
            self.assets.get(&kind),
            Some(AssetState::Loading(_) | AssetState::Ready(_))
        ) {
            return;
        }

        tracing::debug!("Loading assets for {} editor", kind);
        let (tx, rx) = oneshot::channel();
        let loader = Arc::clone(&self.loader);
        tokio::spawn(async move {
            let result = loader.load(kind).await;
            let _ = tx.send(result);
        });
        self.assets.insert(kind, AssetState::Loading(rx));
    }

    fn finish(&mut self, kind: FieldKind, outcome: FormResult<EditorAssets>) {
        match outcome {
            Ok(assets) => {
                tracing::debug!("Assets ready for {} editor", kind);
                self.assets.insert(kind, AssetState::Ready(Arc::new(assets)));
            }
            Err(e) => {
                tracing::warn!("Failed to load assets for {} editor: {}", kind, e);
                self.assets.insert(kind, AssetState::Failed);
            }
        }
    }
}

fn lost_load(kind: FieldKind) -> FormError {
    FormError::AssetLoad {
        kind,
        message: "loader task ended without a result".to_string(),
    }
}
