//! Form application state and lifecycle

use super::state::{InputState, UIState};
use crate::config::Config;
use crate::fields::{Dispatcher, FieldEditor, FieldSlot};
use crate::schema::Schema;
use crate::store::{AppletConfig, ConfigStore};
use crate::tui::Theme;
use crate::tui::constants::STATUS_MESSAGE_TIMEOUT_SECS;

/// Main application state
pub struct FormApp {
    // Core data
    pub(crate) schema: Schema,
    pub(crate) store: ConfigStore,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) slots: Vec<FieldSlot>,
    pub(crate) config: Config,
    pub(crate) theme: Theme,
    pub(crate) title: String,

    // Organized state
    pub(crate) selected: usize,
    pub(crate) ui_state: UIState,
    pub(crate) input_state: InputState,
}

impl FormApp {
    /// Mount every field of `schema` against `store`
    ///
    /// Must be called within a tokio runtime: kinds without loaded assets
    /// start loading and render as empty placeholders meanwhile.
    pub fn new(
        schema: Schema,
        store: ConfigStore,
        dispatcher: Dispatcher,
        config: Config,
        theme: Theme,
    ) -> Self {
        let mut app = Self {
            schema: Schema::default(),
            store,
            dispatcher: dispatcher.with_settings(config.editor_settings()),
            slots: Vec::new(),
            config,
            theme,
            title: "schemaform".to_string(),

            selected: 0,
            ui_state: UIState::default(),
            input_state: InputState::default(),
        };
        app.replace_schema(schema);
        app
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Swap in a new schema
    ///
    /// Old editors are dropped first so their subscriptions end before the
    /// new ones attach. Stored values are kept.
    pub fn replace_schema(&mut self, schema: Schema) {
        self.slots.clear();
        self.input_state.cancel();

        tracing::debug!("Mounting {} fields", schema.fields.len());
        let slots: Vec<FieldSlot> = schema
            .fields
            .iter()
            .map(|descriptor| self.dispatcher.mount(descriptor, &self.store))
            .collect();

        self.slots = slots;
        self.schema = schema;
        self.selected = self.selected.min(self.slots.len().saturating_sub(1));
    }

    /// Advance background work: collect finished asset loads, mount waiting
    /// fields and re-hydrate editors whose values changed.
    ///
    /// Returns true if anything visible changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.dispatcher.poll_loads() > 0;

        for slot in &mut self.slots {
            if slot.is_loading() {
                changed |= self.dispatcher.promote(slot, &self.store);
            }
            if let Some(editor) = slot.editor_mut() {
                changed |= editor.sync();
            }
        }

        self.check_status_message_timeout();
        changed
    }

    /// Wait for every pending asset load, then mount the waiting fields
    pub async fn settle(&mut self) {
        self.dispatcher.settle().await;
        self.tick();
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn slots(&self) -> &[FieldSlot] {
        &self.slots
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_slot(&self) -> Option<&FieldSlot> {
        self.slots.get(self.selected)
    }

    pub(crate) fn selected_editor_mut(&mut self) -> Option<&mut dyn FieldEditor> {
        self.slots
            .get_mut(self.selected)
            .and_then(|slot| slot.editor_mut())
    }

    pub fn is_editing(&self) -> bool {
        self.input_state.editing
    }

    pub fn is_read_only(&self) -> bool {
        self.config.read_only
    }

    /// Snapshot of every stored value
    pub fn export(&self) -> AppletConfig {
        AppletConfig::from_store(&self.store)
    }

    pub fn select_next(&mut self) {
        if !self.slots.is_empty() {
            self.selected = (self.selected + 1) % self.slots.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.slots.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.slots.len() - 1);
        }
    }

    pub fn set_status_message(&mut self, message: (String, bool)) {
        self.ui_state.status_message = Some(message);
        self.ui_state.status_message_time = Some(std::time::Instant::now());
    }

    pub fn status_message(&self) -> Option<&(String, bool)> {
        self.ui_state.status_message.as_ref()
    }

    pub(crate) fn clear_status_message(&mut self) {
        self.ui_state.status_message = None;
        self.ui_state.status_message_time = None;
    }

    fn check_status_message_timeout(&mut self) {
        if let Some(set_at) = self.ui_state.status_message_time {
            if set_at.elapsed() >= std::time::Duration::from_secs(STATUS_MESSAGE_TIMEOUT_SECS) {
                self.clear_status_message();
            }
        }
    }
}
