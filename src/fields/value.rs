//! Plain-text field editor
//!
//! Used for every kind without a dedicated editor. Values are stored and shown
//! verbatim.

use super::binding::{FieldBinding, Hydration};
use super::{EditorInput, EditorView, FieldEditor, FieldKind};
use crate::schema::FieldDescriptor;
use crate::store::ConfigStore;

pub struct ValueEditor {
    kind: FieldKind,
    descriptor: FieldDescriptor,
    binding: FieldBinding,
    value: String,
}

impl ValueEditor {
    pub fn mount(kind: FieldKind, descriptor: &FieldDescriptor, store: &ConfigStore) -> Self {
        let mut editor = Self {
            kind,
            descriptor: descriptor.clone(),
            binding: FieldBinding::attach(descriptor, store),
            value: descriptor.raw_default().unwrap_or_default(),
        };
        editor.hydrate();
        editor.sync();
        editor
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn hydrate(&mut self) {
        if let Hydration::Stored(value) = self.binding.hydrate() {
            self.value = value;
        }
    }
}

impl FieldEditor for ValueEditor {
    fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn sync(&mut self) -> bool {
        if self.binding.take_changes() == 0 {
            return false;
        }
        self.hydrate();
        true
    }

    fn handle_input(&mut self, input: EditorInput) -> bool {
        match input {
            EditorInput::Set(value) => {
                self.binding.commit(&value);
                self.value = value;
                true
            }
            _ => false,
        }
    }

    fn text_value(&self) -> String {
        self.value.clone()
    }

    fn view(&self) -> EditorView {
        EditorView::Value {
            kind: self.kind,
            value: self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_editor_round_trip() {
        let store = ConfigStore::new();
        let mut editor =
            ValueEditor::mount(FieldKind::Text, &FieldDescriptor::new("name", "text"), &store);
        assert_eq!(editor.value(), "");
        assert!(store.is_empty());

        assert!(editor.handle_input(EditorInput::Set("Tidbyt".to_string())));
        assert_eq!(editor.value(), "Tidbyt");
        assert_eq!(store.get("name").unwrap().value, "Tidbyt");
        assert!(!editor.handle_input(EditorInput::Toggle));
    }

    #[test]
    fn test_value_editor_keeps_text_verbatim() {
        let store = ConfigStore::from_values([("when", " 2024-01-01T00:00:00Z ")]);
        let editor = ValueEditor::mount(
            FieldKind::DateTime,
            &FieldDescriptor::new("when", "datetime"),
            &store,
        );
        assert_eq!(editor.value(), " 2024-01-01T00:00:00Z ");
        assert_eq!(
            editor.view(),
            EditorView::Value {
                kind: FieldKind::DateTime,
                value: " 2024-01-01T00:00:00Z ".to_string(),
            }
        );
    }
}
