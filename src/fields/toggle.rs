//! On/off field editor

use super::binding::{FieldBinding, Hydration};
use super::{EditorInput, EditorView, FieldEditor, FieldKind};
use crate::schema::FieldDescriptor;
use crate::store::{ConfigStore, parse_bool};

pub struct ToggleEditor {
    kind: FieldKind,
    descriptor: FieldDescriptor,
    binding: FieldBinding,
    on: bool,
}

impl ToggleEditor {
    pub fn mount(kind: FieldKind, descriptor: &FieldDescriptor, store: &ConfigStore) -> Self {
        let on = descriptor.raw_default().as_deref().is_some_and(parse_bool);
        let mut editor = Self {
            kind,
            descriptor: descriptor.clone(),
            binding: FieldBinding::attach(descriptor, store),
            on,
        };
        editor.hydrate();
        editor.sync();
        editor
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    fn hydrate(&mut self) {
        if let Hydration::Stored(value) = self.binding.hydrate() {
            self.on = parse_bool(&value);
        }
    }

    fn set(&mut self, on: bool) {
        self.on = on;
        self.binding.commit(if on { "true" } else { "false" });
    }
}

impl FieldEditor for ToggleEditor {
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
            EditorInput::Toggle => {
                self.set(!self.on);
                true
            }
            EditorInput::Set(value) => {
                self.set(parse_bool(value.trim()));
                true
            }
            _ => false,
        }
    }

    fn text_value(&self) -> String {
        self.on.to_string()
    }

    fn view(&self) -> EditorView {
        EditorView::Toggle { on: self.on }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_hydrates_from_store() {
        let store = ConfigStore::from_values([("t", "1")]);
        let editor = ToggleEditor::mount(FieldKind::OnOff, &FieldDescriptor::new("t", "onoff"), &store);
        assert!(editor.is_on());
    }

    #[test]
    fn test_toggle_seeds_default() {
        let store = ConfigStore::new();
        let descriptor = FieldDescriptor::new("t", "toggle").with_default(true);
        let editor = ToggleEditor::mount(FieldKind::Toggle, &descriptor, &store);

        assert!(editor.is_on());
        assert_eq!(store.get("t").unwrap().value, "true");
    }

    #[test]
    fn test_false_default_is_not_seeded() {
        let store = ConfigStore::new();
        let descriptor = FieldDescriptor::new("t", "onoff").with_default(false);
        let editor = ToggleEditor::mount(FieldKind::OnOff, &descriptor, &store);

        assert!(!editor.is_on());
        assert!(store.get("t").is_none());
    }

    #[test]
    fn test_toggle_flips_and_writes() {
        let store = ConfigStore::new();
        let mut editor =
            ToggleEditor::mount(FieldKind::OnOff, &FieldDescriptor::new("t", "onoff"), &store);
        assert!(!editor.is_on());
        assert!(store.is_empty());

        assert!(editor.handle_input(EditorInput::Toggle));
        assert!(editor.is_on());
        assert_eq!(store.get("t").unwrap().value, "true");

        assert!(editor.handle_input(EditorInput::Toggle));
        assert_eq!(store.get("t").unwrap().value, "false");
        assert!(!editor.handle_input(EditorInput::NextSwatch));
    }

    #[test]
    fn test_toggle_follows_external_writes() {
        let store = ConfigStore::new();
        let mut editor =
            ToggleEditor::mount(FieldKind::OnOff, &FieldDescriptor::new("t", "onoff"), &store);

        store.set_value("t", "true");
        assert!(editor.sync());
        assert!(editor.is_on());
        assert!(!editor.sync());
    }
}
