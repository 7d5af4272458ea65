//! Event handling for the application
//!
//! Keyboard input: navigation, text entry, and editor interactions.

use super::core::FormApp;
use crate::fields::{Channel, EditorInput, FieldKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl FormApp {
    /// Main keyboard event handler
    ///
    /// Returns Some(true) to quit, None for normal continuation
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(true);
        }

        if self.input_state.editing {
            self.handle_input_key(key);
            return None;
        }

        if self.ui_state.status_message.is_some() {
            self.clear_status_message();
            if key.code == KeyCode::Esc {
                return None;
            }
        }

        match key.code {
            KeyCode::Char('q') => return Some(true),
            KeyCode::Char('?') => self.ui_state.show_help = !self.ui_state.show_help,
            KeyCode::Esc => self.ui_state.show_help = false,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.select_previous(),
            KeyCode::Char('e') | KeyCode::Enter => self.begin_text_entry(),
            code => {
                if let Some(input) = self.editor_input_for(code) {
                    self.apply_input(input);
                }
            }
        }

        None
    }

    /// Keys while typing a value
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let text = self.input_state.finish();
                self.apply_input(EditorInput::Set(text));
            }
            KeyCode::Esc => self.input_state.cancel(),
            KeyCode::Backspace => {
                self.input_state.buffer.pop();
            }
            KeyCode::Char(c) => self.input_state.buffer.push(c),
            _ => {}
        }
    }

    fn begin_text_entry(&mut self) {
        if self.reject_if_read_only() {
            return;
        }
        let Some(editor) = self.selected_slot().and_then(|slot| slot.editor()) else {
            return;
        };
        let initial = editor.text_value();
        self.input_state.begin(initial);
    }

    /// Map a key to an input for the selected editor's kind
    fn editor_input_for(&self, code: KeyCode) -> Option<EditorInput> {
        let kind = self.selected_slot()?.editor()?.kind();
        match (kind, code) {
            (FieldKind::Color, KeyCode::Char(' ')) => Some(EditorInput::ApplySwatch),
            (FieldKind::Color, KeyCode::Right | KeyCode::Char('l')) => {
                Some(EditorInput::NextSwatch)
            }
            (FieldKind::Color, KeyCode::Left | KeyCode::Char('h')) => {
                Some(EditorInput::PrevSwatch)
            }
            (FieldKind::Color, KeyCode::Char(c)) => {
                let channel = match c.to_ascii_lowercase() {
                    'r' => Channel::Red,
                    'g' => Channel::Green,
                    'b' => Channel::Blue,
                    _ => return None,
                };
                let steps = if c.is_ascii_uppercase() { -1 } else { 1 };
                Some(EditorInput::Nudge(channel, steps))
            }
            (FieldKind::OnOff | FieldKind::Toggle, KeyCode::Char(' ')) => {
                Some(EditorInput::Toggle)
            }
            _ => None,
        }
    }

    fn apply_input(&mut self, input: EditorInput) {
        if self.reject_if_read_only() {
            return;
        }
        let Some(editor) = self.selected_editor_mut() else {
            return;
        };

        let field_id = editor.descriptor().id.clone();
        if editor.handle_input(input) {
            editor.sync();
            let value = editor.text_value();
            tracing::debug!(field = %field_id, "Updated value to {}", value);
            self.set_status_message((format!("{} = {}", field_id, value), false));
        }
    }

    fn reject_if_read_only(&mut self) -> bool {
        if self.config.read_only {
            self.set_status_message(("Read-only mode: editing is disabled".to_string(), true));
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fields::Dispatcher;
    use crate::schema::{FieldDescriptor, Schema};
    use crate::store::ConfigStore;
    use crate::tui::Theme;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn color_app(config: Config) -> FormApp {
        let schema = Schema {
            version: None,
            fields: vec![
                FieldDescriptor::new("accent", "color")
                    .with_default("#FF0000")
                    .with_palette(vec!["#00FF00".into(), "#0000ff".into()]),
                FieldDescriptor::new("enabled", "onoff").with_default(false),
            ],
        };
        let mut app = FormApp::new(
            schema,
            ConfigStore::new(),
            Dispatcher::with_builtin_assets(),
            config,
            Theme::default(),
        );
        app.settle().await;
        app
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = color_app(Config::default()).await;
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Some(true));
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(true)
        );
    }

    #[tokio::test]
    async fn test_text_entry_commits_value() {
        let mut app = color_app(Config::default()).await;

        app.handle_key(key(KeyCode::Char('e')));
        assert!(app.is_editing());
        for _ in 0..7 {
            app.handle_key(key(KeyCode::Backspace));
        }
        for c in "#00ff00".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert!(!app.is_editing());
        assert_eq!(app.store().get("accent").unwrap().value, "#00ff00");
    }

    #[tokio::test]
    async fn test_swatch_keys_apply_palette_value() {
        let mut app = color_app(Config::default()).await;

        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Char(' ')));

        assert_eq!(app.store().get("accent").unwrap().value, "#0000ff");
    }

    #[tokio::test]
    async fn test_toggle_key_on_second_field() {
        let mut app = color_app(Config::default()).await;

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected(), 1);
        app.handle_key(key(KeyCode::Char(' ')));

        assert_eq!(app.store().get("enabled").unwrap().value, "true");
    }

    #[tokio::test]
    async fn test_read_only_blocks_edits() {
        let config = Config {
            read_only: true,
            ..Default::default()
        };
        let mut app = color_app(config).await;

        app.handle_key(key(KeyCode::Char('r')));
        app.handle_key(key(KeyCode::Char('e')));

        assert!(!app.is_editing());
        assert_eq!(app.store().get("accent").unwrap().value, "#FF0000");
        assert!(app.status_message().is_some_and(|(_, is_error)| *is_error));
    }
}
