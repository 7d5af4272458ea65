//! Rendering tests for the terminal form
//!
//! Draws into a ratatui `TestBackend` and checks the visible text.

use schemaform::config::Config;
use schemaform::fields::Dispatcher;
use schemaform::tui::views::render_form;
use schemaform::tui::{FormApp, Theme};
use schemaform::{ConfigStore, FieldDescriptor, Schema};
use ratatui::{Terminal, backend::TestBackend};

fn test_schema() -> Schema {
    Schema {
        version: Some("2".to_string()),
        fields: vec![
            FieldDescriptor::new("accent", "color")
                .with_name("Accent")
                .with_default("112233")
                .with_palette(vec!["#112233".into(), "#ffffff".into()]),
            FieldDescriptor::new("mystery", "hologram").with_name("Mystery"),
            FieldDescriptor::new("blink", "toggle")
                .with_name("Blink")
                .with_default(true),
        ],
    }
}

fn new_app(config: Config) -> FormApp {
    FormApp::new(
        test_schema(),
        ConfigStore::new(),
        Dispatcher::with_builtin_assets(),
        config,
        Theme::default(),
    )
    .with_title("clock")
}

fn render(app: &FormApp) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[tokio::test]
async fn test_loading_fields_render_empty() {
    let app = new_app(Config::default());
    let screen = render(&app);

    assert!(screen.contains("Accent"));
    // Editors are not mounted yet, so no value is shown
    assert!(!screen.contains("#112233"));
    assert!(!screen.contains("● on"));
    // The placeholder needs no assets
    assert!(screen.contains("Unsupported type: hologram"));
}

#[tokio::test]
async fn test_mounted_fields_render_values() {
    let mut app = new_app(Config::default());
    app.settle().await;
    let screen = render(&app);

    assert!(screen.contains("clock"));
    assert!(screen.contains("v2"));
    assert!(screen.contains("3 fields"));
    assert!(screen.contains("#112233"));
    assert!(screen.contains("● on"));
    assert!(screen.contains("Unsupported type: hologram"));
}

#[tokio::test]
async fn test_no_icons_uses_ascii_markers() {
    let mut config = Config::default();
    config.ui.no_icons = true;
    let mut app = new_app(config);
    app.settle().await;
    let screen = render(&app);

    assert!(screen.contains("> Accent"));
    assert!(screen.contains("[x] on"));
    assert!(!screen.contains("▶"));
}

#[tokio::test]
async fn test_read_only_header_and_footer() {
    let config = Config {
        read_only: true,
        ..Default::default()
    };
    let mut app = new_app(config);
    app.settle().await;
    let screen = render(&app);

    assert!(screen.contains("[READ-ONLY]"));
    assert!(!screen.contains("Swatch"));
}

#[tokio::test]
async fn test_footer_shows_selected_editor_hints() {
    let mut app = new_app(Config::default());
    app.settle().await;
    let screen = render(&app);

    assert!(screen.contains("Swatch"));
    assert!(screen.contains("Quit"));
}

#[test]
fn test_empty_schema_message() {
    let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_form(f, area, &[], 0, &Theme::default(), false);
        })
        .unwrap();

    assert!(terminal.backend().to_string().contains("Schema has no fields"));
}
