//! Form commands: interactive editing and headless inspection

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use schemaform::config::{Config, ConfigLoader};
use schemaform::fields::{Dispatcher, FieldSlot, SlotView};
use schemaform::store::{AppletConfig, ConfigStore};
use schemaform::tui::{FormApp, Theme, run_tui};
use schemaform::{Schema, SchemaLoader};

/// Arguments shared by the form commands
#[derive(Args, Debug)]
pub struct FormArgs {
    /// Schema file (JSON or YAML)
    pub schema: PathBuf,

    /// Initial values file (JSON or YAML map of id to value)
    #[arg(long)]
    pub values: Option<PathBuf>,
}

impl FormArgs {
    fn load(&self) -> Result<(Schema, ConfigStore)> {
        let schema = SchemaLoader::load_file(&self.schema)
            .with_context(|| format!("Failed to load schema: {}", self.schema.display()))?;

        let store = match &self.values {
            Some(path) => {
                let values = SchemaLoader::load_values(path)
                    .with_context(|| format!("Failed to load values: {}", path.display()))?;
                tracing::debug!("Loaded {} initial values", values.len());
                ConfigStore::from_values(values)
            }
            None => ConfigStore::new(),
        };

        Ok((schema, store))
    }
}

fn load_config() -> Config {
    ConfigLoader::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration, using defaults: {}", e);
        ConfigLoader::load_defaults()
    })
}

/// Edit values in the terminal UI, then write the result
pub async fn handle_edit_command(args: FormArgs, output: Option<PathBuf>) -> Result<()> {
    let (schema, store) = args.load()?;
    let config = load_config();

    tracing::debug!(
        "Editing {} fields (readOnly={})",
        schema.fields.len(),
        config.read_only
    );

    let title = args
        .schema
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schemaform".to_string());

    let app = FormApp::new(
        schema,
        store,
        Dispatcher::with_builtin_assets(),
        config,
        Theme::default(),
    )
    .with_title(title);

    let values = run_tui(app).await?;
    write_values(&values, output.as_deref())
}

/// Mount every field without a terminal and print how it resolved
pub async fn handle_inspect_command(args: FormArgs) -> Result<()> {
    let (schema, store) = args.load()?;
    let config = load_config();

    let mut dispatcher = Dispatcher::with_builtin_assets().with_settings(config.editor_settings());
    let mut slots: Vec<FieldSlot> = schema
        .fields
        .iter()
        .map(|descriptor| dispatcher.mount(descriptor, &store))
        .collect();

    dispatcher.settle().await;
    for slot in &mut slots {
        dispatcher.promote(slot, &store);
    }

    for slot in &slots {
        let descriptor = slot.descriptor();
        let summary = match slot.view() {
            SlotView::Loading => "(loading)".to_string(),
            SlotView::Unsupported(text) => text,
            SlotView::Editor(_) => slot
                .editor()
                .map(|editor| format!("{} = {}", editor.kind(), editor.text_value()))
                .unwrap_or_default(),
        };
        println!("{:<24} {}", descriptor.id, summary);
    }

    Ok(())
}

fn write_values(values: &AppletConfig, output: Option<&Path>) -> Result<()> {
    let json = values
        .to_json_pretty()
        .context("Failed to serialize values")?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write values: {}", path.display()))?;
            eprintln!("Wrote {} values to {}", values.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
