//! Schema and values file loading
//!
//! Schemas may be a `{version, schema: [...]}` document or a bare list of
//! fields, in JSON or YAML. The format is picked by file extension; anything
//! that is not `.json` is read as YAML.

use super::{FieldDescriptor, Schema, scalar_to_string};
use crate::error::{FormError, FormResult};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaDocument {
    Versioned {
        #[serde(default)]
        version: Option<serde_json::Value>,
        schema: Vec<FieldDescriptor>,
    },
    Bare(Vec<FieldDescriptor>),
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    fn parse<T: serde::de::DeserializeOwned>(self, contents: &str) -> Result<T, String> {
        match self {
            Format::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

/// Schema loader
pub struct SchemaLoader;

impl SchemaLoader {
    /// Load and validate a schema file
    pub fn load_file(path: &Path) -> FormResult<Schema> {
        let contents = read(path)?;
        let schema = Self::parse(&contents, path)?;
        tracing::debug!(
            "Loaded schema from {} ({} fields)",
            path.display(),
            schema.fields.len()
        );
        Ok(schema)
    }

    /// Parse and validate schema text; `path` picks the format and labels errors
    pub fn parse(contents: &str, path: &Path) -> FormResult<Schema> {
        let document: SchemaDocument =
            Format::for_path(path)
                .parse(contents)
                .map_err(|message| FormError::SchemaParse {
                    path: path.to_path_buf(),
                    message,
                })?;

        let schema = match document {
            SchemaDocument::Versioned { version, schema } => Schema {
                version: version.as_ref().and_then(scalar_to_string),
                fields: schema,
            },
            SchemaDocument::Bare(fields) => Schema {
                version: None,
                fields,
            },
        };

        Self::validate(&schema)?;
        Ok(schema)
    }

    /// Check schema invariants: field ids must be unique
    pub fn validate(schema: &Schema) -> FormResult<()> {
        let mut seen = HashSet::new();
        for field in &schema.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(FormError::DuplicateFieldId(field.id.clone()));
            }
        }
        Ok(())
    }

    /// Load initial store values from an `id -> value` map file
    ///
    /// Scalar values are stringified; `{value: ...}` records are unwrapped.
    /// Other entries are skipped with a warning.
    pub fn load_values(path: &Path) -> FormResult<HashMap<String, String>> {
        let contents = read(path)?;
        let raw: HashMap<String, serde_json::Value> = Format::for_path(path)
            .parse(&contents)
            .map_err(|message| FormError::ValuesParse {
                path: path.to_path_buf(),
                message,
            })?;

        let mut values = HashMap::with_capacity(raw.len());
        for (id, value) in raw {
            let unwrapped = match &value {
                serde_json::Value::Object(record) => record.get("value").unwrap_or(&value),
                _ => &value,
            };
            match scalar_to_string(unwrapped) {
                Some(text) => {
                    values.insert(id, text);
                }
                None => tracing::warn!("Skipping non-scalar value for field '{}'", id),
            }
        }
        Ok(values)
    }
}

fn read(path: &Path) -> FormResult<String> {
    std::fs::read_to_string(path).map_err(|source| FormError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_for_path() {
        assert_eq!(Format::for_path(&PathBuf::from("a.json")), Format::Json);
        assert_eq!(Format::for_path(&PathBuf::from("a.JSON")), Format::Json);
        assert_eq!(Format::for_path(&PathBuf::from("a.yaml")), Format::Yaml);
        assert_eq!(Format::for_path(&PathBuf::from("schema")), Format::Yaml);
    }

    #[test]
    fn test_parse_versioned_json() {
        let json = r#"{"version": "1", "schema": [{"id": "a", "type": "text"}]}"#;
        let schema = SchemaLoader::parse(json, Path::new("s.json")).unwrap();
        assert_eq!(schema.version.as_deref(), Some("1"));
        assert_eq!(schema.fields.len(), 1);
        assert_eq!(schema.fields[0].type_name, "text");
    }

    #[test]
    fn test_parse_bare_yaml() {
        let yaml = r#"
- id: bg
  type: color
  default: "112233"
- id: show
  type: onoff
  default: true
"#;
        let schema = SchemaLoader::parse(yaml, Path::new("s.yaml")).unwrap();
        assert_eq!(schema.version, None);
        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.fields[1].raw_default().as_deref(), Some("true"));
    }

    #[test]
    fn test_yaml_numeric_version() {
        let yaml = "version: 1\nschema: []\n";
        let schema = SchemaLoader::parse(yaml, Path::new("s.yml")).unwrap();
        assert_eq!(schema.version.as_deref(), Some("1"));
        assert!(schema.fields.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[{"id": "a", "type": "text"}, {"id": "a", "type": "color"}]"#;
        let err = SchemaLoader::parse(json, Path::new("s.json")).unwrap_err();
        assert!(matches!(err, FormError::DuplicateFieldId(ref id) if id == "a"));
    }

    #[test]
    fn test_malformed_field_shapes_still_load() {
        let json = r#"[
            {"id": "c", "type": "color", "palette": "ff0000"},
            {"id": "d", "type": "color", "palette": {}},
            {"id": "e"}
        ]"#;
        let schema = SchemaLoader::parse(json, Path::new("s.json")).unwrap();
        assert_eq!(schema.fields.len(), 3);
        assert!(schema.fields[0].palette().is_empty());
        assert!(schema.fields[1].palette().is_empty());
        assert_eq!(schema.fields[2].type_name, "");
    }

    #[test]
    fn test_invalid_document() {
        let err = SchemaLoader::parse("{not json", Path::new("s.json")).unwrap_err();
        assert!(matches!(err, FormError::SchemaParse { .. }));
    }
}
