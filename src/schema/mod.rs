use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::SchemaStoreError;

pub const AGENT_VERSION: &str = "1.0.0";

/// ========================================
/// Application schema data model
/// ========================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    pub app: AppInfo,
    pub menus: Vec<serde_yaml::Value>,
    pub pages: Vec<Page>,
    pub sections: Vec<Section>,
    pub components: Vec<serde_yaml::Value>,
    pub buttons: Vec<Button>,
    pub services: Vec<Service>,
    pub repositories: Vec<serde_yaml::Value>,
    pub models: BTreeMap<String, Model>,
    pub ai_agent: AiAgent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub metadata: AppMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppMetadata {
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub ai_agent_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiAgent {
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub route: String,
    pub layout: String,
    pub title: String,
    pub description: String,
    pub sections: Vec<SectionRef>,
    pub components: Vec<ComponentRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionRef {
    #[serde(rename = "ref")]
    pub target: String,
    pub order: u32,
    pub config: SectionRefConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionRefConfig {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentRef {
    #[serde(rename = "ref")]
    pub target: String,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub data_source: String,
    pub fields: Vec<FormField>,
    pub actions: Vec<ActionRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldValidation {
    pub min_length: u32,
    pub max_length: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionRef {
    #[serde(rename = "ref")]
    pub target: String,
    pub trigger: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub repository_ref: String,
    pub methods: Vec<ServiceMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceMethod {
    pub name: String,
    pub description: String,
    pub params: Vec<MethodParam>,
    pub returns: String,
    pub business_logic: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodParam {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Button {
    pub id: String,
    pub name: String,
    pub component_ref: String,
    pub variant: String,
    pub size: String,
    pub text: String,
    pub icon: String,
    pub action: ButtonAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ButtonAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub service: String,
    pub method: String,
    pub params: BTreeMap<String, String>,
    pub success: ActionHandler,
    pub error: ActionHandler,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionHandler {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Model {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    #[serde(rename = "type", default = "default_field_type")]
    pub kind: String,
    #[serde(default)]
    pub required: bool,
}

fn default_field_type() -> String {
    "string".into()
}

/// Counts reported by `show` / the chat summary payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaSummary {
    pub pages: usize,
    pub sections: usize,
    pub components: usize,
    pub services: usize,
    pub repositories: usize,
    pub buttons: usize,
    pub menus: usize,
}

impl Schema {
    /// Fresh schema for a project with no persisted file yet.
    pub fn initial() -> Self {
        let now = Utc::now();
        Self {
            app: AppInfo {
                name: "New Corisa App".into(),
                version: "1.0.0".into(),
                description: "AI-generated application".into(),
                metadata: AppMetadata {
                    created_at: now,
                    last_modified: now,
                    ai_agent_version: AGENT_VERSION.into(),
                },
            },
            menus: Vec::new(),
            pages: Vec::new(),
            sections: Vec::new(),
            components: Vec::new(),
            buttons: Vec::new(),
            services: Vec::new(),
            repositories: Vec::new(),
            models: BTreeMap::new(),
            ai_agent: AiAgent {
                capabilities: vec![
                    "yaml_generation".into(),
                    "yaml_modification".into(),
                    "code_generation".into(),
                    "feature_evolution".into(),
                    "legacy_migration".into(),
                ],
            },
        }
    }

    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            pages: self.pages.len(),
            sections: self.sections.len(),
            components: self.components.len(),
            services: self.services.len(),
            repositories: self.repositories.len(),
            buttons: self.buttons.len(),
            menus: self.menus.len(),
        }
    }
}

/// ========================================
/// YAML-backed store
/// ========================================

/// Owns the path to the persisted schema file. Saving rewrites the file
/// wholesale; there is no backup and no atomic rename.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    path: PathBuf,
}

impl SchemaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted schema, or return a fresh one when the file
    /// does not exist yet. A present-but-malformed file is an error.
    pub fn load_or_init(&self) -> Result<Schema, SchemaStoreError> {
        if !self.path.exists() {
            return Ok(Schema::initial());
        }
        let text = fs::read_to_string(&self.path).map_err(|source| SchemaStoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| SchemaStoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, schema: &Schema) -> Result<(), SchemaStoreError> {
        let text = serde_yaml::to_string(schema)?;
        fs::write(&self.path, text).map_err(|source| SchemaStoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_schema_has_all_sequences_empty() {
        let s = Schema::initial();
        assert!(s.pages.is_empty());
        assert!(s.sections.is_empty());
        assert!(s.components.is_empty());
        assert!(s.buttons.is_empty());
        assert!(s.services.is_empty());
        assert!(s.repositories.is_empty());
        assert!(s.menus.is_empty());
        assert!(s.models.is_empty());
        assert_eq!(s.app.metadata.ai_agent_version, AGENT_VERSION);
        assert!(s.ai_agent.capabilities.contains(&"code_generation".to_string()));
    }

    #[test]
    fn save_then_load_round_trips_deep_equal() {
        let dir = tempfile::tempdir().unwrap();
        let store = SchemaStore::new(dir.path().join("corisa-app.yaml"));

        let mut schema = Schema::initial();
        schema.models.insert(
            "User".into(),
            Model {
                fields: BTreeMap::from([(
                    "email".to_string(),
                    FieldDef { kind: "email".into(), required: true },
                )]),
            },
        );
        store.save(&schema).unwrap();

        let loaded = store.load_or_init().unwrap();
        assert_eq!(loaded, schema);
    }

    #[test]
    fn load_missing_file_yields_fresh_schema() {
        let dir = tempfile::tempdir().unwrap();
        let store = SchemaStore::new(dir.path().join("nope.yaml"));
        let schema = store.load_or_init().unwrap();
        assert!(schema.pages.is_empty());
    }

    #[test]
    fn load_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "app: [unclosed").unwrap();
        let store = SchemaStore::new(path);
        assert!(matches!(
            store.load_or_init(),
            Err(SchemaStoreError::Parse { .. })
        ));
    }

    #[test]
    fn field_def_defaults_fill_in_type_and_required() {
        let def: FieldDef = serde_yaml::from_str("{}").unwrap();
        assert_eq!(def.kind, "string");
        assert!(!def.required);
    }
}
