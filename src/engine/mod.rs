use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyze::{analyze_prompt, ActionType};
use crate::apply::apply_modifications;
use crate::command::{Command, HELP_TEXT};
use crate::config::Config;
use crate::errors::SchemaStoreError;
use crate::generate::{generate_modifications, ModificationSet};
use crate::render::render;
use crate::schema::{Schema, SchemaStore, SchemaSummary};

/// One turn of the chat pipeline, kept in memory for the session only.
#[derive(Debug, Clone)]
pub struct ConversationEntry {
    pub user: String,
    pub modifications: ModificationSet,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Success,
    Info,
}

/// Pipeline result for one prompt, also the `/api/chat` response body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    pub message: String,
    pub modifications: ModificationSet,
    pub schema_summary: SchemaSummary,
}

/// Result of one literal command.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Text(String),
    Summary(SchemaSummary),
}

/// Owns the schema, its store and the conversation history for one process.
/// Single-writer: the CLI runs turns sequentially, the web facade serializes
/// requests behind a mutex.
pub struct Engine {
    config: Config,
    store: SchemaStore,
    schema: Schema,
    history: Vec<ConversationEntry>,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self, SchemaStoreError> {
        let store = SchemaStore::new(config.yaml_file.clone());
        let schema = store.load_or_init()?;
        Ok(Self { config, store, schema, history: Vec::new() })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn history(&self) -> &[ConversationEntry] {
        &self.history
    }

    pub fn save(&self) -> Result<(), SchemaStoreError> {
        self.store.save(&self.schema)
    }

    /// Run the classify -> generate -> apply -> persist pipeline for one
    /// prompt. Show-info prompts short-circuit before generation and never
    /// touch the schema; prompts that generate nothing leave it untouched
    /// as well.
    pub fn process_prompt(&mut self, prompt: &str) -> Result<ChatReply, SchemaStoreError> {
        let analysis = analyze_prompt(prompt);

        let reply = if analysis.action_type == ActionType::ShowInfo {
            ChatReply {
                kind: ReplyKind::Info,
                message: "Current Schema Overview".into(),
                modifications: ModificationSet::default(),
                schema_summary: self.schema.summary(),
            }
        } else {
            let set = generate_modifications(prompt, &analysis);
            if set.is_empty() {
                ChatReply {
                    kind: ReplyKind::Info,
                    message: "I couldn't understand that request. Try being more specific!"
                        .into(),
                    modifications: set,
                    schema_summary: self.schema.summary(),
                }
            } else {
                apply_modifications(&mut self.schema, set.clone());
                self.save()?;
                ChatReply {
                    kind: ReplyKind::Success,
                    message: "Generated and applied modifications successfully!".into(),
                    modifications: set,
                    schema_summary: self.schema.summary(),
                }
            }
        };

        self.history.push(ConversationEntry {
            user: prompt.to_string(),
            modifications: reply.modifications.clone(),
            timestamp: Utc::now(),
        });
        Ok(reply)
    }

    pub fn run_command(&mut self, cmd: Command) -> Result<CommandOutput, SchemaStoreError> {
        match cmd {
            Command::Help => Ok(CommandOutput::Text(HELP_TEXT.to_string())),
            Command::Save => {
                self.save()?;
                Ok(CommandOutput::Text("Schema saved successfully!".into()))
            }
            Command::Show => Ok(CommandOutput::Summary(self.schema.summary())),
            Command::Generate(target) => Ok(CommandOutput::Text(render(&self.schema, target))),
            Command::Clear => {
                self.history.clear();
                Ok(CommandOutput::Text("Conversation history cleared!".into()))
            }
        }
    }
}
