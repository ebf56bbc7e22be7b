use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::analyze::{ActionType, EntityKind, PromptAnalysis};
use crate::schema::{
    ActionHandler, ActionRef, Button, ButtonAction, ComponentRef, FieldValidation, FormField,
    Model, Page, Section, SectionRef, SectionRefConfig, Service, ServiceMethod, MethodParam,
};

/// The output of generation for one prompt: a partial schema fragment to be
/// merged in. Sequence keys append, the model map merges with new keys
/// winning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModificationSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub models: BTreeMap<String, Model>,
}

impl ModificationSet {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
            && self.sections.is_empty()
            && self.services.is_empty()
            && self.buttons.is_empty()
            && self.models.is_empty()
    }

    /// Non-empty (key, count) pairs, for terminal reporting.
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        let mut out = Vec::new();
        if !self.pages.is_empty() {
            out.push(("pages", self.pages.len()));
        }
        if !self.sections.is_empty() {
            out.push(("sections", self.sections.len()));
        }
        if !self.services.is_empty() {
            out.push(("services", self.services.len()));
        }
        if !self.buttons.is_empty() {
            out.push(("buttons", self.buttons.len()));
        }
        if !self.models.is_empty() {
            out.push(("models", self.models.len()));
        }
        out
    }
}

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\w+)\s+(?:page|form|service|component|button)").expect("valid pattern")
    })
}

/// Candidate entity names: every word immediately preceding a kind keyword.
/// Multi-word names are not supported and a bare kind keyword ("Add a page")
/// yields nothing.
pub fn extract_entity_names(prompt_lower: &str) -> Vec<String> {
    name_pattern()
        .captures_iter(prompt_lower)
        .map(|c| c[1].to_string())
        .collect()
}

/// Build the modification set for one classified prompt. Only `add_feature`
/// prompts generate entities; modify/remove are recognized but produce an
/// empty set. Component, repository and menu kinds have no template and are
/// dropped.
pub fn generate_modifications(prompt: &str, analysis: &PromptAnalysis) -> ModificationSet {
    let mut set = ModificationSet::default();
    if analysis.action_type != ActionType::AddFeature {
        return set;
    }

    let lower = prompt.to_lowercase();
    for name in extract_entity_names(&lower) {
        if analysis.needs(EntityKind::Page) {
            set.pages.push(page_entity(&name, prompt));
        }
        if analysis.needs(EntityKind::Section) {
            set.sections.push(form_section(&name, prompt));
        }
        if analysis.needs(EntityKind::Service) {
            set.services.push(service_entity(&name));
        }
        if analysis.needs(EntityKind::Button) {
            set.buttons.push(button_entity(&name));
        }
    }
    set
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn page_entity(name: &str, prompt: &str) -> Page {
    let title = title_case(name);
    Page {
        id: format!("{name}_page"),
        name: title.clone(),
        route: format!("/{name}"),
        layout: "default".into(),
        title: title.clone(),
        description: format!("{title} page generated from prompt: {prompt}"),
        sections: vec![SectionRef {
            target: format!("{name}_content"),
            order: 1,
            config: SectionRefConfig { title: format!("{title} Content") },
        }],
        components: vec![ComponentRef { target: "header_component".into(), order: 1 }],
    }
}

fn form_section(name: &str, prompt: &str) -> Section {
    let title = title_case(name);
    Section {
        id: format!("{name}_form"),
        name: format!("{title} Form"),
        kind: "form".into(),
        description: format!("Form for {name} generated from prompt: {prompt}"),
        data_source: format!("{name}_repository"),
        fields: vec![
            FormField {
                name: "name".into(),
                label: "Name".into(),
                kind: "text".into(),
                required: Some(true),
                validation: Some(FieldValidation { min_length: 3, max_length: 100 }),
                rows: None,
            },
            FormField {
                name: "description".into(),
                label: "Description".into(),
                kind: "textarea".into(),
                required: None,
                validation: None,
                rows: Some(4),
            },
        ],
        actions: vec![ActionRef {
            target: format!("save_{name}_button"),
            trigger: "form_submit".into(),
        }],
    }
}

fn service_entity(name: &str) -> Service {
    let title = title_case(name);
    Service {
        id: format!("{name}_service"),
        name: format!("{title} Service"),
        description: format!("Handles {name}-related business logic"),
        repository_ref: format!("{name}_repository"),
        methods: vec![
            ServiceMethod {
                name: format!("get_{name}s"),
                description: format!("Retrieve list of {name}s"),
                params: vec![MethodParam {
                    name: "filters".into(),
                    kind: "object".into(),
                    required: false,
                }],
                returns: format!("{title}[]"),
                business_logic: vec![
                    "Apply filters if provided".into(),
                    format!("Retrieve {name} data"),
                    "Transform for UI consumption".into(),
                ],
            },
            ServiceMethod {
                name: format!("create_{name}"),
                description: format!("Create new {name}"),
                params: vec![MethodParam {
                    name: format!("{name}_data"),
                    kind: format!("{title}Create"),
                    required: true,
                }],
                returns: title,
                business_logic: vec![
                    format!("Validate {name} data"),
                    "Set default values".into(),
                    format!("Create {name} record"),
                ],
            },
        ],
    }
}

fn button_entity(name: &str) -> Button {
    let title = title_case(name);
    Button {
        id: format!("save_{name}_button"),
        name: format!("Save {title}"),
        component_ref: "button_component".into(),
        variant: "primary".into(),
        size: "medium".into(),
        text: format!("Save {title}"),
        icon: "save".into(),
        action: ButtonAction {
            kind: "service_call".into(),
            service: format!("{name}_service"),
            method: format!("create_{name}"),
            params: BTreeMap::from([(format!("{name}_data"), "{{form}}".to_string())]),
            success: ActionHandler {
                kind: "navigation".into(),
                target: Some(format!("{name}_page")),
                message: None,
            },
            error: ActionHandler {
                kind: "show_message".into(),
                target: None,
                message: Some(format!("Failed to save {name}")),
            },
        },
    }
}
