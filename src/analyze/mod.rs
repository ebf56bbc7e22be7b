use serde::{Deserialize, Serialize};

/// Coarse intent detected in a prompt. Detection is substring containment
/// against fixed keyword lists, first match in priority order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    AddFeature,
    ModifyFeature,
    RemoveFeature,
    ShowInfo,
    Unknown,
}

/// Entity kinds a prompt can mention. Flags are independent; one prompt may
/// set several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Page,
    Section,
    Button,
    Service,
    Repository,
    Component,
    Menu,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    pub action_type: ActionType,
    pub entities_needed: Vec<EntityKind>,
}

impl PromptAnalysis {
    pub fn needs(&self, kind: EntityKind) -> bool {
        self.entities_needed.contains(&kind)
    }
}

const ADD_WORDS: [&str; 4] = ["add", "create", "new", "build"];
const MODIFY_WORDS: [&str; 4] = ["modify", "change", "update", "edit"];
const REMOVE_WORDS: [&str; 3] = ["remove", "delete", "drop"];
const SHOW_WORDS: [&str; 4] = ["show", "display", "view", "list"];

fn any_in(haystack: &str, words: &[&str]) -> bool {
    words.iter().any(|w| haystack.contains(w))
}

/// Classify a free-text prompt into an action and the entity kinds it names.
pub fn analyze_prompt(prompt: &str) -> PromptAnalysis {
    let lower = prompt.to_lowercase();

    let action_type = if any_in(&lower, &ADD_WORDS) {
        ActionType::AddFeature
    } else if any_in(&lower, &MODIFY_WORDS) {
        ActionType::ModifyFeature
    } else if any_in(&lower, &REMOVE_WORDS) {
        ActionType::RemoveFeature
    } else if any_in(&lower, &SHOW_WORDS) {
        ActionType::ShowInfo
    } else {
        ActionType::Unknown
    };

    let mut entities_needed = Vec::new();
    if lower.contains("page") {
        entities_needed.push(EntityKind::Page);
    }
    if lower.contains("form") || lower.contains("input") {
        entities_needed.push(EntityKind::Section);
    }
    if lower.contains("button") || lower.contains("action") {
        entities_needed.push(EntityKind::Button);
    }
    if lower.contains("service") || lower.contains("api") {
        entities_needed.push(EntityKind::Service);
    }
    if lower.contains("database") || lower.contains("data") {
        entities_needed.push(EntityKind::Repository);
    }
    if lower.contains("component") || lower.contains("ui") {
        entities_needed.push(EntityKind::Component);
    }
    if lower.contains("menu") || lower.contains("navigation") {
        entities_needed.push(EntityKind::Menu);
    }

    PromptAnalysis { action_type, entities_needed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keywords_classify_as_add_feature() {
        for prompt in ["Add a user page", "create something", "NEW dashboard", "build it"] {
            assert_eq!(analyze_prompt(prompt).action_type, ActionType::AddFeature, "{prompt}");
        }
    }

    #[test]
    fn no_action_keyword_is_unknown() {
        assert_eq!(analyze_prompt("hello there").action_type, ActionType::Unknown);
        assert_eq!(analyze_prompt("").action_type, ActionType::Unknown);
    }

    #[test]
    fn add_wins_over_remove_when_both_present() {
        let a = analyze_prompt("add a page then delete the old one");
        assert_eq!(a.action_type, ActionType::AddFeature);
    }

    #[test]
    fn modify_and_show_are_recognized() {
        assert_eq!(analyze_prompt("update the layout").action_type, ActionType::ModifyFeature);
        assert_eq!(analyze_prompt("show me everything").action_type, ActionType::ShowInfo);
    }

    #[test]
    fn one_prompt_can_flag_several_kinds() {
        let a = analyze_prompt("Add a user page with a save button and a user service");
        assert!(a.needs(EntityKind::Page));
        assert!(a.needs(EntityKind::Button));
        assert!(a.needs(EntityKind::Service));
        assert!(!a.needs(EntityKind::Menu));
    }

    #[test]
    fn api_and_data_aliases_map_to_service_and_repository() {
        let a = analyze_prompt("build an api over our data");
        assert!(a.needs(EntityKind::Service));
        assert!(a.needs(EntityKind::Repository));
    }
}
