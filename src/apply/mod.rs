use chrono::Utc;

use crate::generate::ModificationSet;
use crate::schema::Schema;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplySummary {
    pub pages_added: usize,
    pub sections_added: usize,
    pub services_added: usize,
    pub buttons_added: usize,
    pub models_merged: usize,
}

impl ApplySummary {
    pub fn total(&self) -> usize {
        self.pages_added
            + self.sections_added
            + self.services_added
            + self.buttons_added
            + self.models_merged
    }
}

/// Merge a modification set into the schema. Sequences append at the end,
/// preserving existing order; the model map merges key-by-key with incoming
/// keys winning. Nothing is deduplicated, so re-applying the same set yields
/// duplicate ids. Every call restamps `app.metadata.last_modified`, even when
/// the set is empty.
pub fn apply_modifications(schema: &mut Schema, set: ModificationSet) -> ApplySummary {
    let sum = ApplySummary {
        pages_added: set.pages.len(),
        sections_added: set.sections.len(),
        services_added: set.services.len(),
        buttons_added: set.buttons.len(),
        models_merged: set.models.len(),
    };

    schema.pages.extend(set.pages);
    schema.sections.extend(set.sections);
    schema.services.extend(set.services);
    schema.buttons.extend(set.buttons);
    for (name, model) in set.models {
        schema.models.insert(name, model);
    }

    schema.app.metadata.last_modified = Utc::now();
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze_prompt;
    use crate::generate::generate_modifications;
    use chrono::TimeZone;

    fn set_for(prompt: &str) -> ModificationSet {
        generate_modifications(prompt, &analyze_prompt(prompt))
    }

    #[test]
    fn applying_appends_entities_in_order() {
        let mut schema = Schema::initial();
        let sum = apply_modifications(&mut schema, set_for("Add a user page"));
        assert_eq!(sum.pages_added, 1);
        assert_eq!(schema.pages.len(), 1);
        assert_eq!(schema.pages[0].id, "user_page");
    }

    #[test]
    fn duplicate_apply_duplicates_entities() {
        let mut schema = Schema::initial();
        let set = set_for("Add a user page");
        apply_modifications(&mut schema, set.clone());
        apply_modifications(&mut schema, set);
        // Same id twice: duplication is the documented behavior, callers must
        // not rely on id uniqueness being enforced here.
        assert_eq!(schema.pages.len(), 2);
        assert_eq!(schema.pages[0].id, schema.pages[1].id);
    }

    #[test]
    fn empty_set_still_restamps_last_modified() {
        let mut schema = Schema::initial();
        schema.app.metadata.last_modified = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let before = schema.app.metadata.last_modified;
        let sum = apply_modifications(&mut schema, ModificationSet::default());
        assert_eq!(sum.total(), 0);
        assert!(schema.app.metadata.last_modified > before);
    }

    #[test]
    fn incoming_model_keys_win_on_conflict() {
        use crate::schema::{FieldDef, Model};
        use std::collections::BTreeMap;

        let mut schema = Schema::initial();
        schema.models.insert("User".into(), Model { fields: BTreeMap::new() });

        let mut set = ModificationSet::default();
        set.models.insert(
            "User".into(),
            Model {
                fields: BTreeMap::from([(
                    "email".to_string(),
                    FieldDef { kind: "email".into(), required: true },
                )]),
            },
        );
        apply_modifications(&mut schema, set);
        assert!(schema.models["User"].fields.contains_key("email"));
    }
}
