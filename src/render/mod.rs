use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// Which code block(s) to produce. `None` means all three, concatenated with
/// blank-line separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    Frontend,
    Backend,
    Database,
}

impl RenderTarget {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "frontend" => Some(Self::Frontend),
            "backend" => Some(Self::Backend),
            "database" => Some(Self::Database),
            _ => None,
        }
    }
}

/// Render placeholder code from the current schema. Pure function: identical
/// schema in, byte-identical text out.
pub fn render(schema: &Schema, target: Option<RenderTarget>) -> String {
    let mut blocks = Vec::new();
    if target.is_none() || target == Some(RenderTarget::Frontend) {
        blocks.push(frontend_code(schema));
    }
    if target.is_none() || target == Some(RenderTarget::Backend) {
        blocks.push(backend_code(schema));
    }
    if target.is_none() || target == Some(RenderTarget::Database) {
        blocks.push(database_code(schema));
    }
    blocks.join("\n\n")
}

/// One function stub per page, one placeholder tag per referenced section.
/// Tag and function names are the ids with underscores stripped.
fn frontend_code(schema: &Schema) -> String {
    let mut code = vec!["// Frontend Code Generated by Corisa AI\n".to_string()];
    for page in &schema.pages {
        code.push(format!("// {} Page Component", page.name));
        code.push(format!("function {}() {{", page.id.replace('_', "")));
        code.push("  return (".into());
        code.push("    <div className='page'>".into());
        for section in &page.sections {
            code.push(format!("      <{} />", section.target.replace('_', "")));
        }
        code.push("    </div>".into());
        code.push("  );".into());
        code.push("}\n".into());
    }
    code.join("\n")
}

/// One class-like wrapper per service with empty async method stubs.
fn backend_code(schema: &Schema) -> String {
    let mut code = vec!["// Backend Code Generated by Corisa AI\n".to_string()];
    for service in &schema.services {
        code.push(format!("// {}", service.name));
        code.push(format!("class {} {{", service.id.replace('_', "")));
        for method in &service.methods {
            code.push(format!("  async {}(params) {{", method.name));
            code.push(format!("    // {}", method.description));
            code.push("    // Implementation here".into());
            code.push("  }".into());
        }
        code.push("}\n".into());
    }
    code.join("\n")
}

/// One CREATE TABLE per model, pluralizing the lowered model name. A field
/// gets a trailing NULL only when it is not required; required fields get no
/// NOT NULL token (current template behavior, kept as-is).
fn database_code(schema: &Schema) -> String {
    let mut code = vec!["-- Database Schema Generated by Corisa AI\n".to_string()];
    for (model_name, model) in &schema.models {
        let table_name = format!("{}s", model_name.to_lowercase());
        code.push(format!("CREATE TABLE {table_name} ("));
        let fields: Vec<String> = model
            .fields
            .iter()
            .map(|(field_name, field)| {
                let field_type = sql_type(&field.kind);
                let nullable = if field.required { "" } else { "NULL" };
                format!("  {field_name} {field_type} {nullable}")
            })
            .collect();
        code.push(fields.join(",\n"));
        code.push(");\n".into());
    }
    code.join("\n")
}

fn sql_type(kind: &str) -> &'static str {
    match kind {
        "string" => "VARCHAR(255)",
        "text" => "TEXT",
        "number" => "INTEGER",
        "float" => "FLOAT",
        "boolean" => "BOOLEAN",
        "datetime" => "TIMESTAMP",
        "date" => "DATE",
        "email" => "VARCHAR(255)",
        _ => "VARCHAR(255)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze_prompt;
    use crate::apply::apply_modifications;
    use crate::generate::generate_modifications;
    use crate::schema::{FieldDef, Model};
    use std::collections::BTreeMap;

    fn schema_with(prompt: &str) -> Schema {
        let mut schema = Schema::initial();
        let set = generate_modifications(prompt, &analyze_prompt(prompt));
        apply_modifications(&mut schema, set);
        schema
    }

    #[test]
    fn frontend_names_strip_underscores() {
        let schema = schema_with("Add a user page");
        let code = render(&schema, Some(RenderTarget::Frontend));
        assert!(code.contains("function userpage() {"));
        assert!(code.contains("<usercontent />"));
    }

    #[test]
    fn backend_emits_async_method_stubs() {
        let schema = schema_with("Create a customer service");
        let code = render(&schema, Some(RenderTarget::Backend));
        assert!(code.contains("class customerservice {"));
        assert!(code.contains("  async get_customers(params) {"));
        assert!(code.contains("  async create_customer(params) {"));
    }

    #[test]
    fn database_null_emission_is_asymmetric() {
        let mut schema = Schema::initial();
        schema.models.insert(
            "User".into(),
            Model {
                fields: BTreeMap::from([
                    ("email".to_string(), FieldDef { kind: "email".into(), required: true }),
                    ("bio".to_string(), FieldDef { kind: "text".into(), required: false }),
                ]),
            },
        );
        let code = render(&schema, Some(RenderTarget::Database));
        assert!(code.contains("CREATE TABLE users ("));
        assert!(code.contains("  email VARCHAR(255)"));
        // Required field gets no NOT NULL token at all.
        assert!(!code.contains("NOT NULL"));
        assert!(code.contains("  bio TEXT NULL"));
    }

    #[test]
    fn unknown_field_type_falls_back_to_varchar() {
        assert_eq!(sql_type("geolocation"), "VARCHAR(255)");
    }

    #[test]
    fn rendering_is_pure() {
        let schema = schema_with("Add a user page and a user service");
        assert_eq!(render(&schema, None), render(&schema, None));
    }

    #[test]
    fn unset_target_concatenates_all_three_blocks() {
        let schema = Schema::initial();
        let code = render(&schema, None);
        assert!(code.contains("// Frontend Code Generated by Corisa AI"));
        assert!(code.contains("// Backend Code Generated by Corisa AI"));
        assert!(code.contains("-- Database Schema Generated by Corisa AI"));
    }
}
