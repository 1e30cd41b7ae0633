//! Parses the YAML catalogs and checks them against the embedded JSON schemas before
//! handing typed documents to the rest of the pipeline.

use crate::domain::model::{CategoriesDocument, PortsDocument, UserstylesDocument};
use crate::utils::error::{GenError, Result};
use jsonschema::{Draft, JSONSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

const SCHEMA_BASE: &str = "https://raw.githubusercontent.com/catppuccin/catppuccin/main/resources";

const PORTS_SCHEMA: &str = include_str!("../../schemas/ports.schema.json");
const CATEGORIES_SCHEMA: &str = include_str!("../../schemas/categories.schema.json");
const USERSTYLES_SCHEMA: &str = include_str!("../../schemas/userstyles.schema.json");

pub struct SchemaSet {
    ports: JSONSchema,
    categories: JSONSchema,
    userstyles: JSONSchema,
}

impl SchemaSet {
    /// Compiles the schemas shipped with the binary. The userstyles schema borrows its
    /// category and support definitions from the ports schema.
    pub fn embedded() -> Result<Self> {
        let ports = parse_schema("ports.schema.json", PORTS_SCHEMA)?;
        let categories = parse_schema("categories.schema.json", CATEGORIES_SCHEMA)?;
        let userstyles = parse_schema("userstyles.schema.json", USERSTYLES_SCHEMA)?;

        let ports_id = format!("{}/ports.schema.json", SCHEMA_BASE);

        Ok(Self {
            ports: compile("ports.schema.json", &ports, &[])?,
            categories: compile("categories.schema.json", &categories, &[])?,
            userstyles: compile(
                "userstyles.schema.json",
                &userstyles,
                &[(ports_id.as_str(), &ports)],
            )?,
        })
    }

    pub fn ports(&self, document: &str, text: &str) -> Result<PortsDocument> {
        parse_and_validate(document, text, &self.ports)
    }

    pub fn categories(&self, document: &str, text: &str) -> Result<CategoriesDocument> {
        parse_and_validate(document, text, &self.categories)
    }

    pub fn userstyles(&self, document: &str, text: &str) -> Result<UserstylesDocument> {
        parse_and_validate(document, text, &self.userstyles)
    }
}

fn parse_schema(name: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| GenError::ConfigError {
        message: format!("embedded schema {} is not valid JSON: {}", name, e),
    })
}

fn compile(name: &str, schema: &Value, documents: &[(&str, &Value)]) -> Result<JSONSchema> {
    let mut options = JSONSchema::options();
    options.with_draft(Draft::Draft7);
    for (id, document) in documents {
        options.with_document(id.to_string(), (*document).clone());
    }

    options.compile(schema).map_err(|e| GenError::ConfigError {
        message: format!("embedded schema {} does not compile: {}", name, e),
    })
}

/// YAML text → JSON value → schema check → typed document.
pub fn parse_and_validate<T: DeserializeOwned>(
    document: &str,
    text: &str,
    schema: &JSONSchema,
) -> Result<T> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| GenError::ValidationError {
        document: document.to_string(),
        details: vec![format!("invalid YAML: {}", e)],
    })?;

    if let Err(errors) = schema.validate(&value) {
        let details = errors
            .map(|err| {
                let path = err.instance_path.to_string();
                if path.is_empty() {
                    format!("(root): {}", err)
                } else {
                    format!("{}: {}", path, err)
                }
            })
            .collect::<Vec<_>>();
        return Err(GenError::ValidationError {
            document: document.to_string(),
            details,
        });
    }

    serde_json::from_value(value).map_err(|e| GenError::ValidationError {
        document: document.to_string(),
        details: vec![e.to_string()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(err: GenError) -> Vec<String> {
        match err {
            GenError::ValidationError { details, .. } => details,
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_ports_document_keeps_source_order() {
        let schemas = SchemaSet::embedded().unwrap();
        let doc = schemas
            .ports(
                "ports.yml",
                r#"
ports:
  zed:
    name: Zed
    categories: [development_tools]
    platform: [linux, macos]
  alacritty:
    name: Alacritty
    categories: [terminals]
    color: rosewater
showcases:
  - title: Catwalk
    link: https://github.com/catppuccin/catwalk
    description: Preview generator
"#,
            )
            .unwrap();

        let slugs: Vec<&str> = doc.ports.iter().map(|(slug, _)| slug.as_str()).collect();
        assert_eq!(slugs, vec!["zed", "alacritty"]);
        let alacritty = doc.ports.get("alacritty").unwrap();
        assert_eq!(alacritty.extra.get("color").unwrap(), "rosewater");
        assert_eq!(doc.showcases.unwrap().len(), 1);
    }

    #[test]
    fn test_port_without_name_is_rejected_with_path() {
        let schemas = SchemaSet::embedded().unwrap();
        let err = schemas
            .ports(
                "ports.yml",
                "ports:\n  p1:\n    categories: [a]\n",
            )
            .unwrap_err();

        let details = details(err);
        assert!(details.iter().any(|d| d.contains("/ports/p1")), "{:?}", details);
    }

    #[test]
    fn test_invalid_yaml_is_a_validation_error() {
        let schemas = SchemaSet::embedded().unwrap();
        let err = schemas.categories("categories.yml", "- key: [unclosed").unwrap_err();
        assert!(details(err)[0].starts_with("invalid YAML"));
    }

    #[test]
    fn test_categories_document() {
        let schemas = SchemaSet::embedded().unwrap();
        let doc = schemas
            .categories(
                "categories.yml",
                "- key: terminals\n  name: Terminals\n  emoji: \"💻\"\n- key: game\n  name: Games\n  emoji: \"🎮\"\n",
            )
            .unwrap();
        assert_eq!(doc.categories.len(), 2);
        assert_eq!(doc.categories[1].key, "game");

        let err = schemas
            .categories("categories.yml", "- key: terminals\n  name: Terminals\n")
            .unwrap_err();
        assert!(matches!(err, GenError::ValidationError { .. }));
    }

    #[test]
    fn test_userstyles_schema_uses_shared_category_definition() {
        let schemas = SchemaSet::embedded().unwrap();
        let ok = schemas.userstyles(
            "userstyles.yml",
            "userstyles:\n  github:\n    name: GitHub\n    categories: [development_tools]\n",
        );
        assert!(ok.is_ok());

        // An empty category list violates the definition pulled from the ports schema.
        let err = schemas
            .userstyles(
                "userstyles.yml",
                "userstyles:\n  github:\n    name: GitHub\n    categories: []\n",
            )
            .unwrap_err();
        let details = details(err);
        assert!(details.iter().any(|d| d.contains("/userstyles/github/categories")), "{:?}", details);
    }
}
