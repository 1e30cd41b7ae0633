use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// A slug-keyed mapping that keeps the order entries appear in the source document.
pub type Catalog<T> = IndexMap<String, T>;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Category {
    pub key: String,
    pub name: String,
    pub emoji: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Support {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Port {
    pub name: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub supports: Option<Catalog<Support>>,
    #[serde(default)]
    pub platform: Option<Value>,
    #[serde(default)]
    pub readme: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Userstyle {
    pub name: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub supports: Option<Catalog<Support>>,
    #[serde(default)]
    pub platform: Option<Value>,
    #[serde(default)]
    pub readme: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Showcase {
    pub title: String,
    pub link: String,
    pub description: String,
}

/// `resources/ports.yml`
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PortsDocument {
    #[serde(default)]
    pub ports: Catalog<Port>,
    #[serde(default)]
    pub showcases: Option<Vec<Showcase>>,
}

/// `resources/categories.yml`, a bare list of categories.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(transparent)]
pub struct CategoriesDocument {
    pub categories: Vec<Category>,
}

/// `scripts/userstyles.yml` from the userstyles repository.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct UserstylesDocument {
    #[serde(default)]
    pub userstyles: Catalog<Userstyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    Port,
    Userstyle,
}

impl PortKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortKind::Port => "port",
            PortKind::Userstyle => "userstyle",
        }
    }
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry after merging; exactly one of the two source shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum MappedPort {
    Port(Port),
    Userstyle(Userstyle),
}

impl MappedPort {
    pub fn kind(&self) -> PortKind {
        match self {
            MappedPort::Port(_) => PortKind::Port,
            MappedPort::Userstyle(_) => PortKind::Userstyle,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MappedPort::Port(port) => &port.name,
            MappedPort::Userstyle(style) => &style.name,
        }
    }

    pub fn categories(&self) -> &[String] {
        match self {
            MappedPort::Port(port) => &port.categories,
            MappedPort::Userstyle(style) => &style.categories,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            MappedPort::Port(port) => port.url.as_deref(),
            MappedPort::Userstyle(style) => style.url.as_deref(),
        }
    }

    pub fn alias(&self) -> Option<&str> {
        match self {
            MappedPort::Port(port) => port.alias.as_deref(),
            MappedPort::Userstyle(_) => None,
        }
    }

    pub fn supports(&self) -> Option<&Catalog<Support>> {
        match self {
            MappedPort::Port(port) => port.supports.as_ref(),
            MappedPort::Userstyle(style) => style.supports.as_ref(),
        }
    }

    pub fn extra(&self) -> &Map<String, Value> {
        match self {
            MappedPort::Port(port) => &port.extra,
            MappedPort::Userstyle(style) => &style.extra,
        }
    }
}

/// One line of the rendered port list. `readme` and `platform` never make it here.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub slug: String,
    pub kind: PortKind,
    pub name: String,
    pub url: String,
    pub categories: Vec<String>,
    pub alias: Option<String>,
    pub supports: Option<Catalog<Support>>,
    pub extra: Map<String, Value>,
}

pub type Buckets = HashMap<String, Vec<Row>>;

/// Raw text of the three catalogs, before any parsing.
#[derive(Debug, Clone)]
pub struct RawDocuments {
    pub ports: String,
    pub categories: String,
    pub userstyles: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub portlist: String,
    pub showcase: Option<String>,
    pub row_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub output_path: String,
    pub updated_sections: Vec<String>,
    pub failed_sections: Vec<(String, String)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed_sections.is_empty()
    }
}
