use crate::domain::model::{
    Buckets, Catalog, MappedPort, Port, PortKind, Row, Support, Userstyle,
};
use crate::utils::error::{GenError, Result};
use std::cmp::Ordering;

const GITHUB_ORG: &str = "https://github.com/catppuccin";

/// Ports and userstyles under one slug namespace, in first-insertion order.
pub type MergedCatalog = Catalog<MappedPort>;

/// Last write wins on a slug collision; the entry keeps the position of the first insert.
pub fn merge(ports: Catalog<Port>, userstyles: Catalog<Userstyle>) -> MergedCatalog {
    let entries = ports
        .into_iter()
        .map(|(slug, port)| (slug, MappedPort::Port(port)))
        .chain(
            userstyles
                .into_iter()
                .map(|(slug, style)| (slug, MappedPort::Userstyle(style))),
        );

    let mut merged = MergedCatalog::new();
    for (slug, entry) in entries {
        let kind = entry.kind();
        if let Some(previous) = merged.insert(slug.clone(), entry) {
            tracing::debug!(
                "{} '{}' replaces an existing {} with the same slug",
                kind,
                slug,
                previous.kind()
            );
        }
    }
    merged
}

pub fn resolve_url(slug: &str, entry: &MappedPort) -> String {
    if let Some(url) = entry.url() {
        return url.to_string();
    }
    match entry.kind() {
        PortKind::Port => format!("{}/{}", GITHUB_ORG, entry.alias().unwrap_or(slug)),
        PortKind::Userstyle => format!("{}/userstyles/tree/main/styles/{}", GITHUB_ORG, slug),
    }
}

/// Case-insensitive first, so "alacritty" and "Alacritty" sit together; on a case-only
/// difference the lowercase spelling comes first. Characters compare by code point, so
/// accented names such as "Éclair" sort after every ASCII name rather than next to "E".
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Buckets every entry under its primary category, one row for the entry itself plus one
/// per supported variant, sorted by display name.
pub fn group(catalog: &MergedCatalog) -> Result<Buckets> {
    let mut buckets = Buckets::new();

    for (slug, entry) in catalog.iter() {
        let primary = entry
            .categories()
            .first()
            .ok_or_else(|| GenError::ConfigError {
                message: format!("{} '{}' has no categories", entry.kind(), slug),
            })?;

        if let Some(alias) = entry.alias() {
            if !catalog.contains_key(alias) {
                return Err(GenError::DanglingAliasError {
                    slug: slug.to_string(),
                    alias: alias.to_string(),
                });
            }
        }

        let url = resolve_url(slug, entry);
        let bucket = buckets.entry(primary.clone()).or_default();
        bucket.push(row(slug, entry, entry.name(), &url, entry.supports().cloned()));

        if let Some(supports) = entry.supports() {
            for (key, support) in supports.iter() {
                let narrowed = std::iter::once((key.to_string(), support.clone())).collect();
                bucket.push(row(slug, entry, &support.name, &url, Some(narrowed)));
            }
        }
    }

    // 排序一次即可，sort_by 是穩定排序
    for bucket in buckets.values_mut() {
        bucket.sort_by(|a, b| compare_names(&a.name, &b.name));
    }

    Ok(buckets)
}

fn row(
    slug: &str,
    entry: &MappedPort,
    name: &str,
    url: &str,
    supports: Option<Catalog<Support>>,
) -> Row {
    Row {
        slug: slug.to_string(),
        kind: entry.kind(),
        name: name.to_string(),
        url: url.to_string(),
        categories: entry.categories().to_vec(),
        alias: entry.alias().map(str::to_string),
        supports,
        extra: entry.extra().clone(),
    }
}
