//! Flattening of the heterogeneous landscape document into project records
//!
//! The published document nests items two ways (directly under a category,
//! or under a named subcategory) and may wrap entries at every level in a
//! single-key mapping (`{category: {...}}`, `{subcategory: {...}}`,
//! `{item: {...}}`). Everything here tolerates both shapes and skips
//! entries it cannot interpret instead of failing the batch.

use chrono::{DateTime, Utc};
use serde_yaml::Value;

use super::client::LandscapeDocument;
use crate::domain::catalog::{MaturityLevel, ProjectExtra, ProjectRecord};

/// Item fields consulted for a maturity value when the canonical
/// `project` field is absent, in priority order.
const MATURITY_FIELD_FALLBACKS: [&str; 5] =
    ["maturity", "cncf_maturity", "level", "cncf_level", "stage"];

/// Flatten every named item in the document into one record per item.
///
/// Items found directly under a category carry no subcategory; items
/// found under a named subcategory carry that subcategory's name.
/// Categories, subcategories, and items without a usable `name` are
/// skipped silently.
pub fn flatten_document(
    document: &LandscapeDocument,
    imported_at: DateTime<Utc>,
) -> Vec<ProjectRecord> {
    let mut records = Vec::new();

    for entry in document.categories() {
        let category = unwrap_wrapped(entry, "category");
        let Some(category_name) = str_field(category, "name") else {
            tracing::debug!("skipping landscape entry without a category name");
            continue;
        };
        let category_maturity =
            str_field(category, "maturity").or_else(|| str_field(category, "level"));

        for item in sequence_field(category, "items") {
            let item = unwrap_wrapped(item, "item");
            if let Some(record) =
                map_item(item, category_name, None, category_maturity, imported_at)
            {
                records.push(record);
            }
        }

        for subcategory in sequence_field(category, "subcategories") {
            let subcategory = unwrap_wrapped(subcategory, "subcategory");
            let Some(subcategory_name) = str_field(subcategory, "name") else {
                tracing::debug!(
                    category = category_name,
                    "skipping subcategory without a name"
                );
                continue;
            };

            for item in sequence_field(subcategory, "items") {
                let item = unwrap_wrapped(item, "item");
                if let Some(record) = map_item(
                    item,
                    category_name,
                    Some(subcategory_name),
                    category_maturity,
                    imported_at,
                ) {
                    records.push(record);
                }
            }
        }
    }

    records
}

/// Resolve an item's maturity level.
///
/// Strict priority order:
/// 1. the item's canonical `project` field;
/// 2. a category-level `maturity`/`level` declaration (consulted only
///    when the item carries no usable `project` field);
/// 3. the item's fallback fields, first non-blank one wins;
/// 4. a keyword scan over the category and subcategory names;
/// 5. `Sandbox`.
pub fn resolve_maturity(
    item: &Value,
    category: &str,
    subcategory: Option<&str>,
    category_maturity: Option<&str>,
) -> MaturityLevel {
    if let Some(project) = str_field(item, "project") {
        return MaturityLevel::normalize(project);
    }

    if let Some(declared) = category_maturity {
        return MaturityLevel::normalize(declared);
    }

    if let Some(raw) = MATURITY_FIELD_FALLBACKS
        .iter()
        .find_map(|field| str_field(item, field))
    {
        return MaturityLevel::normalize(raw);
    }

    container_name_hint(category, subcategory).unwrap_or(MaturityLevel::Sandbox)
}

/// Keyword scan over container names, most mature keyword first
fn container_name_hint(category: &str, subcategory: Option<&str>) -> Option<MaturityLevel> {
    let category = category.to_lowercase();
    let subcategory = subcategory.map(str::to_lowercase).unwrap_or_default();

    MaturityLevel::ALL
        .into_iter()
        .find(|level| category.contains(level.keyword()) || subcategory.contains(level.keyword()))
}

/// Map one resolved item onto a flat record; items without a name yield
/// `None`.
fn map_item(
    item: &Value,
    category: &str,
    subcategory: Option<&str>,
    category_maturity: Option<&str>,
    imported_at: DateTime<Utc>,
) -> Option<ProjectRecord> {
    let name = str_field(item, "name")?;
    let extra = decode_extra(item);

    let repo_url = str_field(item, "repo_url")
        .map(str::to_owned)
        .or_else(|| extra.as_ref().and_then(|e| e.github.clone()))
        .or_else(|| str_field(item, "repo").map(str::to_owned));

    let homepage_url = str_field(item, "homepage_url")
        .map(str::to_owned)
        .or_else(|| extra.as_ref().and_then(|e| e.url.clone()));

    Some(ProjectRecord {
        name: name.to_owned(),
        category: category.to_owned(),
        subcategory: subcategory.map(str::to_owned),
        maturity_level: resolve_maturity(item, category, subcategory, category_maturity),
        // Star enrichment needs the GitHub API; the importer leaves it unset
        github_stars: None,
        last_updated: Some(imported_at),
        homepage_url,
        repo_url,
        logo: str_field(item, "logo").map(str::to_owned),
        description: str_field(item, "description").map(str::to_owned),
        extra,
    })
}

fn decode_extra(item: &Value) -> Option<ProjectExtra> {
    let extra = item.get("extra")?;
    if !extra.is_mapping() {
        return None;
    }

    Some(ProjectExtra {
        github: str_field(extra, "github").map(str::to_owned),
        url: str_field(extra, "url").map(str::to_owned),
        twitter: str_field(extra, "twitter").map(str::to_owned),
    })
}

/// Unwrap a `{key: {...}}` wrapper, passing bare mappings through
fn unwrap_wrapped<'a>(value: &'a Value, key: &str) -> &'a Value {
    match value.get(key) {
        Some(inner) if inner.is_mapping() => inner,
        _ => value,
    }
}

/// Non-blank string field lookup
fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn sequence_field<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    value
        .get(key)
        .and_then(Value::as_sequence)
        .map(|s| s.iter())
        .into_iter()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(yaml: &str) -> LandscapeDocument {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        LandscapeDocument::from_yaml(value).unwrap()
    }

    fn flatten(yaml: &str) -> Vec<ProjectRecord> {
        flatten_document(&document(yaml), Utc::now())
    }

    fn item(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn flattens_category_and_subcategory_items() {
        let records = flatten(
            r#"
landscape:
  - name: Runtime
    items:
      - name: Top Level Tool
    subcategories:
      - name: Container Runtime
        items:
          - name: containerd
            project: graduated
"#,
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Top Level Tool");
        assert_eq!(records[0].category, "Runtime");
        assert_eq!(records[0].subcategory, None);
        assert_eq!(records[1].name, "containerd");
        assert_eq!(records[1].subcategory.as_deref(), Some("Container Runtime"));
        assert_eq!(records[1].maturity_level, MaturityLevel::Graduated);
    }

    #[test]
    fn unwraps_wrapped_entries_at_every_level() {
        let records = flatten(
            r#"
landscape:
  - category:
      name: Observability
      subcategories:
        - subcategory:
            name: Tracing
            items:
              - item:
                  name: Jaeger
                  project: graduated
"#,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jaeger");
        assert_eq!(records[0].category, "Observability");
        assert_eq!(records[0].subcategory.as_deref(), Some("Tracing"));
        assert_eq!(records[0].maturity_level, MaturityLevel::Graduated);
    }

    #[test]
    fn skips_unnamed_categories_subcategories_and_items() {
        let records = flatten(
            r#"
landscape:
  - items:
      - name: Orphan
  - name: Runtime
    items:
      - description: no name here
      - name: Kept
    subcategories:
      - items:
          - name: Also Orphan
"#,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Kept");
    }

    #[test]
    fn project_field_drives_maturity() {
        let records = flatten(
            r#"
landscape:
  - name: Runtime
    subcategories:
      - name: Container
        items:
          - name: X
            project: graduated
"#,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "X");
        assert_eq!(records[0].category, "Runtime");
        assert_eq!(records[0].subcategory.as_deref(), Some("Container"));
        assert_eq!(records[0].maturity_level, MaturityLevel::Graduated);
    }

    #[test]
    fn fallback_fields_are_consulted_in_order() {
        let it = item("{name: X, cncf_maturity: incubating, stage: graduated}");
        assert_eq!(
            resolve_maturity(&it, "Runtime", None, None),
            MaturityLevel::Incubating
        );

        let it = item("{name: X, stage: graduated}");
        assert_eq!(
            resolve_maturity(&it, "Runtime", None, None),
            MaturityLevel::Graduated
        );
    }

    #[test]
    fn project_field_beats_fallback_fields() {
        let it = item("{name: X, project: sandbox, maturity: graduated}");
        assert_eq!(
            resolve_maturity(&it, "Runtime", None, None),
            MaturityLevel::Sandbox
        );
    }

    #[test]
    fn category_declaration_overrides_heuristics_but_not_project_field() {
        let it = item("{name: X, maturity: graduated}");
        assert_eq!(
            resolve_maturity(&it, "Runtime", None, Some("incubating")),
            MaturityLevel::Incubating
        );

        let it = item("{name: X, project: graduated}");
        assert_eq!(
            resolve_maturity(&it, "Runtime", None, Some("incubating")),
            MaturityLevel::Graduated
        );

        // A blank project field counts as absent
        let it = item("{name: X, project: '  '}");
        assert_eq!(
            resolve_maturity(&it, "Runtime", None, Some("incubating")),
            MaturityLevel::Incubating
        );
    }

    #[test]
    fn container_names_hint_maturity_as_last_resort() {
        let it = item("{name: X}");
        assert_eq!(
            resolve_maturity(&it, "Sandbox Projects", None, None),
            MaturityLevel::Sandbox
        );
        assert_eq!(
            resolve_maturity(&it, "Projects", Some("Incubating"), None),
            MaturityLevel::Incubating
        );
        // The most mature keyword wins across both names
        assert_eq!(
            resolve_maturity(&it, "Incubating", Some("Graduated"), None),
            MaturityLevel::Graduated
        );
    }

    #[test]
    fn defaults_to_sandbox_without_any_signal() {
        let it = item("{name: X}");
        assert_eq!(
            resolve_maturity(&it, "Runtime", Some("Container"), None),
            MaturityLevel::Sandbox
        );
    }

    #[test]
    fn maps_repo_url_by_priority() {
        let records = flatten(
            r#"
landscape:
  - name: Runtime
    items:
      - name: A
        repo_url: https://github.com/a/a
        extra:
          github: https://github.com/a/ignored
      - name: B
        extra:
          github: https://github.com/b/b
      - name: C
        repo: https://github.com/c/c
      - name: D
"#,
        );

        assert_eq!(records[0].repo_url.as_deref(), Some("https://github.com/a/a"));
        assert_eq!(records[1].repo_url.as_deref(), Some("https://github.com/b/b"));
        assert_eq!(records[2].repo_url.as_deref(), Some("https://github.com/c/c"));
        assert_eq!(records[3].repo_url, None);
    }

    #[test]
    fn maps_homepage_url_with_extra_fallback() {
        let records = flatten(
            r#"
landscape:
  - name: Runtime
    items:
      - name: A
        homepage_url: https://a.io
      - name: B
        extra:
          url: https://b.io
"#,
        );

        assert_eq!(records[0].homepage_url.as_deref(), Some("https://a.io"));
        assert_eq!(records[1].homepage_url.as_deref(), Some("https://b.io"));
    }

    #[test]
    fn passes_descriptive_fields_through_and_never_sets_stars() {
        let records = flatten(
            r#"
landscape:
  - name: Runtime
    items:
      - name: A
        logo: a.svg
        description: a runtime
        extra:
          github: https://github.com/a/a
          twitter: https://twitter.com/a
"#,
        );

        let record = &records[0];
        assert_eq!(record.logo.as_deref(), Some("a.svg"));
        assert_eq!(record.description.as_deref(), Some("a runtime"));
        assert_eq!(record.github_stars, None);
        assert!(record.last_updated.is_some());
        let extra = record.extra.as_ref().unwrap();
        assert_eq!(extra.github.as_deref(), Some("https://github.com/a/a"));
        assert_eq!(extra.twitter.as_deref(), Some("https://twitter.com/a"));
        assert_eq!(extra.url, None);
    }
}
