//! Docs directory scanning and autogenerated sidebars

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex_lite::Regex;
use serde::Deserialize;
use walkdir::WalkDir;

use super::document::Document;
use super::error::{DocsError, Result};
use crate::nav::content::ContentIndex;
use crate::nav::item::{NavigationItem, SidebarCategory, SidebarLink};

const MAX_DEPTH: usize = 10;
const CATEGORY_FILES: [&str; 3] = ["_category_.json", "_category_.yml", "_category_.yaml"];
const INDEX_STEMS: [&str; 2] = ["index", "readme"];

/// Category metadata from `_category_.json` / `_category_.yml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CategoryMetadata {
    label: Option<String>,
    position: Option<f64>,
    description: Option<String>,
    link: Option<CategoryLinkMetadata>,
    custom_props: Option<CategoryCustomProps>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CategoryLinkMetadata {
    description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CategoryCustomProps {
    icon: Option<String>,
}

/// Sidebar and content index generated from a docs directory
#[derive(Debug, Clone, Default)]
pub struct DocsTree {
    pub root_path: PathBuf,
    pub items: Vec<NavigationItem>,
    pub content: ContentIndex,
}

/// Item waiting to be ordered among its siblings
struct Entry {
    position: Option<f64>,
    name: String,
    item: NavigationItem,
}

impl DocsTree {
    /// Build the tree for `path`, serving pages under `route_base_path`
    pub fn from_path(path: &Path, route_base_path: &str) -> Result<Self> {
        if !path.is_dir() {
            return Err(DocsError::NotADirectory(path.to_path_buf()));
        }

        let mut content = ContentIndex::new();
        let route_base = route_base_path.trim_matches('/');
        let items = Self::build_items(path, &[], 0, route_base, &mut content)?;

        tracing::info!(
            "Indexed {} documents from {}",
            content.len(),
            path.display()
        );

        Ok(Self {
            root_path: path.to_path_buf(),
            items,
            content,
        })
    }

    /// Recursively build the items of one directory
    fn build_items(
        dir: &Path,
        segments: &[String],
        depth: usize,
        route_base: &str,
        content: &mut ContentIndex,
    ) -> Result<Vec<NavigationItem>> {
        if depth >= MAX_DEPTH {
            tracing::warn!("Not descending into {}: too deep", dir.display());
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let entry_path = entry.path();
            let file_name = entry.file_name().to_string_lossy().to_string();

            // Hidden and partial files never appear in the sidebar
            if file_name.starts_with('.') || file_name.starts_with('_') || file_name == "node_modules" {
                continue;
            }

            if entry.file_type().is_dir() {
                let metadata = read_category_metadata(entry_path)?;
                let slug = strip_number_prefix(&file_name);
                let mut child_segments = segments.to_vec();
                child_segments.push(slug.to_string());

                let items =
                    Self::build_items(entry_path, &child_segments, depth + 1, route_base, content)?;

                let description = metadata
                    .description
                    .or_else(|| metadata.link.and_then(|link| link.description));
                let category = SidebarCategory {
                    label: metadata.label.unwrap_or_else(|| slug.to_string()),
                    description,
                    items,
                    icon: metadata.custom_props.and_then(|props| props.icon),
                };

                entries.push(Entry {
                    position: metadata.position,
                    name: file_name,
                    item: category.into(),
                });
            } else if is_markdown(entry_path) {
                let document = Document::open(entry_path)?;
                let (id, destination) = document_route(&document, segments, route_base);

                content.insert(document.to_content_record(&id, &destination));
                tracing::debug!("Indexed '{}' at {}", id, destination);

                let link = SidebarLink::new(destination, document.sidebar_label()).with_content_id(id);
                entries.push(Entry {
                    position: document.metadata.sidebar_position,
                    name: file_name,
                    item: link.into(),
                });
            }
        }

        entries.sort_by(compare_entries);
        Ok(entries.into_iter().map(|entry| entry.item).collect())
    }
}

/// Positioned entries first, by position, then by file name
fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    let by_position = match (a.position, b.position) {
        (Some(pa), Some(pb)) => pa.partial_cmp(&pb).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_position.then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Content id and URL path of a document
fn document_route(document: &Document, segments: &[String], route_base: &str) -> (String, String) {
    let stem = document
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = strip_number_prefix(&stem).to_string();
    let name = document.metadata.id.clone().unwrap_or_else(|| stem.clone());

    let mut id_parts = segments.to_vec();
    id_parts.push(name.clone());
    let id = id_parts.join("/");

    let mut url_parts: Vec<String> = Vec::new();
    if !route_base.is_empty() {
        url_parts.push(route_base.to_string());
    }
    match document.metadata.slug.as_deref() {
        Some(slug) if slug.starts_with('/') => url_parts.push(slug.to_string()),
        Some(slug) => {
            url_parts.extend(segments.iter().cloned());
            url_parts.push(slug.to_string());
        }
        None => {
            url_parts.extend(segments.iter().cloned());
            if !INDEX_STEMS.contains(&stem.to_lowercase().as_str()) {
                url_parts.push(name);
            }
        }
    }

    (id, join_url(&url_parts))
}

fn join_url(parts: &[String]) -> String {
    let joined = parts
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}

fn read_category_metadata(dir: &Path) -> Result<CategoryMetadata> {
    for file in CATEGORY_FILES {
        let path = dir.join(file);
        if !path.is_file() {
            continue;
        }

        let content = std::fs::read_to_string(&path).map_err(|source| DocsError::Io {
            path: path.clone(),
            source,
        })?;
        return if file.ends_with(".json") {
            serde_json::from_str(&content)
                .map_err(|source| DocsError::CategoryJson { path, source })
        } else {
            serde_yaml::from_str(&content)
                .map_err(|source| DocsError::CategoryYaml { path, source })
        };
    }
    Ok(CategoryMetadata::default())
}

/// `01-intro` -> `intro`, `2_aws` -> `aws`
pub fn strip_number_prefix(name: &str) -> &str {
    static NUMBER_PREFIX: OnceLock<Regex> = OnceLock::new();
    let re = NUMBER_PREFIX.get_or_init(|| {
        Regex::new(r"^\d+\s*[-_.]+\s*([^-_.\s].*)$").expect("number prefix pattern is valid")
    });

    re.captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(name)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "md" || ext == "mdx")
        .unwrap_or(false)
}
