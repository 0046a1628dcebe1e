//! Documentation pages and their frontmatter

use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

use super::error::{DocsError, Result};
use crate::nav::content::ContentRecord;

const FRONTMATTER_FENCE: &str = "---";

/// A markdown or MDX page
#[derive(Debug, Clone)]
pub struct Document {
    /// File path
    pub path: PathBuf,
    /// Raw file content, frontmatter included
    pub content: String,
    /// Document metadata (YAML frontmatter)
    pub metadata: DocumentMetadata,
}

/// Document metadata from YAML frontmatter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sidebar_label: Option<String>,
    pub sidebar_position: Option<f64>,
    pub slug: Option<String>,
}

impl Document {
    /// Open a document from a file
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DocsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, content)
    }

    /// Build a document from already loaded content
    pub fn parse(path: &Path, content: String) -> Result<Self> {
        let metadata = match split_frontmatter(&content) {
            Some((frontmatter, _)) if !frontmatter.trim().is_empty() => {
                serde_yaml::from_str(frontmatter).map_err(|source| DocsError::Frontmatter {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            _ => DocumentMetadata::default(),
        };

        Ok(Self {
            path: path.to_path_buf(),
            content,
            metadata,
        })
    }

    /// Content without frontmatter
    pub fn body(&self) -> &str {
        split_frontmatter(&self.content)
            .map(|(_, body)| body)
            .unwrap_or(&self.content)
    }

    /// Frontmatter title, then the first `# heading`, then the file stem
    pub fn title(&self) -> String {
        self.metadata
            .title
            .clone()
            .or_else(|| first_heading(self.body()))
            .unwrap_or_else(|| {
                self.path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| "Untitled".to_string())
            })
    }

    /// Label used in the sidebar
    pub fn sidebar_label(&self) -> String {
        self.metadata
            .sidebar_label
            .clone()
            .unwrap_or_else(|| self.title())
    }

    /// Frontmatter description, or the first paragraph of the body
    pub fn description(&self) -> Option<String> {
        self.metadata
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .or_else(|| first_paragraph(self.body()))
    }

    pub fn to_content_record(&self, id: &str, permalink: &str) -> ContentRecord {
        ContentRecord {
            id: id.to_string(),
            title: self.title(),
            description: self.description(),
            permalink: permalink.to_string(),
        }
    }
}

/// Split `---\n<yaml>\n---\n<body>` into its two halves
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(FRONTMATTER_FENCE)?;
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    let rest = rest.strip_prefix('\n')?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONTMATTER_FENCE {
            let frontmatter = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((frontmatter, body));
        }
        offset += line.len();
    }
    None
}

fn first_heading(markdown: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_heading = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = text.trim();
                if !title.is_empty() {
                    return Some(title.to_string());
                }
                in_heading = false;
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            _ => {}
        }
    }
    None
}

/// Plain text of the first prose paragraph.
///
/// MDX `import`/`export` statements and `:::` admonition fences parse as
/// paragraphs too, so they are skipped. Image alt text is dropped.
fn first_paragraph(markdown: &str) -> Option<String> {
    let mut in_paragraph = false;
    let mut image_depth = 0usize;
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                text.clear();
            }
            Event::End(TagEnd::Paragraph) => {
                in_paragraph = false;
                let paragraph = text.split_whitespace().collect::<Vec<_>>().join(" ");
                if !paragraph.is_empty() && !is_mdx_statement(&paragraph) {
                    return Some(paragraph);
                }
            }
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::End(TagEnd::Image) => image_depth = image_depth.saturating_sub(1),
            Event::Text(t) | Event::Code(t) if in_paragraph && image_depth == 0 => {
                text.push_str(&t)
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }
    None
}

fn is_mdx_statement(paragraph: &str) -> bool {
    paragraph.starts_with("import ") || paragraph.starts_with("export ") || paragraph.starts_with(":::")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(content: &str) -> Document {
        Document::parse(Path::new("docs/getting-started.md"), content.to_string()).unwrap()
    }

    #[test]
    fn test_parse_frontmatter() {
        let doc = parse(
            r#"---
id: getting-started
title: "Getting Started"
sidebar_label: Start
sidebar_position: 2
description: Install and run your first stack
tags: [deploy, quickstart]
---

# Content here
"#,
        );
        assert_eq!(
            doc.metadata,
            DocumentMetadata {
                id: Some("getting-started".to_string()),
                title: Some("Getting Started".to_string()),
                description: Some("Install and run your first stack".to_string()),
                sidebar_label: Some("Start".to_string()),
                sidebar_position: Some(2.0),
                slug: None,
            }
        );
        assert_eq!(doc.sidebar_label(), "Start");
        assert_eq!(doc.body().trim(), "# Content here");
    }

    #[test]
    fn test_description_from_first_paragraph() {
        let doc = parse(
            r#"---
title: Manifest
---
import Tabs from '@theme/Tabs';

# Manifest file

:::note

The manifest is **required**.

:::

![diagram](/img/manifest.png) The `stackql_manifest.yml` file
describes a stack.

Second paragraph.
"#,
        );
        assert_eq!(doc.title(), "Manifest");
        assert_eq!(
            doc.description().as_deref(),
            Some("The manifest is required.")
        );
    }

    #[test]
    fn test_title_falls_back_to_heading_then_stem() {
        let doc = parse("# Quick Start\n\nRun `stackql-deploy build`.\n");
        assert_eq!(doc.title(), "Quick Start");
        assert_eq!(doc.description().as_deref(), Some("Run stackql-deploy build."));

        let bare = parse("");
        assert_eq!(bare.title(), "getting-started");
        assert_eq!(bare.description(), None);
    }

    #[test]
    fn test_unterminated_frontmatter_is_body() {
        let doc = parse("---\ntitle: nope\n\nNo closing fence.\n");
        assert_eq!(doc.metadata, DocumentMetadata::default());
    }

    #[test]
    fn test_invalid_frontmatter_is_an_error() {
        let result = Document::parse(
            Path::new("docs/broken.md"),
            "---\ntitle: [unclosed\n---\n".to_string(),
        );
        assert!(matches!(result, Err(DocsError::Frontmatter { .. })));
    }
}
