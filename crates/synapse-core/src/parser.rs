//! Markdown extraction.
//!
//! One pass with pulldown-cmark pulls out the pieces indexing cares
//! about: headings, wiki-link targets, and frontmatter aliases. Links
//! use the `[[target|alias]]` order, so the destination side of the
//! event is the target and the inner text is display-only.

use pulldown_cmark::{Event, LinkType, MetadataBlockKind, Options, Parser, Tag, TagEnd};
use sha2::{Digest, Sha256};

use crate::source::HeadingInfo;

pub(crate) struct ParsedDocument {
    pub headings: Vec<HeadingInfo>,
    pub link_targets: Vec<String>,
    pub aliases: Vec<String>,
    pub digest: String,
}

/// Hex SHA-256 of the raw document text. Used to skip re-indexing
/// unchanged content.
pub(crate) fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text);
    format!("{:x}", hasher.finalize())
}

pub(crate) fn parse_document(text: &str) -> ParsedDocument {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_WIKILINKS);
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let parser = Parser::new_ext(text, options);

    let mut headings = Vec::new();
    let mut link_targets = Vec::new();
    let mut aliases = Vec::new();

    let mut in_frontmatter = false;
    let mut frontmatter_text = String::new();
    let mut pending_heading: Option<(u8, String)> = None;
    let mut in_wiki_link = false;

    for event in parser {
        match event {
            Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                in_frontmatter = true;
            }
            Event::End(TagEnd::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                in_frontmatter = false;
                aliases = frontmatter_aliases(&frontmatter_text);
            }

            Event::Start(Tag::Heading { level, .. }) => {
                pending_heading = Some((level as u8, String::new()));
            }
            Event::End(TagEnd::Heading(..)) => {
                if let Some((level, text)) = pending_heading.take() {
                    let text = text.trim().to_string();
                    if !text.is_empty() {
                        headings.push(HeadingInfo { text, level });
                    }
                }
            }

            Event::Start(Tag::Link {
                link_type,
                dest_url,
                ..
            })
            | Event::Start(Tag::Image {
                link_type,
                dest_url,
                ..
            }) => {
                if matches!(link_type, LinkType::WikiLink { .. }) {
                    if let Some(target) = link_target(&dest_url) {
                        link_targets.push(target);
                    }
                    in_wiki_link = true;
                }
            }
            Event::End(TagEnd::Link) | Event::End(TagEnd::Image) => {
                in_wiki_link = false;
            }

            Event::Text(chunk) | Event::Code(chunk) => {
                if in_frontmatter {
                    frontmatter_text.push_str(&chunk);
                } else if in_wiki_link {
                    // Display side of the link, not part of any heading.
                } else if let Some((_, text)) = pending_heading.as_mut() {
                    text.push_str(&chunk);
                }
            }
            _ => {}
        }
    }

    ParsedDocument {
        headings,
        link_targets,
        aliases,
        digest: content_digest(text),
    }
}

/// The note a wiki-link destination addresses: anchor stripped,
/// trimmed. An empty remainder (`[[#heading]]` self-links) is no
/// target at all.
fn link_target(dest: &str) -> Option<String> {
    let without_anchor = match dest.find('#') {
        Some(i) => &dest[..i],
        None => dest,
    };
    let target = without_anchor.trim();
    (!target.is_empty()).then(|| target.to_string())
}

fn frontmatter_aliases(yaml: &str) -> Vec<String> {
    let Ok(value) = serde_yaml::from_str::<serde_json::Value>(yaml) else {
        return Vec::new();
    };

    let mut aliases = Vec::new();
    for key in ["aliases", "alias"] {
        match value.get(key) {
            Some(serde_json::Value::String(s)) => push_alias(&mut aliases, s),
            Some(serde_json::Value::Array(items)) => {
                for item in items {
                    if let Some(s) = item.as_str() {
                        push_alias(&mut aliases, s);
                    }
                }
            }
            _ => {}
        }
    }
    aliases
}

fn push_alias(aliases: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && !aliases.iter().any(|a| a == trimmed) {
        aliases.push(trimmed.to_string());
    }
}
