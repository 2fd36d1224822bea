use std::collections::HashMap;
use std::fmt::Formatter;
use std::sync::LazyLock;

use itertools::Itertools;
use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer};

/// Item tags keyed by their name without the `minecraft:` namespace.
pub static ITEM_TAGS: LazyLock<HashMap<String, Vec<TagType>>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../assets/tags/item.json"))
        .expect("Could not parse tags/item.json registry.")
});

pub fn get_tag_values(tag: &str) -> Option<&'static Vec<TagType>> {
    ITEM_TAGS.get(strip_namespace(tag))
}

/// Resolves an item tag into every item it contains, following nested tags.
pub fn resolve_item_tag(tag: &str) -> Vec<String> {
    let mut items = Vec::new();
    collect_tag(tag, &mut items, &mut Vec::new());
    items.into_iter().unique().collect()
}

fn collect_tag<'a>(tag: &'a str, items: &mut Vec<String>, visited: &mut Vec<&'a str>) {
    let tag = strip_namespace(tag);
    if visited.contains(&tag) {
        return;
    }
    visited.push(tag);
    let Some(values) = ITEM_TAGS.get(tag) else {
        log::warn!("Unknown item tag {tag}");
        return;
    };
    for value in values {
        match value {
            TagType::Item(item) => items.push(item.clone()),
            TagType::Tag(nested) => collect_tag(nested, items, visited),
        }
    }
}

fn strip_namespace(tag: &str) -> &str {
    tag.strip_prefix("minecraft:").unwrap_or(tag)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagType {
    Item(String),
    Tag(String),
}

impl<'de> Deserialize<'de> for TagType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TagVisitor;
        impl Visitor<'_> for TagVisitor {
            type Value = TagType;
            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "valid tag")
            }
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                match v.strip_prefix('#') {
                    Some(v) => Ok(TagType::Tag(v.to_string())),
                    None => Ok(TagType::Item(v.to_string())),
                }
            }
        }
        deserializer.deserialize_str(TagVisitor)
    }
}
