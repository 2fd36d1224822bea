use std::{collections::HashMap, sync::LazyLock};

use serde::Deserialize;

const ITEMS_JSON: &str = include_str!("../../../assets/items.json");

pub static ITEMS: LazyLock<HashMap<String, Item>> = LazyLock::new(|| {
    serde_json::from_str(ITEMS_JSON).expect("Could not parse items.json registry.")
});

static ITEMS_BY_ID: LazyLock<HashMap<i32, (&'static str, &'static Item)>> = LazyLock::new(|| {
    ITEMS
        .iter()
        .map(|(name, item)| (item.id, (name.as_str(), item)))
        .collect()
});

#[derive(Deserialize, Clone, Debug)]
pub struct Item {
    pub id: i32,
    pub max_stack: u8,
    #[serde(default)]
    pub max_durability: u16,
}

/// Looks up an item by its namespaced name, `minecraft:` may be omitted.
pub fn get_item(name: &str) -> Option<&'static Item> {
    match ITEMS.get(name) {
        Some(item) => Some(item),
        None => ITEMS.get(&format!("minecraft:{name}")),
    }
}

pub fn get_item_by_id(id: i32) -> Option<&'static Item> {
    ITEMS_BY_ID.get(&id).map(|(_, item)| *item)
}

pub fn get_item_name(id: i32) -> Option<&'static str> {
    ITEMS_BY_ID.get(&id).map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_and_id() {
        let pearl = get_item("minecraft:ender_pearl").unwrap();
        assert_eq!(pearl.max_stack, 16);
        assert_eq!(get_item("ender_pearl").unwrap().id, pearl.id);
        assert_eq!(get_item_name(pearl.id), Some("minecraft:ender_pearl"));
        assert!(get_item("minecraft:not_an_item").is_none());
    }
}
