use std::{collections::HashMap, sync::LazyLock};

use serde::Deserialize;

const BLOCKS_JSON: &str = include_str!("../../../assets/blocks.json");

pub static BLOCKS: LazyLock<Vec<Block>> = LazyLock::new(|| {
    serde_json::from_str(BLOCKS_JSON).expect("Could not parse blocks.json registry.")
});

static BLOCKS_BY_NAME: LazyLock<HashMap<&'static str, &'static Block>> =
    LazyLock::new(|| BLOCKS.iter().map(|block| (block.name.as_str(), block)).collect());

static BLOCKS_BY_ID: LazyLock<HashMap<u32, &'static Block>> =
    LazyLock::new(|| BLOCKS.iter().map(|block| (block.id, block)).collect());

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// e.g. minecraft:chest
    pub name: String,
    /// The runtime id the server uses for this block on the wire.
    pub id: u32,
}

impl Block {
    pub fn is_air(&self) -> bool {
        self.id == 0
    }
}

pub fn get_block(name: &str) -> Option<&'static Block> {
    BLOCKS_BY_NAME.get(name).copied()
}

pub fn get_block_by_id(id: u32) -> Option<&'static Block> {
    BLOCKS_BY_ID.get(&id).copied()
}
