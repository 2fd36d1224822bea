use std::collections::HashMap;

use parking_lot::RwLock;
use pumpkin_core::math::position::WorldPosition;

use crate::block::{get_block_by_id, Block};

/// Side data of a block entity, e.g. the `pairx`/`pairz` keys of a doubled chest.
pub type BlockEntityData = HashMap<String, fastnbt::Value>;

/// The read-only view of the world the inventory code needs to classify what is opened at a
/// position.
pub trait WorldView: Send + Sync {
    fn block_at(&self, pos: WorldPosition) -> Option<&'static Block>;

    fn block_entity_data_at(&self, pos: WorldPosition) -> Option<BlockEntityData>;

    /// The type identifier (e.g. `minecraft:villager_v2`) of a tracked entity.
    fn entity_type(&self, unique_id: i64) -> Option<String>;
}

/// The `Level` is the client's mirror of the parts of the world the server told it about.
///
/// Chunk terrain is decoded elsewhere; the `Level` only keeps block runtime ids written by
/// single block updates, block entity side data and the types of tracked entities.
#[derive(Default)]
pub struct Level {
    blocks: RwLock<HashMap<WorldPosition, u32>>,
    block_entities: RwLock<HashMap<WorldPosition, BlockEntityData>>,
    entities: RwLock<HashMap<i64, String>>,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_block(&self, pos: WorldPosition, runtime_id: u32) {
        if get_block_by_id(runtime_id).is_none() {
            log::debug!("Unknown block runtime id {runtime_id} at {pos}");
        }
        let mut blocks = self.blocks.write();
        if runtime_id == 0 {
            blocks.remove(&pos);
            self.block_entities.write().remove(&pos);
        } else {
            blocks.insert(pos, runtime_id);
        }
    }

    pub fn block_id_at(&self, pos: WorldPosition) -> u32 {
        self.blocks.read().get(&pos).copied().unwrap_or(0)
    }

    /// Merges `data` into the side data already stored at `pos`.
    pub fn set_block_entity(&self, pos: WorldPosition, data: BlockEntityData) {
        self.block_entities
            .write()
            .entry(pos)
            .or_default()
            .extend(data);
    }

    pub fn add_entity(&self, unique_id: i64, entity_type: impl Into<String>) {
        self.entities.write().insert(unique_id, entity_type.into());
    }

    pub fn remove_entity(&self, unique_id: i64) {
        self.entities.write().remove(&unique_id);
    }
}

impl WorldView for Level {
    fn block_at(&self, pos: WorldPosition) -> Option<&'static Block> {
        get_block_by_id(self.block_id_at(pos))
    }

    fn block_entity_data_at(&self, pos: WorldPosition) -> Option<BlockEntityData> {
        self.block_entities.read().get(&pos).cloned()
    }

    fn entity_type(&self, unique_id: i64) -> Option<String> {
        self.entities.read().get(&unique_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use fastnbt::Value;

    use super::*;
    use crate::block::get_block;

    #[test]
    fn block_updates() {
        let level = Level::new();
        let pos = WorldPosition::new(3, 64, -2);
        let chest = get_block("minecraft:chest").unwrap();

        assert!(level.block_at(pos).unwrap().is_air());
        level.set_block(pos, chest.id);
        assert_eq!(level.block_at(pos), Some(chest));
        level.set_block(pos, 0);
        assert_eq!(level.block_id_at(pos), 0);
    }

    #[test]
    fn block_entity_data_merges() {
        let level = Level::new();
        let pos = WorldPosition::new(0, 70, 0);
        let chest = get_block("minecraft:chest").unwrap();
        level.set_block(pos, chest.id);

        let mut first = BlockEntityData::new();
        first.insert("id".into(), Value::String("Chest".into()));
        level.set_block_entity(pos, first);
        let mut second = BlockEntityData::new();
        second.insert("pairx".into(), Value::Int(1));
        level.set_block_entity(pos, second);

        let data = level.block_entity_data_at(pos).unwrap();
        assert!(data.contains_key("id"));
        assert!(data.contains_key("pairx"));

        // Breaking the block drops its side data.
        level.set_block(pos, 0);
        assert!(level.block_entity_data_at(pos).is_none());
    }

    #[test]
    fn entity_tracking() {
        let level = Level::new();
        level.add_entity(42, "minecraft:villager_v2");
        assert_eq!(level.entity_type(42).as_deref(), Some("minecraft:villager_v2"));
        level.remove_entity(42);
        assert!(level.entity_type(42).is_none());
    }
}
