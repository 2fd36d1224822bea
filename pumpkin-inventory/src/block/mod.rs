use std::sync::Arc;

use blocks::chest::{ChestBlock, EnderChestBlock, TrappedChestBlock};
use blocks::furnace::{BlastFurnaceBlock, FurnaceBlock, SmokerBlock};
use blocks::storage::{BarrelBlock, ShulkerBoxBlock, SHULKER_BOX_COLORS};
use blocks::workstation::{
    AnvilBlock, BeaconBlock, CraftingTableBlock, EnchantingTableBlock, GrindstoneBlock,
    LoomBlock, SmithingTableBlock, StonecutterBlock,
};
use pumpkin_protocol::ContainerName;

pub mod block_manager;
mod blocks;
pub mod container_block;

pub use block_manager::ContainerBlockManager;
pub use container_block::{BlockMetadata, ContainerBlock};

/// What kind of external container is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Chest,
    EnderChest,
    Barrel,
    ShulkerBox,
    Furnace,
    BlastFurnace,
    Smoker,
    SmithingTable,
    CraftingTable,
    Anvil,
    Grindstone,
    Loom,
    Stonecutter,
    EnchantingTable,
    Beacon,
    /// Villager trading, bound to an entity rather than a block.
    Merchant,
}

impl ContainerKind {
    /// The container name addressing `slot` of the opened window. `None` for windows whose slots
    /// live in the UI inventory instead.
    pub fn window_container(self, slot: u8) -> Option<ContainerName> {
        match self {
            ContainerKind::Chest | ContainerKind::EnderChest => Some(ContainerName::LevelEntity),
            ContainerKind::Barrel => Some(ContainerName::Barrel),
            ContainerKind::ShulkerBox => Some(ContainerName::ShulkerBox),
            ContainerKind::Furnace | ContainerKind::BlastFurnace | ContainerKind::Smoker => {
                match slot {
                    0 => Some(match self {
                        ContainerKind::BlastFurnace => ContainerName::BlastFurnaceIngredient,
                        ContainerKind::Smoker => ContainerName::SmokerIngredient,
                        _ => ContainerName::FurnaceIngredient,
                    }),
                    1 => Some(ContainerName::FurnaceFuel),
                    2 => Some(ContainerName::FurnaceResult),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// The shape of the container a block opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerDescriptor {
    pub kind: ContainerKind,
    pub size: usize,
}

impl ContainerDescriptor {
    pub const fn new(kind: ContainerKind, size: usize) -> Self {
        Self { kind, size }
    }
}

#[must_use]
pub fn default_block_manager() -> Arc<ContainerBlockManager> {
    let mut manager = ContainerBlockManager::default();

    manager.register(ChestBlock);
    manager.register(TrappedChestBlock);
    manager.register(EnderChestBlock);
    manager.register(BarrelBlock);
    manager.register(FurnaceBlock);
    manager.register(BlastFurnaceBlock);
    manager.register(SmokerBlock);
    manager.register(CraftingTableBlock);
    manager.register(SmithingTableBlock);
    manager.register(AnvilBlock);
    manager.register(GrindstoneBlock);
    manager.register(LoomBlock);
    manager.register(StonecutterBlock);
    manager.register(EnchantingTableBlock);
    manager.register(BeaconBlock);

    let anvil = Arc::new(AnvilBlock);
    manager.register_as("minecraft:chipped_anvil", anvil.clone());
    manager.register_as("minecraft:damaged_anvil", anvil);

    let shulker_box = Arc::new(ShulkerBoxBlock);
    for color in SHULKER_BOX_COLORS {
        manager.register_as(format!("minecraft:{color}_shulker_box"), shulker_box.clone());
    }

    Arc::new(manager)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fastnbt::Value;
    use pumpkin_world::block::get_block;

    use super::*;

    fn descriptor(name: &str) -> Option<ContainerDescriptor> {
        let manager = default_block_manager();
        let block = get_block(name).unwrap();
        manager
            .get_container_block(block)
            .map(|container| container.descriptor(None))
    }

    #[test]
    fn container_sizes() {
        assert_eq!(descriptor("minecraft:chest").unwrap().size, 27);
        assert_eq!(descriptor("minecraft:barrel").unwrap().size, 27);
        assert_eq!(descriptor("minecraft:red_shulker_box").unwrap().size, 27);
        assert_eq!(descriptor("minecraft:undyed_shulker_box").unwrap().size, 27);
        assert_eq!(descriptor("minecraft:blast_furnace").unwrap().size, 3);
        assert_eq!(descriptor("minecraft:smithing_table").unwrap().size, 4);
        assert_eq!(descriptor("minecraft:crafting_table").unwrap().size, 10);
        assert_eq!(descriptor("minecraft:anvil").unwrap().size, 3);
        assert_eq!(descriptor("minecraft:grindstone").unwrap().size, 3);
        assert!(descriptor("minecraft:stone").is_none());
    }

    #[test]
    fn paired_chest_doubles() {
        let manager = default_block_manager();
        let chest = manager
            .get_container_block(get_block("minecraft:chest").unwrap())
            .unwrap();
        let mut data = HashMap::new();
        data.insert("pairx".to_string(), Value::Int(4));
        data.insert("pairz".to_string(), Value::Int(0));
        assert_eq!(chest.descriptor(Some(&data)).size, 54);
        assert_eq!(chest.descriptor(Some(&HashMap::new())).size, 27);
    }

    #[test]
    fn smelters() {
        let manager = default_block_manager();
        assert!(manager.is_smelter(get_block("minecraft:smoker").unwrap()));
        assert!(!manager.is_smelter(get_block("minecraft:chest").unwrap()));
        assert_eq!(
            ContainerKind::Smoker.window_container(0),
            Some(ContainerName::SmokerIngredient)
        );
        assert_eq!(
            ContainerKind::Furnace.window_container(2),
            Some(ContainerName::FurnaceResult)
        );
        assert_eq!(ContainerKind::Anvil.window_container(0), None);
    }
}
