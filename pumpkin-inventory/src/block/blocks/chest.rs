use pumpkin_macros::container_block;
use pumpkin_world::BlockEntityData;

use crate::block::{ContainerBlock, ContainerDescriptor, ContainerKind};

const SINGLE_CHEST_SIZE: usize = 27;
const DOUBLE_CHEST_SIZE: usize = 54;

/// A chest is doubled when its block entity names the position of its partner.
fn chest_size(data: Option<&BlockEntityData>) -> usize {
    if data.is_some_and(|data| data.contains_key("pairx")) {
        DOUBLE_CHEST_SIZE
    } else {
        SINGLE_CHEST_SIZE
    }
}

#[container_block("minecraft:chest")]
pub struct ChestBlock;

impl ContainerBlock for ChestBlock {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Chest
    }

    fn descriptor(&self, data: Option<&BlockEntityData>) -> ContainerDescriptor {
        ContainerDescriptor::new(self.kind(), chest_size(data))
    }
}

#[container_block("minecraft:trapped_chest")]
pub struct TrappedChestBlock;

impl ContainerBlock for TrappedChestBlock {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Chest
    }

    fn descriptor(&self, data: Option<&BlockEntityData>) -> ContainerDescriptor {
        ContainerDescriptor::new(self.kind(), chest_size(data))
    }
}

#[container_block("minecraft:ender_chest")]
pub struct EnderChestBlock;

impl ContainerBlock for EnderChestBlock {
    fn kind(&self) -> ContainerKind {
        ContainerKind::EnderChest
    }

    fn descriptor(&self, _data: Option<&BlockEntityData>) -> ContainerDescriptor {
        ContainerDescriptor::new(self.kind(), SINGLE_CHEST_SIZE)
    }
}
