use pumpkin_macros::container_block;
use pumpkin_world::BlockEntityData;

use crate::block::{ContainerBlock, ContainerDescriptor, ContainerKind};

// ingredient, fuel, result
const SMELTER_SIZE: usize = 3;

#[container_block("minecraft:furnace")]
pub struct FurnaceBlock;

impl ContainerBlock for FurnaceBlock {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Furnace
    }

    fn descriptor(&self, _data: Option<&BlockEntityData>) -> ContainerDescriptor {
        ContainerDescriptor::new(self.kind(), SMELTER_SIZE)
    }

    fn is_smelter(&self) -> bool {
        true
    }
}

#[container_block("minecraft:blast_furnace")]
pub struct BlastFurnaceBlock;

impl ContainerBlock for BlastFurnaceBlock {
    fn kind(&self) -> ContainerKind {
        ContainerKind::BlastFurnace
    }

    fn descriptor(&self, _data: Option<&BlockEntityData>) -> ContainerDescriptor {
        ContainerDescriptor::new(self.kind(), SMELTER_SIZE)
    }

    fn is_smelter(&self) -> bool {
        true
    }
}

#[container_block("minecraft:smoker")]
pub struct SmokerBlock;

impl ContainerBlock for SmokerBlock {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Smoker
    }

    fn descriptor(&self, _data: Option<&BlockEntityData>) -> ContainerDescriptor {
        ContainerDescriptor::new(self.kind(), SMELTER_SIZE)
    }

    fn is_smelter(&self) -> bool {
        true
    }
}
