use pumpkin_macros::container_block;
use pumpkin_world::BlockEntityData;

use crate::block::{ContainerBlock, ContainerDescriptor, ContainerKind};

pub const SHULKER_BOX_COLORS: [&str; 17] = [
    "undyed",
    "white",
    "orange",
    "magenta",
    "light_blue",
    "yellow",
    "lime",
    "pink",
    "gray",
    "light_gray",
    "cyan",
    "purple",
    "blue",
    "brown",
    "green",
    "red",
    "black",
];

#[container_block("minecraft:barrel")]
pub struct BarrelBlock;

impl ContainerBlock for BarrelBlock {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Barrel
    }

    fn descriptor(&self, _data: Option<&BlockEntityData>) -> ContainerDescriptor {
        ContainerDescriptor::new(self.kind(), 27)
    }
}

/// Every shulker box color shares this implementation.
pub struct ShulkerBoxBlock;

impl ContainerBlock for ShulkerBoxBlock {
    fn kind(&self) -> ContainerKind {
        ContainerKind::ShulkerBox
    }

    fn descriptor(&self, _data: Option<&BlockEntityData>) -> ContainerDescriptor {
        ContainerDescriptor::new(self.kind(), 27)
    }
}
