//! Blocks whose inputs live in the UI inventory. Some of them still get a window of their own.

use pumpkin_macros::container_block;
use pumpkin_world::BlockEntityData;

use crate::block::{ContainerBlock, ContainerDescriptor, ContainerKind};

macro_rules! workstation {
    ($block:ident, $kind:ident, $size:expr) => {
        impl ContainerBlock for $block {
            fn kind(&self) -> ContainerKind {
                ContainerKind::$kind
            }

            fn descriptor(&self, _data: Option<&BlockEntityData>) -> ContainerDescriptor {
                ContainerDescriptor::new(self.kind(), $size)
            }
        }
    };
}

#[container_block("minecraft:crafting_table")]
pub struct CraftingTableBlock;
// 3x3 grid + output
workstation!(CraftingTableBlock, CraftingTable, 10);

#[container_block("minecraft:smithing_table")]
pub struct SmithingTableBlock;
workstation!(SmithingTableBlock, SmithingTable, 4);

#[container_block("minecraft:anvil")]
pub struct AnvilBlock;
workstation!(AnvilBlock, Anvil, 3);

#[container_block("minecraft:grindstone")]
pub struct GrindstoneBlock;
workstation!(GrindstoneBlock, Grindstone, 3);

#[container_block("minecraft:loom")]
pub struct LoomBlock;
workstation!(LoomBlock, Loom, 0);

#[container_block("minecraft:stonecutter_block")]
pub struct StonecutterBlock;
workstation!(StonecutterBlock, Stonecutter, 0);

#[container_block("minecraft:enchanting_table")]
pub struct EnchantingTableBlock;
workstation!(EnchantingTableBlock, EnchantingTable, 0);

#[container_block("minecraft:beacon")]
pub struct BeaconBlock;
workstation!(BeaconBlock, Beacon, 0);
