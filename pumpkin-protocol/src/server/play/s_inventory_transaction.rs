use pumpkin_core::math::{position::WorldPosition, vector3::Vector3};
use pumpkin_macros::server_packet;
use serde::Serialize;

use crate::NetworkItemStack;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseItemAction {
    ClickBlock,
    ClickAir,
    BreakBlock,
}

/// Using the held item, the way a player right clicks a chest to open it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UseItemTransactionData {
    pub action_type: UseItemAction,
    pub block_position: WorldPosition,
    pub block_face: i32,
    pub hotbar_slot: i32,
    pub held_item: NetworkItemStack,
    pub clicked_position: Vector3<f32>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[server_packet(0x1e)]
pub struct SInventoryTransaction {
    pub transaction_data: UseItemTransactionData,
}

impl SInventoryTransaction {
    /// Clicks the top face of the block at `position` with `held_item`.
    pub fn click_block(position: WorldPosition, hotbar_slot: u8, held_item: NetworkItemStack) -> Self {
        Self {
            transaction_data: UseItemTransactionData {
                action_type: UseItemAction::ClickBlock,
                block_position: position,
                block_face: 1,
                hotbar_slot: i32::from(hotbar_slot),
                held_item,
                clicked_position: Vector3::new(0.5, 0.5, 0.5),
            },
        }
    }
}
