use pumpkin_macros::server_packet;
use serde::Serialize;

use crate::{NetworkItemStack, WINDOW_ID_INVENTORY};

/// Tells the server which hotbar slot the player holds.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[server_packet(0x1f)]
pub struct SMobEquipment {
    pub entity_runtime_id: u64,
    pub new_item: NetworkItemStack,
    pub inventory_slot: u8,
    pub hotbar_slot: u8,
    pub window_id: u8,
}

impl SMobEquipment {
    pub fn new(entity_runtime_id: u64, hotbar_slot: u8, new_item: NetworkItemStack) -> Self {
        Self {
            entity_runtime_id,
            new_item,
            inventory_slot: hotbar_slot,
            hotbar_slot,
            window_id: WINDOW_ID_INVENTORY,
        }
    }
}
