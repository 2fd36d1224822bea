use pumpkin_macros::client_packet;
use serde::Deserialize;

use crate::NetworkItemStack;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[client_packet(0x32)]
pub struct CInventorySlot {
    pub window_id: u8,
    pub slot: u32,
    pub new_item: NetworkItemStack,
}
