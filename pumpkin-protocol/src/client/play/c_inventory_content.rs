use pumpkin_macros::client_packet;
use serde::Deserialize;

use crate::NetworkItemStack;

/// Full contents of the window `window_id`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[client_packet(0x31)]
pub struct CInventoryContent {
    pub window_id: u8,
    pub content: Vec<NetworkItemStack>,
}
