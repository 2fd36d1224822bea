use pumpkin_macros::client_packet;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[client_packet(0x2f)]
pub struct CContainerClose {
    pub window_id: u8,
    pub server_side: bool,
}
