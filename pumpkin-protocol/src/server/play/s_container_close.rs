use pumpkin_macros::server_packet;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[server_packet(0x2f)]
pub struct SContainerClose {
    pub window_id: u8,
    pub server_side: bool,
}

impl SContainerClose {
    pub const fn new(window_id: u8) -> Self {
        Self {
            window_id,
            server_side: false,
        }
    }
}
