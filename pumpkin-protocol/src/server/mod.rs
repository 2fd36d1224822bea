pub mod play;

use play::{SContainerClose, SInventoryTransaction, SItemStackRequest, SMobEquipment};

use crate::ServerPacketID;

/// Every packet the inventory layer asks the transport to send.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerboundPacket {
    ItemStackRequest(SItemStackRequest),
    ContainerClose(SContainerClose),
    InventoryTransaction(SInventoryTransaction),
    MobEquipment(SMobEquipment),
}

impl ServerboundPacket {
    pub fn packet_id(&self) -> u32 {
        match self {
            ServerboundPacket::ItemStackRequest(_) => SItemStackRequest::PACKET_ID,
            ServerboundPacket::ContainerClose(_) => SContainerClose::PACKET_ID,
            ServerboundPacket::InventoryTransaction(_) => SInventoryTransaction::PACKET_ID,
            ServerboundPacket::MobEquipment(_) => SMobEquipment::PACKET_ID,
        }
    }
}

impl From<SItemStackRequest> for ServerboundPacket {
    fn from(packet: SItemStackRequest) -> Self {
        ServerboundPacket::ItemStackRequest(packet)
    }
}

impl From<SContainerClose> for ServerboundPacket {
    fn from(packet: SContainerClose) -> Self {
        ServerboundPacket::ContainerClose(packet)
    }
}

impl From<SInventoryTransaction> for ServerboundPacket {
    fn from(packet: SInventoryTransaction) -> Self {
        ServerboundPacket::InventoryTransaction(packet)
    }
}

impl From<SMobEquipment> for ServerboundPacket {
    fn from(packet: SMobEquipment) -> Self {
        ServerboundPacket::MobEquipment(packet)
    }
}
