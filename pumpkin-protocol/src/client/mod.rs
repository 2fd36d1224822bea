pub mod play;

use play::{
    CAddActor, CBlockActorData, CContainerClose, CContainerOpen, CInventoryContent,
    CInventorySlot, CItemStackResponse, CRemoveActor, CUpdateBlock,
};

use crate::ClientPacketID;

/// Every decoded packet from the server the bot reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientboundPacket {
    ContainerOpen(CContainerOpen),
    ContainerClose(CContainerClose),
    InventoryContent(CInventoryContent),
    InventorySlot(CInventorySlot),
    ItemStackResponse(CItemStackResponse),
    UpdateBlock(CUpdateBlock),
    BlockActorData(CBlockActorData),
    AddActor(CAddActor),
    RemoveActor(CRemoveActor),
}

impl ClientboundPacket {
    pub fn packet_id(&self) -> u32 {
        match self {
            ClientboundPacket::ContainerOpen(_) => CContainerOpen::PACKET_ID,
            ClientboundPacket::ContainerClose(_) => CContainerClose::PACKET_ID,
            ClientboundPacket::InventoryContent(_) => CInventoryContent::PACKET_ID,
            ClientboundPacket::InventorySlot(_) => CInventorySlot::PACKET_ID,
            ClientboundPacket::ItemStackResponse(_) => CItemStackResponse::PACKET_ID,
            ClientboundPacket::UpdateBlock(_) => CUpdateBlock::PACKET_ID,
            ClientboundPacket::BlockActorData(_) => CBlockActorData::PACKET_ID,
            ClientboundPacket::AddActor(_) => CAddActor::PACKET_ID,
            ClientboundPacket::RemoveActor(_) => CRemoveActor::PACKET_ID,
        }
    }
}

macro_rules! impl_from_packet {
    ($($variant:ident($packet:ty)),* $(,)?) => {
        $(
            impl From<$packet> for ClientboundPacket {
                fn from(packet: $packet) -> Self {
                    ClientboundPacket::$variant(packet)
                }
            }
        )*
    };
}

impl_from_packet!(
    ContainerOpen(CContainerOpen),
    ContainerClose(CContainerClose),
    InventoryContent(CInventoryContent),
    InventorySlot(CInventorySlot),
    ItemStackResponse(CItemStackResponse),
    UpdateBlock(CUpdateBlock),
    BlockActorData(CBlockActorData),
    AddActor(CAddActor),
    RemoveActor(CRemoveActor),
);
