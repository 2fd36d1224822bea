/// A packet sent by the server.
pub trait ClientPacketID {
    const PACKET_ID: u32;
}

/// A packet sent by the client.
pub trait ServerPacketID {
    const PACKET_ID: u32;
}
