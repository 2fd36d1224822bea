use pumpkin_inventory::PacketSender;
use pumpkin_protocol::server::ServerboundPacket;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Hands outgoing packets to the transport task through an unbounded channel.
#[derive(Clone)]
pub struct ChannelSender {
    sender: UnboundedSender<ServerboundPacket>,
}

impl ChannelSender {
    #[must_use]
    pub fn new() -> (Self, UnboundedReceiver<ServerboundPacket>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl PacketSender for ChannelSender {
    fn send_packet(&self, packet: ServerboundPacket) {
        let id = packet.packet_id();
        if self.sender.send(packet).is_err() {
            log::warn!("Dropping packet with id {id:#x}, the connection is closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use pumpkin_protocol::server::play::SContainerClose;

    use super::*;

    #[test]
    fn packets_reach_the_transport() {
        let (sender, mut receiver) = ChannelSender::new();
        sender.send_packet(SContainerClose::new(2).into());
        assert_eq!(
            receiver.try_recv().unwrap(),
            ServerboundPacket::ContainerClose(SContainerClose::new(2))
        );

        drop(receiver);
        assert!(sender.is_closed());
        // must not panic
        sender.send_packet(SContainerClose::new(2).into());
    }
}
