use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use pumpkin_config::inventory::InventoryConfig;
use pumpkin_core::math::position::WorldPosition;
use pumpkin_inventory::{default_block_manager, PacketSender, ScreenManager};
use pumpkin_protocol::client::ClientboundPacket;
use pumpkin_world::Level;

use crate::error::BotError;
use crate::listener::Listeners;

/// One session with a server: the mirrored world, the player's containers and whatever reacts to
/// incoming packets.
pub struct Client {
    pub level: Arc<Level>,
    pub screen: ScreenManager,
    config: InventoryConfig,
    listeners: RwLock<Listeners>,
    /// Decoded packets from the server, waiting to be processed in arrival order.
    packet_queue: Mutex<VecDeque<ClientboundPacket>>,
}

impl Client {
    /// A client using the inventory settings from `features.toml`.
    #[must_use]
    pub fn new(sender: Arc<dyn PacketSender>) -> Self {
        Self::with_config(pumpkin_config::ADVANCED_CONFIG.inventory.clone(), sender)
    }

    #[must_use]
    pub fn with_config(config: InventoryConfig, sender: Arc<dyn PacketSender>) -> Self {
        let level = Arc::new(Level::new());
        let screen = ScreenManager::new(&config, level.clone(), default_block_manager(), sender);
        Self {
            level,
            screen,
            config,
            listeners: RwLock::new(Listeners::default()),
            packet_queue: Mutex::new(VecDeque::new()),
        }
    }

    /// Registers a callback for one packet id, or for every packet when `packet_id` is `None`.
    /// Callbacks must not register further callbacks.
    pub fn add_listener<F>(&self, packet_id: Option<u32>, priority: i32, handler: F)
    where
        F: Fn(&Client, &ClientboundPacket) -> Result<(), BotError> + Send + Sync + 'static,
    {
        self.listeners
            .write()
            .add(packet_id, priority, Box::new(handler));
    }

    /// Adds an incoming packet to the queue
    pub fn add_packet(&self, packet: ClientboundPacket) {
        self.packet_queue.lock().push_back(packet);
    }

    /// Processes every queued packet. Errors are logged, only a fatal one stops processing.
    pub fn process_packets(&self) -> Result<(), BotError> {
        loop {
            // released before handling, listeners may queue packets
            let Some(packet) = self.packet_queue.lock().pop_front() else {
                return Ok(());
            };
            if let Err(err) = self.handle_packet(&packet) {
                err.log();
                if err.is_fatal() {
                    return Err(err);
                }
            }
        }
    }

    /// Updates the mirrored state, then runs the registered listeners.
    pub fn handle_packet(&self, packet: &ClientboundPacket) -> Result<(), BotError> {
        match packet {
            ClientboundPacket::ContainerOpen(packet) => self.screen.handle_container_open(packet),
            ClientboundPacket::ContainerClose(packet) => {
                self.screen.handle_container_close(packet);
            }
            ClientboundPacket::InventoryContent(packet) => {
                self.screen.handle_inventory_content(packet);
            }
            ClientboundPacket::InventorySlot(packet) => self.screen.handle_inventory_slot(packet),
            ClientboundPacket::ItemStackResponse(packet) => {
                self.screen.handle_item_stack_response(packet);
            }
            ClientboundPacket::UpdateBlock(packet) => {
                // layer 1 only holds liquids in waterlogged blocks
                if packet.layer == 0 {
                    self.level
                        .set_block(packet.position, packet.new_block_runtime_id);
                }
            }
            ClientboundPacket::BlockActorData(packet) => self
                .level
                .set_block_entity(packet.position, packet.nbt_data.clone()),
            ClientboundPacket::AddActor(packet) => self
                .level
                .add_entity(packet.entity_unique_id, packet.entity_type.clone()),
            ClientboundPacket::RemoveActor(packet) => {
                self.level.remove_entity(packet.entity_unique_id);
            }
        }
        self.listeners.read().dispatch(self, packet)
    }

    /// Interacts with the block at `position` until the server opens a window for it, and returns
    /// the window id. Any window open before is closed first.
    ///
    /// Incoming packets must be processed by another task while this waits.
    pub async fn open_container(&self, position: WorldPosition) -> Result<u8, BotError> {
        self.screen.close_current_window();
        self.screen.click_block(position);

        let mut interval = tokio::time::interval(self.config.open_container_retry_interval());
        // completes immediately
        interval.tick().await;
        for _ in 0..self.config.open_container_retries {
            interval.tick().await;
            if let Some(window_id) = self.screen.opened_window_id() {
                log::debug!("Container at {position} opened as window {window_id}");
                return Ok(window_id);
            }
            self.screen.click_block(position);
        }
        Err(BotError::OpenContainerTimeout(position))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use pumpkin_inventory::{ContainerKey, ContainerKind};
    use pumpkin_protocol::client::play::{
        CAddActor, CBlockActorData, CContainerOpen, CInventorySlot, CRemoveActor, CUpdateBlock,
    };
    use pumpkin_protocol::server::ServerboundPacket;
    use pumpkin_protocol::{ClientPacketID, NetworkItemStack};
    use pumpkin_world::block::get_block;
    use pumpkin_world::WorldView;

    use super::*;

    const POS: WorldPosition = WorldPosition::new(4, 70, 9);

    #[derive(Default)]
    struct RecordingSender {
        packets: Mutex<Vec<ServerboundPacket>>,
    }

    impl PacketSender for RecordingSender {
        fn send_packet(&self, packet: ServerboundPacket) {
            self.packets.lock().push(packet);
        }
    }

    impl RecordingSender {
        fn clicks(&self) -> usize {
            self.packets
                .lock()
                .iter()
                .filter(|packet| matches!(packet, ServerboundPacket::InventoryTransaction(_)))
                .count()
        }
    }

    fn client() -> (Client, Arc<RecordingSender>) {
        let sender = Arc::new(RecordingSender::default());
        let config = InventoryConfig::default();
        (Client::with_config(config, sender.clone()), sender)
    }

    fn update_block(name: &str) -> ClientboundPacket {
        ClientboundPacket::UpdateBlock(CUpdateBlock {
            position: POS,
            new_block_runtime_id: get_block(name).unwrap().id,
            flags: 3,
            layer: 0,
        })
    }

    fn container_open(window_id: u8) -> ClientboundPacket {
        ClientboundPacket::ContainerOpen(CContainerOpen {
            window_id,
            container_type: 0,
            position: POS,
            entity_unique_id: 0,
        })
    }

    #[test]
    fn world_updates_reach_the_window() {
        let (client, _) = client();
        let mut pair = HashMap::new();
        pair.insert("pairx".to_string(), fastnbt::Value::Int(5));
        client.add_packet(update_block("minecraft:chest"));
        client.add_packet(ClientboundPacket::BlockActorData(CBlockActorData {
            position: POS,
            nbt_data: pair,
        }));
        client.add_packet(container_open(2));
        client.process_packets().unwrap();

        let window = client.screen.opened_window().unwrap();
        assert_eq!(window.kind, ContainerKind::Chest);
        assert_eq!(window.container.size(), 54);
    }

    #[test]
    fn waterlogging_layer_is_ignored() {
        let (client, _) = client();
        client.handle_packet(&update_block("minecraft:barrel")).unwrap();
        client
            .handle_packet(&ClientboundPacket::UpdateBlock(CUpdateBlock {
                position: POS,
                new_block_runtime_id: get_block("minecraft:water").unwrap().id,
                flags: 3,
                layer: 1,
            }))
            .unwrap();
        assert_eq!(client.level.block_at(POS).unwrap().name, "minecraft:barrel");
    }

    #[test]
    fn entities_are_tracked() {
        let (client, _) = client();
        client
            .handle_packet(&ClientboundPacket::AddActor(CAddActor {
                entity_unique_id: 12,
                entity_runtime_id: 30,
                entity_type: "minecraft:villager_v2".to_string(),
            }))
            .unwrap();
        assert_eq!(
            client.level.entity_type(12).as_deref(),
            Some("minecraft:villager_v2")
        );
        client
            .handle_packet(&ClientboundPacket::RemoveActor(CRemoveActor {
                entity_unique_id: 12,
            }))
            .unwrap();
        assert!(client.level.entity_type(12).is_none());
    }

    #[test]
    fn listeners_run_by_priority() {
        let (client, _) = client();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let record = |name: &'static str| {
            let calls = calls.clone();
            move |_: &Client, _: &ClientboundPacket| {
                calls.lock().push(name);
                Ok::<(), BotError>(())
            }
        };
        client.add_listener(Some(CContainerOpen::PACKET_ID), 100, record("open"));
        client.add_listener(None, 1, record("low"));
        client.add_listener(None, 10, record("high"));
        client.add_listener(Some(CUpdateBlock::PACKET_ID), 5, record("block"));

        client.handle_packet(&container_open(1)).unwrap();
        assert_eq!(*calls.lock(), vec!["high", "low", "open"]);
    }

    #[test]
    fn failing_listener_stops_dispatch() {
        let (client, _) = client();
        let calls = Arc::new(Mutex::new(0));
        let counted = calls.clone();
        client.add_listener(None, 10, |_, _| Err(BotError::Listener("broken".into())));
        client.add_listener(None, 0, move |_, _| {
            *counted.lock() += 1;
            Ok(())
        });

        assert!(matches!(
            client.handle_packet(&container_open(1)),
            Err(BotError::Listener(_))
        ));
        assert_eq!(*calls.lock(), 0);

        // non-fatal errors do not stop the queue
        client.add_packet(container_open(1));
        client.add_packet(update_block("minecraft:chest"));
        client.process_packets().unwrap();
        assert_eq!(client.level.block_at(POS).unwrap().name, "minecraft:chest");
    }

    #[test]
    fn fatal_errors_stop_processing() {
        let (client, _) = client();
        client.add_listener(Some(CContainerOpen::PACKET_ID), 0, |_, _| {
            Err(BotError::ConnectionClosed)
        });
        client.add_packet(container_open(1));
        client.add_packet(update_block("minecraft:chest"));

        assert!(matches!(
            client.process_packets(),
            Err(BotError::ConnectionClosed)
        ));
        assert!(client.level.block_at(POS).unwrap().is_air());
    }

    #[test]
    fn snapshots_pass_through() {
        let (client, _) = client();
        client
            .handle_packet(&ClientboundPacket::InventorySlot(CInventorySlot {
                window_id: 0,
                slot: 4,
                new_item: NetworkItemStack {
                    network_id: 5,
                    count: 12,
                    stack_network_id: 77,
                    ..Default::default()
                },
            }))
            .unwrap();
        let stack = client.screen.item(ContainerKey::Inventory, 4).unwrap();
        assert_eq!((stack.count(), stack.stack_id), (12, 77));
    }

    #[tokio::test(start_paused = true)]
    async fn open_container_waits_for_the_window() {
        let (client, sender) = client();
        client.handle_packet(&update_block("minecraft:barrel")).unwrap();
        let client = Arc::new(client);

        let opener = client.clone();
        let task = tokio::spawn(async move { opener.open_container(POS).await });
        tokio::time::sleep(Duration::from_millis(1200)).await;
        client.handle_packet(&container_open(5)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 5);
        assert!(sender.clicks() >= 2);
        assert_eq!(
            client.screen.opened_window().unwrap().kind,
            ContainerKind::Barrel
        );
    }

    #[tokio::test(start_paused = true)]
    async fn open_container_gives_up() {
        let (client, sender) = client();
        let result = client.open_container(POS).await;

        assert!(matches!(result, Err(BotError::OpenContainerTimeout(pos)) if pos == POS));
        // the first interaction plus one per retry
        assert_eq!(sender.clicks(), 21);
    }

    #[tokio::test(start_paused = true)]
    async fn open_container_closes_the_old_window() {
        let (client, sender) = client();
        client.handle_packet(&update_block("minecraft:barrel")).unwrap();
        client.handle_packet(&container_open(3)).unwrap();
        let client = Arc::new(client);

        let opener = client.clone();
        let task = tokio::spawn(async move { opener.open_container(POS).await });
        tokio::time::sleep(Duration::from_millis(700)).await;
        client.handle_packet(&container_open(4)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 4);
        assert!(matches!(
            sender.packets.lock().first(),
            Some(ServerboundPacket::ContainerClose(packet)) if packet.window_id == 3
        ));
    }
}
