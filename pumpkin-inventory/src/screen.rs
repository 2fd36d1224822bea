use std::sync::atomic::{AtomicI32, AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use pumpkin_config::inventory::InventoryConfig;
use pumpkin_core::math::position::WorldPosition;
use pumpkin_protocol::server::play::{
    SContainerClose, SInventoryTransaction, SItemStackRequest, SMobEquipment,
};
use pumpkin_protocol::server::ServerboundPacket;
use pumpkin_protocol::stack_request::{ItemStackRequest, StackRequestAction};
use pumpkin_protocol::NetworkItemStack;
use pumpkin_world::item::ItemStack;
use pumpkin_world::WorldView;

use crate::action_builder::ActionBuilder;
use crate::block::ContainerBlockManager;
use crate::container::{Container, HOTBAR_SIZE};
use crate::error::InventoryError;
use crate::registry::{ContainerKey, Containers, OpenedWindow};
use crate::transaction::{AllowDrops, DropHandler, HandlerContext, ItemStackRequestHandler};

/// Where finished packets go. Sending must not block.
pub trait PacketSender: Send + Sync {
    fn send_packet(&self, packet: ServerboundPacket);
}

pub(crate) struct ScreenState {
    pub(crate) containers: Containers,
    pub(crate) handler: ItemStackRequestHandler,
}

/// The player's view of every container, and the only way to change them.
///
/// Requests are built, applied and sent under one lock, which snapshots from the server take as
/// well. A request is therefore always built against the state the previous one left behind.
pub struct ScreenManager {
    pub(crate) state: Mutex<ScreenState>,
    request_id: AtomicI32,
    runtime_id: AtomicU64,
    held_slot: AtomicU8,
    pub(crate) world: Arc<dyn WorldView>,
    pub(crate) blocks: Arc<ContainerBlockManager>,
    sender: Arc<dyn PacketSender>,
    drop_handler: Arc<dyn DropHandler>,
}

impl ScreenManager {
    pub fn new(
        config: &InventoryConfig,
        world: Arc<dyn WorldView>,
        blocks: Arc<ContainerBlockManager>,
        sender: Arc<dyn PacketSender>,
    ) -> Self {
        Self {
            state: Mutex::new(ScreenState {
                containers: Containers::new(),
                handler: ItemStackRequestHandler::new(config),
            }),
            request_id: AtomicI32::new(1),
            runtime_id: AtomicU64::new(0),
            held_slot: AtomicU8::new(0),
            world,
            blocks,
            sender,
            drop_handler: Arc::new(AllowDrops),
        }
    }

    #[must_use]
    pub fn with_drop_handler(mut self, drop_handler: Arc<dyn DropHandler>) -> Self {
        self.drop_handler = drop_handler;
        self
    }

    /// The runtime id of the player entity, sent along with equipment changes.
    pub fn set_runtime_id(&self, runtime_id: u64) {
        self.runtime_id.store(runtime_id, Ordering::Relaxed);
    }

    /// Moves `count` items between two logical slots, see [`crate::LogicalSlot`].
    pub fn send_transfer_action(&self, from: i32, to: i32, count: u8) -> Result<i32, InventoryError> {
        self.submit(|builder| builder.transfer(from, to, count).map(drop))
    }

    pub fn send_swap_action(&self, from: i32, to: i32) -> Result<i32, InventoryError> {
        self.submit(|builder| builder.swap(from, to).map(drop))
    }

    pub fn send_drop_action(&self, slot: i32, count: u8, randomly: bool) -> Result<i32, InventoryError> {
        self.submit(|builder| builder.drop(slot, count, randomly).map(drop))
    }

    pub fn send_auto_craft_action(&self, item_name: &str, times: u8) -> Result<i32, InventoryError> {
        self.submit(|builder| builder.auto_craft(item_name, times).map(drop))
    }

    /// Moves the stack at `origin` between the inventory and the opened window, see
    /// [`ActionBuilder::store`].
    pub fn send_store_action(&self, origin: u8, up: bool) -> Result<i32, InventoryError> {
        self.submit(|builder| builder.store(origin, up).map(drop))
    }

    pub fn send_mine_block_action(&self, predicted_durability: i32) -> Result<i32, InventoryError> {
        let held_slot = self.held_slot();
        self.submit(|builder| builder.mine_block(held_slot, predicted_durability).map(drop))
    }

    /// Sends hand-made actions. They go through the same checks as built ones.
    pub fn send_request(&self, actions: Vec<StackRequestAction>) -> Result<i32, InventoryError> {
        self.submit(|builder| {
            for action in actions {
                builder.push(action);
            }
            Ok(())
        })
    }

    fn submit<F>(&self, build: F) -> Result<i32, InventoryError>
    where
        F: FnOnce(&mut ActionBuilder<'_>) -> Result<(), InventoryError>,
    {
        let mut state = self.state.lock();
        let state = &mut *state;
        let now = Instant::now();
        let request_id = self.request_id.fetch_add(1, Ordering::Relaxed);

        let actions = {
            let mut builder =
                ActionBuilder::new(&state.containers, &state.handler, request_id, now);
            build(&mut builder)?;
            builder.finish()
        };
        if actions.is_empty() {
            return Err(InventoryError::EmptyRequest);
        }

        let request = ItemStackRequest {
            request_id,
            actions,
            filter_strings: Vec::new(),
        };
        let mut ctx = HandlerContext {
            containers: &mut state.containers,
            world: self.world.as_ref(),
            blocks: &self.blocks,
            drop_handler: self.drop_handler.as_ref(),
        };
        if let Err(err) = state.handler.handle(&request, &mut ctx, now) {
            log::warn!("Dropping item stack request {request_id}: {err}");
            return Err(err);
        }

        log::debug!(
            "Sending item stack request {request_id} with {} actions",
            request.actions.len()
        );
        self.sender
            .send_packet(SItemStackRequest::new(vec![request]).into());
        Ok(request_id)
    }

    /// Closes the opened window, telling the server about it. Returns whether a window was open.
    pub fn close_current_window(&self) -> bool {
        let mut state = self.state.lock();
        let Some(window) = state.containers.close_window() else {
            return false;
        };
        state.handler.forget_container(ContainerKey::OpenedWindow);
        self.sender
            .send_packet(SContainerClose::new(window.window_id).into());
        true
    }

    /// Selects the hotbar slot the player holds. Only the nine hotbar slots are accepted.
    pub fn set_held_slot(&self, slot: u8) -> bool {
        if usize::from(slot) >= HOTBAR_SIZE {
            return false;
        }
        let item = self.item(ContainerKey::Inventory, slot).unwrap_or_default();
        self.held_slot.store(slot, Ordering::Relaxed);
        self.sender.send_packet(
            SMobEquipment::new(
                self.runtime_id.load(Ordering::Relaxed),
                slot,
                NetworkItemStack::from(&item),
            )
            .into(),
        );
        true
    }

    pub fn held_slot(&self) -> u8 {
        self.held_slot.load(Ordering::Relaxed)
    }

    pub fn held_item(&self) -> ItemStack {
        self.item(ContainerKey::Inventory, self.held_slot())
            .unwrap_or_default()
    }

    /// Uses the held item on the block at `position`, which opens it if it is a container.
    pub fn click_block(&self, position: WorldPosition) {
        let held_item = NetworkItemStack::from(&self.held_item());
        self.sender.send_packet(
            SInventoryTransaction::click_block(position, self.held_slot(), held_item).into(),
        );
    }

    pub fn item(&self, key: ContainerKey, slot: u8) -> Option<ItemStack> {
        self.state
            .lock()
            .containers
            .get(key)
            .and_then(|container| container.item(usize::from(slot)))
            .cloned()
    }

    pub fn container(&self, key: ContainerKey) -> Option<Container> {
        self.state.lock().containers.get(key).cloned()
    }

    pub fn opened_window(&self) -> Option<OpenedWindow> {
        self.state.lock().containers.opened_window().cloned()
    }

    pub fn opened_window_id(&self) -> Option<u8> {
        self.state
            .lock()
            .containers
            .opened_window()
            .map(|window| window.window_id)
    }

    pub fn pending_changes(&self) -> usize {
        self.state.lock().handler.pending_changes()
    }
}
