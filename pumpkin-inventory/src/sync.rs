//! Authoritative updates from the server. They overwrite the mirrored containers directly and are
//! never rolled back.

use pumpkin_protocol::client::play::{
    CContainerClose, CContainerOpen, CInventoryContent, CInventorySlot, CItemStackResponse,
};
use pumpkin_protocol::{
    NetworkItemStack, WINDOW_ID_ARMOUR, WINDOW_ID_INVENTORY, WINDOW_ID_OFF_HAND, WINDOW_ID_UI,
};
use pumpkin_world::item::ItemStack;

use crate::block::ContainerKind;
use crate::registry::{ContainerKey, Containers, WindowBinding};
use crate::screen::ScreenManager;

/// The containers a snapshot for `window_id` is written to. Snapshots for a window that is not
/// (or no longer) open go nowhere.
fn snapshot_targets(containers: &Containers, window_id: u8) -> Vec<ContainerKey> {
    match window_id {
        WINDOW_ID_INVENTORY => vec![ContainerKey::Inventory],
        WINDOW_ID_OFF_HAND => vec![ContainerKey::OffHand],
        WINDOW_ID_ARMOUR => vec![ContainerKey::Armour],
        WINDOW_ID_UI => vec![ContainerKey::Ui],
        _ => match containers.opened_window() {
            Some(window) if window.window_id == window_id => {
                if window.kind == ContainerKind::EnderChest {
                    vec![ContainerKey::OpenedWindow, ContainerKey::EnderChest]
                } else {
                    vec![ContainerKey::OpenedWindow]
                }
            }
            _ => Vec::new(),
        },
    }
}

impl ScreenManager {
    pub fn handle_container_open(&self, packet: &CContainerOpen) {
        let binding = if packet.entity_unique_id != 0 {
            WindowBinding::Entity(packet.entity_unique_id)
        } else {
            WindowBinding::Block(packet.position)
        };

        let mut state = self.state.lock();
        state.handler.forget_container(ContainerKey::OpenedWindow);
        if let Some(window) = state.containers.open_window(
            packet.window_id,
            packet.container_type,
            binding,
            self.world.as_ref(),
            &self.blocks,
        ) {
            log::debug!(
                "Opened window {} ({:?}, {} slots)",
                window.window_id,
                window.kind,
                window.container.size()
            );
        }
    }

    pub fn handle_container_close(&self, packet: &CContainerClose) {
        let mut state = self.state.lock();
        if state.containers.close_window().is_some() {
            log::debug!("Server closed window {}", packet.window_id);
        }
        state.handler.forget_container(ContainerKey::OpenedWindow);
    }

    pub fn handle_inventory_content(&self, packet: &CInventoryContent) {
        let mut state = self.state.lock();
        let targets = snapshot_targets(&state.containers, packet.window_id);
        if targets.is_empty() {
            log::debug!("Ignoring contents of window {}, it is not open", packet.window_id);
            return;
        }
        for key in targets {
            let Some(container) = state.containers.get_mut(key) else {
                continue;
            };
            for (slot, stack) in packet.content.iter().enumerate() {
                container.set_item(slot, ItemStack::from(stack));
            }
        }
    }

    pub fn handle_inventory_slot(&self, packet: &CInventorySlot) {
        let mut state = self.state.lock();
        let targets = snapshot_targets(&state.containers, packet.window_id);
        if targets.is_empty() {
            log::debug!("Ignoring slot of window {}, it is not open", packet.window_id);
            return;
        }
        let Ok(slot) = usize::try_from(packet.slot) else {
            return;
        };
        let stack = ItemStack::from(&packet.new_item);
        for key in targets {
            if let Some(container) = state.containers.get_mut(key) {
                container.set_item(slot, stack.clone());
            }
        }
    }

    pub fn handle_item_stack_response(&self, packet: &CItemStackResponse) {
        let mut state = self.state.lock();
        let state = &mut *state;
        for response in &packet.responses {
            state.handler.handle_response(
                response,
                &mut state.containers,
                self.world.as_ref(),
                &self.blocks,
            );
        }
    }

    /// The slot contents as the server would encode them, for debugging desyncs.
    pub fn network_contents(&self, key: ContainerKey) -> Vec<NetworkItemStack> {
        self.container(key)
            .map(|container| container.slots().iter().map(NetworkItemStack::from).collect())
            .unwrap_or_default()
    }
}
