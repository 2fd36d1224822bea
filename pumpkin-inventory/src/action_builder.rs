use std::collections::HashSet;
use std::time::Instant;

use pumpkin_protocol::stack_request::{StackRequestAction, StackRequestSlotInfo};
use pumpkin_protocol::ContainerName;
use pumpkin_world::item::ItemStack;

use crate::container::{CURSOR_SLOT, INVENTORY_SIZE};
use crate::error::InventoryError;
use crate::registry::{ContainerKey, Containers};
use crate::transaction::ItemStackRequestHandler;

/// A slot as callers address it: `-1` is the cursor, the main inventory comes next and the
/// opened window follows right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalSlot {
    Cursor,
    Inventory(u8),
    Window(u8),
}

impl LogicalSlot {
    pub fn from_index(index: i32) -> Result<Self, InventoryError> {
        let inventory_size = INVENTORY_SIZE as i32;
        match index {
            -1 => Ok(Self::Cursor),
            0.. if index < inventory_size => Ok(Self::Inventory(index as u8)),
            _ => u8::try_from(index - inventory_size)
                .map(Self::Window)
                .map_err(|_| InventoryError::InvalidLogicalSlot(index)),
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Self::Cursor => -1,
            Self::Inventory(slot) => i32::from(slot),
            Self::Window(slot) => INVENTORY_SIZE as i32 + i32::from(slot),
        }
    }
}

/// Where a logical slot ends up on the wire and in the mirrored containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Target {
    pub name: ContainerName,
    pub key: ContainerKey,
    pub slot: u8,
}

/// Assembles the actions of one request against the current mirrored state. Nothing is changed
/// until the actions are handed to the [`ItemStackRequestHandler`].
pub struct ActionBuilder<'a> {
    pub(crate) containers: &'a Containers,
    handler: &'a ItemStackRequestHandler,
    request_id: i32,
    now: Instant,
    /// Slots an earlier action of this request writes to.
    touched: HashSet<(ContainerKey, u8)>,
    pub(crate) actions: Vec<StackRequestAction>,
}

impl<'a> ActionBuilder<'a> {
    pub fn new(
        containers: &'a Containers,
        handler: &'a ItemStackRequestHandler,
        request_id: i32,
        now: Instant,
    ) -> Self {
        Self {
            containers,
            handler,
            request_id,
            now,
            touched: HashSet::new(),
            actions: Vec::new(),
        }
    }

    pub(crate) fn target(&self, slot: LogicalSlot) -> Result<Target, InventoryError> {
        match slot {
            LogicalSlot::Cursor => Ok(Target {
                name: ContainerName::Cursor,
                key: ContainerKey::Ui,
                slot: CURSOR_SLOT,
            }),
            LogicalSlot::Inventory(slot) => Ok(Target {
                name: ContainerName::CombinedHotBarAndInventory,
                key: ContainerKey::Inventory,
                slot,
            }),
            LogicalSlot::Window(index) => {
                let window = self
                    .containers
                    .opened_window()
                    .ok_or(InventoryError::NoWindowOpen)?;
                let name = window
                    .kind
                    .window_container(index)
                    .filter(|_| usize::from(index) < window.container.size())
                    .ok_or(InventoryError::InvalidLogicalSlot(slot.index()))?;
                Ok(Target {
                    name,
                    key: ContainerKey::OpenedWindow,
                    slot: index,
                })
            }
        }
    }

    pub(crate) fn content(&self, target: Target) -> ItemStack {
        self.containers
            .get(target.key)
            .and_then(|container| container.item(usize::from(target.slot)))
            .cloned()
            .unwrap_or_default()
    }

    /// The slot info for `target`. Slots written earlier in this request are referred to by the
    /// request id, as their stack id is not known yet.
    pub(crate) fn slot_info(&self, target: Target) -> StackRequestSlotInfo {
        let reference = if self.touched.contains(&(target.key, target.slot)) {
            -self.request_id
        } else {
            let content = self.content(target);
            self.handler
                .reference_for(target.key, target.slot, &content, self.now)
        };
        StackRequestSlotInfo::new(target.name, target.slot, reference)
    }

    pub(crate) fn touch(&mut self, target: Target) {
        self.touched.insert((target.key, target.slot));
    }

    /// Moves `count` items between two slots. Items leaving the cursor are placed, everything
    /// else is taken.
    pub fn transfer(&mut self, from: i32, to: i32, count: u8) -> Result<&mut Self, InventoryError> {
        let from = LogicalSlot::from_index(from)?;
        let to = LogicalSlot::from_index(to)?;
        self.transfer_slots(from, to, count)
    }

    pub(crate) fn transfer_slots(
        &mut self,
        from: LogicalSlot,
        to: LogicalSlot,
        count: u8,
    ) -> Result<&mut Self, InventoryError> {
        let source_target = self.target(from)?;
        let destination_target = self.target(to)?;
        self.transfer_targets(from == LogicalSlot::Cursor, source_target, destination_target, count);
        Ok(self)
    }

    pub(crate) fn transfer_targets(
        &mut self,
        place: bool,
        source_target: Target,
        destination_target: Target,
        count: u8,
    ) {
        let source = self.slot_info(source_target);
        let destination = self.slot_info(destination_target);
        self.actions.push(if place {
            StackRequestAction::Place {
                count,
                source,
                destination,
            }
        } else {
            StackRequestAction::Take {
                count,
                source,
                destination,
            }
        });
        self.touch(source_target);
        self.touch(destination_target);
    }

    pub fn swap(&mut self, from: i32, to: i32) -> Result<&mut Self, InventoryError> {
        let source_target = self.target(LogicalSlot::from_index(from)?)?;
        let destination_target = self.target(LogicalSlot::from_index(to)?)?;
        let source = self.slot_info(source_target);
        let destination = self.slot_info(destination_target);
        self.actions.push(StackRequestAction::Swap {
            source,
            destination,
        });
        self.touch(source_target);
        self.touch(destination_target);
        Ok(self)
    }

    pub fn drop(&mut self, slot: i32, count: u8, randomly: bool) -> Result<&mut Self, InventoryError> {
        let target = self.target(LogicalSlot::from_index(slot)?)?;
        let source = self.slot_info(target);
        self.actions.push(StackRequestAction::Drop {
            count,
            source,
            randomly,
        });
        self.touch(target);
        Ok(self)
    }

    /// Moves the whole stack at `origin` to the other side: from the inventory into the opened
    /// window when `up`, back into the inventory otherwise. Stacks of the same item are topped up
    /// before empty slots are used. Whatever does not fit stays where it is.
    pub fn store(&mut self, origin: u8, up: bool) -> Result<&mut Self, InventoryError> {
        let (source, destination_key) = if up {
            (LogicalSlot::Inventory(origin), ContainerKey::OpenedWindow)
        } else {
            (LogicalSlot::Window(origin), ContainerKey::Inventory)
        };
        let source_target = self.target(source)?;
        let containers = self.containers;
        let destination = containers
            .get(destination_key)
            .ok_or(InventoryError::NoWindowOpen)?;

        let stack = self.content(source_target);
        let max = stack.max_count();
        let mut remaining = stack.count();
        let mut chosen = HashSet::new();
        let to_logical = |slot: usize| {
            let slot = slot as u8;
            if up {
                LogicalSlot::Window(slot)
            } else {
                LogicalSlot::Inventory(slot)
            }
        };

        while remaining > 0 {
            let skip = |slot: usize| chosen.contains(&slot) || self.target(to_logical(slot)).is_err();
            let Some(slot) = destination
                .first_stackable(&stack, skip)
                .or_else(|| destination.first_empty(skip))
            else {
                break;
            };
            chosen.insert(slot);

            let held = destination.item(slot).map_or(0, ItemStack::count);
            let room = max.saturating_sub(held);
            if room == 0 {
                break;
            }
            let count = room.min(remaining);
            let destination_target = self.target(to_logical(slot))?;
            self.transfer_targets(false, source_target, destination_target, count);
            remaining -= count;
        }
        Ok(self)
    }

    /// Lets the server know a block was broken with the item in `hotbar_slot`.
    pub fn mine_block(
        &mut self,
        hotbar_slot: u8,
        predicted_durability: i32,
    ) -> Result<&mut Self, InventoryError> {
        let target = self.target(LogicalSlot::Inventory(hotbar_slot))?;
        let info = self.slot_info(target);
        self.actions.push(StackRequestAction::MineBlock {
            hotbar_slot: i32::from(hotbar_slot),
            predicted_durability,
            stack_network_id: info.stack_network_id,
        });
        self.touch(target);
        Ok(self)
    }

    pub fn push(&mut self, action: StackRequestAction) -> &mut Self {
        self.actions.push(action);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn finish(self) -> Vec<StackRequestAction> {
        self.actions
    }
}

#[cfg(test)]
mod tests {
    use pumpkin_config::inventory::InventoryConfig;
    use pumpkin_core::math::position::WorldPosition;
    use pumpkin_world::block::get_block;
    use pumpkin_world::Level;

    use super::*;
    use crate::block::default_block_manager;
    use crate::registry::WindowBinding;

    const STONE: i32 = 1;
    const POS: WorldPosition = WorldPosition::new(0, 70, 0);

    fn containers_with_chest() -> Containers {
        let level = Level::new();
        level.set_block(POS, get_block("minecraft:chest").unwrap().id);
        let mut containers = Containers::new();
        containers.open_window(2, 0, WindowBinding::Block(POS), &level, &default_block_manager());
        containers
    }

    fn put(containers: &mut Containers, key: ContainerKey, slot: usize, stack: ItemStack) {
        containers.get_mut(key).unwrap().set_item(slot, stack);
    }

    #[test]
    fn logical_slots() {
        assert_eq!(LogicalSlot::from_index(-1), Ok(LogicalSlot::Cursor));
        assert_eq!(LogicalSlot::from_index(35), Ok(LogicalSlot::Inventory(35)));
        assert_eq!(LogicalSlot::from_index(36), Ok(LogicalSlot::Window(0)));
        assert_eq!(LogicalSlot::from_index(40).unwrap().index(), 40);
        assert_eq!(
            LogicalSlot::from_index(-2),
            Err(InventoryError::InvalidLogicalSlot(-2))
        );
        assert_eq!(
            LogicalSlot::from_index(36 + 256),
            Err(InventoryError::InvalidLogicalSlot(292))
        );
    }

    #[test]
    fn transfer_to_the_opened_window() {
        let mut containers = containers_with_chest();
        put(&mut containers, ContainerKey::Inventory, 4, ItemStack::new(STONE, 20).with_stack_id(9));
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());
        let mut builder = ActionBuilder::new(&containers, &handler, 3, Instant::now());

        builder.transfer(4, 36 + 10, 5).unwrap();
        builder.transfer(4, -1, 5).unwrap();
        builder.transfer(-1, 36 + 10, 5).unwrap();
        let actions = builder.finish();

        assert_eq!(
            actions[0],
            StackRequestAction::Take {
                count: 5,
                source: StackRequestSlotInfo::new(ContainerName::CombinedHotBarAndInventory, 4, 9),
                destination: StackRequestSlotInfo::new(ContainerName::LevelEntity, 10, 0),
            }
        );
        assert_eq!(
            actions[1],
            StackRequestAction::Take {
                count: 5,
                source: StackRequestSlotInfo::new(ContainerName::CombinedHotBarAndInventory, 4, -3),
                destination: StackRequestSlotInfo::new(ContainerName::Cursor, 0, 0),
            }
        );
        assert_eq!(
            actions[2],
            StackRequestAction::Place {
                count: 5,
                source: StackRequestSlotInfo::new(ContainerName::Cursor, 0, -3),
                destination: StackRequestSlotInfo::new(ContainerName::LevelEntity, 10, -3),
            }
        );
    }

    #[test]
    fn window_slots_need_a_window() {
        let containers = Containers::new();
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());
        let mut builder = ActionBuilder::new(&containers, &handler, 1, Instant::now());

        assert_eq!(
            builder.transfer(0, 36, 1).err(),
            Some(InventoryError::NoWindowOpen)
        );
        let containers = containers_with_chest();
        let mut builder = ActionBuilder::new(&containers, &handler, 1, Instant::now());
        assert_eq!(
            builder.transfer(0, 36 + 27, 1).err(),
            Some(InventoryError::InvalidLogicalSlot(63))
        );
        assert!(builder.is_empty());
    }

    #[test]
    fn store_up_fills_stacks_then_empty_slots() {
        let mut containers = containers_with_chest();
        put(&mut containers, ContainerKey::Inventory, 0, ItemStack::new(STONE, 50).with_stack_id(5));
        put(&mut containers, ContainerKey::OpenedWindow, 3, ItemStack::new(STONE, 40).with_stack_id(6));
        put(&mut containers, ContainerKey::OpenedWindow, 0, ItemStack::new(4, 64).with_stack_id(7));
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());
        let mut builder = ActionBuilder::new(&containers, &handler, 2, Instant::now());

        builder.store(0, true).unwrap();
        let actions = builder.finish();

        assert_eq!(
            actions,
            vec![
                StackRequestAction::Take {
                    count: 24,
                    source: StackRequestSlotInfo::new(ContainerName::CombinedHotBarAndInventory, 0, 5),
                    destination: StackRequestSlotInfo::new(ContainerName::LevelEntity, 3, 6),
                },
                StackRequestAction::Take {
                    count: 26,
                    source: StackRequestSlotInfo::new(ContainerName::CombinedHotBarAndInventory, 0, -2),
                    destination: StackRequestSlotInfo::new(ContainerName::LevelEntity, 1, 0),
                },
            ]
        );
    }

    #[test]
    fn store_down_stops_when_full() {
        let mut containers = containers_with_chest();
        for slot in 0..INVENTORY_SIZE {
            put(&mut containers, ContainerKey::Inventory, slot, ItemStack::new(4, 64).with_stack_id(100 + slot as i32));
        }
        put(&mut containers, ContainerKey::Inventory, 7, ItemStack::new(STONE, 60).with_stack_id(50));
        put(&mut containers, ContainerKey::OpenedWindow, 2, ItemStack::new(STONE, 10).with_stack_id(51));
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());
        let mut builder = ActionBuilder::new(&containers, &handler, 2, Instant::now());

        builder.store(2, false).unwrap();
        let actions = builder.finish();

        assert_eq!(
            actions,
            vec![StackRequestAction::Take {
                count: 4,
                source: StackRequestSlotInfo::new(ContainerName::LevelEntity, 2, 51),
                destination: StackRequestSlotInfo::new(ContainerName::CombinedHotBarAndInventory, 7, 50),
            }]
        );
    }

    #[test]
    fn mine_block_and_drop() {
        let mut containers = Containers::new();
        put(&mut containers, ContainerKey::Inventory, 1, ItemStack::new(STONE, 3).with_stack_id(8));
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());
        let mut builder = ActionBuilder::new(&containers, &handler, 4, Instant::now());

        builder.mine_block(1, 0).unwrap().drop(1, 3, false).unwrap();
        let actions = builder.finish();
        assert_eq!(
            actions,
            vec![
                StackRequestAction::MineBlock {
                    hotbar_slot: 1,
                    predicted_durability: 0,
                    stack_network_id: 8,
                },
                StackRequestAction::Drop {
                    count: 3,
                    source: StackRequestSlotInfo::new(ContainerName::CombinedHotBarAndInventory, 1, -4),
                    randomly: false,
                },
            ]
        );
    }
}
