use std::collections::HashMap;
use std::time::{Duration, Instant};

use pumpkin_config::inventory::InventoryConfig;
use pumpkin_protocol::stack_request::{
    ItemStackRequest, ItemStackResponse, StackRequestAction, StackRequestSlotInfo,
};
use pumpkin_protocol::ContainerName;
use pumpkin_registry::get_recipe_by_network_id;
use pumpkin_world::item::{get_item, get_item_by_id, ItemStack};
use pumpkin_world::WorldView;

use crate::block::ContainerBlockManager;
use crate::container::CREATED_OUTPUT_SLOT;
use crate::error::InventoryError;
use crate::registry::{ContainerKey, Containers};

/// Whether a drop may go ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    Continue,
    Cancel,
}

/// Gets asked before items are thrown out of a container.
pub trait DropHandler: Send + Sync {
    fn handle_drop(&self, container: ContainerKey, slot: u8, stack: &ItemStack) -> DropResult;
}

/// Lets every drop happen.
pub struct AllowDrops;

impl DropHandler for AllowDrops {
    fn handle_drop(&self, _container: ContainerKey, _slot: u8, _stack: &ItemStack) -> DropResult {
        DropResult::Continue
    }
}

/// Everything a batch needs besides the handler's own bookkeeping.
pub struct HandlerContext<'a> {
    pub containers: &'a mut Containers,
    pub world: &'a dyn WorldView,
    pub blocks: &'a ContainerBlockManager,
    pub drop_handler: &'a dyn DropHandler,
}

/// A slot after its wire container id was mapped to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResolvedSlot {
    container_id: u8,
    key: ContainerKey,
    slot: u8,
}

impl ResolvedSlot {
    fn created_output() -> Self {
        Self {
            container_id: ContainerName::CreatedOutput.id(),
            key: ContainerKey::Ui,
            slot: CREATED_OUTPUT_SLOT,
        }
    }
}

/// A slot written by a request the server has not answered yet.
#[derive(Debug, Clone, Copy)]
struct PendingChange {
    /// The transient stack id the slot got.
    stack_id: i32,
    timestamp: Instant,
}

type PendingKey = (i32, ContainerKey, u8);

/// Applies item stack requests to the mirrored containers before they are sent, so that following
/// requests can be built against the state the server will have once it accepted them.
///
/// A request is applied action by action. If any action fails, every slot the request touched is
/// put back the way it was and nothing is sent.
pub struct ItemStackRequestHandler {
    current_request: i32,
    current: Instant,

    /// Slot contents before the current request touched them, in write order.
    changes: Vec<(ResolvedSlot, ItemStack)>,
    pending: HashMap<PendingKey, PendingChange>,
    pending_results: Vec<ItemStack>,

    ignore_destroy: bool,
    next_transient_id: i32,

    expiry: Duration,
    max_pending: usize,
}

impl ItemStackRequestHandler {
    pub fn new(config: &InventoryConfig) -> Self {
        Self {
            current_request: 0,
            current: Instant::now(),
            changes: Vec::new(),
            pending: HashMap::new(),
            pending_results: Vec::new(),
            ignore_destroy: false,
            next_transient_id: -1,
            expiry: config.pending_change_expiry(),
            max_pending: config.max_pending_changes,
        }
    }

    /// Applies `request`. On failure all of its changes are undone and the error names the
    /// action that failed.
    pub fn handle(
        &mut self,
        request: &ItemStackRequest,
        ctx: &mut HandlerContext<'_>,
        now: Instant,
    ) -> Result<(), InventoryError> {
        self.current = now;
        self.current_request = request.request_id;

        let mut result = Ok(());
        for action in &request.actions {
            if let Err(err) = self.handle_action(action, ctx) {
                result = Err(InventoryError::Rejected {
                    request_id: request.request_id,
                    action: action.kind(),
                    source: Box::new(err),
                });
                break;
            }
        }

        if result.is_ok() {
            self.changes.clear();
            self.pending_results.clear();
        } else {
            self.reject(ctx);
        }
        self.ignore_destroy = false;
        result
    }

    fn handle_action(
        &mut self,
        action: &StackRequestAction,
        ctx: &mut HandlerContext<'_>,
    ) -> Result<(), InventoryError> {
        match action {
            StackRequestAction::Take {
                count,
                source,
                destination,
            }
            | StackRequestAction::Place {
                count,
                source,
                destination,
            } => self.handle_transfer(ctx, source, destination, *count),
            StackRequestAction::Swap {
                source,
                destination,
            } => self.handle_swap(ctx, source, destination),
            StackRequestAction::Destroy { count, source } => {
                self.handle_destroy(ctx, source, *count)
            }
            StackRequestAction::Drop { count, source, .. } => self.handle_drop(ctx, source, *count),
            StackRequestAction::MineBlock {
                hotbar_slot,
                stack_network_id,
                ..
            } => self.handle_mine_block(ctx, *hotbar_slot, *stack_network_id),
            StackRequestAction::Create { results_slot } => self.handle_create(ctx, *results_slot),
            StackRequestAction::AutoCraftRecipe {
                recipe_network_id,
                times_crafted,
            } => self.handle_auto_craft(ctx, *recipe_network_id, *times_crafted),
            StackRequestAction::CraftCreative {
                creative_item_network_id,
            } => self.handle_creative_craft(ctx, *creative_item_network_id),
            // Only informative for the server.
            StackRequestAction::Consume { .. }
            | StackRequestAction::CraftResultsDeprecated { .. }
            | StackRequestAction::Unknown(_) => Ok(()),
        }
    }

    fn handle_transfer(
        &mut self,
        ctx: &mut HandlerContext<'_>,
        source: &StackRequestSlotInfo,
        destination: &StackRequestSlotInfo,
        count: u8,
    ) -> Result<(), InventoryError> {
        let (from, item) = self.verify_slot(ctx, source)?;
        let (to, dest) = self.verify_slot(ctx, destination)?;

        if !item.is_empty() && !dest.is_empty() && !item.comparable(&dest) {
            return Err(InventoryError::IncomparableStacks);
        }
        if item.count() < count {
            return Err(InventoryError::InsufficientCount {
                requested: count,
                available: item.count(),
            });
        }
        if !dest.is_empty() && u16::from(dest.count()) + u16::from(count) > u16::from(dest.max_count())
        {
            return Err(InventoryError::StackOverflow {
                current: dest.count(),
                added: count,
                max: dest.max_count(),
            });
        }
        let dest = if dest.is_empty() {
            item.grow(-i32::MAX)
        } else {
            dest
        };

        self.set_slot(ctx, from, item.grow(-i32::from(count)))?;
        self.set_slot(ctx, to, dest.grow(i32::from(count)))
    }

    fn handle_swap(
        &mut self,
        ctx: &mut HandlerContext<'_>,
        source: &StackRequestSlotInfo,
        destination: &StackRequestSlotInfo,
    ) -> Result<(), InventoryError> {
        let (from, item) = self.verify_slot(ctx, source)?;
        let (to, dest) = self.verify_slot(ctx, destination)?;

        self.set_slot(ctx, from, dest)?;
        self.set_slot(ctx, to, item)
    }

    fn handle_destroy(
        &mut self,
        ctx: &mut HandlerContext<'_>,
        source: &StackRequestSlotInfo,
        count: u8,
    ) -> Result<(), InventoryError> {
        if self.ignore_destroy {
            self.ignore_destroy = false;
            return Ok(());
        }
        let (slot, item) = self.verify_slot(ctx, source)?;
        if item.count() < count {
            return Err(InventoryError::InsufficientCount {
                requested: count,
                available: item.count(),
            });
        }
        self.set_slot(ctx, slot, item.grow(-i32::from(count)))
    }

    fn handle_drop(
        &mut self,
        ctx: &mut HandlerContext<'_>,
        source: &StackRequestSlotInfo,
        count: u8,
    ) -> Result<(), InventoryError> {
        let (slot, item) = self.verify_slot(ctx, source)?;
        if item.count() < count {
            return Err(InventoryError::InsufficientCount {
                requested: count,
                available: item.count(),
            });
        }

        let dropped = item.grow(i32::from(count) - i32::from(item.count()));
        if ctx.drop_handler.handle_drop(slot.key, slot.slot, &dropped) == DropResult::Cancel {
            return Err(InventoryError::DropCancelled);
        }
        self.set_slot(ctx, slot, item.grow(-i32::from(dropped.count())))
    }

    /// Breaking a block changes the durability of the held tool server side. The slot gets
    /// written again so its stack id follows.
    fn handle_mine_block(
        &mut self,
        ctx: &mut HandlerContext<'_>,
        hotbar_slot: i32,
        stack_network_id: i32,
    ) -> Result<(), InventoryError> {
        let slot = u8::try_from(hotbar_slot).map_err(|_| InventoryError::InvalidSlot {
            container_id: ContainerName::Inventory.id(),
            slot: u8::MAX,
        })?;
        let info = StackRequestSlotInfo::new(ContainerName::Inventory, slot, stack_network_id);
        let (slot, item) = self.verify_slot(ctx, &info)?;
        self.set_slot(ctx, slot, item)
    }

    fn handle_create(
        &mut self,
        ctx: &mut HandlerContext<'_>,
        results_slot: u8,
    ) -> Result<(), InventoryError> {
        let result = self
            .pending_results
            .get_mut(usize::from(results_slot))
            .ok_or(InventoryError::InvalidCreateSlot(results_slot))?;
        if result.is_empty() {
            return Err(InventoryError::DuplicateCreation(results_slot));
        }
        let result = std::mem::take(result);
        self.set_slot(ctx, ResolvedSlot::created_output(), result)
    }

    fn handle_auto_craft(
        &mut self,
        ctx: &mut HandlerContext<'_>,
        recipe_network_id: u32,
        times_crafted: u8,
    ) -> Result<(), InventoryError> {
        let recipe = get_recipe_by_network_id(recipe_network_id)
            .ok_or(InventoryError::UnknownRecipe(recipe_network_id))?;
        let Some(id) = recipe.result().id() else {
            log::warn!("Recipe {recipe_network_id} has no fixed result and cannot be auto-crafted");
            return Err(InventoryError::UnknownRecipe(recipe_network_id));
        };
        let item = get_item(id).ok_or(InventoryError::UnknownRecipe(recipe_network_id))?;

        let total = u32::from(recipe.result().count()) * u32::from(times_crafted.max(1));
        let count = u8::try_from(total).map_err(|_| InventoryError::StackOverflow {
            current: 0,
            added: u8::MAX,
            max: item.max_stack,
        })?;
        self.create_results(ctx, vec![ItemStack::new(item.id, count)])
    }

    fn handle_creative_craft(
        &mut self,
        ctx: &mut HandlerContext<'_>,
        item_network_id: u32,
    ) -> Result<(), InventoryError> {
        let item = i32::try_from(item_network_id)
            .ok()
            .and_then(get_item_by_id)
            .ok_or(InventoryError::UnknownItem(item_network_id))?;
        // The client follows this up with a Destroy of the created item.
        self.ignore_destroy = true;
        self.create_results(ctx, vec![ItemStack::new(item.id, item.max_stack)])
    }

    /// Queues craft results. A single result is created right away, several results each wait
    /// for their own Create action.
    fn create_results(
        &mut self,
        ctx: &mut HandlerContext<'_>,
        results: Vec<ItemStack>,
    ) -> Result<(), InventoryError> {
        let single = results.len() == 1;
        self.pending_results.extend(results);
        if !single {
            return Ok(());
        }
        let index = self.pending_results.len() - 1;
        let slot = u8::try_from(index).map_err(|_| InventoryError::InvalidCreateSlot(u8::MAX))?;
        self.handle_create(ctx, slot)
    }

    /// Checks that the slot holds the stack the request expects it to hold, and returns the slot
    /// together with its current content.
    fn verify_slot(
        &mut self,
        ctx: &HandlerContext<'_>,
        info: &StackRequestSlotInfo,
    ) -> Result<(ResolvedSlot, ItemStack), InventoryError> {
        let (key, slot) = ctx
            .containers
            .resolve(info.container_id, info.slot, ctx.world, ctx.blocks)
            .ok_or(InventoryError::ContainerNotFound(info.container_id))?;
        let resolved = ResolvedSlot {
            container_id: info.container_id,
            key,
            slot,
        };

        self.try_acknowledge_changes(key, slot, info.stack_network_id);
        if self.pending.len() > self.max_pending {
            return Err(InventoryError::TooManyPendingChanges);
        }

        let item = ctx
            .containers
            .get(key)
            .and_then(|container| container.item(usize::from(slot)))
            .cloned()
            .ok_or(InventoryError::InvalidSlot {
                container_id: info.container_id,
                slot: info.slot,
            })?;

        let expected = self.resolve_id(key, slot, info.stack_network_id)?;
        if expected != item.stack_id {
            return Err(InventoryError::IdentityMismatch {
                expected,
                actual: item.stack_id,
            });
        }
        Ok((resolved, item))
    }

    /// Negative ids point at the request that last wrote the slot.
    fn resolve_id(&self, key: ContainerKey, slot: u8, reference: i32) -> Result<i32, InventoryError> {
        if reference >= 0 {
            return Ok(reference);
        }
        self.pending
            .get(&(reference.saturating_neg(), key, slot))
            .filter(|change| !self.is_expired(change))
            .map(|change| change.stack_id)
            .ok_or(InventoryError::StaleReference(reference))
    }

    /// Drops bookkeeping the client no longer needs: expired entries, and entries of a slot the
    /// client now refers to by a server stack id.
    fn try_acknowledge_changes(&mut self, key: ContainerKey, slot: u8, reference: i32) {
        let current = self.current;
        let expiry = self.expiry;
        self.pending.retain(|(_, changed_key, changed_slot), change| {
            let acknowledged = reference >= 0 && *changed_key == key && *changed_slot == slot;
            let expired = current.saturating_duration_since(change.timestamp) > expiry;
            !acknowledged && !expired
        });
    }

    fn is_expired(&self, change: &PendingChange) -> bool {
        self.current.saturating_duration_since(change.timestamp) > self.expiry
    }

    fn set_slot(
        &mut self,
        ctx: &mut HandlerContext<'_>,
        slot: ResolvedSlot,
        stack: ItemStack,
    ) -> Result<(), InventoryError> {
        let stack = if stack.is_empty() {
            ItemStack::empty()
        } else {
            let id = self.mint_stack_id();
            stack.with_stack_id(id)
        };
        let stack_id = stack.stack_id;

        let before = ctx
            .containers
            .get_mut(slot.key)
            .and_then(|container| container.set_item(usize::from(slot.slot), stack))
            .ok_or(InventoryError::InvalidSlot {
                container_id: slot.container_id,
                slot: slot.slot,
            })?;
        self.changes.push((slot, before));
        self.pending.insert(
            (self.current_request, slot.key, slot.slot),
            PendingChange {
                stack_id,
                timestamp: self.current,
            },
        );
        Ok(())
    }

    fn mint_stack_id(&mut self) -> i32 {
        let id = self.next_transient_id;
        self.next_transient_id = id.checked_sub(1).unwrap_or(-1);
        id
    }

    /// Puts back every slot the current request changed, newest change first.
    fn reject(&mut self, ctx: &mut HandlerContext<'_>) {
        for (slot, before) in self.changes.drain(..).rev() {
            if let Some(container) = ctx.containers.get_mut(slot.key) {
                container.set_item(usize::from(slot.slot), before);
            }
        }
        let request = self.current_request;
        self.pending.retain(|(request_id, _, _), _| *request_id != request);
        self.pending_results.clear();
    }

    /// Takes in the server's answer to an earlier request. Accepted slots adopt the stack ids the
    /// server assigned, unless something else was written to them in the meantime.
    pub fn handle_response(
        &mut self,
        response: &ItemStackResponse,
        containers: &mut Containers,
        world: &dyn WorldView,
        blocks: &ContainerBlockManager,
    ) {
        if response.is_ok() {
            for info in &response.container_info {
                for slot_info in &info.slot_info {
                    let Some((key, slot)) =
                        containers.resolve(info.container_id, slot_info.slot, world, blocks)
                    else {
                        log::debug!(
                            "Response {} names unknown container {}",
                            response.request_id,
                            info.container_id
                        );
                        continue;
                    };
                    let Some(change) = self.pending.get(&(response.request_id, key, slot)) else {
                        continue;
                    };
                    let Some(container) = containers.get_mut(key) else {
                        continue;
                    };
                    if let Some(item) = container.item(usize::from(slot)) {
                        if !item.is_empty() && item.stack_id == change.stack_id {
                            let item = item.clone().with_stack_id(slot_info.stack_network_id);
                            container.set_item(usize::from(slot), item);
                        }
                    }
                }
            }
        } else {
            log::debug!("Server rejected request {}", response.request_id);
        }
        self.pending
            .retain(|(request_id, _, _), _| *request_id != response.request_id);
    }

    /// The stack reference a new request should use for a slot holding `content`.
    pub fn reference_for(&self, key: ContainerKey, slot: u8, content: &ItemStack, now: Instant) -> i32 {
        self.pending
            .iter()
            .find(|((_, changed_key, changed_slot), change)| {
                *changed_key == key
                    && *changed_slot == slot
                    && change.stack_id == content.stack_id
                    && now.saturating_duration_since(change.timestamp) <= self.expiry
            })
            .map_or(content.stack_id, |((request_id, _, _), _)| -request_id)
    }

    /// Forgets unanswered changes of a container whose contents are being replaced, e.g. when a
    /// window closes.
    pub fn forget_container(&mut self, key: ContainerKey) {
        self.pending.retain(|(_, changed_key, _), _| *changed_key != key);
    }

    pub fn pending_changes(&self) -> usize {
        self.pending.len()
    }
}
