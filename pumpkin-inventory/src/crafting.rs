use std::collections::HashSet;

use pumpkin_protocol::stack_request::StackRequestAction;
use pumpkin_protocol::ContainerName;
use pumpkin_registry::{recipe_network_id, Recipe, RECIPES};
use pumpkin_world::item::{get_item, get_item_name, ItemStack};
use rayon::prelude::*;

use crate::action_builder::{ActionBuilder, LogicalSlot, Target};
use crate::block::ContainerKind;
use crate::container::{Container, CREATED_OUTPUT_SLOT};
use crate::error::InventoryError;
use crate::registry::ContainerKey;

/// Inventory slots and how many items a craft takes out of each of them.
type CraftPlan = Vec<(u8, u8)>;

/// Works out which inventory slots can feed `recipe` crafted `times` times. Every ingredient is
/// taken from as few slots as possible. When several slots are needed the amount is split evenly
/// between them, the first slots taking one more item each until the remainder is used up.
fn plan_craft(recipe: &Recipe, inventory: &Container, times: u8) -> Option<CraftPlan> {
    let mut available: Vec<u8> = inventory.slots().iter().map(ItemStack::count).collect();
    let mut plan = Vec::new();

    for (ingredient, per_craft) in recipe.requirements() {
        let required = per_craft * u32::from(times);
        let accepted = ingredient.to_all_types();

        let mut candidates: Vec<usize> = inventory
            .slots()
            .iter()
            .enumerate()
            .filter(|(slot, stack)| {
                available[*slot] > 0
                    && get_item_name(stack.item_id)
                        .is_some_and(|name| accepted.iter().any(|candidate| candidate == name))
            })
            .map(|(slot, _)| slot)
            .collect();
        candidates.sort_by_key(|slot| std::cmp::Reverse(available[*slot]));

        let split = (1..=candidates.len()).find_map(|n| {
            let slots = &candidates[..n];
            let share = required / n as u32;
            let extra = required % n as u32;
            let shares: Vec<u32> = (0..n as u32)
                .map(|k| share + u32::from(k < extra))
                .collect();
            let covered = slots
                .iter()
                .zip(&shares)
                .all(|(slot, share)| u32::from(available[*slot]) >= *share);
            covered.then(|| slots.iter().copied().zip(shares).collect::<Vec<_>>())
        })?;

        for (slot, amount) in split.into_iter().filter(|(_, amount)| *amount > 0) {
            // amount never exceeds what the slot holds, which fits into a u8
            let amount = amount as u8;
            available[slot] -= amount;
            plan.push((slot as u8, amount));
        }
    }
    Some(plan)
}

impl ActionBuilder<'_> {
    /// Crafts `item_name` `times` times from whatever the inventory holds, and puts the result
    /// into the inventory. Recipes that need a crafting table are only considered while one is
    /// open.
    pub fn auto_craft(&mut self, item_name: &str, times: u8) -> Result<&mut Self, InventoryError> {
        let times = times.max(1);
        let no_recipe = || InventoryError::NoCraftableRecipe(item_name.to_string());
        let item = get_item(item_name).ok_or_else(no_recipe)?;
        let name = get_item_name(item.id).ok_or_else(no_recipe)?;
        let table_open = self.containers.opened_kind() == Some(ContainerKind::CraftingTable);
        let inventory = self.containers.inventory();

        let (index, recipe, plan) = RECIPES
            .par_iter()
            .enumerate()
            .filter(|(_, recipe)| {
                recipe.is_auto_craftable()
                    && recipe.result().id() == Some(name)
                    && (table_open || !recipe.needs_crafting_table())
            })
            .find_map_first(|(index, recipe)| {
                plan_craft(recipe, inventory, times).map(|plan| (index, recipe, plan))
            })
            .ok_or_else(no_recipe)?;

        let total = u32::from(recipe.result().count()) * u32::from(times);
        if total > u32::from(item.max_stack) {
            return Err(InventoryError::StackOverflow {
                current: 0,
                added: u8::try_from(total).unwrap_or(u8::MAX),
                max: item.max_stack,
            });
        }
        let total = total as u8;

        let consumed: HashSet<usize> = plan.iter().map(|(slot, _)| usize::from(*slot)).collect();
        let result = ItemStack::new(item.id, total);
        let destination = inventory
            .slots()
            .iter()
            .enumerate()
            .find_map(|(slot, stack)| {
                (!consumed.contains(&slot)
                    && !stack.is_empty()
                    && stack.comparable(&result)
                    && u16::from(stack.count()) + u16::from(total) <= u16::from(stack.max_count()))
                .then_some(slot)
            })
            .or_else(|| inventory.first_empty(|slot| consumed.contains(&slot)))
            .ok_or(InventoryError::NoDestinationSlot)?;
        let destination = self.target(LogicalSlot::Inventory(destination as u8))?;

        self.actions.push(StackRequestAction::AutoCraftRecipe {
            recipe_network_id: recipe_network_id(index),
            times_crafted: times,
        });
        for (slot, count) in plan {
            let source = self.slot_info(self.target(LogicalSlot::Inventory(slot))?);
            self.actions
                .push(StackRequestAction::Consume { count, source });
        }

        // the handler creates the single result right away
        let output = Target {
            name: ContainerName::CreatedOutput,
            key: ContainerKey::Ui,
            slot: CREATED_OUTPUT_SLOT,
        };
        self.touch(output);
        self.transfer_targets(true, output, destination, total);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use pumpkin_config::inventory::InventoryConfig;
    use pumpkin_core::math::position::WorldPosition;
    use pumpkin_protocol::stack_request::{ItemStackRequest, StackRequestSlotInfo};
    use pumpkin_world::block::get_block;
    use pumpkin_world::Level;

    use super::*;
    use crate::block::default_block_manager;
    use crate::registry::{Containers, WindowBinding};
    use crate::transaction::{AllowDrops, HandlerContext, ItemStackRequestHandler};

    fn item(name: &str) -> i32 {
        get_item(name).unwrap().id
    }

    fn put(containers: &mut Containers, slot: usize, name: &str, count: u8, stack_id: i32) {
        containers
            .get_mut(ContainerKey::Inventory)
            .unwrap()
            .set_item(slot, ItemStack::new(item(name), count).with_stack_id(stack_id));
    }

    fn open_crafting_table(containers: &mut Containers) {
        let level = Level::new();
        let pos = WorldPosition::new(3, 64, 3);
        level.set_block(pos, get_block("minecraft:crafting_table").unwrap().id);
        containers.open_window(1, 1, WindowBinding::Block(pos), &level, &default_block_manager());
    }

    fn consumed(actions: &[StackRequestAction]) -> Vec<(u8, u8)> {
        actions
            .iter()
            .filter_map(|action| match action {
                StackRequestAction::Consume { count, source } => Some((source.slot, *count)),
                _ => None,
            })
            .collect()
    }

    fn recipe_id_for(result: &str) -> u32 {
        let index = RECIPES
            .iter()
            .position(|recipe| recipe.result().id() == Some(result))
            .unwrap();
        recipe_network_id(index)
    }

    #[test]
    fn crafts_planks_and_stores_them() {
        let mut containers = Containers::new();
        put(&mut containers, 0, "minecraft:oak_log", 3, 10);
        let mut handler = ItemStackRequestHandler::new(&InventoryConfig::default());
        let now = Instant::now();

        let mut builder = ActionBuilder::new(&containers, &handler, 1, now);
        builder.auto_craft("oak_planks", 2).unwrap();
        let actions = builder.finish();

        assert_eq!(
            actions,
            vec![
                StackRequestAction::AutoCraftRecipe {
                    recipe_network_id: recipe_id_for("minecraft:oak_planks"),
                    times_crafted: 2,
                },
                StackRequestAction::Consume {
                    count: 2,
                    source: StackRequestSlotInfo::new(ContainerName::CombinedHotBarAndInventory, 0, 10),
                },
                StackRequestAction::Place {
                    count: 8,
                    source: StackRequestSlotInfo::new(ContainerName::CreatedOutput, 50, -1),
                    destination: StackRequestSlotInfo::new(ContainerName::CombinedHotBarAndInventory, 1, 0),
                },
            ]
        );

        // the handler accepts what the builder produced
        let level = Level::new();
        let blocks = default_block_manager();
        let request = ItemStackRequest {
            request_id: 1,
            actions,
            filter_strings: Vec::new(),
        };
        let mut ctx = HandlerContext {
            containers: &mut containers,
            world: &level,
            blocks: &blocks,
            drop_handler: &AllowDrops,
        };
        handler.handle(&request, &mut ctx, now).unwrap();
        let planks = containers.inventory().item(1).unwrap();
        assert_eq!(planks.item_id, item("minecraft:oak_planks"));
        assert_eq!(planks.count(), 8);
        assert!(containers.get(ContainerKey::Ui).unwrap().item(50).unwrap().is_empty());
    }

    #[test]
    fn tag_ingredients_use_the_fullest_slot() {
        let mut containers = Containers::new();
        put(&mut containers, 0, "minecraft:oak_planks", 1, 10);
        put(&mut containers, 1, "minecraft:birch_planks", 3, 11);
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());

        let mut builder = ActionBuilder::new(&containers, &handler, 1, Instant::now());
        builder.auto_craft("minecraft:stick", 1).unwrap();
        assert_eq!(consumed(&builder.finish()), vec![(1, 2)]);
    }

    #[test]
    fn requirements_are_split_across_slots() {
        let mut containers = Containers::new();
        put(&mut containers, 0, "minecraft:stick", 4, 10);
        put(&mut containers, 2, "minecraft:coal", 2, 11);
        put(&mut containers, 5, "minecraft:charcoal", 2, 12);
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());

        let mut builder = ActionBuilder::new(&containers, &handler, 1, Instant::now());
        builder.auto_craft("minecraft:torch", 4).unwrap();
        let actions = builder.finish();
        assert_eq!(consumed(&actions), vec![(2, 2), (5, 2), (0, 4)]);
        assert!(matches!(
            actions.last(),
            Some(StackRequestAction::Place { count: 16, .. })
        ));
    }

    #[test]
    fn remainders_go_to_the_first_slots() {
        let mut containers = Containers::new();
        put(&mut containers, 0, "minecraft:wheat", 2, 10);
        put(&mut containers, 1, "minecraft:wheat", 2, 11);
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());

        let mut builder = ActionBuilder::new(&containers, &handler, 1, Instant::now());
        builder.auto_craft("minecraft:bread", 1).unwrap();
        let consumed = consumed(&builder.finish());
        assert_eq!(consumed, vec![(0, 2), (1, 1)]);
        assert_eq!(consumed.iter().map(|(_, count)| u32::from(*count)).sum::<u32>(), 3);
    }

    #[test]
    fn large_recipes_need_a_crafting_table() {
        let mut containers = Containers::new();
        put(&mut containers, 0, "minecraft:oak_planks", 8, 10);
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());

        let mut builder = ActionBuilder::new(&containers, &handler, 1, Instant::now());
        assert_eq!(
            builder.auto_craft("minecraft:chest", 1).err(),
            Some(InventoryError::NoCraftableRecipe("minecraft:chest".to_string()))
        );
        assert!(builder.is_empty());

        open_crafting_table(&mut containers);
        let mut builder = ActionBuilder::new(&containers, &handler, 1, Instant::now());
        builder.auto_craft("minecraft:chest", 1).unwrap();
        assert_eq!(consumed(&builder.finish()), vec![(0, 8)]);
    }

    #[test]
    fn missing_ingredients() {
        let mut containers = Containers::new();
        put(&mut containers, 0, "minecraft:wheat", 2, 10);
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());

        let mut builder = ActionBuilder::new(&containers, &handler, 1, Instant::now());
        assert!(matches!(
            builder.auto_craft("minecraft:bread", 1),
            Err(InventoryError::NoCraftableRecipe(_))
        ));
        assert!(matches!(
            builder.auto_craft("minecraft:not_an_item", 1),
            Err(InventoryError::NoCraftableRecipe(_))
        ));
    }

    #[test]
    fn results_must_fit_one_stack() {
        let mut containers = Containers::new();
        put(&mut containers, 0, "minecraft:iron_ingot", 6, 10);
        put(&mut containers, 1, "minecraft:stick", 4, 11);
        open_crafting_table(&mut containers);
        let handler = ItemStackRequestHandler::new(&InventoryConfig::default());

        let mut builder = ActionBuilder::new(&containers, &handler, 1, Instant::now());
        assert_eq!(
            builder.auto_craft("minecraft:iron_pickaxe", 2).err(),
            Some(InventoryError::StackOverflow {
                current: 0,
                added: 2,
                max: 1
            })
        );
    }
}
