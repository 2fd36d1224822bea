use crate::recipe::read::ingredients::{IngredientSlot, Ingredients};
use serde::de::{Error, MapAccess, Visitor};
use serde::{de, Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt::Formatter;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeType {
    Blasting,
    CampfireCooking,
    Crafting(CraftingType),
    Smelting,
    Smithing,
    Smoking,
    StoneCutting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraftingType {
    Shapeless,
    Shaped,
    /// Recipes whose output depends on the inputs (dyeing, repairing, cloning ...).
    Special,
    DecoratedPot,
}

impl FromStr for RecipeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use CraftingType::*;
        use RecipeType::*;
        let s = s.trim_start_matches("minecraft:");
        match s {
            "blasting" => Ok(Blasting),
            "campfire_cooking" => Ok(CampfireCooking),
            "crafting_shaped" => Ok(Crafting(Shaped)),
            "crafting_shapeless" => Ok(Crafting(Shapeless)),
            "crafting_decorated_pot" => Ok(Crafting(DecoratedPot)),
            s if s.starts_with("crafting_special_") => Ok(Crafting(Special)),
            "smelting" => Ok(Smelting),
            "smithing" | "smithing_trim" | "smithing_transform" => Ok(Smithing),
            "smoking" => Ok(Smoking),
            "stonecutting" => Ok(StoneCutting),
            _ => Err(format!("Could not find recipe with id: \"{s}\"")),
        }
    }
}

pub mod ingredients {
    use serde::de::{MapAccess, SeqAccess, Visitor};
    use serde::{de, Deserialize, Deserializer};
    use std::fmt::Formatter;

    use crate::tags::resolve_item_tag;

    #[derive(Clone, PartialEq, Debug, Eq, Hash)]
    pub enum IngredientType {
        Item(String),
        Tag(String),
    }

    impl IngredientType {
        /// Every concrete item name this ingredient accepts.
        pub fn to_all_types(&self) -> Vec<String> {
            match &self {
                IngredientType::Tag(tag) => resolve_item_tag(tag),
                IngredientType::Item(s) => vec![s.to_string()],
            }
        }
    }

    struct IngredientTypeVisitor;
    impl<'de> Visitor<'de> for IngredientTypeVisitor {
        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            write!(formatter, "valid item type")
        }
        type Value = IngredientType;
        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            match map.next_key::<String>()?.as_deref() {
                Some("item") => Ok(IngredientType::Item(map.next_value()?)),
                Some("tag") => Ok(IngredientType::Tag(map.next_value()?)),
                Some(s) => Err(de::Error::unknown_field(s, &["item", "tag"])),
                None => Err(de::Error::custom("Ingredient is empty")),
            }
        }
    }
    impl<'de> Deserialize<'de> for IngredientType {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(IngredientTypeVisitor)
        }
    }

    /// One slot of a recipe grid, which may accept several alternatives.
    #[derive(Clone, Debug, Eq, PartialEq, Hash)]
    pub enum IngredientSlot {
        Single(IngredientType),
        Many(Vec<IngredientType>),
    }

    impl IngredientSlot {
        pub fn to_all_types(&self) -> Vec<String> {
            match self {
                IngredientSlot::Single(ingredient) => ingredient.to_all_types(),
                IngredientSlot::Many(ingredients) => ingredients
                    .iter()
                    .flat_map(IngredientType::to_all_types)
                    .collect(),
            }
        }

        pub fn accepts(&self, item_name: &str) -> bool {
            self.to_all_types().iter().any(|name| name == item_name)
        }
    }

    impl PartialEq<IngredientType> for IngredientSlot {
        fn eq(&self, other: &IngredientType) -> bool {
            match self {
                IngredientSlot::Single(ingredient) => other == ingredient,
                IngredientSlot::Many(ingredients) => ingredients.contains(other),
            }
        }
    }

    impl<'de> Deserialize<'de> for IngredientSlot {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct SlotTypeVisitor;
            impl<'de> Visitor<'de> for SlotTypeVisitor {
                fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                    write!(formatter, "valid ingredient slot")
                }

                type Value = IngredientSlot;

                fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
                where
                    A: MapAccess<'de>,
                {
                    Ok(IngredientSlot::Single(
                        IngredientTypeVisitor.visit_map(map)?,
                    ))
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let mut ingredients: Vec<IngredientType> = vec![];
                    while let Some(element) = seq.next_element()? {
                        ingredients.push(element)
                    }
                    match ingredients.len() {
                        0 => Err(de::Error::invalid_length(0, &self)),
                        1 => Ok(IngredientSlot::Single(ingredients.remove(0))),
                        _ => Ok(IngredientSlot::Many(ingredients)),
                    }
                }
            }
            deserializer.deserialize_any(SlotTypeVisitor)
        }
    }

    pub struct Ingredients(pub Vec<IngredientSlot>);

    impl<'de> Deserialize<'de> for Ingredients {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Vec::<IngredientSlot>::deserialize(deserializer).map(Ingredients)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecipeResult {
    Many { count: u8, id: String },
    Single { id: String },
    Special,
}

impl RecipeResult {
    pub fn id(&self) -> Option<&str> {
        match self {
            RecipeResult::Many { id, .. } | RecipeResult::Single { id } => Some(id),
            RecipeResult::Special => None,
        }
    }

    pub fn count(&self) -> u8 {
        match self {
            RecipeResult::Many { count, .. } => *count,
            RecipeResult::Single { .. } => 1,
            RecipeResult::Special => 0,
        }
    }
}

impl<'de> Deserialize<'de> for RecipeResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Fields {
            Count,
            Id,
            // Older data packs
            Item,
        }
        struct ResultVisitor;
        impl<'de> Visitor<'de> for ResultVisitor {
            type Value = RecipeResult;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "valid recipe result")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut id: Option<String> = None;
                let mut count: Option<u8> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Fields::Id | Fields::Item => visit_option(&mut map, &mut id, "id")?,
                        Fields::Count => visit_option(&mut map, &mut count, "count")?,
                    }
                }

                let id = id.ok_or_else(|| de::Error::missing_field("id"))?;
                if let Some(count) = count {
                    Ok(RecipeResult::Many { id, count })
                } else {
                    Ok(RecipeResult::Single { id })
                }
            }
        }
        deserializer.deserialize_map(ResultVisitor)
    }
}

pub struct RecipeKeys(pub(super) HashMap<char, IngredientSlot>);

impl<'de> Deserialize<'de> for RecipeKeys {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;
        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = HashMap<char, IngredientSlot>;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "existing key inside recipe")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut return_map = HashMap::new();
                while let Some(next) = map.next_key::<String>()? {
                    let mut chars = next.chars();
                    let (Some(c), None) = (chars.next(), chars.next()) else {
                        return Err(de::Error::custom(format!(
                            "recipe key \"{next}\" must be a single character"
                        )));
                    };
                    let ingredient_type: IngredientSlot = map.next_value()?;

                    return_map.insert(c, ingredient_type);
                }
                Ok(return_map)
            }
        }
        deserializer.deserialize_map(KeyVisitor).map(Self)
    }
}

pub type RecipeGrid = [[Option<IngredientSlot>; 3]; 3];

/// A recipe as found in a vanilla data pack.
#[derive(Clone, Debug)]
pub struct Recipe {
    recipe_type: RecipeType,
    grid: RecipeGrid,
    width: usize,
    height: usize,
    ingredients: Vec<IngredientSlot>,
    result: RecipeResult,
}

impl Recipe {
    pub fn recipe_type(&self) -> RecipeType {
        self.recipe_type
    }

    pub fn result(&self) -> &RecipeResult {
        &self.result
    }

    /// The pattern of a shaped recipe, shapeless recipes fill the grid row by row.
    pub fn pattern(&self) -> &RecipeGrid {
        &self.grid
    }

    /// Every ingredient slot of the recipe, one entry per consumed item.
    pub fn ingredients(&self) -> &[IngredientSlot] {
        &self.ingredients
    }

    /// Distinct ingredient slots together with how many items of each one craft consumes, in the
    /// order they first appear.
    pub fn requirements(&self) -> Vec<(IngredientSlot, u32)> {
        let mut requirements: Vec<(IngredientSlot, u32)> = Vec::new();
        for ingredient in &self.ingredients {
            match requirements.iter_mut().find(|(slot, _)| slot == ingredient) {
                Some((_, count)) => *count += 1,
                None => requirements.push((ingredient.clone(), 1)),
            }
        }
        requirements
    }

    /// Whether this is a crafting recipe with a fixed output, the only kind that can be
    /// auto-crafted.
    pub fn is_auto_craftable(&self) -> bool {
        matches!(
            self.recipe_type,
            RecipeType::Crafting(CraftingType::Shaped | CraftingType::Shapeless)
        ) && !self.ingredients.is_empty()
    }

    /// Whether the recipe does not fit into the 2x2 grid of the player inventory.
    pub fn needs_crafting_table(&self) -> bool {
        self.width > 2 || self.height > 2
    }
}

impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Fields {
            Type,
            Category,
            Group,
            Key,
            Pattern,
            Result,
            Ingredients,
            Ingredient,

            // Only exists sometimes, at least on Shaped crafting
            #[serde(rename = "show_notification")]
            ShowNotification,

            // Smithing
            Addition,
            Base,
            Template,

            // Smelting
            CookingTime,
            Experience,
        }

        struct RecipeVisitor;
        impl<'de> Visitor<'de> for RecipeVisitor {
            type Value = Recipe;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "valid recipe")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut recipe_type: Option<String> = None;
                let mut keys: Option<RecipeKeys> = None;
                let mut pattern: Option<Vec<String>> = None;
                let mut result: Option<RecipeResult> = None;
                let mut ingredients: Option<Ingredients> = None;
                let mut ingredient: Option<IngredientSlot> = None;
                while let Some(key) = map.next_key()? {
                    (match key {
                        Fields::Type => visit_option(&mut map, &mut recipe_type, "type"),
                        Fields::Key => visit_option(&mut map, &mut keys, "key"),
                        Fields::Pattern => visit_option(&mut map, &mut pattern, "pattern"),
                        Fields::Result => visit_option(&mut map, &mut result, "result"),
                        Fields::Ingredients => {
                            visit_option(&mut map, &mut ingredients, "ingredients")
                        }
                        Fields::Ingredient => visit_option(&mut map, &mut ingredient, "ingredient"),
                        Fields::Category
                        | Fields::Group
                        | Fields::ShowNotification
                        | Fields::Addition
                        | Fields::Base
                        | Fields::Template
                        | Fields::CookingTime
                        | Fields::Experience => map.next_value::<de::IgnoredAny>().map(|_| ()),
                    })?
                }

                let recipe_type: RecipeType = recipe_type
                    .ok_or_else(|| de::Error::missing_field("type"))?
                    .parse()
                    .map_err(A::Error::custom)?;

                let result = match recipe_type {
                    RecipeType::Crafting(CraftingType::Special)
                    | RecipeType::Crafting(CraftingType::DecoratedPot)
                    | RecipeType::Smithing => RecipeResult::Special,
                    _ => result.ok_or_else(|| de::Error::missing_field("result"))?,
                };

                let mut recipe = Recipe {
                    recipe_type,
                    grid: Default::default(),
                    width: 0,
                    height: 0,
                    ingredients: vec![],
                    result,
                };

                match recipe_type {
                    RecipeType::Crafting(CraftingType::Shaped) => {
                        let pattern = pattern.ok_or_else(|| de::Error::missing_field("pattern"))?;
                        let keys = keys.ok_or_else(|| de::Error::missing_field("key"))?;
                        if pattern.len() > 3 || pattern.iter().any(|row| row.chars().count() > 3)
                        {
                            return Err(de::Error::custom("shaped pattern larger than 3x3"));
                        }
                        recipe.height = pattern.len();
                        for (i, row) in pattern.iter().enumerate() {
                            recipe.width = recipe.width.max(row.chars().count());
                            for (j, char) in row.chars().enumerate() {
                                if char == ' ' {
                                    continue;
                                }
                                let slot = keys.0.get(&char).cloned().ok_or_else(|| {
                                    de::Error::custom(format!("pattern key '{char}' is undefined"))
                                })?;
                                recipe.ingredients.push(slot.clone());
                                recipe.grid[i][j] = Some(slot);
                            }
                        }
                    }
                    RecipeType::Crafting(CraftingType::Shapeless) => {
                        let ingredients = ingredients
                            .ok_or_else(|| de::Error::missing_field("ingredients"))?
                            .0;
                        if ingredients.len() > 9 {
                            return Err(de::Error::invalid_length(
                                ingredients.len(),
                                &"at most 9 ingredients",
                            ));
                        }
                        for (i, slot) in ingredients.iter().enumerate() {
                            recipe.grid[i / 3][i % 3] = Some(slot.clone());
                        }
                        recipe.width = ingredients.len().min(3);
                        recipe.height = ingredients.len().div_ceil(3);
                        // Shapeless recipes fit into the 2x2 grid as long as they have 4 inputs.
                        if ingredients.len() <= 4 {
                            recipe.width = recipe.width.min(2);
                            recipe.height = recipe.height.min(2);
                        }
                        recipe.ingredients = ingredients;
                    }
                    RecipeType::Smelting
                    | RecipeType::Blasting
                    | RecipeType::Smoking
                    | RecipeType::CampfireCooking
                    | RecipeType::StoneCutting => {
                        if let Some(slot) = ingredient {
                            recipe.ingredients.push(slot.clone());
                            recipe.grid[0][0] = Some(slot);
                            recipe.width = 1;
                            recipe.height = 1;
                        }
                    }
                    _ => {}
                }
                Ok(recipe)
            }
        }

        const FIELDS: &[&str] = &[
            "type",
            "category",
            "group",
            "key",
            "pattern",
            "result",
            "ingredients",
            "ingredient",
            "addition",
            "base",
            "template",
            "cookingtime",
            "experience",
            "show_notification",
        ];

        deserializer.deserialize_struct("Recipe", FIELDS, RecipeVisitor)
    }
}

#[inline(always)]
fn visit_option<'de, T: Deserialize<'de>, Map: MapAccess<'de>>(
    map: &mut Map,
    option: &mut Option<T>,
    field: &'static str,
) -> Result<(), Map::Error> {
    match option {
        Some(_) => Err(<Map as MapAccess>::Error::duplicate_field(field)),
        None => {
            *option = Some(map.next_value()?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::ingredients::IngredientType;
    use super::*;

    #[test]
    fn shaped_recipe() {
        let recipe: Recipe = serde_json::from_str(
            r##"{
                "type": "minecraft:crafting_shaped",
                "category": "misc",
                "key": { "#": { "item": "minecraft:stick" }, "X": { "tag": "minecraft:coals" } },
                "pattern": ["X", "#"],
                "result": { "id": "minecraft:torch", "count": 4 }
            }"##,
        )
        .unwrap();
        assert_eq!(recipe.recipe_type(), RecipeType::Crafting(CraftingType::Shaped));
        assert_eq!(recipe.result().count(), 4);
        assert_eq!(recipe.result().id(), Some("minecraft:torch"));
        assert!(!recipe.needs_crafting_table());
        assert_eq!(
            recipe.pattern()[1][0],
            Some(IngredientSlot::Single(IngredientType::Item(
                "minecraft:stick".into()
            )))
        );
    }

    #[test]
    fn shaped_requirements_are_counted() {
        let recipe: Recipe = serde_json::from_str(
            r####"{
                "type": "minecraft:crafting_shaped",
                "key": { "#": { "tag": "minecraft:planks" } },
                "pattern": ["###", "# #", "###"],
                "result": { "id": "minecraft:chest" }
            }"####,
        )
        .unwrap();
        assert!(recipe.needs_crafting_table());
        let requirements = recipe.requirements();
        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0].1, 8);
        assert_eq!(recipe.result().count(), 1);
    }

    #[test]
    fn shapeless_with_alternatives() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "type": "minecraft:crafting_shapeless",
                "ingredients": [
                    [{ "item": "minecraft:coal" }, { "item": "minecraft:charcoal" }],
                    { "item": "minecraft:stick" }
                ],
                "result": { "id": "minecraft:torch", "count": 4 }
            }"#,
        )
        .unwrap();
        assert!(!recipe.needs_crafting_table());
        assert!(recipe.ingredients()[0].accepts("minecraft:charcoal"));
        assert!(!recipe.ingredients()[1].accepts("minecraft:charcoal"));
    }

    #[test]
    fn special_recipes_have_no_result() {
        let recipe: Recipe =
            serde_json::from_str(r#"{ "type": "minecraft:crafting_special_armordye" }"#).unwrap();
        assert_eq!(recipe.result(), &RecipeResult::Special);
        assert!(!recipe.is_auto_craftable());
    }

    #[test]
    fn unknown_pattern_key_is_rejected() {
        let recipe = serde_json::from_str::<Recipe>(
            r##"{
                "type": "minecraft:crafting_shaped",
                "key": { "#": { "item": "minecraft:stick" } },
                "pattern": ["#X"],
                "result": { "id": "minecraft:torch" }
            }"##,
        );
        assert!(recipe.is_err());
    }
}
