#![deny(warnings)]

//! Catalog data model for the crafting planner.
//!
//! The catalog is the game's item/recipe export, loaded once and read-only
//! afterwards. Loading normalizes the different field spellings found in the
//! export into one canonical shape, so downstream code never has to probe for
//! aliases or parse numeric strings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Numeric identifier of a catalog item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A material consumed by a single crafting action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumedItem {
    /// Consumed item.
    pub item: ItemId,
    /// Units consumed per craft (>= 1 when produced by the loader).
    pub quantity: u64,
}

impl ConsumedItem {
    pub fn new(item: ItemId, quantity: u64) -> Self {
        Self { item, quantity }
    }
}

/// One achievable yield of a crafting action with its weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YieldWeight {
    /// Units produced.
    pub quantity: u32,
    /// Probability or relative weight; not used for planning.
    pub weight: f64,
}

/// A way of producing an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Materials consumed per craft, in catalog order.
    pub consumed_items: Vec<ConsumedItem>,
    /// Skill levels required to craft (inert passthrough).
    pub level_requirements: Vec<i64>,
    /// Nominal yield of one craft; 0 means the export did not say.
    pub output_quantity: u32,
    /// Achievable yields, sorted by quantity. Empty when the yield is fixed.
    pub possibilities: Vec<YieldWeight>,
}

impl Recipe {
    /// Recipe with a fixed yield and no level requirements.
    pub fn new(consumed_items: Vec<ConsumedItem>, output_quantity: u32) -> Self {
        Self {
            consumed_items,
            level_requirements: Vec::new(),
            output_quantity,
            possibilities: Vec::new(),
        }
    }

    /// Replace the yield table. Pairs are `(quantity, weight)`.
    pub fn with_possibilities<I>(mut self, possibilities: I) -> Self
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        self.possibilities = possibilities
            .into_iter()
            .map(|(quantity, weight)| YieldWeight { quantity, weight })
            .collect();
        self.possibilities.sort_by_key(|p| p.quantity);
        self
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Icon reference, resolved by the presentation layer.
    pub icon: Option<String>,
    pub tier: Option<i64>,
    pub rarity: Option<i64>,
    pub extraction_skill: Option<i64>,
    /// Recipes in catalog order. Empty for base materials.
    pub recipes: Vec<Recipe>,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: None,
            tier: None,
            rarity: None,
            extraction_skill: None,
            recipes: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    /// True when the item cannot be crafted.
    pub fn is_base(&self) -> bool {
        self.recipes.is_empty()
    }

    /// The recipe used for planning. Only the first recipe is ever considered.
    pub fn primary_recipe(&self) -> Option<&Recipe> {
        self.recipes.first()
    }
}

/// Non-fatal defects found while loading a catalog document.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CatalogIssue {
    #[error("catalog key {0:?} is not an item id")]
    InvalidItemKey(String),
    #[error("item {item} skipped: {reason}")]
    MalformedItem { item: ItemId, reason: String },
    #[error("item {item} recipe {recipe}: consumed item {index} dropped, {reason}")]
    InvalidConsumedItem {
        item: ItemId,
        recipe: usize,
        index: usize,
        reason: String,
    },
    #[error("item {item}: field {field} dropped, {reason}")]
    InvalidField {
        item: ItemId,
        field: String,
        reason: String,
    },
    #[error("item {item} recipe {recipe}: possibility key {key:?} is not a yield quantity")]
    InvalidPossibility {
        item: ItemId,
        recipe: usize,
        key: String,
    },
}

/// Errors that make a catalog document unusable as a whole.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog document must be an object keyed by item id")]
    NotAnObject,
}

/// Result of loading a catalog document.
#[derive(Clone, Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// Entries or fields that were dropped during normalization.
    pub issues: Vec<CatalogIssue>,
}

/// Immutable mapping from item id to definition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: BTreeMap<ItemId, ItemDefinition>,
}

impl Catalog {
    /// Build a catalog from definitions. Later duplicates replace earlier ones.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ItemDefinition>,
    {
        Self {
            items: items.into_iter().map(|def| (def.id, def)).collect(),
        }
    }

    /// Parse the game's JSON export.
    pub fn from_json_str(text: &str) -> Result<LoadedCatalog, CatalogError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    /// Normalize an already-parsed JSON export.
    pub fn from_json_value(value: Value) -> Result<LoadedCatalog, CatalogError> {
        let Value::Object(entries) = value else {
            return Err(CatalogError::NotAnObject);
        };
        let mut issues = Vec::new();
        let mut items = BTreeMap::new();
        for (key, raw) in entries {
            let Some(id) = parse_item_key(&key) else {
                issues.push(CatalogIssue::InvalidItemKey(key));
                continue;
            };
            match normalize_item(id, raw, &mut issues) {
                Ok(def) => {
                    items.insert(id, def);
                }
                Err(reason) => issues.push(CatalogIssue::MalformedItem { item: id, reason }),
            }
        }
        for issue in &issues {
            warn!(%issue, "catalog data dropped");
        }
        debug!(items = items.len(), issues = issues.len(), "catalog loaded");
        Ok(LoadedCatalog {
            catalog: Catalog { items },
            issues,
        })
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Definitions in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }
}

const ID_KEYS: [&str; 3] = ["id", "item_id", "itemId"];
const QUANTITY_KEYS: [&str; 3] = ["quantity", "amount", "count"];

fn parse_item_key(key: &str) -> Option<ItemId> {
    key.trim().parse::<u64>().ok().map(ItemId)
}

/// Parse a possibility key into a yield quantity.
///
/// Integer keys are taken as-is; decimal keys are truncated. Negative,
/// non-finite and non-numeric keys are rejected.
pub fn parse_yield_key(key: &str) -> Option<u32> {
    let key = key.trim();
    if let Ok(quantity) = key.parse::<u32>() {
        return Some(quantity);
    }
    key.parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q >= 0.0 && *q <= f64::from(u32::MAX))
        .map(|q| q.trunc() as u32)
}

fn positive_integer(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
        .filter(|n| *n > 0)
}

fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        _ => false,
    }
}

/// Value of the first alias that carries one. Zero or empty aliases fall
/// through to the next spelling; when none carries a value the first present
/// one is returned so the caller can report it.
fn first_present<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    let present: Vec<&Value> = keys
        .iter()
        .filter_map(|key| fields.get(*key))
        .filter(|v| !v.is_null())
        .collect();
    present
        .iter()
        .copied()
        .find(|v| !is_blank(v))
        .or_else(|| present.first().copied())
}

fn normalize_consumed(fields: &Map<String, Value>) -> Result<ConsumedItem, String> {
    let id = match first_present(fields, &ID_KEYS) {
        None => return Err("missing item id".to_string()),
        Some(v) => positive_integer(v).ok_or_else(|| format!("item id {v} is not valid"))?,
    };
    // A missing quantity means one unit per craft.
    let quantity = match first_present(fields, &QUANTITY_KEYS) {
        None => 1,
        Some(v) => positive_integer(v).ok_or_else(|| format!("quantity {v} is not positive"))?,
    };
    Ok(ConsumedItem::new(ItemId(id), quantity))
}

/// Present, non-null field.
fn field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

/// Normalizes one catalog entry. Fields of an unexpected shape are dropped
/// one by one; the entry itself survives.
struct EntryNormalizer<'a> {
    item: ItemId,
    issues: &'a mut Vec<CatalogIssue>,
}

impl EntryNormalizer<'_> {
    fn discard(&mut self, field: impl Into<String>, value: &Value) {
        self.issues.push(CatalogIssue::InvalidField {
            item: self.item,
            field: field.into(),
            reason: format!("unexpected {}", json_kind(value)),
        });
    }

    fn text(&mut self, fields: &Map<String, Value>, key: &str) -> Option<String> {
        match field(fields, key)? {
            Value::String(s) => Some(s.clone()),
            other => {
                self.discard(key, other);
                None
            }
        }
    }

    fn integer(&mut self, fields: &Map<String, Value>, key: &str) -> Option<i64> {
        let value = field(fields, key)?;
        let parsed = whole_number(value);
        if parsed.is_none() {
            self.discard(key, value);
        }
        parsed
    }

    fn definition(mut self, fields: &Map<String, Value>) -> ItemDefinition {
        let id = self.item;
        let name = self.text(fields, "name");
        let icon = self.text(fields, "icon").filter(|icon| !icon.is_empty());
        let tier = self.integer(fields, "tier");
        let rarity = self.integer(fields, "rarity");
        let extraction_skill = self.integer(fields, "extraction_skill");
        let mut recipes = Vec::new();
        match field(fields, "recipes") {
            None => {}
            Some(Value::Array(raw)) => {
                for (index, raw_recipe) in raw.iter().enumerate() {
                    if let Some(recipe) = self.recipe(index, raw_recipe) {
                        recipes.push(recipe);
                    }
                }
            }
            Some(other) => self.discard("recipes", other),
        }
        ItemDefinition {
            id,
            name: name.unwrap_or_else(|| format!("Item {id}")),
            icon,
            tier,
            rarity,
            extraction_skill,
            recipes,
        }
    }

    fn recipe(&mut self, index: usize, raw: &Value) -> Option<Recipe> {
        let Value::Object(fields) = raw else {
            self.discard(format!("recipes[{index}]"), raw);
            return None;
        };

        let mut consumed_items = Vec::new();
        match field(fields, "consumed_items") {
            None => {}
            Some(Value::Array(entries)) => {
                for (slot, entry) in entries.iter().enumerate() {
                    let normalized = match entry {
                        Value::Object(material) => normalize_consumed(material),
                        other => {
                            Err(format!("expected an object, found {}", json_kind(other)))
                        }
                    };
                    match normalized {
                        Ok(consumed) => consumed_items.push(consumed),
                        Err(reason) => self.issues.push(CatalogIssue::InvalidConsumedItem {
                            item: self.item,
                            recipe: index,
                            index: slot,
                            reason,
                        }),
                    }
                }
            }
            Some(other) => self.discard(format!("recipes[{index}].consumed_items"), other),
        }

        let mut level_requirements = Vec::new();
        match field(fields, "level_requirements") {
            None => {}
            Some(Value::Array(levels)) => {
                for (slot, level) in levels.iter().enumerate() {
                    match whole_number(level) {
                        Some(level) => level_requirements.push(level),
                        None => self.discard(
                            format!("recipes[{index}].level_requirements[{slot}]"),
                            level,
                        ),
                    }
                }
            }
            Some(other) => self.discard(format!("recipes[{index}].level_requirements"), other),
        }

        let output_quantity = field(fields, "output_quantity")
            .and_then(positive_integer)
            .map_or(0, |q| u32::try_from(q).unwrap_or(u32::MAX));

        let mut possibilities = Vec::new();
        match field(fields, "possibilities") {
            None => {}
            Some(Value::Object(table)) => {
                for (key, weight) in table {
                    match parse_yield_key(key) {
                        Some(quantity) => possibilities.push(YieldWeight {
                            quantity,
                            weight: weight.as_f64().unwrap_or(0.0),
                        }),
                        None => self.issues.push(CatalogIssue::InvalidPossibility {
                            item: self.item,
                            recipe: index,
                            key: key.clone(),
                        }),
                    }
                }
            }
            // Anything but a table means a fixed yield.
            Some(other) => self.discard(format!("recipes[{index}].possibilities"), other),
        }
        possibilities.sort_by_key(|p| p.quantity);

        Some(Recipe {
            consumed_items,
            level_requirements,
            output_quantity,
            possibilities,
        })
    }
}

fn normalize_item(
    id: ItemId,
    raw: Value,
    issues: &mut Vec<CatalogIssue>,
) -> Result<ItemDefinition, String> {
    let Value::Object(fields) = raw else {
        return Err(format!("expected an object, found {}", json_kind(&raw)));
    };
    Ok(EntryNormalizer { item: id, issues }.definition(&fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn load(text: &str) -> LoadedCatalog {
        Catalog::from_json_str(text).unwrap()
    }

    #[test]
    fn consumed_item_aliases_normalize_to_one_shape() {
        let loaded = load(
            r#"{
                "10": {"name": "Plank", "recipes": [{
                    "consumed_items": [
                        {"id": 1, "quantity": 2},
                        {"item_id": 2, "amount": 3},
                        {"itemId": 3, "count": 4},
                        {"id": 4}
                    ],
                    "output_quantity": 1
                }]}
            }"#,
        );
        assert!(loaded.issues.is_empty());
        let plank = loaded.catalog.get(ItemId(10)).unwrap();
        let consumed = &plank.primary_recipe().unwrap().consumed_items;
        assert_eq!(
            consumed,
            &vec![
                ConsumedItem::new(ItemId(1), 2),
                ConsumedItem::new(ItemId(2), 3),
                ConsumedItem::new(ItemId(3), 4),
                ConsumedItem::new(ItemId(4), 1),
            ]
        );
    }

    #[test]
    fn malformed_consumed_items_are_dropped_with_issue() {
        let loaded = load(
            r#"{
                "5": {"name": "Rope", "recipes": [{
                    "consumed_items": [
                        {"quantity": 2},
                        {"id": "abc", "quantity": 1},
                        {"id": 7, "quantity": 0},
                        {"id": 8, "quantity": -3},
                        {"id": 9, "quantity": 2}
                    ]
                }]}
            }"#,
        );
        assert_eq!(loaded.issues.len(), 4);
        assert!(loaded.issues.iter().all(|i| matches!(
            i,
            CatalogIssue::InvalidConsumedItem { item: ItemId(5), recipe: 0, .. }
        )));
        let rope = loaded.catalog.get(ItemId(5)).unwrap();
        assert_eq!(
            rope.recipes[0].consumed_items,
            vec![ConsumedItem::new(ItemId(9), 2)]
        );
    }

    #[test]
    fn possibilities_are_parsed_and_sorted() {
        let loaded = load(
            r#"{
                "3": {"name": "Berries", "recipes": [{
                    "consumed_items": [],
                    "output_quantity": 3,
                    "possibilities": {"4": 0.25, "2": 0.5, "3.0": 0.25, "lots": 1}
                }]}
            }"#,
        );
        assert_eq!(loaded.issues.len(), 1);
        let recipe = &loaded.catalog.get(ItemId(3)).unwrap().recipes[0];
        let quantities: Vec<u32> = recipe.possibilities.iter().map(|p| p.quantity).collect();
        assert_eq!(quantities, vec![2, 3, 4]);
        assert_eq!(recipe.output_quantity, 3);
    }

    #[test]
    fn bad_keys_and_entries_do_not_abort_loading() {
        let loaded = load(
            r#"{
                "oak": {"name": "Oak"},
                "1": {"name": "Stone", "recipes": []},
                "2": "nope",
                "3": {"recipes": []}
            }"#,
        );
        assert_eq!(loaded.catalog.len(), 2);
        assert!(loaded.catalog.get(ItemId(1)).unwrap().is_base());
        assert_eq!(loaded.catalog.get(ItemId(3)).unwrap().name, "Item 3");
        assert!(loaded
            .issues
            .contains(&CatalogIssue::InvalidItemKey("oak".to_string())));
        assert!(loaded
            .issues
            .iter()
            .any(|i| matches!(i, CatalogIssue::MalformedItem { item: ItemId(2), .. })));
    }

    #[test]
    fn zero_aliases_fall_through_to_the_next_spelling() {
        let loaded = load(
            r#"{
                "10": {"name": "Plank", "recipes": [{
                    "consumed_items": [
                        {"id": 0, "item_id": 5},
                        {"itemId": 6, "quantity": 0, "amount": 2},
                        {"id": 0}
                    ]
                }]}
            }"#,
        );
        let plank = loaded.catalog.get(ItemId(10)).unwrap();
        assert_eq!(
            plank.recipes[0].consumed_items,
            vec![ConsumedItem::new(ItemId(5), 1), ConsumedItem::new(ItemId(6), 2)]
        );
        assert_eq!(loaded.issues.len(), 1);
        assert!(matches!(
            loaded.issues[0],
            CatalogIssue::InvalidConsumedItem { index: 2, .. }
        ));
    }

    #[test]
    fn null_recipes_make_a_base_material() {
        let loaded = load(r#"{"7": {"name": "Clay", "recipes": null, "icon": null}}"#);
        assert!(loaded.issues.is_empty());
        let clay = loaded.catalog.get(ItemId(7)).unwrap();
        assert!(clay.is_base());
        assert_eq!(clay.icon, None);
    }

    #[test]
    fn non_table_possibilities_fall_back_to_output_quantity() {
        let loaded = load(
            r#"{
                "8": {"name": "Brick", "recipes": [{
                    "consumed_items": [{"id": 7, "quantity": 2}],
                    "output_quantity": 3,
                    "possibilities": []
                }]}
            }"#,
        );
        let recipe = &loaded.catalog.get(ItemId(8)).unwrap().recipes[0];
        assert!(recipe.possibilities.is_empty());
        assert_eq!(recipe.output_quantity, 3);
        assert_eq!(recipe.consumed_items, vec![ConsumedItem::new(ItemId(7), 2)]);
        assert_eq!(
            loaded.issues,
            vec![CatalogIssue::InvalidField {
                item: ItemId(8),
                field: "recipes[0].possibilities".to_string(),
                reason: "unexpected array".to_string(),
            }]
        );
    }

    #[test]
    fn off_type_fields_are_dropped_but_the_item_is_kept() {
        let loaded = load(
            r#"{
                "9": {
                    "name": "Lantern",
                    "icon": 5,
                    "tier": 1.5,
                    "rarity": "rare",
                    "extraction_skill": 2.0,
                    "recipes": [
                        "broken",
                        {
                            "consumed_items": [{"id": 7}, 3],
                            "level_requirements": [1, 2.5],
                            "output_quantity": 1
                        }
                    ]
                }
            }"#,
        );
        let lantern = loaded.catalog.get(ItemId(9)).unwrap();
        assert_eq!(lantern.name, "Lantern");
        assert_eq!((lantern.icon.as_deref(), lantern.tier, lantern.rarity), (None, None, None));
        assert_eq!(lantern.extraction_skill, Some(2));
        assert_eq!(lantern.recipes.len(), 1);
        let recipe = lantern.primary_recipe().unwrap();
        assert_eq!(recipe.consumed_items, vec![ConsumedItem::new(ItemId(7), 1)]);
        assert_eq!(recipe.level_requirements, vec![1]);

        let dropped: Vec<&str> = loaded
            .issues
            .iter()
            .filter_map(|issue| match issue {
                CatalogIssue::InvalidField { field, .. } => Some(field.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            dropped,
            vec!["icon", "tier", "rarity", "recipes[0]", "recipes[1].level_requirements[1]"]
        );
        assert!(loaded.issues.iter().any(|i| matches!(
            i,
            CatalogIssue::InvalidConsumedItem { recipe: 1, index: 1, .. }
        )));
    }

    #[test]
    fn document_must_be_an_object() {
        assert!(matches!(
            Catalog::from_json_str("[1, 2, 3]"),
            Err(CatalogError::NotAnObject)
        ));
        assert!(matches!(
            Catalog::from_json_str("{"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn sample_catalog_loads_cleanly() {
        let path =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/catalog/sample.json");
        let text = std::fs::read_to_string(path).unwrap();
        let loaded = Catalog::from_json_str(&text).unwrap();
        assert!(loaded.issues.is_empty(), "{:?}", loaded.issues);
        let sword = loaded.catalog.get(ItemId(1001)).unwrap();
        assert_eq!(sword.name, "Iron Sword");
        assert!(!sword.is_base());
        assert_eq!(sword.icon.as_deref(), Some("Items/IronSword"));
    }

    #[test]
    fn yield_key_parsing() {
        assert_eq!(parse_yield_key("2"), Some(2));
        assert_eq!(parse_yield_key(" 7 "), Some(7));
        assert_eq!(parse_yield_key("2.9"), Some(2));
        assert_eq!(parse_yield_key("0"), Some(0));
        assert_eq!(parse_yield_key("-1"), None);
        assert_eq!(parse_yield_key("NaN"), None);
        assert_eq!(parse_yield_key(""), None);
    }

    proptest! {
        #[test]
        fn integer_yield_keys_are_exact(q in any::<u32>()) {
            prop_assert_eq!(parse_yield_key(&q.to_string()), Some(q));
        }

        #[test]
        fn positive_quantities_survive_normalization(id in 1u64..1_000_000, qty in 1u64..10_000) {
            let mut fields = Map::new();
            fields.insert("item_id".to_string(), Value::from(id));
            fields.insert("count".to_string(), Value::from(qty));
            prop_assert_eq!(normalize_consumed(&fields), Ok(ConsumedItem::new(ItemId(id), qty)));
        }
    }
}
