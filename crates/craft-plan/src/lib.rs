#![deny(warnings)]

//! Material resolution for crafting plans.
//!
//! Given a catalog and a set of wanted items, this crate works out which
//! materials have to be gathered and which intermediate items have to be
//! crafted along the way:
//! - [`expand`] builds the full production plan, split into base and
//!   intermediate materials and tagged with crafting depth
//! - [`calculate_materials`] builds a flat shopping list that accounts for
//!   stock already on hand
//! - [`resolve_yield`] gives the output range of a single craft
//!
//! Resolution never fails. Catalog defects are reported through a
//! [`DiagnosticSink`] and resolved locally.

mod diagnostics;
mod expand;
mod shopping;
mod yields;

pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use expand::{expand, ExpandOptions, MAX_DEPTH};
pub use shopping::{calculate_materials, OwnedQuantities, SHOPPING_NESTING_LIMIT};
pub use yields::{output_range_of, resolve_yield, YieldRange};

use craft_core::{ItemDefinition, ItemId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Aggregated demand for one item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequirement {
    pub id: ItemId,
    pub name: String,
    /// Units required, summed over every path that reaches the item.
    pub quantity: u64,
    pub icon: Option<String>,
    /// True for craftable items needed below a wish-list root.
    pub is_intermediate: bool,
    /// Recipe-expansion hops from the nearest wish-list root.
    pub depth: u32,
    /// Units on hand (shopping lists only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_quantity: Option<u64>,
    /// Units still missing after stock (shopping lists only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needed_quantity: Option<u64>,
    /// Per-craft yield of the item's recipe (intermediates only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_range: Option<YieldRange>,
}

impl MaterialRequirement {
    pub(crate) fn for_item(def: &ItemDefinition, depth: u32) -> Self {
        Self {
            id: def.id,
            name: def.name.clone(),
            quantity: 0,
            icon: def.icon.clone(),
            is_intermediate: false,
            depth,
            owned_quantity: None,
            needed_quantity: None,
            output_range: None,
        }
    }

    pub(crate) fn placeholder(id: ItemId, name: String, depth: u32) -> Self {
        Self {
            id,
            name,
            quantity: 0,
            icon: None,
            is_intermediate: false,
            depth,
            owned_quantity: None,
            needed_quantity: None,
            output_range: None,
        }
    }
}

/// Result of [`expand`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPlan {
    /// Items without a recipe, plus items cut off by the cycle or depth
    /// guard. Sorted by name.
    pub base_materials: Vec<MaterialRequirement>,
    /// Craftable items below the wish-list roots. Sorted by depth, then name.
    pub intermediate_materials: Vec<MaterialRequirement>,
}

impl MaterialPlan {
    pub fn is_empty(&self) -> bool {
        self.base_materials.is_empty() && self.intermediate_materials.is_empty()
    }

    pub fn base(&self, id: ItemId) -> Option<&MaterialRequirement> {
        self.base_materials.iter().find(|m| m.id == id)
    }

    pub fn intermediate(&self, id: ItemId) -> Option<&MaterialRequirement> {
        self.intermediate_materials.iter().find(|m| m.id == id)
    }

    /// Intermediate materials grouped by depth, shallowest first.
    pub fn intermediates_by_depth(&self) -> BTreeMap<u32, Vec<&MaterialRequirement>> {
        let mut groups: BTreeMap<u32, Vec<&MaterialRequirement>> = BTreeMap::new();
        for material in &self.intermediate_materials {
            groups.entry(material.depth).or_default().push(material);
        }
        groups
    }
}

/// Case-insensitive name order with exact name and id as tie-breakers.
pub(crate) fn by_name(a: &MaterialRequirement, b: &MaterialRequirement) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(id: u64, name: &str, depth: u32) -> MaterialRequirement {
        let mut r = MaterialRequirement::placeholder(ItemId(id), name.to_string(), depth);
        r.is_intermediate = true;
        r
    }

    #[test]
    fn names_sort_case_insensitively() {
        let mut v = vec![req(1, "oak", 0), req(2, "Iron", 0), req(3, "Oak", 0)];
        v.sort_by(by_name);
        let names: Vec<&str> = v.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Iron", "Oak", "oak"]);
    }

    #[test]
    fn groups_intermediates_by_depth() {
        let plan = MaterialPlan {
            base_materials: vec![],
            intermediate_materials: vec![req(1, "A", 1), req(2, "B", 1), req(3, "C", 3)],
        };
        let groups = plan.intermediates_by_depth();
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(groups[&1].len(), 2);
        assert_eq!(groups[&3][0].name, "C");
    }

    #[test]
    fn plan_serializes_with_camel_case_fields() {
        let plan = MaterialPlan {
            base_materials: vec![req(7, "Ore", 2)],
            intermediate_materials: vec![],
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["baseMaterials"][0]["isIntermediate"], true);
        assert!(json["baseMaterials"][0].get("ownedQuantity").is_none());
    }
}
