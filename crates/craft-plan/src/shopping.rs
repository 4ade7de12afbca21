//! Stock-aware shopping list.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::yields::resolve_yield;
use crate::{by_name, MaterialRequirement};
use craft_core::{Catalog, ItemId};
use std::collections::BTreeMap;

/// Units on hand per item.
pub type OwnedQuantities = BTreeMap<ItemId, u64>;

/// Nesting at which shopping-list expansion gives up on a branch.
///
/// This variant has no cycle detection; the bound only keeps a cyclic
/// catalog from exhausting the stack.
pub const SHOPPING_NESTING_LIMIT: u32 = 64;

/// Flat list of base materials still to gather for `roots`, net of stock.
///
/// Before a craftable item is expanded its demand is reduced by the units
/// owned; if stock covers it, the item is not expanded at all. Base
/// materials report the gross quantity plus `owned_quantity` and
/// `needed_quantity`. Items missing from the catalog are skipped. The
/// result is sorted by name.
pub fn calculate_materials<I, S>(
    roots: I,
    catalog: &Catalog,
    owned: &OwnedQuantities,
    sink: &mut S,
) -> Vec<MaterialRequirement>
where
    I: IntoIterator<Item = (ItemId, i64)>,
    S: DiagnosticSink + ?Sized,
{
    let mut list = ShoppingList {
        catalog,
        owned,
        materials: BTreeMap::new(),
    };
    for (item, quantity) in roots {
        if let Ok(needed) = u64::try_from(quantity) {
            if needed > 0 {
                list.visit(item, needed, 0, sink);
            }
        }
    }
    let mut materials: Vec<MaterialRequirement> = list.materials.into_values().collect();
    materials.sort_by(by_name);
    materials
}

struct ShoppingList<'c> {
    catalog: &'c Catalog,
    owned: &'c OwnedQuantities,
    materials: BTreeMap<ItemId, MaterialRequirement>,
}

impl ShoppingList<'_> {
    fn visit<S>(&mut self, item: ItemId, needed: u64, nesting: u32, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        let catalog = self.catalog;
        let Some(def) = catalog.get(item) else {
            sink.record(Diagnostic::UnknownItem { item });
            return;
        };
        let owned = self.owned.get(&item).copied().unwrap_or(0);
        let Some(recipe) = def.primary_recipe() else {
            let entry = self.materials.entry(item).or_insert_with(|| {
                let mut entry = MaterialRequirement::for_item(def, 0);
                entry.owned_quantity = Some(owned);
                entry
            });
            entry.quantity = entry.quantity.saturating_add(needed);
            entry.owned_quantity = Some(owned);
            entry.needed_quantity = Some(entry.quantity.saturating_sub(owned));
            return;
        };

        let to_craft = needed.saturating_sub(owned);
        if to_craft == 0 {
            return;
        }
        if nesting >= SHOPPING_NESTING_LIMIT {
            sink.record(Diagnostic::NestingLimitReached { item, nesting });
            return;
        }
        let crafts = resolve_yield(recipe).crafts_needed(to_craft);
        for (index, material) in recipe.consumed_items.iter().enumerate() {
            if material.item.0 == 0 || material.quantity == 0 {
                sink.record(Diagnostic::InvalidMaterial {
                    parent: item,
                    index,
                    material: material.item,
                    quantity: material.quantity,
                });
                continue;
            }
            let demand = material.quantity.saturating_mul(crafts);
            self.visit(material.item, demand, nesting + 1, sink);
        }
    }
}
