//! Full production-plan expansion.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::yields::resolve_yield;
use crate::{by_name, MaterialPlan, MaterialRequirement};
use craft_core::{Catalog, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Deepest level that is still expanded. Anything below is cut off and
/// reported as a base material.
pub const MAX_DEPTH: u32 = 10;

/// Tuning for [`expand`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandOptions {
    /// Depth guard; items deeper than this are not expanded.
    pub max_depth: u32,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

/// Expand wish-list roots `(item, quantity)` into base and intermediate
/// materials.
///
/// Each root is expanded depth-first through the first recipe of every
/// craftable item, using the worst-case yield to count crafts. Quantities
/// for an item reached through several paths are summed; its depth is the
/// shallowest one seen. Roots with a non-positive quantity are ignored.
///
/// Cycles (an item repeating within its own path) and chains deeper than
/// `options.max_depth` are cut at the offending item, which is reported as
/// a base material. Unknown ids become `"Unknown Item <id>"` placeholders.
/// Every such event is recorded in `sink`.
pub fn expand<I, S>(
    roots: I,
    catalog: &Catalog,
    options: &ExpandOptions,
    sink: &mut S,
) -> MaterialPlan
where
    I: IntoIterator<Item = (ItemId, i64)>,
    S: DiagnosticSink + ?Sized,
{
    let mut expansion = Expansion::new(catalog, options.max_depth);
    let mut root_ids = BTreeSet::new();
    let mut path = Vec::new();
    for (item, quantity) in roots {
        root_ids.insert(item);
        let Ok(needed) = u64::try_from(quantity) else {
            continue;
        };
        expansion.visit(item, needed, 0, &mut path, sink);
    }
    expansion.finish(&root_ids)
}

/// Accumulators threaded through one expansion.
struct Expansion<'c> {
    catalog: &'c Catalog,
    max_depth: u32,
    base: BTreeMap<ItemId, MaterialRequirement>,
    intermediate: BTreeMap<ItemId, MaterialRequirement>,
    /// Items cut off by the cycle or depth guard.
    cut: BTreeSet<ItemId>,
}

impl<'c> Expansion<'c> {
    fn new(catalog: &'c Catalog, max_depth: u32) -> Self {
        Self {
            catalog,
            max_depth,
            base: BTreeMap::new(),
            intermediate: BTreeMap::new(),
            cut: BTreeSet::new(),
        }
    }

    fn visit<S>(
        &mut self,
        item: ItemId,
        needed: u64,
        depth: u32,
        path: &mut Vec<ItemId>,
        sink: &mut S,
    ) where
        S: DiagnosticSink + ?Sized,
    {
        if needed == 0 {
            return;
        }
        if path.contains(&item) {
            let mut cycle = path.clone();
            cycle.push(item);
            sink.record(Diagnostic::CycleDetected { item, path: cycle });
            self.cut_off(item, needed, depth);
            return;
        }
        if depth > self.max_depth {
            sink.record(Diagnostic::DepthLimitReached { item, depth });
            self.cut_off(item, needed, depth);
            return;
        }
        let catalog = self.catalog;
        let Some(def) = catalog.get(item) else {
            sink.record(Diagnostic::UnknownItem { item });
            accumulate(&mut self.base, item, needed, depth, || {
                MaterialRequirement::placeholder(item, format!("Unknown Item {item}"), depth)
            });
            return;
        };
        let Some(recipe) = def.primary_recipe() else {
            accumulate(&mut self.base, item, needed, depth, || {
                MaterialRequirement::for_item(def, depth)
            });
            return;
        };
        let range = resolve_yield(recipe);
        if depth > 0 {
            accumulate(&mut self.intermediate, item, needed, depth, || {
                let mut entry = MaterialRequirement::for_item(def, depth);
                entry.is_intermediate = true;
                entry.output_range = Some(range);
                entry
            });
        }

        let crafts = range.crafts_needed(needed);
        path.push(item);
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
            self.visit(material.item, demand, depth + 1, path, sink);
        }
        path.pop();
    }

    fn cut_off(&mut self, item: ItemId, needed: u64, depth: u32) {
        let catalog = self.catalog;
        accumulate(&mut self.base, item, needed, depth, || match catalog.get(item) {
            Some(def) => MaterialRequirement::for_item(def, depth),
            None => MaterialRequirement::placeholder(item, format!("Item {item}"), depth),
        });
        self.cut.insert(item);
    }

    fn finish(mut self, roots: &BTreeSet<ItemId>) -> MaterialPlan {
        // An item lives in exactly one bucket: cut-off items that were also
        // crafted elsewhere in the tree are reported as base materials only.
        for id in &self.cut {
            if let Some(crafted) = self.intermediate.remove(id) {
                if let Some(base) = self.base.get_mut(id) {
                    base.quantity = base.quantity.saturating_add(crafted.quantity);
                    base.depth = base.depth.min(crafted.depth);
                }
            }
        }
        self.intermediate.retain(|id, _| !roots.contains(id));

        let mut base_materials: Vec<MaterialRequirement> = self.base.into_values().collect();
        base_materials.sort_by(by_name);
        let mut intermediate_materials: Vec<MaterialRequirement> =
            self.intermediate.into_values().collect();
        intermediate_materials.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| by_name(a, b)));
        MaterialPlan {
            base_materials,
            intermediate_materials,
        }
    }
}

fn accumulate<F>(
    bucket: &mut BTreeMap<ItemId, MaterialRequirement>,
    item: ItemId,
    needed: u64,
    depth: u32,
    create: F,
) where
    F: FnOnce() -> MaterialRequirement,
{
    let entry = bucket.entry(item).or_insert_with(create);
    entry.quantity = entry.quantity.saturating_add(needed);
    entry.depth = entry.depth.min(depth);
}
