#![deny(warnings)]

//! Wish-list state and the crafting session that keeps a material plan in
//! step with it.

use craft_core::{Catalog, ItemDefinition, ItemId};
use craft_plan::{
    calculate_materials, expand, output_range_of, Diagnostic, DiagnosticSink, ExpandOptions,
    MaterialPlan, MaterialRequirement, OwnedQuantities, TracingSink, YieldRange,
};
use std::sync::Arc;
use tracing::{debug, debug_span};

/// A wanted item.
#[derive(Clone, Debug, PartialEq)]
pub struct WishListEntry {
    pub id: ItemId,
    pub item: ItemDefinition,
    /// Units wanted. Not validated on `add`.
    pub quantity: i64,
    /// Units already on hand.
    pub owned_quantity: u64,
}

/// Ordered wish-list with one entry per item, plus stock of materials that
/// are not on the list themselves.
///
/// Every mutating call bumps [`WishList::revision`], which dependents use to
/// detect that derived state has to be recomputed.
#[derive(Clone, Debug, Default)]
pub struct WishList {
    entries: Vec<WishListEntry>,
    material_owned: OwnedQuantities,
    revision: u64,
}

impl WishList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[WishListEntry] {
        &self.entries
    }

    pub fn get(&self, id: ItemId) -> Option<&WishListEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counter advanced by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Add `quantity` units of `item`, merging with an existing entry.
    pub fn add(&mut self, item: &ItemDefinition, quantity: i64) {
        match self.entries.iter_mut().find(|e| e.id == item.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
            None => self.entries.push(WishListEntry {
                id: item.id,
                item: item.clone(),
                quantity,
                owned_quantity: 0,
            }),
        }
        debug!(item = %item.id, quantity, "wish-list add");
        self.touch();
    }

    pub fn remove(&mut self, id: ItemId) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            debug!(item = %id, "wish-list remove");
            self.touch();
        }
    }

    /// Replace the wanted quantity. A quantity of zero or less removes the entry.
    pub fn set_quantity(&mut self, id: ItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.quantity = quantity;
            self.touch();
        }
    }

    /// Record stock of a wish-listed item. Negative values clamp to zero.
    pub fn set_owned_quantity(&mut self, id: ItemId, owned: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.owned_quantity = clamp_owned(owned);
            self.touch();
        }
    }

    /// Record stock of any material. Negative values clamp to zero.
    pub fn set_material_owned_quantity(&mut self, id: ItemId, owned: i64) {
        self.material_owned.insert(id, clamp_owned(owned));
        self.touch();
    }

    pub fn material_owned(&self) -> &OwnedQuantities {
        &self.material_owned
    }

    /// Drop every entry. Material stock is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("wish-list cleared");
        self.touch();
    }

    /// `(item, quantity)` pairs in list order.
    pub fn demands(&self) -> impl Iterator<Item = (ItemId, i64)> + '_ {
        self.entries.iter().map(|e| (e.id, e.quantity))
    }

    /// Material stock merged with entry stock; entries win on conflict.
    pub fn owned_quantities(&self) -> OwnedQuantities {
        let mut owned = self.material_owned.clone();
        for entry in &self.entries {
            owned.insert(entry.id, entry.owned_quantity);
        }
        owned
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn clamp_owned(owned: i64) -> u64 {
    u64::try_from(owned).unwrap_or(0)
}

struct CachedPlan {
    revision: u64,
    plan: MaterialPlan,
    diagnostics: Vec<Diagnostic>,
}

/// Owns a catalog snapshot and a wish-list, and serves the material plan
/// for the current list. The plan is recomputed lazily whenever the list
/// has changed since the last read.
pub struct CraftingSession {
    catalog: Arc<Catalog>,
    options: ExpandOptions,
    wish_list: WishList,
    cached: Option<CachedPlan>,
    recomputations: u64,
}

impl CraftingSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            options: ExpandOptions::default(),
            wish_list: WishList::new(),
            cached: None,
            recomputations: 0,
        }
    }

    pub fn with_options(mut self, options: ExpandOptions) -> Self {
        self.options = options;
        self.cached = None;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn wish_list(&self) -> &WishList {
        &self.wish_list
    }

    /// Add a catalog item by id. Returns false when the id is unknown.
    pub fn add(&mut self, id: ItemId, quantity: i64) -> bool {
        let catalog = Arc::clone(&self.catalog);
        match catalog.get(id) {
            Some(item) => {
                self.wish_list.add(item, quantity);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ItemId) {
        self.wish_list.remove(id);
    }

    pub fn set_quantity(&mut self, id: ItemId, quantity: i64) {
        self.wish_list.set_quantity(id, quantity);
    }

    pub fn set_owned_quantity(&mut self, id: ItemId, owned: i64) {
        self.wish_list.set_owned_quantity(id, owned);
    }

    pub fn set_material_owned_quantity(&mut self, id: ItemId, owned: i64) {
        self.wish_list.set_material_owned_quantity(id, owned);
    }

    pub fn clear(&mut self) {
        self.wish_list.clear();
    }

    /// Production plan for the current wish-list.
    pub fn plan(&mut self) -> &MaterialPlan {
        &self.refresh().plan
    }

    /// Diagnostics raised while computing the current plan.
    pub fn diagnostics(&mut self) -> &[Diagnostic] {
        &self.refresh().diagnostics
    }

    /// Number of times the plan has been computed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Shopping list for the current wish-list, net of all recorded stock.
    pub fn shopping_list(&self) -> Vec<MaterialRequirement> {
        calculate_materials(
            self.wish_list.demands(),
            &self.catalog,
            &self.wish_list.owned_quantities(),
            &mut TracingSink,
        )
    }

    pub fn output_range(&self, id: ItemId) -> Option<YieldRange> {
        output_range_of(&self.catalog, id)
    }

    fn refresh(&mut self) -> &CachedPlan {
        let revision = self.wish_list.revision();
        if self.cached.as_ref().is_some_and(|c| c.revision != revision) {
            self.cached = None;
        }
        let (catalog, options, wish_list) = (&self.catalog, &self.options, &self.wish_list);
        let recomputations = &mut self.recomputations;
        self.cached.get_or_insert_with(|| {
            *recomputations += 1;
            compute_plan(catalog, options, wish_list)
        })
    }
}

fn compute_plan(catalog: &Catalog, options: &ExpandOptions, wish_list: &WishList) -> CachedPlan {
    let span = debug_span!("material_plan", revision = wish_list.revision());
    let _enter = span.enter();
    let mut diagnostics = Vec::new();
    let plan = expand(wish_list.demands(), catalog, options, &mut diagnostics);
    let mut log = TracingSink;
    for diagnostic in &diagnostics {
        log.record(diagnostic.clone());
    }
    debug!(
        base = plan.base_materials.len(),
        intermediate = plan.intermediate_materials.len(),
        diagnostics = diagnostics.len(),
        "material plan recomputed"
    );
    CachedPlan {
        revision: wish_list.revision(),
        plan,
        diagnostics,
    }
}
