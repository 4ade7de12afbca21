//! Yield resolution for a single crafting action.

use craft_core::{Catalog, ItemId, Recipe};
use serde::{Deserialize, Serialize};

/// Output quantity range of one craft. Invariant: `1 <= min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldRange {
    pub min: u32,
    pub max: u32,
}

impl YieldRange {
    /// A yield that never varies.
    pub fn fixed(quantity: u32) -> Self {
        let quantity = quantity.max(1);
        Self {
            min: quantity,
            max: quantity,
        }
    }

    /// Crafts required to be sure of `needed` units, assuming every craft
    /// produces the minimum.
    pub fn crafts_needed(&self, needed: u64) -> u64 {
        needed.div_ceil(u64::from(self.min.max(1)))
    }
}

/// Achievable yield range of `recipe`.
///
/// A non-empty possibility table overrides `output_quantity`. A missing or
/// zero `output_quantity` counts as 1.
pub fn resolve_yield(recipe: &Recipe) -> YieldRange {
    let mut quantities = recipe.possibilities.iter().map(|p| p.quantity);
    if let Some(first) = quantities.next() {
        let (min, max) = quantities.fold((first, first), |(lo, hi), q| (lo.min(q), hi.max(q)));
        return YieldRange {
            min: min.max(1),
            max: max.max(1),
        };
    }
    YieldRange::fixed(recipe.output_quantity)
}

/// Yield range of the recipe used for `item`, or `None` for base materials
/// and unknown ids.
pub fn output_range_of(catalog: &Catalog, item: ItemId) -> Option<YieldRange> {
    catalog
        .get(item)?
        .primary_recipe()
        .map(resolve_yield)
}
