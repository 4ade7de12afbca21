use craft_core::{Catalog, ConsumedItem, ItemDefinition, ItemId, Recipe};
use craft_plan::{calculate_materials, expand, ExpandOptions, NullSink, OwnedQuantities};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// `layers` tiers of `width` items; every item consumes three items of the next tier.
fn build_catalog(layers: u64, width: u64) -> Catalog {
    let mut items = Vec::with_capacity((layers * width) as usize);
    for layer in 0..layers {
        for slot in 0..width {
            let id = layer * width + slot + 1;
            let def = ItemDefinition::new(ItemId(id), format!("L{layer} #{slot}"));
            if layer + 1 == layers {
                items.push(def);
                continue;
            }
            let next = (layer + 1) * width + 1;
            let consumed = (0..3)
                .map(|k| ConsumedItem::new(ItemId(next + (slot + k) % width), k + 1))
                .collect();
            let recipe = Recipe::new(consumed, 2).with_possibilities([(1, 0.5), (3, 0.5)]);
            items.push(def.with_recipe(recipe));
        }
    }
    Catalog::from_items(items)
}

fn bench_expand(c: &mut Criterion) {
    let catalog = build_catalog(8, 32);
    let roots: Vec<(ItemId, i64)> = (1..=8).map(|id| (ItemId(id), 10)).collect();
    c.bench_function("expand 8 roots x 8 tiers", |b| {
        b.iter(|| {
            let plan = expand(
                roots.iter().copied(),
                &catalog,
                &ExpandOptions::default(),
                &mut NullSink,
            );
            black_box(plan)
        })
    });
    let owned = OwnedQuantities::new();
    c.bench_function("shopping list 8 roots x 8 tiers", |b| {
        b.iter(|| {
            black_box(calculate_materials(
                roots.iter().copied(),
                &catalog,
                &owned,
                &mut NullSink,
            ))
        })
    });
}

criterion_group!(benches, bench_expand);
criterion_main!(benches);
