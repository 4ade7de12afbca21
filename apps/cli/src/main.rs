#![deny(warnings)]

//! Headless planner: loads a catalog and a wish-list and prints what has to
//! be gathered and crafted.

use anyhow::{Context, Result};
use craft_core::{Catalog, ItemId};
use craft_plan::{ExpandOptions, MaterialPlan, MaterialRequirement};
use craft_todo::CraftingSession;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

struct Args {
    catalog: PathBuf,
    wishlist: PathBuf,
    config: Option<PathBuf>,
    max_depth: Option<u32>,
    shopping: bool,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        catalog: PathBuf::from("assets/catalog/sample.json"),
        wishlist: PathBuf::from("assets/wishlists/sample.yaml"),
        config: None,
        max_depth: None,
        shopping: false,
        json: false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--catalog" => {
                if let Some(path) = it.next() {
                    args.catalog = path.into();
                }
            }
            "--wishlist" => {
                if let Some(path) = it.next() {
                    args.wishlist = path.into();
                }
            }
            "--config" => args.config = it.next().map(PathBuf::from),
            "--max-depth" => args.max_depth = it.next().and_then(|s| s.parse().ok()),
            "--shopping" => args.shopping = true,
            "--json" => args.json = true,
            other => warn!(arg = other, "ignoring unknown argument"),
        }
    }
    args
}

/// Wish-list input document.
#[derive(Debug, Deserialize)]
struct WishListDocument {
    #[serde(default)]
    items: Vec<WishListItem>,
    /// Stock of materials that are not on the list.
    #[serde(default)]
    materials_owned: BTreeMap<u64, i64>,
}

#[derive(Debug, Deserialize)]
struct WishListItem {
    id: u64,
    #[serde(default = "one")]
    quantity: i64,
    #[serde(default)]
    owned: i64,
}

fn one() -> i64 {
    1
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let loaded = Catalog::from_json_str(&text)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    if !loaded.issues.is_empty() {
        warn!(issues = loaded.issues.len(), "catalog loaded with dropped entries");
    }
    Ok(loaded.catalog)
}

fn load_options(path: Option<&Path>) -> Result<ExpandOptions> {
    let Some(path) = path else {
        return Ok(ExpandOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn load_wishlist(path: &Path, session: &mut CraftingSession) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading wish-list {}", path.display()))?;
    let doc: WishListDocument = serde_yaml::from_str(&text)
        .with_context(|| format!("parsing wish-list {}", path.display()))?;
    for entry in &doc.items {
        let id = ItemId(entry.id);
        if !session.add(id, entry.quantity) {
            warn!(item = %id, "wish-list item not in catalog, skipped");
            continue;
        }
        session.set_owned_quantity(id, entry.owned);
    }
    for (id, owned) in &doc.materials_owned {
        session.set_material_owned_quantity(ItemId(*id), *owned);
    }
    Ok(())
}

fn yield_label(material: &MaterialRequirement) -> String {
    match material.output_range {
        Some(r) if r.min == r.max => format!(" (yield {})", r.min),
        Some(r) => format!(" (yield {}-{})", r.min, r.max),
        None => String::new(),
    }
}

fn print_plan(plan: &MaterialPlan) {
    if plan.is_empty() {
        println!("Nothing to gather.");
        return;
    }
    println!("Base materials:");
    for m in &plan.base_materials {
        println!("  {:>8} x {} [{}]", m.quantity, m.name, m.id);
    }
    for (depth, materials) in plan.intermediates_by_depth() {
        println!("Depth {depth}:");
        for m in materials {
            println!("  {:>8} x {} [{}]{}", m.quantity, m.name, m.id, yield_label(m));
        }
    }
}

fn print_shopping(list: &[MaterialRequirement]) {
    if list.is_empty() {
        println!("Nothing to gather.");
        return;
    }
    println!("Shopping list:");
    for m in list {
        println!(
            "  {:>8} x {} [{}] | owned: {} | missing: {}",
            m.quantity,
            m.name,
            m.id,
            m.owned_quantity.unwrap_or(0),
            m.needed_quantity.unwrap_or(m.quantity)
        );
    }
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();
    info!(
        catalog = %args.catalog.display(),
        wishlist = %args.wishlist.display(),
        shopping = args.shopping,
        "starting planner"
    );

    let catalog = load_catalog(&args.catalog)?;
    let mut options = load_options(args.config.as_deref())?;
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    let mut session = CraftingSession::new(Arc::new(catalog)).with_options(options);
    load_wishlist(&args.wishlist, &mut session)?;

    if !args.json {
        println!(
            "Catalog OK | items: {} | wish-list entries: {} | max depth: {}",
            session.catalog().len(),
            session.wish_list().len(),
            options.max_depth
        );
    }

    if args.shopping {
        let list = session.shopping_list();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&list)?);
        } else {
            print_shopping(&list);
        }
        return Ok(());
    }

    let plan = session.plan();
    if args.json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        print_plan(plan);
    }
    let diagnostics = session.diagnostics().len();
    if diagnostics > 0 && !args.json {
        println!("Diagnostics: {diagnostics} (see log output)");
    }
    Ok(())
}
