//! Diagnostics emitted while resolving materials.
//!
//! The engine never logs on its own. Callers hand it a sink and decide what
//! to do with the events.

use craft_core::ItemId;
use std::fmt;
use tracing::{debug, warn};

/// A recoverable condition met during resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// `item` repeats within its own expansion path and was treated as a base material.
    CycleDetected { item: ItemId, path: Vec<ItemId> },
    /// `item` sits deeper than the depth guard allows and was treated as a base material.
    DepthLimitReached { item: ItemId, depth: u32 },
    /// `item` is not in the catalog.
    UnknownItem { item: ItemId },
    /// A consumed item of `parent`'s recipe has no usable id or quantity.
    InvalidMaterial {
        parent: ItemId,
        index: usize,
        material: ItemId,
        quantity: u64,
    },
    /// Shopping-list expansion stopped nesting at `item`.
    NestingLimitReached { item: ItemId, nesting: u32 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::CycleDetected { item, path } => {
                let chain: Vec<String> = path.iter().map(ItemId::to_string).collect();
                write!(f, "circular recipe for item {item}: {}", chain.join(" -> "))
            }
            Diagnostic::DepthLimitReached { item, depth } => {
                write!(f, "item {item} exceeds the depth limit at depth {depth}")
            }
            Diagnostic::UnknownItem { item } => write!(f, "item {item} is not in the catalog"),
            Diagnostic::InvalidMaterial {
                parent,
                index,
                material,
                quantity,
            } => write!(
                f,
                "item {parent}: recipe material {index} skipped (id {material}, qty {quantity})"
            ),
            Diagnostic::NestingLimitReached { item, nesting } => {
                write!(f, "stopped expanding item {item} at nesting {nesting}")
            }
        }
    }
}

/// Receiver of resolution diagnostics.
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, diagnostic: Diagnostic) {
        (**self).record(diagnostic);
    }
}

/// Discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to `tracing`.
///
/// Catalog defects (cycles, unknown ids, bad materials) are warnings; guard
/// hits on deep chains are debug noise.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::DepthLimitReached { .. } | Diagnostic::NestingLimitReached { .. } => {
                debug!(%diagnostic, "material resolution")
            }
            _ => warn!(%diagnostic, "material resolution"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_lists_path() {
        let d = Diagnostic::CycleDetected {
            item: ItemId(1),
            path: vec![ItemId(1), ItemId(2), ItemId(1)],
        };
        assert_eq!(d.to_string(), "circular recipe for item 1: 1 -> 2 -> 1");
    }

    fn report<S: DiagnosticSink>(mut sink: S, item: ItemId) {
        sink.record(Diagnostic::UnknownItem { item });
    }

    #[test]
    fn sinks_through_references() {
        let mut collected: Vec<Diagnostic> = Vec::new();
        report(&mut collected, ItemId(4));
        report(NullSink, ItemId(5));
        assert_eq!(collected, vec![Diagnostic::UnknownItem { item: ItemId(4) }]);
    }
}
