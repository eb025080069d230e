//! # Tree Normalization
//!
//! Post-processing passes that turn raw combinator output into a canonical
//! parse tree.
//!
//! ## Overview
//!
//! Three passes, applied in a fixed order by [`canonicalize`]:
//!
//! 1. [`inline_temp_nodes`] — splice out the anonymous `$temp` grouping
//!    nodes that `concat`/`or` internals build.
//! 2. [`flatten_self_recursive`] — collapse the one-level-per-repetition
//!    nesting produced by right-recursive rule encodings into a flat
//!    sibling list.
//! 3. [`prune_empty`] — drop zero-width placeholder nodes left behind by
//!    epsilon matches and zero-minimum repetition.
//!
//! Temp inlining must run before flattening (flattening assumes
//! grammar-typed structure, not anonymous wrappers); pruning runs last so it
//! sees the final shape. Every pass builds new nodes instead of mutating
//! shared ones, and the composition is idempotent.

mod flatten;
mod inline_temp;
mod prune;

pub use flatten::flatten_self_recursive;
pub use inline_temp::inline_temp_nodes;
pub use prune::prune_empty;

use crate::token::TokenNode;

/// Apply all three normalization passes in their required order.
#[must_use]
pub fn canonicalize(node: TokenNode) -> TokenNode {
    prune_empty(flatten_self_recursive(inline_temp_nodes(node)))
}
