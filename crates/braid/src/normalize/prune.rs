//! Empty-node pruning pass.

use crate::token::TokenNode;

/// Remove zero-width children (`start_at == end_at`) from every named node.
///
/// Repetition with minimum zero and epsilon matches leave zero-width
/// placeholders behind; they carry no input and are dropped. Recursion
/// continues into the remaining children. The root itself is kept even when
/// zero-width — only a parent can drop a node.
#[must_use]
pub fn prune_empty(node: TokenNode) -> TokenNode {
    let TokenNode::Named(named) = node else {
        return node;
    };

    let children = named
        .children()
        .iter()
        .filter(|child| !child.is_empty_span())
        .cloned()
        .map(prune_empty)
        .collect();
    TokenNode::Named(named.with_children(children))
}
