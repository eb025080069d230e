//! Self-recursive flattening pass.

use crate::token::{TokenNode, TokenType};

/// Collapse children whose type equals their parent's type into the parent.
///
/// Rules encoded via right recursion (`X ::= item X-tail`) nest one extra
/// level per repetition; replacing each same-typed child with its own
/// children, to a fixed point, yields the single flat sibling list the
/// left-recursive reading of the rule describes. Recursion then continues
/// into the flattened children.
#[must_use]
pub fn flatten_self_recursive(node: TokenNode) -> TokenNode {
    let TokenNode::Named(named) = node else {
        return node;
    };

    let parent_type = named.token_type();
    let mut children = named.children().to_vec();
    while has_child_of_type(&children, parent_type) {
        children = children
            .into_iter()
            .flat_map(|child| match child {
                TokenNode::Named(same) if same.token_type() == parent_type => {
                    same.into_children()
                }
                other => vec![other],
            })
            .collect();
    }

    let children = children.into_iter().map(flatten_self_recursive).collect();
    TokenNode::Named(named.with_children(children))
}

fn has_child_of_type(children: &[TokenNode], token_type: TokenType) -> bool {
    children
        .iter()
        .any(|child| child.is_named() && child.token_type() == token_type)
}
