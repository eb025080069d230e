//! Temp-node inlining pass.

use crate::token::{TokenNode, TokenType};

/// Splice out `$temp` grouping nodes, replacing each temp child with its own
/// children.
///
/// The splice repeats at each level until no temp child remains (temp nodes
/// can nest inside other temp nodes), then recurses into the surviving
/// children. Literal leaves pass through untouched.
#[must_use]
pub fn inline_temp_nodes(node: TokenNode) -> TokenNode {
    let TokenNode::Named(named) = node else {
        return node;
    };

    let mut children = named.children().to_vec();
    while children
        .iter()
        .any(|child| child.token_type().is_temp())
    {
        children = children
            .into_iter()
            .flat_map(|child| match child {
                TokenNode::Named(temp) if temp.token_type().is_temp() => temp.into_children(),
                other => vec![other],
            })
            .collect();
    }

    let children = children.into_iter().map(inline_temp_nodes).collect();
    TokenNode::Named(named.with_children(children))
}
