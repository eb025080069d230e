//! # Token Model
//!
//! Parse-tree node types produced by the combinators.
//!
//! ## Overview
//!
//! A successful parse yields a tree of [`TokenNode`]s with two shapes:
//!
//! - [`LiteralTokenNode`]: a leaf holding the matched substring and the
//!   half-open span `[start_at, end_at)` it occupies in the source text.
//! - [`NamedTokenNode`]: an interior node tagged with the producing rule (or
//!   the transient `$temp` marker), owning an ordered list of children.
//!
//! Nodes are immutable once constructed: the normalization passes in
//! [`crate::normalize`] build new nodes rather than editing shared ones, and
//! every node exclusively owns its children.
//!
//! With the `serialize` feature, nodes render to the JSON interchange shape
//! `{type, value?, startAt, endAt, children?}` — literal nodes carry `value`,
//! named nodes carry `children`.

use crate::intern::InternedStr;
use compact_str::CompactString;
use std::fmt;

/// Identity tag for a parse-tree node.
///
/// Two reserved markers exist alongside the open rule case:
///
/// - [`TokenType::Literal`] (`$literal`) tags leaf nodes.
/// - [`TokenType::Temp`] (`$temp`) tags anonymous grouping nodes built by
///   combinator internals; these never survive normalization.
///
/// Rule tags compare by interned key, so the same logical rule always yields
/// an equal `TokenType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Reserved marker for literal leaf nodes.
    Literal,
    /// Reserved marker for transient grouping nodes.
    Temp,
    /// A grammar rule, identified by its interned name.
    Rule(InternedStr),
}

impl TokenType {
    /// Tag for the given grammar rule name.
    #[must_use]
    pub fn rule(name: &str) -> Self {
        Self::Rule(InternedStr::new(name))
    }

    /// The display name: `$literal`, `$temp`, or the rule name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Literal => "$literal",
            Self::Temp => "$temp",
            Self::Rule(name) => name.as_str(),
        }
    }

    /// Whether this is one of the two reserved markers.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Literal | Self::Temp)
    }

    #[must_use]
    pub const fn is_temp(self) -> bool {
        matches!(self, Self::Temp)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for TokenType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Leaf node: one matched fixed substring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralTokenNode {
    value: CompactString,
    start_at: usize,
    end_at: usize,
}

impl LiteralTokenNode {
    /// Create a leaf for `value` spanning `[start_at, end_at)`.
    #[must_use]
    pub fn new(value: impl Into<CompactString>, start_at: usize, end_at: usize) -> Self {
        Self {
            value: value.into(),
            start_at,
            end_at,
        }
    }

    /// The matched substring.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    #[must_use]
    pub const fn start_at(&self) -> usize {
        self.start_at
    }

    #[inline]
    #[must_use]
    pub const fn end_at(&self) -> usize {
        self.end_at
    }

    /// Leaves are always tagged with the literal marker.
    #[must_use]
    pub const fn token_type(&self) -> TokenType {
        TokenType::Literal
    }
}

/// Interior node: a rule (or the temp marker) over an ordered child list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedTokenNode {
    token_type: TokenType,
    start_at: usize,
    end_at: usize,
    children: Vec<TokenNode>,
}

impl NamedTokenNode {
    /// Create an interior node.
    ///
    /// Children must be in left-to-right source order with contiguous spans;
    /// the combinators uphold this by construction.
    #[must_use]
    pub fn new(
        token_type: TokenType,
        start_at: usize,
        end_at: usize,
        children: Vec<TokenNode>,
    ) -> Self {
        debug_assert!(start_at <= end_at);
        Self {
            token_type,
            start_at,
            end_at,
            children,
        }
    }

    #[inline]
    #[must_use]
    pub const fn token_type(&self) -> TokenType {
        self.token_type
    }

    #[inline]
    #[must_use]
    pub const fn start_at(&self) -> usize {
        self.start_at
    }

    #[inline]
    #[must_use]
    pub const fn end_at(&self) -> usize {
        self.end_at
    }

    #[must_use]
    pub fn children(&self) -> &[TokenNode] {
        &self.children
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Rebuild this node with a different child list, keeping type and span.
    ///
    /// Used by the normalization passes, which replace a node's children but
    /// never its identity.
    #[must_use]
    pub fn with_children(&self, children: Vec<TokenNode>) -> Self {
        Self {
            token_type: self.token_type,
            start_at: self.start_at,
            end_at: self.end_at,
            children,
        }
    }

    /// Take ownership of the child list, consuming the node.
    #[must_use]
    pub fn into_children(self) -> Vec<TokenNode> {
        self.children
    }
}

/// A parse-tree node: either a literal leaf or a named interior node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenNode {
    Literal(LiteralTokenNode),
    Named(NamedTokenNode),
}

impl TokenNode {
    /// Convenience constructor for a literal leaf.
    #[must_use]
    pub fn literal(value: impl Into<CompactString>, start_at: usize, end_at: usize) -> Self {
        Self::Literal(LiteralTokenNode::new(value, start_at, end_at))
    }

    /// Convenience constructor for a named node.
    #[must_use]
    pub fn named(
        token_type: TokenType,
        start_at: usize,
        end_at: usize,
        children: Vec<TokenNode>,
    ) -> Self {
        Self::Named(NamedTokenNode::new(token_type, start_at, end_at, children))
    }

    #[must_use]
    pub fn token_type(&self) -> TokenType {
        match self {
            Self::Literal(leaf) => leaf.token_type(),
            Self::Named(node) => node.token_type(),
        }
    }

    #[must_use]
    pub fn start_at(&self) -> usize {
        match self {
            Self::Literal(leaf) => leaf.start_at(),
            Self::Named(node) => node.start_at(),
        }
    }

    #[must_use]
    pub fn end_at(&self) -> usize {
        match self {
            Self::Literal(leaf) => leaf.end_at(),
            Self::Named(node) => node.end_at(),
        }
    }

    /// Whether this node matched no input (`start_at == end_at`).
    #[must_use]
    pub fn is_empty_span(&self) -> bool {
        self.start_at() == self.end_at()
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    #[must_use]
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Borrow the named variant, if this is one.
    #[must_use]
    pub const fn as_named(&self) -> Option<&NamedTokenNode> {
        match self {
            Self::Named(node) => Some(node),
            Self::Literal(_) => None,
        }
    }

    /// Render to a [`serde_json::Value`] in the interchange shape.
    ///
    /// Literal nodes carry `value`, named nodes carry `children`; both carry
    /// `type`, `startAt`, and `endAt`.
    #[cfg(feature = "serialize")]
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Literal(leaf) => serde_json::json!({
                "type": leaf.token_type().name(),
                "value": leaf.value(),
                "startAt": leaf.start_at(),
                "endAt": leaf.end_at(),
            }),
            Self::Named(node) => serde_json::json!({
                "type": node.token_type().name(),
                "startAt": node.start_at(),
                "endAt": node.end_at(),
                "children": node
                    .children()
                    .iter()
                    .map(TokenNode::to_json)
                    .collect::<Vec<_>>(),
            }),
        }
    }
}

impl From<LiteralTokenNode> for TokenNode {
    fn from(leaf: LiteralTokenNode) -> Self {
        Self::Literal(leaf)
    }
}

impl From<NamedTokenNode> for TokenNode {
    fn from(node: NamedTokenNode) -> Self {
        Self::Named(node)
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for LiteralTokenNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("LiteralTokenNode", 4)?;
        s.serialize_field("type", &self.token_type())?;
        s.serialize_field("value", self.value())?;
        s.serialize_field("startAt", &self.start_at)?;
        s.serialize_field("endAt", &self.end_at)?;
        s.end()
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for NamedTokenNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("NamedTokenNode", 4)?;
        s.serialize_field("type", &self.token_type)?;
        s.serialize_field("startAt", &self.start_at)?;
        s.serialize_field("endAt", &self.end_at)?;
        s.serialize_field("children", &self.children)?;
        s.end()
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for TokenNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Literal(leaf) => leaf.serialize(serializer),
            Self::Named(node) => node.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_rule_identity() {
        assert_eq!(TokenType::rule("digit"), TokenType::rule("digit"));
        assert_ne!(TokenType::rule("digit"), TokenType::rule("letter"));
        assert_ne!(TokenType::rule("digit"), TokenType::Literal);
    }

    #[test]
    fn test_token_type_reserved_markers() {
        assert!(TokenType::Literal.is_reserved());
        assert!(TokenType::Temp.is_reserved());
        assert!(!TokenType::rule("digit").is_reserved());
        assert_eq!(TokenType::Literal.name(), "$literal");
        assert_eq!(TokenType::Temp.name(), "$temp");
        assert_eq!(TokenType::rule("digit").name(), "digit");
    }

    #[test]
    fn test_literal_node_span() {
        let leaf = LiteralTokenNode::new("01", 3, 5);
        assert_eq!(leaf.value(), "01");
        assert_eq!(leaf.start_at(), 3);
        assert_eq!(leaf.end_at(), 5);
        assert_eq!(leaf.token_type(), TokenType::Literal);
    }

    #[test]
    fn test_named_node_children_order() {
        let node = NamedTokenNode::new(
            TokenType::rule("pair"),
            0,
            2,
            vec![TokenNode::literal("a", 0, 1), TokenNode::literal("b", 1, 2)],
        );
        assert_eq!(node.child_count(), 2);
        assert_eq!(node.children()[0].start_at(), 0);
        assert_eq!(node.children()[1].start_at(), 1);
    }

    #[test]
    fn test_zero_width_node() {
        let node = TokenNode::named(TokenType::rule("opt"), 4, 4, vec![]);
        assert!(node.is_empty_span());
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_literal_json_shape() {
        let leaf = TokenNode::literal("0", 0, 1);
        let json = leaf.to_json();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "$literal",
                "value": "0",
                "startAt": 0,
                "endAt": 1,
            })
        );
        // Serialize impl and to_json agree on the interchange shape.
        assert_eq!(serde_json::to_value(&leaf).unwrap(), json);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_named_json_shape() {
        let node = TokenNode::named(
            TokenType::rule("binary-digit"),
            0,
            1,
            vec![TokenNode::literal("0", 0, 1)],
        );
        let json = node.to_json();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "binary-digit",
                "startAt": 0,
                "endAt": 1,
                "children": [{
                    "type": "$literal",
                    "value": "0",
                    "startAt": 0,
                    "endAt": 1,
                }],
            })
        );
        assert_eq!(serde_json::to_value(&node).unwrap(), json);
        // Named nodes never carry `value`, literal nodes never carry `children`.
        assert!(json.get("value").is_none());
        assert!(json["children"][0].get("children").is_none());
    }
}
