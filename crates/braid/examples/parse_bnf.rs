//! BNF parsing example
//!
//! This example demonstrates how to:
//! 1. Parse a BNF grammar definition with the bundled grammar
//! 2. Walk the canonical parse tree
//! 3. Render the tree to the JSON interchange shape

use braid::grammar::bnf;
use braid::TokenNode;

const SOURCE: &str = "<rule-char> ::= <letter> | <digit> | \"-\"\n";

fn main() {
    match bnf::parse(SOURCE) {
        Ok(tree) => {
            println!("parsed {} bytes", tree.end_at());
            print_tree(&tree, 0);

            #[cfg(feature = "serialize")]
            println!("{}", serde_json::to_string_pretty(&tree.to_json()).unwrap());
        }
        Err(error) => eprintln!("parse failed: {error}"),
    }
}

fn print_tree(node: &TokenNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        TokenNode::Literal(leaf) => println!(
            "{indent}{:?} [{}..{}]",
            leaf.value(),
            leaf.start_at(),
            leaf.end_at()
        ),
        TokenNode::Named(named) => {
            println!(
                "{indent}{} [{}..{}]",
                named.token_type(),
                named.start_at(),
                named.end_at()
            );
            for child in named.children() {
                print_tree(child, depth + 1);
            }
        }
    }
}
