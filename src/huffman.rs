use std::collections::HashMap;

use log::{debug, info, trace};

use crate::error::{HuffmanError, Result, Stage};
use crate::frequency::SymbolCount;
use crate::heap::{MinHeap, Weighted};

pub type CodeTable = HashMap<char, String>;

/// Code given to the only symbol of a single-leaf tree.
pub const LONE_SYMBOL_CODE: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Joins two subtrees under a new parent, `left` first.
    pub fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

impl Weighted for Node {
    fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }
}

pub type HuffmanTree = Node;

pub fn build_huffman_tree(counts: &[SymbolCount]) -> Result<HuffmanTree> {
    info!(
        "Building Huffman tree from {} unique symbols",
        counts.len()
    );

    let leaves = counts
        .iter()
        .map(|c| Node::Leaf {
            symbol: c.symbol,
            weight: c.count,
        })
        .collect();
    let mut heap = MinHeap::build(leaves);
    debug!("Initial heap size: {}", heap.len());

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop_min(), heap.pop_min()) else {
            break;
        };
        trace!("Merging weights {} + {}", left.weight(), right.weight());
        heap.push(Node::merge(left, right));
    }

    let root = heap.pop_min().ok_or(HuffmanError::EmptyInput {
        stage: Stage::TreeBuild,
    })?;
    debug!("Tree construction complete, root weight {}", root.weight());
    Ok(root)
}

/// Assigns a bit-string to every leaf: `0` for each step left, `1` for each
/// step right. A tree that is a lone leaf gets [`LONE_SYMBOL_CODE`].
pub fn build_code_table(root: &HuffmanTree) -> CodeTable {
    let mut table = CodeTable::with_capacity(root.leaf_count());
    if let Some(symbol) = root.symbol() {
        trace!("Lone symbol {:?} gets code '{}'", symbol, LONE_SYMBOL_CODE);
        table.insert(symbol, LONE_SYMBOL_CODE.to_string());
    } else {
        assign_codes(root, String::new(), &mut table);
    }
    debug!("Code table built with {} entries", table.len());
    table
}

fn assign_codes(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to {:?} : '{}'", symbol, prefix);
            table.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, format!("{}0", prefix), table);
            assign_codes(right, format!("{}1", prefix), table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_symbols;
    use proptest::prelude::*;

    fn leaf(symbol: char, weight: u64) -> Node {
        Node::Leaf { symbol, weight }
    }

    #[test]
    fn known_example_tree_shape() {
        let root = build_huffman_tree(&count_symbols("aabbbcc")).unwrap();
        let expected = Node::merge(leaf('b', 3), Node::merge(leaf('a', 2), leaf('c', 2)));
        assert_eq!(root, expected);
        assert_eq!(root.weight(), 7);
    }

    #[test]
    fn known_example_codes() {
        let root = build_huffman_tree(&count_symbols("aabbbcc")).unwrap();
        let table = build_code_table(&root);
        assert_eq!(table.len(), 3);
        assert_eq!(table[&'b'], "0");
        assert_eq!(table[&'a'], "10");
        assert_eq!(table[&'c'], "11");
    }

    #[test]
    fn single_symbol_is_lone_leaf() {
        let root = build_huffman_tree(&count_symbols("aaaa")).unwrap();
        assert_eq!(root, leaf('a', 4));
        let table = build_code_table(&root);
        assert_eq!(table[&'a'], LONE_SYMBOL_CODE);
    }

    #[test]
    fn no_symbols_is_an_error() {
        assert_eq!(
            build_huffman_tree(&[]),
            Err(HuffmanError::EmptyInput {
                stage: Stage::TreeBuild
            })
        );
    }

    #[test]
    fn nul_character_is_an_ordinary_symbol() {
        let root = build_huffman_tree(&count_symbols("\0\0a")).unwrap();
        let table = build_code_table(&root);
        assert_eq!(table.len(), 2);
        assert!(table.contains_key(&'\0'));
    }

    #[test]
    fn internal_weights_sum_children() {
        fn check(node: &Node) {
            if let Node::Internal { weight, left, right } = node {
                assert_eq!(*weight, left.weight() + right.weight());
                check(left);
                check(right);
            }
        }
        check(&build_huffman_tree(&count_symbols("abracadabra alakazam")).unwrap());
    }

    #[test]
    fn same_input_builds_same_codes() {
        let text = "she sells sea shells by the sea shore";
        let first = build_code_table(&build_huffman_tree(&count_symbols(text)).unwrap());
        let second = build_code_table(&build_huffman_tree(&count_symbols(text)).unwrap());
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn proptest_codes_are_prefix_free(text in "\\PC{1,200}") {
            let counts = count_symbols(&text);
            let table = build_code_table(&build_huffman_tree(&counts).unwrap());
            prop_assert_eq!(table.len(), counts.len());

            for (a, code_a) in &table {
                prop_assert!(!code_a.is_empty());
                for (b, code_b) in &table {
                    if a != b {
                        prop_assert!(!code_b.starts_with(code_a.as_str()));
                    }
                }
            }
        }
    }
}
