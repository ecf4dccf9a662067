//! Huffman coding of text with entropy-based quality metrics.
//!
//! ```
//! use huffman_entropy::analyze;
//!
//! let analysis = analyze("aabbbcc")?;
//! assert_eq!(analysis.encoded.bit_len(), 11);
//! assert!(analysis.metrics.efficiency <= 1.0);
//! # Ok::<(), huffman_entropy::HuffmanError>(())
//! ```

pub mod encoding;
pub mod error;
pub mod frequency;
pub mod heap;
pub mod huffman;
pub mod metrics;

use log::info;

pub use encoding::{EncodedText, encode_text};
pub use error::{HuffmanError, Result, Stage};
pub use frequency::{SymbolCount, count_symbols, total_count};
pub use heap::{MinHeap, Weighted};
pub use huffman::{CodeTable, HuffmanTree, Node, build_code_table, build_huffman_tree};
pub use metrics::{BITS_PER_SYMBOL, Metrics, entropy};

/// Everything produced by one run over a text.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub counts: Vec<SymbolCount>,
    pub codes: CodeTable,
    pub encoded: EncodedText,
    pub metrics: Metrics,
}

/// Runs counting, tree construction, code generation, encoding and metrics
/// over `text`. Empty text fails at tree construction.
pub fn analyze(text: &str) -> Result<Analysis> {
    info!("Analyzing {} bytes of text", text.len());

    let counts = count_symbols(text);
    let tree = build_huffman_tree(&counts)?;
    let codes = build_code_table(&tree);
    let encoded = encode_text(text, &codes)?;
    let metrics = Metrics::compute(text, &counts, &encoded)?;

    info!(
        "Encoded {} symbols into {} bits",
        total_count(&counts),
        encoded.bit_len()
    );
    Ok(Analysis {
        counts,
        codes,
        encoded,
        metrics,
    })
}
