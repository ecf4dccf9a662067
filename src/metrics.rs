//! Information-theoretic summary of an encoding.
//!
//! Compression ratio and efficiency measure the encoding against a
//! fixed-width baseline of [`BITS_PER_SYMBOL`] bits per symbol. That is exact
//! for single-byte text and only an approximation once symbols need more than
//! one byte, so efficiency can exceed 1.0 in that case.

use log::debug;

use crate::encoding::EncodedText;
use crate::error::{HuffmanError, Result, Stage};
use crate::frequency::{SymbolCount, total_count};

pub const BITS_PER_SYMBOL: u64 = 8;

/// Shannon entropy of the symbol distribution, in bits per symbol.
pub fn entropy(counts: &[SymbolCount]) -> Result<f64> {
    let total = total_count(counts);
    if total == 0 {
        return Err(HuffmanError::EmptyInput {
            stage: Stage::Entropy,
        });
    }
    let total_f = total as f64;

    // p * log2(1/p) keeps a single-symbol distribution at +0.0.
    let entropy: f64 = counts
        .iter()
        .map(|c| {
            let p = c.count as f64 / total_f;
            p * (total_f / c.count as f64).log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
        entropy, total
    );
    Ok(entropy)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub entropy: f64,
    pub compression_ratio: f64,
    pub average_bits_per_symbol: f64,
    pub efficiency: f64,
}

impl Metrics {
    pub fn compute(text: &str, counts: &[SymbolCount], encoded: &EncodedText) -> Result<Self> {
        let symbols = text.chars().count() as u64;
        if symbols == 0 || encoded.is_empty() {
            return Err(HuffmanError::EmptyInput {
                stage: Stage::Metrics,
            });
        }

        let entropy = entropy(counts)?;
        let original_bits = (symbols * BITS_PER_SYMBOL) as f64;
        let encoded_bits = encoded.bit_len() as f64;

        let compression_ratio = original_bits / encoded_bits;
        let average_bits_per_symbol = encoded_bits / symbols as f64;
        let efficiency = entropy / average_bits_per_symbol;

        debug!(
            "Ratio {:.4}, {:.4} bits/symbol, efficiency {:.4}",
            compression_ratio, average_bits_per_symbol, efficiency
        );
        Ok(Metrics {
            entropy,
            compression_ratio,
            average_bits_per_symbol,
            efficiency,
        })
    }
}
