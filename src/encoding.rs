use std::fmt;

use log::debug;

use crate::error::{HuffmanError, Result};
use crate::huffman::CodeTable;

/// The concatenated codes of a text, one `'0'`/`'1'` char per bit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedText(String);

impl EncodedText {
    pub fn bit_len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replaces every symbol of `text` by its code, in order.
///
/// A symbol without a code means the table was built from some other text.
pub fn encode_text(text: &str, code_table: &CodeTable) -> Result<EncodedText> {
    let mut bits = String::with_capacity(text.len() * 2);

    for (position, symbol) in text.chars().enumerate() {
        let code = code_table
            .get(&symbol)
            .ok_or(HuffmanError::MissingCode { symbol, position })?;
        bits.push_str(code);
    }

    debug!("Encoded text into {} bits", bits.len());
    Ok(EncodedText(bits))
}
