use btl_ternary::{TernaryError, TRYTE_ALPHABET};

use crate::error::TransactionError;

/// Encode a byte-representable string as tryte pairs.
///
/// Each character code `b` (0..=255) becomes two trytes: `b % 27` and
/// `b / 27`, low tryte first. Characters above U+00FF have no byte
/// representation and are rejected.
pub fn to_trytes(input: &str) -> Result<String, TransactionError> {
    let alphabet = TRYTE_ALPHABET.as_bytes();
    let mut trytes = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        let code = u32::from(c);
        if code > 255 {
            return Err(TransactionError::UnrepresentableChar(c));
        }
        trytes.push(alphabet[(code % 27) as usize] as char);
        trytes.push(alphabet[(code / 27) as usize] as char);
    }
    Ok(trytes)
}

/// Decode a tryte-pair string produced by [`to_trytes`].
pub fn from_trytes(trytes: &str) -> Result<String, TransactionError> {
    if trytes.len() % 2 != 0 {
        return Err(TransactionError::OddTrytesLength(trytes.len()));
    }
    let mut output = String::with_capacity(trytes.len() / 2);
    let symbols: Vec<char> = trytes.chars().collect();
    for pair in symbols.chunks_exact(2) {
        let low = symbol_index(pair[0])?;
        let high = symbol_index(pair[1])?;
        let code = low + high * 27;
        match char::from_u32(code as u32).filter(|_| code <= 255) {
            Some(c) => output.push(c),
            None => {
                return Err(TransactionError::InvalidTrytePair(
                    pair.iter().collect::<String>(),
                ))
            }
        }
    }
    Ok(output)
}

fn symbol_index(symbol: char) -> Result<usize, TransactionError> {
    TRYTE_ALPHABET
        .find(symbol)
        .ok_or_else(|| TernaryError::InvalidSymbol(symbol).into())
}
