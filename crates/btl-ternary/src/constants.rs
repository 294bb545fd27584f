/// Number of trits encoded by one tryte symbol.
pub const TRITS_PER_TRYTE: usize = 3;

/// The 27-symbol tryte alphabet. `9` is the zero/pad symbol.
pub const TRYTE_ALPHABET: &str = "9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest signed value a single tryte can encode.
pub const MIN_TRYTE_VALUE: i8 = -13;

/// Largest signed value a single tryte can encode.
pub const MAX_TRYTE_VALUE: i8 = 13;

/// Trit triplet for each tryte symbol, in alphabet order.
///
/// The table is bijective: it covers all 27 triplets over {-1, 0, 1}³
/// exactly once, with the least-significant trit first. Entry `i` encodes
/// the signed value of alphabet symbol `i` in [-13, 13].
pub const TRYTE_TRITS: [[i8; 3]; 27] = [
    [0, 0, 0],
    [1, 0, 0],
    [-1, 1, 0],
    [0, 1, 0],
    [1, 1, 0],
    [-1, -1, 1],
    [0, -1, 1],
    [1, -1, 1],
    [-1, 0, 1],
    [0, 0, 1],
    [1, 0, 1],
    [-1, 1, 1],
    [0, 1, 1],
    [1, 1, 1],
    [-1, -1, -1],
    [0, -1, -1],
    [1, -1, -1],
    [-1, 0, -1],
    [0, 0, -1],
    [1, 0, -1],
    [-1, 1, -1],
    [0, 1, -1],
    [1, 1, -1],
    [-1, -1, 0],
    [0, -1, 0],
    [1, -1, 0],
    [-1, 0, 0],
];
