pub const LOCAL_INDICATIVE: &'static str = "0";
pub const GLOBAL_00_INDICATIVE: &'static str = "00213";
pub const GLOBAL_PLUS_INDICATIVE: &'static str = "+213";

/// Subscriber digits following a one-digit mobile operator code.
pub const MOBILE_SUFFIX_LENGTH: usize = 8;
/// Subscriber digits following a two-digit landline region code.
pub const LANDLINE_SUFFIX_LENGTH: usize = 6;

// A number may neither start nor end with a dash, this is checked before any
// formatting character gets removed.
pub const DASH: char = '-';

// Formatting characters dropped from the input and how many occurrences of
// each are tolerated. Anything beyond the budget stays in place and makes the
// grammar reject the number.
pub const FORMATTING_CHAR_BUDGET: [(char, usize); 5] = [
    (DASH, 5),
    (' ', 13),
    ('(', 1),
    (')', 1),
    ('.', 5),
];
