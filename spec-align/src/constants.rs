//! Constants used throughout spec-align.

/// Default relative edit distance accepted when inferring a renamed key.
///
/// A candidate is accepted when `distance / key_length` is strictly below it.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.2;

/// Characters stripped from both sides before two leaves are compared.
pub const INSIGNIFICANT_CHARS: [char; 2] = [' ', '\u{a0}'];

/// Key under which a producer stores a root that is not a record.
pub const CONTENT_ROOT_KEY: &str = "content";
