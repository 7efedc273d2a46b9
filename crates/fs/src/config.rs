/// Names starting with this character are hidden from listings.
pub const HIDDEN_PREFIX: char = '.';

/// Files larger than this are not loaded for text preview.
pub const MAX_PREVIEW_BYTES: u64 = 8 * 1024 * 1024;
