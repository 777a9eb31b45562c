pub mod models;
pub mod utils;

// Record types shared with the backend live in `models`; the record-level helpers
// (word capitalization, partial-update diffs) live in `utils`.
