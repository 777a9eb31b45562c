// Record helpers shared by every form: partial-update diffs and text formatting.
pub mod diff;
pub mod text;

pub use diff::{diff_fields, diff_records};
pub use text::capitalize_words;
