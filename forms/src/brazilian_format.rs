// Brazilian date and number conventions used by the form screens.
// The backend speaks "YYYY-MM-DD" and plain JSON numbers; the screens show "DD/MM/YYYY" and "1.234,56".
pub mod currency;
pub mod dates;

pub use currency::{format_brl, format_brl_with_symbol, mask_brl_input, parse_brl, parse_brl_value};
pub use dates::{
    date_from_parts, parse_display_date, parse_iso_date, to_display_date, to_display_date_from_iso,
    to_iso_date, to_iso_from_display_date,
};
