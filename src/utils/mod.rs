pub mod date;
pub mod format;

pub use format::currency_symbol;
pub use format::format_amount;
