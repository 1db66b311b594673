pub mod format_card;
pub use format_card::FormatCard;
