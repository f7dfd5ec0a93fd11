pub mod decor;
pub mod stat_card;
pub mod toast;
