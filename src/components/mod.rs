mod icons;
mod layout;
mod stat_card;

pub use icons::*;
pub use layout::{Layout, Navbar};
pub use stat_card::{StatCard, StatIcon};
