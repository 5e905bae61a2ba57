//! Card components.

mod icons;
mod quick_start_grid;
mod selection_card;

pub use icons::Icon;
pub use quick_start_grid::QuickStartGrid;
pub use selection_card::SelectionCard;
