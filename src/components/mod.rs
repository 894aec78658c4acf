mod category_bar;
mod game_grid;
mod game_modal;
mod toolbar;

pub use category_bar::CategoryBar;
pub use game_grid::GameGrid;
pub use game_modal::GameModal;
pub use toolbar::Toolbar;
