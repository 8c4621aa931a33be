pub mod config_toggle;
pub mod switch_grid;
pub mod theme;
