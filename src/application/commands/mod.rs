pub mod context_menu;
pub mod dm_commands;
pub mod reaction_pins;
pub mod utils;
