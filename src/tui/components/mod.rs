// UI components for the TUI

pub mod dots;
pub mod nav_bar;
pub mod section;
pub mod status_bar;
pub mod toast;
