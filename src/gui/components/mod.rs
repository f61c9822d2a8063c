pub mod footer;
pub mod grid;
pub mod source_panel;
pub mod spinner;
