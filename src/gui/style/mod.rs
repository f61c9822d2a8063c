pub mod button;
pub mod buttons;
pub mod container;
pub mod text;
pub mod theme;
