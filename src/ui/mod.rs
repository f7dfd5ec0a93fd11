pub mod components;
pub mod gate;
pub mod pages;
pub mod shell;
