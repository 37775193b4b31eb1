pub mod components;
pub mod map;
pub mod pages;
pub mod shell;
