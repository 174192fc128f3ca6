pub mod categories;
pub mod gameplay;
pub mod questions;
