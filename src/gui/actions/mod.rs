// src/gui/actions/mod.rs
pub mod copy;
pub mod execute;
