// src/utils/mod.rs

pub mod fetch;
pub mod html;
