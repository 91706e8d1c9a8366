// src/utils/mod.rs

pub mod date;
pub mod html;
