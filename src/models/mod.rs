// src/models/mod.rs

pub mod leaderboard;
pub mod question;
