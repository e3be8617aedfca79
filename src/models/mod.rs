// src/models/mod.rs

pub mod signal;
