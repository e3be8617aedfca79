// src/math/mod.rs

pub mod error;
pub mod kalman;

pub use kalman::FilterConstants;
pub use kalman::KalmanFilter;
