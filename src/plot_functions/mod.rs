// src/plot_functions/mod.rs

pub mod plot_aligned;
pub mod plot_parallel;

// src/plot_functions/mod.rs
