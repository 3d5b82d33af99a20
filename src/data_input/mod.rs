// src/data_input/mod.rs

pub mod csv_input;
pub mod dataset;

// src/data_input/mod.rs
