// src/data_analysis/mod.rs

pub mod aligned_layout;
pub mod curve_builder;
pub mod interpolation;
pub mod range_normalizer;
pub mod rescale;

// src/data_analysis/mod.rs
