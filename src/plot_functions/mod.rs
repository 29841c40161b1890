// src/plot_functions/mod.rs

pub mod plot_channel_waveforms;

// src/plot_functions/mod.rs
