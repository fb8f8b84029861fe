pub mod config;
pub mod plot;
pub mod series;
pub mod util;

pub const GB_TO_MB: f64 = 1024.0;
