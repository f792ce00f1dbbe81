pub mod batch;
pub mod binning;
pub mod config;
pub mod profile;
pub mod rayleigh;
pub mod units;
pub mod utils;
