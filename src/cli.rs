use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "chromacore")]
#[command(about = "Probe a demo scene with the ray intersection core")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info")]
    pub debug_level: LogLevel,

    /// Probe grid width in rays
    #[arg(long, default_value = "400")]
    pub width: u32,

    /// Probe grid height in rays
    #[arg(long, default_value = "225")]
    pub height: u32,

    /// Seed for the demo scene layout
    #[arg(long, default_value = "2024")]
    pub seed: u64,

    /// Shutter open time
    #[arg(long, default_value = "0.0")]
    pub time0: f64,

    /// Shutter close time
    #[arg(long, default_value = "1.0")]
    pub time1: f64,

    /// Smallest accepted hit distance (avoids self-intersection)
    #[arg(long, default_value = "0.001")]
    pub t_min: f64,

    /// Far clip distance
    #[arg(long, default_value_t = f64::INFINITY)]
    pub t_max: f64,

    /// Keep every sphere stationary
    #[arg(long)]
    pub static_scene: bool,
}

impl Args {
    /// Reject argument combinations the probe cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("empty probe grid {}x{}", self.width, self.height));
        }
        if !self.time0.is_finite() || !self.time1.is_finite() {
            return Err(format!("non-finite shutter [{}, {}]", self.time0, self.time1));
        }
        if self.time1 < self.time0 {
            return Err(format!("shutter [{}, {}] is reversed", self.time0, self.time1));
        }
        if !(self.t_min < self.t_max) {
            return Err(format!("empty hit range ({}, {})", self.t_min, self.t_max));
        }
        Ok(())
    }
}
