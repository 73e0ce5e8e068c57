use bevy::color::HexColorError;
use thiserror::Error;

/// Errors raised while validating the static configuration and body table.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("body table is empty")]
    EmptyTable,

    #[error("body `{name}` has an invalid color `{color}`")]
    InvalidColor {
        name: String,
        color: String,
        #[source]
        source: HexColorError,
    },

    #[error("body `{name}` has a non-positive radius {radius}")]
    InvalidRadius { name: String, radius: f64 },

    #[error("body `{name}` has a non-positive mass {mass}")]
    InvalidMass { name: String, mass: f64 },

    #[error("body `{name}` has an invalid orbital distance {distance}")]
    InvalidDistance { name: String, distance: f64 },

    #[error("surface size {width}x{height} is not drawable")]
    InvalidSurface { width: u32, height: u32 },

    #[error("{field} must be finite and within range, got {value}")]
    InvalidConstant { field: &'static str, value: f64 },
}
