use bevy::prelude::*;

use crate::canvas::CanvasFont;
use crate::error::ConfigError;

// --- Surface ---
/// Default drawing surface width in pixels.
pub const SPACE_WIDTH: u32 = 800;
/// Default drawing surface height in pixels.
pub const SPACE_HEIGHT: u32 = 600;

// --- Simulation Defaults ---
/// Strength of the inverse-square attraction. A tuning knob, not a physical value.
pub const GRAVITY_CONST: f64 = 0.005;
/// Separation floor for the force law. Zero keeps the coincident-body singularity.
pub const DEFAULT_MIN_DISTANCE: f64 = 0.0;
/// Displacement scale applied per frame.
pub const DEFAULT_TIME_STEP: f64 = 1.0;
/// Angle at which every orbiting body starts.
pub const INITIAL_ANGLE: f64 = 0.0;

// --- Labels ---
pub const LABEL_FONT_FAMILY: &str = "Arial";
pub const LABEL_FONT_SIZE: f32 = 12.0;
/// Vertical gap between the top of a body and its label baseline.
pub const LABEL_GAP: f64 = 10.0;

/// Distance and angular speed of a body on its initial orbit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    pub distance: f64,
    pub angular_speed: f64,
}

/// One row of the static body table.
#[derive(Clone, Copy, Debug)]
pub struct BodySpec {
    pub name: &'static str,
    pub radius: f64,
    /// Explicit mass; when `None` the radius stands in for it.
    pub mass: Option<f64>,
    /// `None` places the body at the origin.
    pub orbit: Option<Orbit>,
    pub color: &'static str,
}

impl BodySpec {
    pub const fn central(name: &'static str, radius: f64, color: &'static str) -> Self {
        Self {
            name,
            radius,
            mass: None,
            orbit: None,
            color,
        }
    }

    pub const fn orbiting(
        name: &'static str,
        radius: f64,
        distance: f64,
        angular_speed: f64,
        color: &'static str,
    ) -> Self {
        Self {
            name,
            radius,
            mass: None,
            orbit: Some(Orbit {
                distance,
                angular_speed,
            }),
            color,
        }
    }

    pub const fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }
}

/// The default system: the Sun first, then planets by increasing distance.
pub const SOLAR_SYSTEM: [BodySpec; 9] = [
    BodySpec::central("Sun", 30.0, "#fddb6d"),
    BodySpec::orbiting("Mercury", 5.0, 100.0, 0.01, "#d9e1ec"),
    BodySpec::orbiting("Venus", 7.0, 150.0, 0.008, "#ffcb97"),
    BodySpec::orbiting("Earth", 8.0, 200.0, 0.006, "#81d3ef"),
    BodySpec::orbiting("Mars", 7.0, 250.0, 0.005, "#fc7171"),
    BodySpec::orbiting("Jupiter", 15.0, 350.0, 0.003, "#febe18"),
    BodySpec::orbiting("Saturn", 12.0, 450.0, 0.002, "#efab16"),
    BodySpec::orbiting("Uranus", 10.0, 550.0, 0.0015, "#d6f5ff"),
    BodySpec::orbiting("Neptune", 9.0, 650.0, 0.001, "#66a5ad"),
];

/// Size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: SPACE_WIDTH,
            height: SPACE_HEIGHT,
        }
    }
}

/// Font and placement of body name labels.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    pub family: &'static str,
    pub size: f32,
    pub gap: f64,
}

impl LabelStyle {
    pub fn font(&self) -> CanvasFont {
        CanvasFont {
            family: self.family.to_string(),
            size: self.size,
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            family: LABEL_FONT_FAMILY,
            size: LABEL_FONT_SIZE,
            gap: LABEL_GAP,
        }
    }
}

/// Immutable simulation parameters, fixed at startup.
#[derive(Resource, Clone, Debug)]
pub struct SimConfig {
    pub surface: SurfaceConfig,
    pub gravity_constant: f64,
    pub min_distance: f64,
    pub time_step: f64,
    /// Keeps the central body at the origin; it still attracts the others.
    pub pin_central_body: bool,
    pub label: LabelStyle,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            gravity_constant: GRAVITY_CONST,
            min_distance: DEFAULT_MIN_DISTANCE,
            time_step: DEFAULT_TIME_STEP,
            pin_central_body: false,
            label: LabelStyle::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let SurfaceConfig { width, height } = self.surface;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidSurface { width, height });
        }
        if !self.gravity_constant.is_finite() {
            return Err(ConfigError::InvalidConstant {
                field: "gravity_constant",
                value: self.gravity_constant,
            });
        }
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(ConfigError::InvalidConstant {
                field: "min_distance",
                value: self.min_distance,
            });
        }
        if !self.time_step.is_finite() {
            return Err(ConfigError::InvalidConstant {
                field: "time_step",
                value: self.time_step,
            });
        }
        if !self.label.size.is_finite() || self.label.size <= 0.0 {
            return Err(ConfigError::InvalidConstant {
                field: "label.size",
                value: self.label.size as f64,
            });
        }
        Ok(())
    }
}
