use bevy::math::DVec2;
use bevy::prelude::*;

use crate::error::ConfigError;
use crate::resources::{BodySpec, INITIAL_ANGLE, Orbit};

/// A simulated disc. Position is the only field that changes after setup.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    name: String,
    radius: f64,
    mass: f64,
    orbit: Option<Orbit>,
    color: Srgba,
    position: DVec2,
}

impl Body {
    /// Validates a table row and places the body at its setup position.
    pub fn from_spec(spec: &BodySpec) -> Result<Self, ConfigError> {
        let name = spec.name.to_string();
        if !spec.radius.is_finite() || spec.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius {
                name,
                radius: spec.radius,
            });
        }
        let mass = spec.mass.unwrap_or(spec.radius);
        if !mass.is_finite() || mass <= 0.0 {
            return Err(ConfigError::InvalidMass { name, mass });
        }
        if let Some(orbit) = spec.orbit
            && (!orbit.distance.is_finite() || orbit.distance < 0.0)
        {
            return Err(ConfigError::InvalidDistance {
                name,
                distance: orbit.distance,
            });
        }
        let color = Srgba::hex(spec.color).map_err(|source| ConfigError::InvalidColor {
            name: name.clone(),
            color: spec.color.to_string(),
            source,
        })?;

        let mut body = Self {
            name,
            radius: spec.radius,
            mass,
            orbit: spec.orbit,
            color,
            position: DVec2::ZERO,
        };
        body.position = body.initial_position();
        Ok(body)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Mass used by the force law. Equal to the radius unless the table overrides it.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn orbit(&self) -> Option<Orbit> {
        self.orbit
    }

    pub fn color(&self) -> Srgba {
        self.color
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    pub fn is_central(&self) -> bool {
        self.orbit.is_none()
    }

    /// Where the body was placed at setup: the origin, or `distance` along `INITIAL_ANGLE`.
    pub fn initial_position(&self) -> DVec2 {
        match self.orbit {
            None => DVec2::ZERO,
            Some(orbit) => DVec2::new(
                orbit.distance * INITIAL_ANGLE.cos(),
                orbit.distance * INITIAL_ANGLE.sin(),
            ),
        }
    }
}

/// Entity spawned by the canvas presenter for one drawing command of the current frame.
#[derive(Component)]
pub struct CanvasItem;
