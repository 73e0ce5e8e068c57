use bevy::math::DVec2;
use bevy::prelude::*;

use crate::components::Body;
use crate::error::ConfigError;
use crate::resources::BodySpec;

/// The fixed, ordered set of simulated bodies.
///
/// Built once from a table and never grown or shrunk; only positions change.
/// Kept as one ordered resource rather than one entity per body, since the step's
/// result depends on a stable update order that ECS queries do not guarantee.
#[derive(Resource, Clone, Debug)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn from_table(table: &[BodySpec]) -> Result<Self, ConfigError> {
        if table.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        let bodies = table
            .iter()
            .map(Body::from_spec)
            .collect::<Result<Vec<_>, _>>()?;
        info!("registered {} bodies", bodies.len());
        Ok(Self { bodies })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Panics if `index` is out of range.
    pub fn position(&self, index: usize) -> DVec2 {
        self.bodies[index].position()
    }

    /// Panics if `index` is out of range.
    pub fn set_position(&mut self, index: usize, position: DVec2) {
        self.bodies[index].set_position(position);
    }

    pub fn positions(&self) -> Vec<DVec2> {
        self.bodies.iter().map(Body::position).collect()
    }

    /// Index of the first body placed at the origin, if any.
    pub fn central_index(&self) -> Option<usize> {
        self.bodies.iter().position(Body::is_central)
    }
}
