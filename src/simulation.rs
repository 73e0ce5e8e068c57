use bevy::math::DVec2;

use crate::components::Body;
use crate::registry::BodyRegistry;
use crate::resources::SimConfig;

/// Outcome of one simulation step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Number of (target, source) evaluations performed.
    pub pairs: usize,
    /// Bodies whose position is NaN or infinite after the step.
    pub non_finite: Vec<usize>,
}

impl StepReport {
    pub fn is_finite(&self) -> bool {
        self.non_finite.is_empty()
    }
}

/// Ordered (target, source) pairs in evaluation order: targets outer, sources inner.
///
/// Both directions of every pair are visited, so `count * (count - 1)` pairs in total.
pub fn pair_order(count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count).flat_map(move |target| {
        (0..count)
            .filter(move |&source| source != target)
            .map(move |source| (target, source))
    })
}

/// Displacement of `target` towards `source` for one time step.
///
/// Separations below `config.min_distance` are raised to it. With a zero floor,
/// coincident bodies produce a NaN displacement.
pub fn pairwise_displacement(
    target: DVec2,
    target_mass: f64,
    source: DVec2,
    source_mass: f64,
    config: &SimConfig,
) -> DVec2 {
    let dx = source.x - target.x;
    let dy = source.y - target.y;
    let mut distance = (dx * dx + dy * dy).sqrt();
    if distance < config.min_distance {
        distance = config.min_distance;
    }

    let force = config.gravity_constant * (target_mass * source_mass) / (distance * distance);
    DVec2::new(force * (dx / distance), force * (dy / distance)) * config.time_step
}

/// Advances every body by one step of pairwise attraction.
///
/// Updates are written back immediately, so a body moved earlier in the pass is seen
/// at its new position by every later pair of the same pass.
pub fn step(registry: &mut BodyRegistry, config: &SimConfig) -> StepReport {
    let masses: Vec<f64> = registry.iter().map(Body::mass).collect();
    let pinned = if config.pin_central_body {
        registry.central_index()
    } else {
        None
    };

    let mut pairs = 0;
    for (target, source) in pair_order(registry.len()) {
        if Some(target) == pinned {
            continue;
        }
        let position = registry.position(target);
        let displacement = pairwise_displacement(
            position,
            masses[target],
            registry.position(source),
            masses[source],
            config,
        );
        registry.set_position(target, position + displacement);
        pairs += 1;
    }

    let non_finite = registry
        .iter()
        .enumerate()
        .filter(|(_, body)| !body.position().is_finite())
        .map(|(index, _)| index)
        .collect();

    StepReport { pairs, non_finite }
}
