use bevy::math::DVec2;

use crate::canvas::DrawSurface;
use crate::components::Body;
use crate::registry::BodyRegistry;
use crate::resources::LabelStyle;

/// Baseline origin of a body's name label: above and to the left of its disc.
pub fn label_origin(body: &Body, style: &LabelStyle) -> DVec2 {
    let position = body.position();
    DVec2::new(
        position.x - body.radius(),
        position.y - body.radius() - style.gap,
    )
}

/// Draws every body as a filled disc with its name, in registry order.
pub fn render_pass<S: DrawSurface>(registry: &BodyRegistry, style: &LabelStyle, surface: &mut S) {
    let font = style.font();
    for body in registry.iter() {
        surface.fill_circle(body.position(), body.radius(), body.color());
        surface.fill_text(body.name(), label_origin(body, style), &font, body.color());
    }
}
