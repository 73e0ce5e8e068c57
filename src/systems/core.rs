use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::canvas::{DrawCommand, FrameCanvas};
use crate::components::CanvasItem;
use crate::driver::FrameDriver;
use crate::registry::BodyRegistry;
use crate::resources::SimConfig;

/// Depth added per drawing command so later commands paint over earlier ones.
const LAYER_STEP: f32 = 0.001;

/// Shared unit-circle mesh plus one material per distinct fill color.
#[derive(Resource)]
pub struct CanvasAssets {
    pub circle: Handle<Mesh>,
    pub materials: HashMap<[u8; 4], Handle<ColorMaterial>>,
}

impl CanvasAssets {
    pub fn new(circle: Handle<Mesh>) -> Self {
        Self {
            circle,
            materials: HashMap::default(),
        }
    }

    fn material(
        &mut self,
        materials: &mut Assets<ColorMaterial>,
        color: Srgba,
    ) -> Handle<ColorMaterial> {
        self.materials
            .entry(color.to_u8_array())
            .or_insert_with(|| materials.add(ColorMaterial::from(Color::from(color))))
            .clone()
    }
}

/// Sets up the camera and the assets the canvas presenter draws with.
pub fn setup_scene(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.spawn(Camera2d);
    commands.insert_resource(CanvasAssets::new(meshes.add(Circle::new(1.0))));
}

/// One {clear, step, render} cycle per display frame.
pub fn advance_frame(
    mut driver: ResMut<FrameDriver>,
    mut registry: ResMut<BodyRegistry>,
    config: Res<SimConfig>,
    mut canvas: ResMut<FrameCanvas>,
) {
    driver.run_frame(&mut registry, &config, &mut *canvas);
}

/// Replaces last frame's shapes with entities for the current display list.
///
/// Shapes at non-finite coordinates are skipped, like a 2D canvas ignores them.
pub fn present_canvas(
    mut commands: Commands,
    canvas: Res<FrameCanvas>,
    mut assets: ResMut<CanvasAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    drawn: Query<Entity, With<CanvasItem>>,
) {
    for entity in drawn.iter() {
        commands.entity(entity).despawn();
    }

    for (layer, command) in canvas.visible().into_iter().enumerate() {
        let z = layer as f32 * LAYER_STEP;
        match command {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                if !center.is_finite() || !radius.is_finite() {
                    continue;
                }
                let material = assets.material(&mut materials, *color);
                commands.spawn((
                    Mesh2d(assets.circle.clone()),
                    MeshMaterial2d(material),
                    Transform::from_translation(canvas.to_world(*center).extend(z))
                        .with_scale(Vec3::splat(*radius as f32)),
                    CanvasItem,
                ));
            }
            DrawCommand::FillText {
                text,
                origin,
                font,
                color,
            } => {
                if !origin.is_finite() {
                    continue;
                }
                commands.spawn((
                    Text2d::new(text.clone()),
                    TextFont {
                        font_size: font.size,
                        ..default()
                    },
                    TextColor(Color::from(*color)),
                    Anchor::BOTTOM_LEFT,
                    Transform::from_translation(canvas.to_world(*origin).extend(z)),
                    CanvasItem,
                ));
            }
            DrawCommand::ClearRect { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawSurface;
    use crate::render::render_pass;
    use crate::resources::{LabelStyle, SOLAR_SYSTEM};
    use bevy::ecs::system::SystemState;
    use bevy::math::DVec2;

    fn solar_registry() -> BodyRegistry {
        BodyRegistry::from_table(&SOLAR_SYSTEM).expect("default table is valid")
    }

    fn run_present(world: &mut World) {
        let mut system_state: SystemState<(
            Commands,
            Res<FrameCanvas>,
            ResMut<CanvasAssets>,
            ResMut<Assets<ColorMaterial>>,
            Query<Entity, With<CanvasItem>>,
        )> = SystemState::new(world);

        {
            let (commands, canvas, assets, materials, drawn) = system_state.get_mut(world);
            present_canvas(commands, canvas, assets, materials, drawn);
        }
        system_state.apply(world);
    }

    fn canvas_items(world: &mut World) -> usize {
        world
            .query_filtered::<Entity, With<CanvasItem>>()
            .iter(world)
            .count()
    }

    #[test]
    fn advance_frame_steps_and_redraws() {
        let mut world = World::new();
        world.insert_resource(FrameDriver::default());
        world.insert_resource(solar_registry());
        world.insert_resource(SimConfig::default());
        world.insert_resource(FrameCanvas::default());

        let mut system_state: SystemState<(
            ResMut<FrameDriver>,
            ResMut<BodyRegistry>,
            Res<SimConfig>,
            ResMut<FrameCanvas>,
        )> = SystemState::new(&mut world);

        for _ in 0..2 {
            let (driver, registry, config, canvas) = system_state.get_mut(&mut world);
            advance_frame(driver, registry, config, canvas);
        }
        system_state.apply(&mut world);

        assert_eq!(world.resource::<FrameDriver>().frames(), 2);
        assert_eq!(world.resource::<FrameCanvas>().commands().len(), 18);

        let registry = world.resource::<BodyRegistry>();
        assert_eq!(registry.len(), 9);
        assert_ne!(registry.position(1), DVec2::new(100.0, 0.0));
    }

    #[test]
    fn present_canvas_replaces_previous_frame() {
        let mut world = World::new();
        world.init_resource::<Assets<ColorMaterial>>();
        world.insert_resource(CanvasAssets::new(Handle::default()));

        let mut canvas = FrameCanvas::default();
        render_pass(&solar_registry(), &LabelStyle::default(), &mut canvas);
        world.insert_resource(canvas);

        run_present(&mut world);
        assert_eq!(canvas_items(&mut world), 18);

        run_present(&mut world);
        assert_eq!(canvas_items(&mut world), 18);

        // One cached material per planet color.
        assert_eq!(world.resource::<CanvasAssets>().materials.len(), 9);
    }

    #[test]
    fn present_canvas_skips_non_finite_shapes() {
        let mut world = World::new();
        world.init_resource::<Assets<ColorMaterial>>();
        world.insert_resource(CanvasAssets::new(Handle::default()));

        let mut canvas = FrameCanvas::default();
        let font = LabelStyle::default().font();
        canvas.fill_circle(DVec2::new(f64::NAN, 0.0), 5.0, Srgba::WHITE);
        canvas.fill_text("Lost", DVec2::new(f64::NAN, 0.0), &font, Srgba::WHITE);
        canvas.fill_circle(DVec2::new(10.0, 10.0), 5.0, Srgba::WHITE);
        world.insert_resource(canvas);

        run_present(&mut world);
        assert_eq!(canvas_items(&mut world), 1);
    }
}
