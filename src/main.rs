mod canvas;
mod components;
mod driver;
mod error;
mod registry;
mod render;
mod resources;
mod simulation;
mod systems;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

use crate::canvas::FrameCanvas;
use crate::driver::FrameDriver;
use crate::error::ConfigError;
use crate::registry::BodyRegistry;
use crate::resources::{SOLAR_SYSTEM, SimConfig};
use crate::systems::*;

fn main() -> Result<(), ConfigError> {
    let config = SimConfig::default();
    config.validate()?;
    let registry = BodyRegistry::from_table(&SOLAR_SYSTEM)?;

    let surface = config.surface;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System".into(),
                resolution: WindowResolution::new(surface.width, surface.height),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(FrameCanvas::new(surface))
        .insert_resource(config)
        .insert_resource(registry)
        .init_resource::<FrameDriver>()
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (advance_frame, present_canvas).chain())
        .add_systems(EguiPrimaryContextPass, body_inspector)
        .run();

    Ok(())
}
