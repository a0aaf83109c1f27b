use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system))
        .run();
}

// World coordinates are pixels with the origin in the bottom-left corner;
// bevy's 2D camera sits at the world center, so drawing offsets by half
// the world extents.
fn world_offset(scenario: &Scenario) -> (f32, f32) {
    (scenario.parameters.width as f32 * 0.5, scenario.parameters.height as f32 * 0.5)
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let (half_w, half_h) = world_offset(&scenario);

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let x = body.x.x as f32 - half_w;
        let y = body.x.y as f32 - half_h;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    // Frame delta from bevy's monotonic clock; never negative
    let dt = time.delta_seconds() as f64;

    scenario.advance(dt);
    scenario.resolve_all_collisions();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let (half_w, half_h) = world_offset(&scenario);

    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x as f32) - half_w;
            transform.translation.y = (b.x.y as f32) - half_h;
        }
    }
}
