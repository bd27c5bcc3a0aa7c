//! Casts a grid of primary rays at a small procedural scene and prints the
//! result as ASCII art, together with a light tree built for the scene.
//!
//! Run with `RUST_LOG=debug` to see what's going on under the hood.

use canopy::{
    Geometry, IntersectionMethod, Light, LightCutsConfig, Lights, Ray,
    Triangle,
};
use glam::{vec3, Mat4, Vec3};

const WIDTH: u32 = 64;
const HEIGHT: u32 = 32;

fn main() -> canopy::Result<()> {
    env_logger::init();

    let mut geometry = Geometry::default();

    geometry.add_object(quad(vec3(-2.0, -2.0, 0.0), 4.0))?;
    geometry.add_object(quad(vec3(-0.5, -0.5, 1.0), 1.0))?;

    let camera_pos = vec3(0.0, 0.0, 6.0);
    let view = Mat4::look_at_rh(camera_pos, Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(
        45f32.to_radians(),
        WIDTH as f32 / HEIGHT as f32,
        0.1,
        100.0,
    );

    let (view_inv, proj_inv) = (view.inverse(), proj.inverse());

    for y in 0..HEIGHT {
        let line: String = (0..WIDTH)
            .map(|x| {
                let ray = Ray::at_pixel(
                    x as f32 + 0.5,
                    y as f32 + 0.5,
                    view_inv,
                    proj_inv,
                    WIDTH as f32,
                    HEIGHT as f32,
                    camera_pos,
                );

                let hits =
                    geometry.hits(&ray, camera_pos, IntersectionMethod::Bvh);

                match hits.closest() {
                    Some(hit) if hit.distance() < 5.5 => '#',
                    Some(_) => '.',
                    None => ' ',
                }
            })
            .collect();

        println!("{line}");
    }

    let mut lights = Lights::default();

    for i in 0..8 {
        let x = i as f32 - 3.5;

        lights.add(Light::point(vec3(x, 2.0, 2.0), Vec3::ONE, 1.0 + i as f32));
    }

    lights.add(Light::oriented(
        vec3(0.0, 4.0, 0.0),
        Vec3::NEG_Y,
        vec3(1.0, 0.8, 0.6),
        10.0,
        0.6,
    ));

    let config = LightCutsConfig {
        seed: Some(0),
        ..Default::default()
    };

    let tree = lights.build_tree(&config)?;
    let root = tree.root();

    println!();
    println!(
        "light tree: {} nodes, total intensity = {}, represented by {:?}",
        tree.len(),
        root.intensity,
        tree.representative(tree.root_id())?,
    );

    Ok(())
}

/// Builds an axis-aligned square in the XY plane, facing the camera.
fn quad(min: Vec3, size: f32) -> Vec<Triangle> {
    let [p0, p1, p2, p3] = [
        min,
        min + vec3(size, 0.0, 0.0),
        min + vec3(size, size, 0.0),
        min + vec3(0.0, size, 0.0),
    ];

    vec![Triangle::new(p0, p3, p1), Triangle::new(p1, p3, p2)]
}
