//! Example: Load a JSON scene file and print what it contains.
//!
//! Usage: cargo run --example inspect_scene -- path/to/scene.json

use glint_core::{load_scene, SurfaceDescription};

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scenes/spheres.json".to_string());

    println!("Loading scene: {}", path);

    match load_scene(&path) {
        Ok(scene) => {
            let (width, height) = scene.image_size();
            println!("Eye: {:?}", scene.eye);
            println!("Image: {}x{}", width, height);
            println!(
                "Shadows: {}, supersampling: {}, max recursion: {}",
                scene.shadows, scene.super_sampling_factor, scene.max_recursion_depth
            );

            println!("\nLights ({}):", scene.lights.len());
            for light in &scene.lights {
                println!("  at {:?} color {:?}", light.position, light.color);
            }

            println!("\nObjects ({}):", scene.objects.len());
            for (i, object) in scene.objects.iter().enumerate() {
                let surface = match object.material.surface() {
                    Some(SurfaceDescription::Flat(color)) => format!("color {:?}", color),
                    Some(SurfaceDescription::Textured(path)) => format!("texture {}", path),
                    None => "no surface".to_string(),
                };
                println!("  [{}] {} ({})", i, object.shape.type_name(), surface);
            }
        }
        Err(e) => {
            eprintln!("Failed to load scene: {}", e);
            std::process::exit(1);
        }
    }
}
