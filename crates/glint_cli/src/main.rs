//! Render a JSON scene to a PNG image.
//!
//! Usage: glint <scene.json> [output.png] [--width W] [--height H]

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::load_scene;
use glint_renderer::{ImageBuffer, SceneBuilder};

/// Render a JSON scene to a PNG image.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene description (JSON)
    scene: PathBuf,

    /// Output image; defaults to the scene path with a .png extension
    output: Option<PathBuf>,

    /// Override the image width from the scene's Size
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Override the image height from the scene's Size
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.scene.with_extension("png"))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let output = args.output_path();

    let start = Instant::now();
    let desc = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let base_dir = args.scene.parent().unwrap_or(Path::new("."));
    let scene = SceneBuilder::new(base_dir)
        .build(&desc)
        .context("Failed to build scene")?;
    log::info!("Scene ready in {:.2?}", start.elapsed());

    let (width, height) = desc.image_size();
    let width = args.width.unwrap_or(width);
    let height = args.height.unwrap_or(height);

    let mut image = ImageBuffer::new(width, height);
    scene.render(&mut image);

    image
        .save_png(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("Wrote {} ({:.2?} total)", output.display(), start.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("glint").chain(args.iter().copied()))
    }

    #[test]
    fn test_args_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_output_path() {
        let args = parse(&["scenes/spheres.json"]).unwrap();
        assert_eq!(args.scene, PathBuf::from("scenes/spheres.json"));
        assert_eq!(args.output_path(), PathBuf::from("scenes/spheres.png"));
        assert_eq!((args.width, args.height), (None, None));
    }

    #[test]
    fn test_size_overrides() {
        let args = parse(&["--width", "640", "a.json", "out.png", "--height", "480"]).unwrap();
        assert_eq!(args.output_path(), PathBuf::from("out.png"));
        assert_eq!((args.width, args.height), (Some(640), Some(480)));

        let args = parse(&["a.json", "--width=32"]).unwrap();
        assert_eq!(args.width, Some(32));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.json", "--width"]).is_err());
        assert!(parse(&["a.json", "--width", "0"]).is_err());
        assert!(parse(&["a.json", "--height", "-4"]).is_err());
        assert!(parse(&["a.json", "--width", "wide"]).is_err());
        assert!(parse(&["a.json", "--depth", "3"]).is_err());
        assert!(parse(&["a.json", "b.png", "c.png"]).is_err());
    }
}
