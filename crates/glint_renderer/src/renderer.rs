//! Renderer driver: primary rays, supersampling and the output image.
//!
//! - Stratified `a x a` supersampling per pixel
//! - Colors clamped to [0, 1] only when written to the image
//! - Buckets rendered in parallel with rayon

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, Color, Interval, Scene};

/// Clamp each channel to the displayable range.
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = clamp_color(color);
    [
        (255.0 * c.x) as u8,
        (255.0 * c.y) as u8,
        (255.0 * c.z) as u8,
    ]
}

/// Image buffer for storing render output.
///
/// Pixel (0, 0) is the top-left corner.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Offset of pixel (x, y) in `pixels`.
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        let width = bucket.width as usize;
        for (i, color) in result.pixels.iter().enumerate() {
            let x = bucket.x + (i % width) as u32;
            let y = bucket.y + (i / width) as u32;
            self.set(x, y, *color);
        }
    }

    /// Convert to RGB bytes, row by row from the top.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Write the image as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
    }
}

impl Scene {
    /// Render the scene into `image`, filling every pixel.
    pub fn render(&self, image: &mut ImageBuffer) {
        self.render_with_bucket_size(image, DEFAULT_BUCKET_SIZE);
    }

    /// Render with an explicit bucket size.
    pub fn render_with_bucket_size(&self, image: &mut ImageBuffer, bucket_size: u32) {
        let start = Instant::now();
        let (width, height) = (image.width, image.height);
        let camera = self.camera(width, height);
        let buckets = generate_buckets(width, height, bucket_size);

        log::info!(
            "Rendering {}x{} ({} objects, {} lights, {} buckets, {}x supersampling)",
            width,
            height,
            self.object_count(),
            self.light_count(),
            buckets.len(),
            self.settings().super_sampling_factor
        );

        let results: Vec<BucketResult> = buckets
            .par_iter()
            .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, self, &camera, height)))
            .collect();

        for result in &results {
            image.write_bucket(result);
        }

        log::info!("Render finished in {:.2?}", start.elapsed());
    }

    /// Averaged, clamped color of image pixel (x, y), with `y` counted from
    /// the top of an image `image_height` rows tall.
    ///
    /// The pixel is split into an `a x a` grid (`a` being the supersampling
    /// factor) and one primary ray is traced through each cell center.
    pub fn render_pixel(&self, camera: &Camera, x: u32, y: u32, image_height: u32) -> Color {
        let settings = self.settings();
        let a = settings.super_sampling_factor.max(1);
        let step = 1.0 / a as f64;

        // Screen rows grow upward
        let row = image_height.saturating_sub(1).saturating_sub(y) as f64;

        let mut color = Color::ZERO;
        for i in 0..a {
            for j in 0..a {
                let sx = x as f64 + (i as f64 + 0.5) * step;
                let sy = row + (j as f64 + 0.5) * step;
                let ray = camera.ray_through(sx, sy);
                color += self.trace(&ray, settings.max_recursion_depth, None);
            }
        }

        clamp_color(color / (a * a) as f64)
    }
}
