use loam_geom::{Rect, Vec2};

use crate::color::{Rgb, approximate_color, approximate_mono};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Material {
    Ground,
    Trunk,
    Leaf,
    Cloud,
}

impl Material {
    pub const fn base_color(self) -> Rgb {
        match self {
            Material::Ground => [212, 123, 74],
            Material::Trunk => [100, 50, 20],
            Material::Leaf => [50, 200, 30],
            Material::Cloud => [255, 255, 255],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Material::Ground => "ground",
            Material::Trunk => "trunk",
            Material::Leaf => "leaf",
            Material::Cloud => "cloud",
        }
    }

    /// Tint for a block of this material. Clouds stay grey-scale.
    pub fn tint(self, key: u64) -> Rgb {
        match self {
            Material::Cloud => approximate_mono(self.base_color(), key),
            _ => approximate_color(self.base_color(), key),
        }
    }
}

/// Square, grid-aligned, immutable world cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub material: Material,
    pub tint: Rgb,
}

impl Block {
    /// `x`/`y` is the top-left corner and must be a multiple of `size`.
    #[inline]
    pub fn new(x: i32, y: i32, size: i32, material: Material, tint_key: u64) -> Self {
        debug_assert!(size > 0);
        debug_assert!(
            x.rem_euclid(size) == 0 && y.rem_euclid(size) == 0,
            "block ({x}, {y}) not aligned to {size}"
        );
        Self {
            x,
            y,
            size,
            material,
            tint: material.tint(tint_key),
        }
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.top_left(), Vec2::splat(self.size as f32))
    }
}
