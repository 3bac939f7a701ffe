use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

use crate::worldgen::WorldGenParams;

/// Terrain surface height as a pure function of x.
///
/// `height_at(x) = baseline + amplitude * noise(x)` with `noise` in `[-1, 1]`.
/// The noise generator is configured once and only read afterwards, so any
/// call order yields the same value for the same `x`.
pub struct HeightField {
    baseline: f32,
    amplitude: f32,
    noise: FastNoiseLite,
}

impl HeightField {
    pub fn new(params: &WorldGenParams) -> Self {
        let mut noise = FastNoiseLite::with_seed(params.seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(params.height_frequency));
        if params.height_octaves > 1 {
            noise.set_fractal_type(Some(FractalType::FBm));
            noise.set_fractal_octaves(Some(params.height_octaves));
        }
        Self {
            baseline: params.baseline,
            amplitude: params.amplitude,
            noise,
        }
    }

    /// Surface y (screen space, grows downward) at `x`.
    #[inline]
    pub fn height_at(&self, x: f32) -> f32 {
        self.baseline + self.noise.get_noise_2d(x, 0.0) * self.amplitude
    }

    /// Top row of the ground column at `x`, rounded down to the block grid.
    #[inline]
    pub fn surface_row(&self, x: i32, block_size: i32) -> i32 {
        let h = self.height_at(x as f32);
        (h / block_size as f32).floor() as i32 * block_size
    }
}
