use loam_blocks::{Block, Material};

use crate::column_rng::cell_key;
use crate::worldgen::WorldGenParams;

const CLOUD_PATTERN: [[u8; 6]; 6] = [
    [0, 1, 1, 0, 0, 0],
    [1, 1, 1, 0, 1, 0],
    [1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0],
];

/// Cloud blocks in camera space, starting just off the left edge of the
/// viewport at an eighth of its height.
pub fn cloud_blocks(params: &WorldGenParams) -> Vec<Block> {
    let s = params.block_size;
    let start_x = -5 * s;
    let start_y = (params.viewport_height / 8).div_euclid(s) * s;
    let mut out = Vec::new();
    for (row, cells) in CLOUD_PATTERN.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == 0 {
                continue;
            }
            let x = start_x + col as i32 * s;
            let y = start_y + row as i32 * s;
            out.push(Block::new(x, y, s, Material::Cloud, cell_key(x, y, params.seed)));
        }
    }
    out
}
