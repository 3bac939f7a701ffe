/// 8-bit RGB triple.
pub type Rgb = [u8; 3];

const COLOR_DELTA: i32 = 10;

#[inline]
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn channel_offset(bits: u64) -> i32 {
    (bits % (2 * COLOR_DELTA as u64 + 1)) as i32 - COLOR_DELTA
}

#[inline]
fn shift(channel: u8, by: i32) -> u8 {
    (i32::from(channel) + by).clamp(0, 255) as u8
}

/// Jitters each channel of `base` by up to ±10, keyed by `key`.
///
/// Same key, same color: blocks regenerated after eviction keep their tint.
pub fn approximate_color(base: Rgb, key: u64) -> Rgb {
    let h = mix64(key);
    [
        shift(base[0], channel_offset(h)),
        shift(base[1], channel_offset(h >> 16)),
        shift(base[2], channel_offset(h >> 32)),
    ]
}

/// Like [`approximate_color`] but shifts all channels by the same amount.
pub fn approximate_mono(base: Rgb, key: u64) -> Rgb {
    let by = channel_offset(mix64(key));
    [shift(base[0], by), shift(base[1], by), shift(base[2], by)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_in_band() {
        for bits in 0..10_000u64 {
            let o = channel_offset(mix64(bits));
            assert!((-COLOR_DELTA..=COLOR_DELTA).contains(&o));
        }
    }

    #[test]
    fn mono_clamps_white() {
        let c = approximate_mono([255, 255, 255], 7);
        assert!(c[0] == c[1] && c[1] == c[2]);
    }
}
