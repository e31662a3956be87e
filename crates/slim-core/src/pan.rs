use crate::consts::PAN_LIMIT_FRACTION;

/// Bound pan offsets so that at most 80% of the scaled image can leave the
/// window along each axis.
///
/// `scaled_width`/`scaled_height` are the image dimensions at the current
/// zoom. Returns the clamped `(offset_x, offset_y)`.
pub fn clamp_offsets(
    offset_x: i32,
    offset_y: i32,
    scaled_width: i32,
    scaled_height: i32,
) -> (i32, i32) {
    let max_x = max_offset(scaled_width);
    let max_y = max_offset(scaled_height);
    (offset_x.clamp(-max_x, max_x), offset_y.clamp(-max_y, max_y))
}

fn max_offset(scaled: i32) -> i32 {
    // Truncating cast, and never negative so the clamp range stays valid.
    ((f64::from(scaled) * PAN_LIMIT_FRACTION) as i32).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limits_untouched() {
        assert_eq!(clamp_offsets(10, -10, 100, 100), (10, -10));
    }

    #[test]
    fn test_clamped_both_directions() {
        assert_eq!(clamp_offsets(500, -500, 100, 50), (80, -40));
        assert_eq!(clamp_offsets(-500, 500, 100, 50), (-80, 40));
    }

    #[test]
    fn test_truncates_limit() {
        // 0.8 * 33 = 26.4
        assert_eq!(clamp_offsets(30, 30, 33, 33), (26, 26));
    }
}
