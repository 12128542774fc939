// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Easing utilities for smooth scrolling.
//!
//! This module provides the interpolation used to animate a media strip
//! from its current offset to a requested one.

/// Ease-out cubic curve. Input is clamped to [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear interpolation between `from` and `to`.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);

        // Out of range input saturates
        assert_eq!(ease_out_cubic(-2.0), 0.0);
        assert_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_front_loaded() {
        // Most of the distance is covered early
        assert!(ease_out_cubic(0.5) > 0.5);
        assert!(ease_out_cubic(0.25) < ease_out_cubic(0.5));
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 800.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 800.0, 1.0), 800.0);
        assert_eq!(lerp(800.0, 0.0, 0.5), 400.0);
    }
}
