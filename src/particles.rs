//! Decorative particle layers and their looping animations
//!
//! Every animation is a pure function of the tick counter so a frame can be
//! reproduced from state alone. Durations come from the card design:
//!
//! | loop          | cycle | notes                                  |
//! |---------------|-------|----------------------------------------|
//! | ray twinkle   | 3.0s  | opacity 0.3 → 0.6 → 0.3, ray i +0.2s·i |
//! | drop fall     | 1.5s  | opacity 0 → 1 → 0, random delay < 2s   |
//! | halo rotation | 20s   | one full turn                          |
//! | droplet bob   | 1.5s  | down and back up                       |

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::TICKS_PER_SECOND;

pub const RAY_COUNT: usize = 12;
pub const RAY_SPACING_DEG: f32 = 30.0;
pub const DROP_COUNT: usize = 20;

const RAY_TWINKLE_TICKS: u32 = 3 * TICKS_PER_SECOND;
const RAY_DELAY_STEP_TICKS: u32 = TICKS_PER_SECOND / 5;
const RAY_OPACITY_MIN: f32 = 0.3;
const RAY_OPACITY_MAX: f32 = 0.6;

const DROP_FALL_TICKS: u32 = TICKS_PER_SECOND * 3 / 2;
const DROP_MAX_DELAY_TICKS: u32 = 2 * TICKS_PER_SECOND;
/// Drops start slightly above the card and fall well past its bottom edge.
const DROP_START: f32 = -0.03;
const DROP_TRAVEL: f32 = 1.3;

const HALO_TURN_TICKS: u32 = 20 * TICKS_PER_SECOND;
const BOB_TICKS: u32 = TICKS_PER_SECOND * 3 / 2;

/// One sun ray radiating from the card's upper centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunRay {
    pub angle_deg: f32,
    pub delay_ticks: u32,
}

/// One falling rain drop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainDrop {
    /// Horizontal position as a fraction of the card width, `0..1`
    pub x: f32,
    pub delay_ticks: u32,
}

/// Where a drop is on a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropFrame {
    /// Vertical position as a fraction of the card height; may be outside `0..1`
    pub y: f32,
    pub opacity: f32,
}

/// The twelve fixed rays, 30° apart.
pub fn sun_rays() -> [SunRay; RAY_COUNT] {
    std::array::from_fn(|i| SunRay {
        angle_deg: i as f32 * RAY_SPACING_DEG,
        delay_ticks: i as u32 * RAY_DELAY_STEP_TICKS,
    })
}

/// The rain layout for a seed. Same seed, same drops.
pub fn rain_drops(seed: u64) -> Vec<RainDrop> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..DROP_COUNT)
        .map(|_| RainDrop {
            x: rng.gen_range(0.0..1.0),
            delay_ticks: rng.gen_range(0..DROP_MAX_DELAY_TICKS),
        })
        .collect()
}

impl SunRay {
    pub fn opacity(&self, tick: u32) -> f32 {
        let Some(local) = tick.checked_sub(self.delay_ticks) else {
            return RAY_OPACITY_MIN;
        };
        let phase = (local % RAY_TWINKLE_TICKS) as f32 / RAY_TWINKLE_TICKS as f32;
        RAY_OPACITY_MIN + (RAY_OPACITY_MAX - RAY_OPACITY_MIN) * triangle(phase)
    }
}

impl RainDrop {
    /// `None` until the drop's delay has passed.
    pub fn frame(&self, tick: u32) -> Option<DropFrame> {
        let local = tick.checked_sub(self.delay_ticks)?;
        let phase = (local % DROP_FALL_TICKS) as f32 / DROP_FALL_TICKS as f32;
        Some(DropFrame {
            y: DROP_START + DROP_TRAVEL * phase,
            opacity: triangle(phase),
        })
    }
}

/// Halo rotation in degrees, `0..360`.
pub fn halo_angle(tick: u32) -> f32 {
    (tick % HALO_TURN_TICKS) as f32 / HALO_TURN_TICKS as f32 * 360.0
}

/// Droplet bob offset, `0..=1` where 1 is the lowest point.
pub fn bob_offset(tick: u32) -> f32 {
    triangle((tick % BOB_TICKS) as f32 / BOB_TICKS as f32)
}

/// 0 → 1 → 0 over one phase.
fn triangle(phase: f32) -> f32 {
    1.0 - (phase * 2.0 - 1.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_rays_thirty_degrees_apart() {
        let rays = sun_rays();
        assert_eq!(rays.len(), 12);
        for (i, ray) in rays.iter().enumerate() {
            assert_eq!(ray.angle_deg, i as f32 * 30.0);
        }
        assert_eq!(rays[11].angle_deg, 330.0);
    }

    #[test]
    fn test_twenty_drops_inside_card() {
        let drops = rain_drops(42);
        assert_eq!(drops.len(), 20);
        for drop in &drops {
            assert!((0.0..1.0).contains(&drop.x));
            assert!(drop.delay_ticks < DROP_MAX_DELAY_TICKS);
        }
    }

    #[test]
    fn test_drops_deterministic_per_seed() {
        assert_eq!(rain_drops(9), rain_drops(9));
        assert_ne!(rain_drops(9), rain_drops(10));
    }

    #[test]
    fn test_ray_opacity_bounds() {
        let ray = sun_rays()[3];
        assert_eq!(ray.opacity(0), RAY_OPACITY_MIN);
        for tick in 0..500 {
            let opacity = ray.opacity(tick);
            assert!((RAY_OPACITY_MIN..=RAY_OPACITY_MAX).contains(&opacity));
        }
        // peak half way through the cycle
        let peak = ray.opacity(ray.delay_ticks + RAY_TWINKLE_TICKS / 2);
        assert!((peak - RAY_OPACITY_MAX).abs() < 1e-6);
    }

    #[test]
    fn test_drop_waits_for_delay_then_loops() {
        let drop = RainDrop {
            x: 0.5,
            delay_ticks: 10,
        };
        assert!(drop.frame(9).is_none());

        let start = drop.frame(10).unwrap();
        assert_eq!(start.y, DROP_START);
        assert_eq!(start.opacity, 0.0);

        let mid = drop.frame(10 + DROP_FALL_TICKS / 2).unwrap();
        assert!(mid.y > start.y);
        assert!((mid.opacity - 1.0).abs() < 1e-6);

        assert_eq!(drop.frame(10 + DROP_FALL_TICKS), Some(start));
    }

    #[test]
    fn test_halo_full_turn() {
        assert_eq!(halo_angle(0), 0.0);
        assert_eq!(halo_angle(HALO_TURN_TICKS / 2), 180.0);
        assert_eq!(halo_angle(HALO_TURN_TICKS), 0.0);
    }

    #[test]
    fn test_halo_turn_lasts_twenty_seconds() {
        use crate::state::ANIM_TICK_MS;

        let turn = (20_000 / ANIM_TICK_MS) as u32;
        assert_eq!(HALO_TURN_TICKS, turn);
        assert!(halo_angle(turn - 1) > 359.0);
        assert_eq!(halo_angle(turn), 0.0);
    }

    #[test]
    fn test_bob_returns_to_rest() {
        assert_eq!(bob_offset(0), 0.0);
        assert!((bob_offset(BOB_TICKS / 2) - 1.0).abs() < 1e-6);
        assert_eq!(bob_offset(BOB_TICKS), 0.0);
    }
}
