//! Gate generation
//!
//! A gate is a top and bottom pipe at the right edge of the board with a
//! fixed gap between them. Only the split point is random.

use rand::Rng;

use super::state::{Pipe, PipeKind};
use crate::config::GameConfig;

/// Build a gate at the right edge of the board.
///
/// The top pipe height is a uniform integer in
/// `[0, surface_height - gate_gap - spawn_margin)`, the bottom pipe fills the
/// rest below the gap. `config` must have passed `GameConfig::validate`.
pub fn spawn_gate<R: Rng>(rng: &mut R, config: &GameConfig) -> (Pipe, Pipe) {
    let upper = (config.max_top_height().ceil() as u32).max(1);
    let top_height = rng.random_range(0..upper) as f32;
    let bottom_height = config.surface_height - top_height - config.gate_gap;

    let top = Pipe {
        x: config.surface_width,
        y: 0.0,
        width: config.pipe_width,
        height: top_height,
        kind: PipeKind::Top,
        passed: false,
    };
    let bottom = Pipe {
        x: config.surface_width,
        y: top_height + config.gate_gap,
        width: config.pipe_width,
        height: bottom_height,
        kind: PipeKind::Bottom,
        passed: false,
    };
    (top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    #[test]
    fn test_gate_pair_shape() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let (top, bottom) = spawn_gate(&mut rng, &config);

        assert_eq!(top.kind, PipeKind::Top);
        assert_eq!(bottom.kind, PipeKind::Bottom);
        assert_eq!(top.x, 360.0);
        assert_eq!(top.x, bottom.x);
        assert_eq!(top.y, 0.0);
        assert_eq!(bottom.y - top.height, 200.0);
        assert_eq!(bottom.y + bottom.height, 640.0);
        assert!(!top.passed && !bottom.passed);
    }

    /// Rng that always yields the same word
    struct FixedRng(u32);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.0)
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn test_boundary_top_heights() {
        // 640 - 200 - 50 leaves top heights 0..=389
        let config = GameConfig::default();

        let (top, bottom) = spawn_gate(&mut FixedRng(0), &config);
        assert_eq!(top.height, 0.0);
        assert_eq!(bottom.y, 200.0);
        assert_eq!(bottom.height, 440.0);

        let (top, bottom) = spawn_gate(&mut FixedRng(u32::MAX), &config);
        assert_eq!(top.height, 389.0);
        assert_eq!(bottom.y, 589.0);
        assert_eq!(bottom.height, 51.0);
    }

    #[test]
    fn test_top_height_stays_in_range() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..5_000 {
            let (top, bottom) = spawn_gate(&mut rng, &config);
            assert!(top.height >= 0.0 && top.height < 390.0);
            assert_eq!(top.height.fract(), 0.0);
            assert!(bottom.height >= 51.0);
        }
    }

    proptest! {
        #[test]
        fn gate_heights_fill_the_board(
            seed in any::<u64>(),
            height in 300.0f32..1200.0,
            gap in 50.0f32..250.0,
        ) {
            let config = GameConfig {
                surface_height: height.floor(),
                gate_gap: gap.floor(),
                ..Default::default()
            };
            prop_assume!(config.validate().is_ok());
            let mut rng = Pcg32::seed_from_u64(seed);
            let (top, bottom) = spawn_gate(&mut rng, &config);
            prop_assert_eq!(top.height + config.gate_gap + bottom.height, config.surface_height);
            prop_assert!(top.height < config.max_top_height());
            prop_assert!(bottom.height > 0.0);
        }
    }
}
