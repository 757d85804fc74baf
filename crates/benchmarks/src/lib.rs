//! Benchmark utilities for Energy-Efficient Algorithms subsystems
pub mod utils {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Input orderings that hit the best, worst and average cases of the sorts
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum InputShape {
        Random,
        Sorted,
        Reversed,
        /// Random values drawn from only 8 distinct keys
        FewUnique,
    }

    impl InputShape {
        pub const ALL: [InputShape; 4] = [
            InputShape::Random,
            InputShape::Sorted,
            InputShape::Reversed,
            InputShape::FewUnique,
        ];

        pub fn name(self) -> &'static str {
            match self {
                InputShape::Random => "random",
                InputShape::Sorted => "sorted",
                InputShape::Reversed => "reversed",
                InputShape::FewUnique => "few_unique",
            }
        }
    }

    /// `n` values of the given shape, reproducible per seed
    pub fn generate_input(shape: InputShape, n: usize, seed: u64) -> Vec<u32> {
        let mut rng = StdRng::seed_from_u64(seed);
        match shape {
            InputShape::Random => (0..n).map(|_| rng.gen_range(0..n.max(1) as u32)).collect(),
            InputShape::Sorted => (0..n as u32).collect(),
            InputShape::Reversed => (0..n as u32).rev().collect(),
            InputShape::FewUnique => (0..n).map(|_| rng.gen_range(0..8)).collect(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_generate_input_shapes() {
            assert_eq!(generate_input(InputShape::Sorted, 4, 0), vec![0, 1, 2, 3]);
            assert_eq!(generate_input(InputShape::Reversed, 4, 0), vec![3, 2, 1, 0]);
            assert!(generate_input(InputShape::FewUnique, 100, 1)
                .iter()
                .all(|&v| v < 8));
            assert_eq!(
                generate_input(InputShape::Random, 50, 7),
                generate_input(InputShape::Random, 50, 7)
            );
        }
    }
}
