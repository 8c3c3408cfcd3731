mod tests {
    use ledlamp_effects::color::{BlendMode, PALETTE_SIZE, Palette16, Rgb};
    use rand::{SeedableRng, rngs::SmallRng};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn palettes() -> [Palette16; 4] {
        let mut rng = SmallRng::seed_from_u64(7);
        [
            Palette16::RAINBOW,
            Palette16::PARTY,
            Palette16::FIRE,
            Palette16::random_four(&mut rng),
        ]
    }

    #[test]
    fn test_sample_on_stop_returns_stop() {
        for palette in palettes() {
            for (k, stop) in palette.stops().iter().enumerate() {
                let index = u8::try_from(k * 16).unwrap();
                assert_eq!(palette.sample(index, 255, BlendMode::Linear), *stop);
                assert_eq!(palette.sample(index, 255, BlendMode::Nearest), *stop);
            }
        }
    }

    #[test]
    fn test_nearest_snaps_to_closer_stop() {
        let palette = Palette16::RAINBOW;
        let stops = palette.stops();
        assert_eq!(palette.sample(16 + 7, 255, BlendMode::Nearest), stops[1]);
        assert_eq!(palette.sample(16 + 8, 255, BlendMode::Nearest), stops[2]);
        // The last segment wraps back to the first stop
        assert_eq!(palette.sample(255, 255, BlendMode::Nearest), stops[0]);
    }

    #[test]
    fn test_linear_interpolates_between_stops() {
        let stops = [
            Rgb { r: 0, g: 0, b: 0 },
            Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        ];
        let mut all = [BLACK; PALETTE_SIZE];
        all[..2].copy_from_slice(&stops);
        let palette = Palette16::from_stops(all);

        let mid = palette.sample(8, 255, BlendMode::Linear);
        assert!((120..=136).contains(&mid.r), "mid was {mid:?}");
        assert_eq!(mid.r, mid.g);
    }

    #[test]
    fn test_sample_brightness() {
        let palette = Palette16::RAINBOW;
        assert_eq!(palette.sample(0, 0, BlendMode::Linear), BLACK);
        let half = palette.sample(0, 128, BlendMode::Linear);
        assert_eq!(half, Rgb { r: 128, g: 0, b: 0 });
    }

    #[test]
    fn test_from_four_places_anchor_colors() {
        let red = Rgb { r: 255, g: 0, b: 0 };
        let green = Rgb { r: 0, g: 255, b: 0 };
        let blue = Rgb { r: 0, g: 0, b: 255 };
        let white = Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        let palette = Palette16::from_four(red, green, blue, white);
        let stops = palette.stops();
        assert_eq!(stops[0], red);
        assert_eq!(stops[5], green);
        assert_eq!(stops[10], blue);
        assert_eq!(stops[15], white);
    }

    #[test]
    fn test_blend_towards_converges_without_overshoot() {
        for max_changes in [1, 24, 48, 255] {
            let mut current = Palette16::RAINBOW;
            let target = Palette16::PARTY;

            let mut calls = 0;
            loop {
                let before = current;
                let changed = current.blend_towards(&target, max_changes);

                for ((old, new), goal) in before
                    .stops()
                    .iter()
                    .zip(current.stops())
                    .zip(target.stops())
                {
                    let channels = [
                        (old.r, new.r, goal.r),
                        (old.g, new.g, goal.g),
                        (old.b, new.b, goal.b),
                    ];
                    for (o, n, g) in channels {
                        let (lo, hi) = if o <= g { (o, g) } else { (g, o) };
                        assert!((lo..=hi).contains(&n), "channel {o} -> {n} passed {g}");
                    }
                }

                if changed == 0 {
                    break;
                }
                calls += 1;
                assert!(calls <= PALETTE_SIZE * 3 * 255, "no convergence with {max_changes}");
            }
            assert_eq!(current, target);
        }
    }

    #[test]
    fn test_random_palettes_are_reproducible() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        assert_eq!(Palette16::random_four(&mut a), Palette16::random_four(&mut b));
        assert_eq!(
            Palette16::random_around(&mut a, 100),
            Palette16::random_around(&mut b, 100)
        );
    }
}
