mod tests {
    use ledlamp_effects::color::Rgb;
    use ledlamp_effects::transform::{
        ShiftDirection, add_glitter, fade_to_black_by, lineit, nscale8, shift, waveit,
    };
    use rand::rngs::mock::StepRng;

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn ramp<const N: usize>() -> [Rgb; N] {
        core::array::from_fn(|i| {
            let v = u8::try_from(i).unwrap();
            Rgb { r: v, g: v, b: v }
        })
    }

    #[test]
    fn test_fade_to_black_by_bounds() {
        let mut leds = [WHITE; 8];
        fade_to_black_by(&mut leds, 0);
        assert!(leds.iter().all(|led| *led == WHITE));

        fade_to_black_by(&mut leds, 255);
        assert!(leds.iter().all(|led| *led == Rgb::default()));
    }

    #[test]
    fn test_fade_half_on_thirty_pixels() {
        let mut leds = [WHITE; 30];
        fade_to_black_by(&mut leds, 128);
        for led in leds {
            assert!((127..=128).contains(&led.r), "faded to {led:?}");
            assert_eq!(led.r, led.g);
            assert_eq!(led.g, led.b);
        }
    }

    #[test]
    fn test_nscale8() {
        let mut leds = [WHITE; 2];
        nscale8(&mut leds, 224);
        assert_eq!(leds[0].r, 224);
    }

    #[test]
    fn test_add_glitter_forced() {
        let mut leds = [Rgb::default(); 10];
        // Every draw returns zero: the chance always succeeds and hits pixel 0
        let mut rng = StepRng::new(0, 0);
        add_glitter(&mut leds, 1, &mut rng);
        assert_eq!(leds[0], WHITE);
        assert_eq!(leds.iter().filter(|led| **led == WHITE).count(), 1);
    }

    #[test]
    fn test_add_glitter_never_with_zero_chance() {
        let mut leds = [Rgb::default(); 10];
        let mut rng = StepRng::new(0, 0);
        add_glitter(&mut leds, 0, &mut rng);
        assert!(leds.iter().all(|led| *led == Rgb::default()));
    }

    #[test]
    fn test_add_glitter_fails_on_max_draw() {
        let mut leds = [Rgb::default(); 10];
        let mut rng = StepRng::new(u64::MAX, 0);
        add_glitter(&mut leds, 255, &mut rng);
        assert!(leds.iter().all(|led| *led == Rgb::default()));
    }

    #[test]
    fn test_waveit_moves_outward_from_center() {
        let mut leds = ramp::<6>();
        waveit(&mut leds);
        let values: Vec<u8> = leds.iter().map(|led| led.r).collect();
        assert_eq!(values, [1, 2, 3, 3, 3, 4]);
    }

    #[test]
    fn test_waveit_short_buffers() {
        let mut one = [WHITE];
        waveit(&mut one);
        assert_eq!(one[0], WHITE);

        let mut empty: [Rgb; 0] = [];
        waveit(&mut empty);
    }

    #[test]
    fn test_lineit_up_duplicates_first() {
        let mut leds = ramp::<4>();
        lineit(&mut leds, ShiftDirection::Up);
        let values: Vec<u8> = leds.iter().map(|led| led.r).collect();
        assert_eq!(values, [0, 0, 1, 2]);
    }

    #[test]
    fn test_lineit_down_duplicates_last() {
        let mut leds = ramp::<4>();
        lineit(&mut leds, ShiftDirection::Down);
        let values: Vec<u8> = leds.iter().map(|led| led.r).collect();
        assert_eq!(values, [1, 2, 3, 3]);
    }

    #[test]
    fn test_shift_clamps() {
        assert_eq!(shift(5, 0, 10, ShiftDirection::Up), 6);
        assert_eq!(shift(10, 0, 10, ShiftDirection::Up), 10);
        assert_eq!(shift(0, 0, 10, ShiftDirection::Down), 0);
        assert_eq!(shift(3, 5, 2, ShiftDirection::Up), 5);
    }
}
