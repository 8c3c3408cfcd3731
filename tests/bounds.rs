mod tests {
    use embassy_time::Instant;
    use ledlamp_effects::random::{chance8, random8};
    use ledlamp_effects::{AudioSnapshot, EffectId, Frame, Rgb, Strip, StripConfig};
    use rand::{SeedableRng, rngs::SmallRng};

    const MAX_LEDS: usize = 300;
    const TICKS: u64 = 400;

    /// Run `id` for a while on a strip of `count` pixels with noisy audio
    fn run(id: EffectId, count: usize, seed: u64) -> Vec<Rgb> {
        let mut strip: Strip<MAX_LEDS> = Strip::new(&StripConfig::new(count)).unwrap();
        let mut slot = id.to_slot::<MAX_LEDS>();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut audio_rng = SmallRng::seed_from_u64(seed ^ 0xA0D1);

        let mut now = 0;
        for tick in 0..TICKS {
            // Mostly frame-paced, with the occasional long stall
            now += if tick % 97 == 0 { 6000 } else { 10 };
            let audio = AudioSnapshot::new(
                random8(&mut audio_rng),
                chance8(&mut audio_rng, 40),
                random8(&mut audio_rng),
            );
            if tick % 20 == 0 {
                strip.advance_hue();
            }

            let mut frame = Frame::new(Instant::from_millis(now), &audio, &mut rng);
            slot.render(&mut strip, &mut frame);

            assert_eq!(strip.leds().len(), count);
            assert_eq!(strip.heat().len(), count);
        }

        strip.leds().to_vec()
    }

    #[test]
    fn test_every_effect_on_single_pixel() {
        for id in EffectId::ALL {
            run(id, 1, 1);
        }
    }

    #[test]
    fn test_every_effect_on_two_pixels() {
        for id in EffectId::ALL {
            run(id, 2, 2);
        }
    }

    #[test]
    fn test_every_effect_on_short_odd_strip() {
        for id in EffectId::ALL {
            run(id, 7, 3);
        }
    }

    #[test]
    fn test_every_effect_on_typical_strip() {
        for id in EffectId::ALL {
            run(id, 30, 4);
        }
    }

    #[test]
    fn test_every_effect_past_byte_range() {
        for count in [255, 256, 300] {
            for id in EffectId::ALL {
                run(id, count, 5);
            }
        }
    }

    #[test]
    fn test_same_inputs_render_same_frames() {
        for id in EffectId::ALL {
            assert_eq!(run(id, 30, 6), run(id, 30, 6), "{}", id.as_str());
        }
    }
}
