mod tests {
    use ledlamp_effects::{Palette16, Rgb, Strip, StripConfig, StripError};

    #[test]
    fn test_empty_strip_rejected() {
        let result = Strip::<8>::new(&StripConfig::new(0));

        let err = result.unwrap_err();
        assert_eq!(err, StripError::EmptyStrip);
        assert_eq!(err.to_string(), "strip must have at least one pixel");
    }

    #[test]
    fn test_oversized_strip_rejected() {
        let err = Strip::<8>::new(&StripConfig::new(9)).unwrap_err();

        assert_eq!(
            err,
            StripError::CapacityExceeded {
                requested: 9,
                capacity: 8
            }
        );
        assert_eq!(
            err.to_string(),
            "strip of 9 pixels exceeds buffer capacity of 8"
        );
    }

    #[test]
    fn test_buffers_follow_pixel_count() {
        let strip = Strip::<8>::new(&StripConfig::new(5).with_output(4, 12)).unwrap();

        assert_eq!(strip.count(), 5);
        assert_eq!(strip.leds().len(), 5);
        assert_eq!(strip.heat().len(), 5);
        assert_eq!(strip.pin(), 4);
        assert_eq!(strip.offset(), 12);
    }

    #[test]
    fn test_defaults() {
        let strip = Strip::<8>::new(&StripConfig::new(5)).unwrap();

        assert_eq!(strip.hue(), 0);
        assert_eq!(strip.palette(), &Palette16::PARTY);
        assert_eq!(strip.color(), Rgb::new(255, 255, 255));
        assert!(strip.leds().iter().all(|led| *led == Rgb::default()));
    }

    #[test]
    fn test_add_pixel_saturates() {
        let mut strip = Strip::<8>::new(&StripConfig::new(5)).unwrap();

        strip.set_pixel(2, Rgb::new(200, 10, 0));
        strip.add_pixel(2, Rgb::new(100, 10, 5));

        assert_eq!(strip.pixel(2), Rgb::new(255, 20, 5));
    }

    #[test]
    fn test_hue_wraps() {
        let mut strip = Strip::<8>::new(&StripConfig::new(5)).unwrap();
        strip.set_hue(255);

        strip.advance_hue();

        assert_eq!(strip.hue(), 0);
    }

    #[test]
    fn test_clear_heat() {
        let mut strip = Strip::<8>::new(&StripConfig::new(5)).unwrap();
        let (heat, _) = strip.heat_and_leds_mut();
        heat.fill(120);

        strip.clear_heat();

        assert!(strip.heat().iter().all(|cell| *cell == 0));
    }
}
