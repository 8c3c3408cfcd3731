mod tests {
    use ledlamp_effects::color::{
        Rgb, add_saturating, blend_colors, fill_gradient_rgb, fill_rainbow, heat_color, hsv,
        max_channels, nscale8_video, rgb_from_u32,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_add_saturating() {
        let grey = Rgb {
            r: 200,
            g: 100,
            b: 0,
        };
        assert_eq!(
            add_saturating(grey, grey),
            Rgb {
                r: 255,
                g: 200,
                b: 0
            }
        );
        assert_eq!(add_saturating(grey, WHITE), WHITE);
    }

    #[test]
    fn test_max_channels() {
        assert_eq!(
            max_channels(RED, BLUE),
            Rgb {
                r: 255,
                g: 0,
                b: 255
            }
        );
    }

    #[test]
    fn test_nscale8_video_never_blacks_out() {
        let dim = Rgb { r: 3, g: 0, b: 1 };
        assert_eq!(nscale8_video(dim, 1), Rgb { r: 1, g: 0, b: 1 });
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(
            rgb_from_u32(0x12_34_56),
            Rgb {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }
        );
    }

    #[test]
    fn test_heat_color_ramp_ends() {
        assert_eq!(heat_color(0), BLACK);
        assert_eq!(
            heat_color(255),
            Rgb {
                r: 255,
                g: 255,
                b: 252
            }
        );
        // Middle of the ramp is past red and into yellow
        let mid = heat_color(128);
        assert_eq!(mid.r, 255);
        assert_eq!(mid.b, 0);
    }

    #[test]
    fn test_fill_gradient_rgb_endpoints() {
        let mut leds = [BLACK; 5];
        fill_gradient_rgb(&mut leds, 0, RED, 4, BLUE);
        assert_eq!(leds[0], RED);
        assert_eq!(leds[4], BLUE);
        assert!(leds[2].r > 0 && leds[2].b > 0);
    }

    #[test]
    fn test_fill_gradient_rgb_reversed_and_clamped() {
        let mut leds = [BLACK; 4];
        fill_gradient_rgb(&mut leds, 10, BLUE, 0, RED);
        assert_eq!(leds[0], RED);
        assert!(leds.iter().all(|led| led.g == 0));
    }

    #[test]
    fn test_fill_rainbow_steps_hue() {
        let mut leds = [BLACK; 3];
        fill_rainbow(&mut leds, 0, 85);
        assert_eq!(leds[0], hsv(0, 240, 255));
        assert_eq!(leds[1], hsv(85, 240, 255));
        assert_eq!(leds[2], hsv(170, 240, 255));
    }
}
