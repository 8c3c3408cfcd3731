mod tests {
    use embassy_time::{Duration, Instant};
    use ledlamp_effects::channel::{Channel, TrySendError};
    use ledlamp_effects::{
        AudioSnapshot, EffectId, FrameScheduler, IntentChannel, LightIntent, OutputDriver, Rgb,
        StripConfig, StripRenderer,
    };
    use rand::{SeedableRng, rngs::SmallRng};

    const MAX_LEDS: usize = 16;

    fn solid_config(color: Rgb, brightness: u8) -> StripConfig {
        StripConfig::new(8)
            .with_effect(EffectId::Solid)
            .with_color(color)
            .with_brightness(brightness)
    }

    #[test]
    fn test_channel_rejects_when_full() {
        let channel: Channel<u8, 2> = Channel::new();
        let sender = channel.sender();

        assert_eq!(sender.try_send(1), Ok(()));
        assert_eq!(sender.try_send(2), Ok(()));
        assert_eq!(sender.try_send(3), Err(TrySendError(3)));
        assert_eq!(channel.len(), 2);
    }

    #[test]
    fn test_channel_evicts_oldest() {
        let channel: Channel<u8, 2> = Channel::new();
        let sender = channel.sender();

        assert_eq!(sender.send_evicting(1), None);
        assert_eq!(sender.send_evicting(2), None);
        assert_eq!(sender.send_evicting(3), Some(1));

        let mut received = Vec::new();
        assert_eq!(channel.receiver().drain(|value| received.push(value)), 2);
        assert_eq!(received, [2, 3]);
        assert!(channel.is_empty());
    }

    #[test]
    fn test_channel_clear() {
        let channel: Channel<u8, 4> = Channel::new();
        channel.try_send(1).unwrap();
        channel.try_send(2).unwrap();

        channel.clear();

        assert!(channel.receiver().try_receive().is_err());
    }

    #[test]
    fn test_intent_merge_prefers_newer() {
        let older = LightIntent::new().with_brightness(10).with_power(false);
        let newer = LightIntent::new().with_brightness(200);

        let merged = older.merge(newer);

        assert_eq!(merged.brightness, Some(200));
        assert_eq!(merged.power, Some(false));
        assert_eq!(merged.effect, None);
        assert!(LightIntent::new().is_empty());
        assert!(!merged.is_empty());
    }

    #[test]
    fn test_output_is_scaled_by_brightness() {
        let channel = IntentChannel::<4>::new();
        let config = solid_config(Rgb::new(200, 100, 50), 128);
        let mut renderer: StripRenderer<MAX_LEDS, 4> =
            StripRenderer::new(channel.receiver(), &config).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);

        let frame = renderer.render(Instant::from_millis(0), &AudioSnapshot::SILENT, &mut rng);

        assert_eq!(frame.len(), 8);
        assert!(frame.iter().all(|led| *led == Rgb::new(100, 50, 25)));
        // Effect buffer keeps full brightness
        assert_eq!(renderer.strip().pixel(0), Rgb::new(200, 100, 50));
    }

    #[test]
    fn test_power_off_blanks_output() {
        let channel = IntentChannel::<4>::new();
        let config = solid_config(Rgb::new(200, 100, 50), 255);
        let mut renderer: StripRenderer<MAX_LEDS, 4> =
            StripRenderer::new(channel.receiver(), &config).unwrap();
        let mut rng = SmallRng::seed_from_u64(2);

        channel
            .sender()
            .try_send(LightIntent::new().with_power(false))
            .unwrap();
        let frame = renderer.render(Instant::from_millis(0), &AudioSnapshot::SILENT, &mut rng);

        assert!(frame.iter().all(|led| *led == Rgb::default()));
        assert!(!renderer.is_on());
    }

    #[test]
    fn test_queued_intents_apply_in_order() {
        let channel = IntentChannel::<4>::new();
        let config = solid_config(Rgb::new(10, 10, 10), 255);
        let mut renderer: StripRenderer<MAX_LEDS, 4> =
            StripRenderer::new(channel.receiver(), &config).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);

        let sender = channel.sender();
        sender
            .try_send(LightIntent::new().with_color(Rgb::new(1, 2, 3)).with_brightness(50))
            .unwrap();
        sender
            .try_send(LightIntent::new().with_color(Rgb::new(255, 0, 0)))
            .unwrap();
        let frame = renderer.render(Instant::from_millis(0), &AudioSnapshot::SILENT, &mut rng);

        assert_eq!(frame[0], Rgb::new(50, 0, 0));
        assert_eq!(renderer.brightness(), 50);
        assert!(channel.is_empty());
    }

    #[test]
    fn test_switching_effect_clears_heat() {
        let channel = IntentChannel::<4>::new();
        let config = StripConfig::new(8).with_effect(EffectId::Fire);
        let mut renderer: StripRenderer<MAX_LEDS, 4> =
            StripRenderer::new(channel.receiver(), &config).unwrap();
        let mut rng = SmallRng::seed_from_u64(4);

        let mut warmed = false;
        for ms in (0..2000).step_by(10) {
            renderer.render(Instant::from_millis(ms), &AudioSnapshot::SILENT, &mut rng);
            warmed |= renderer.strip().heat().iter().any(|cell| *cell > 0);
        }
        assert!(warmed);

        channel
            .sender()
            .try_send(LightIntent::new().with_effect(EffectId::Solid))
            .unwrap();
        renderer.render(Instant::from_millis(2000), &AudioSnapshot::SILENT, &mut rng);

        assert_eq!(renderer.effect_id(), EffectId::Solid);
        assert!(renderer.strip().heat().iter().all(|cell| *cell == 0));
    }

    #[test]
    fn test_hue_advances_every_20ms() {
        let channel = IntentChannel::<4>::new();
        let config = StripConfig::new(8);
        let mut renderer: StripRenderer<MAX_LEDS, 4> =
            StripRenderer::new(channel.receiver(), &config).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        let audio = AudioSnapshot::SILENT;

        renderer.render(Instant::from_millis(0), &audio, &mut rng);
        assert_eq!(renderer.strip().hue(), 0);
        renderer.render(Instant::from_millis(10), &audio, &mut rng);
        assert_eq!(renderer.strip().hue(), 0);
        renderer.render(Instant::from_millis(20), &audio, &mut rng);
        assert_eq!(renderer.strip().hue(), 1);
        renderer.render(Instant::from_millis(30), &audio, &mut rng);
        assert_eq!(renderer.strip().hue(), 1);
        renderer.render(Instant::from_millis(40), &audio, &mut rng);
        assert_eq!(renderer.strip().hue(), 2);
    }

    #[test]
    fn test_renderer_rejects_bad_config() {
        let channel = IntentChannel::<4>::new();

        let empty = StripRenderer::<MAX_LEDS, 4>::new(channel.receiver(), &StripConfig::new(0));
        let oversized =
            StripRenderer::<MAX_LEDS, 4>::new(channel.receiver(), &StripConfig::new(17));

        assert!(empty.is_err());
        assert!(oversized.is_err());
    }

    #[derive(Default)]
    struct RecordingDriver {
        frames: usize,
        last: Vec<Rgb>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames += 1;
            self.last = colors.to_vec();
        }
    }

    #[test]
    fn test_scheduler_paces_frames() {
        let channel = IntentChannel::<4>::new();
        let config = solid_config(Rgb::new(0, 0, 255), 255);
        let renderer: StripRenderer<MAX_LEDS, 4> =
            StripRenderer::new(channel.receiver(), &config).unwrap();
        let mut scheduler = FrameScheduler::new(renderer, RecordingDriver::default());
        let mut rng = SmallRng::seed_from_u64(6);
        let audio = AudioSnapshot::SILENT;

        let first = scheduler.tick(Instant::from_millis(0), &audio, &mut rng);
        assert_eq!(first.next_deadline, Instant::from_millis(10));
        assert_eq!(first.sleep_duration, Duration::from_millis(10));

        let late = scheduler.tick(Instant::from_millis(14), &audio, &mut rng);
        assert_eq!(late.next_deadline, Instant::from_millis(20));
        assert_eq!(late.sleep_duration, Duration::from_millis(6));

        // Far behind: restart from now instead of catching up
        let stalled = scheduler.tick(Instant::from_millis(500), &audio, &mut rng);
        assert_eq!(stalled.next_deadline, Instant::from_millis(510));

        assert_eq!(scheduler.output().frames, 3);
        assert_eq!(scheduler.output().last, vec![Rgb::new(0, 0, 255); 8]);
    }
}
