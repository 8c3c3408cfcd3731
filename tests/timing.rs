mod tests {
    use embassy_time::{Duration, Instant};
    use ledlamp_effects::timing::{Gate, elapsed_since};

    fn firing_ticks(
        gate: &mut Gate,
        ticks: impl IntoIterator<Item = u64>,
        interval_ms: u64,
    ) -> Vec<u64> {
        ticks
            .into_iter()
            .filter(|ms| gate.ready_ms(Instant::from_millis(*ms), interval_ms))
            .collect()
    }

    #[test]
    fn test_elapsed_since_resets_mark_on_fire() {
        let interval = Duration::from_millis(10);
        let (fired, mark) =
            elapsed_since(Instant::from_millis(0), Instant::from_millis(9), interval);
        assert!(!fired);
        assert_eq!(mark, Instant::from_millis(0));

        let (fired, mark) =
            elapsed_since(Instant::from_millis(0), Instant::from_millis(25), interval);
        assert!(fired);
        assert_eq!(mark, Instant::from_millis(25));
    }

    #[test]
    fn test_gate_fires_at_most_once_per_interval() {
        let mut gate = Gate::new();
        let fired = firing_ticks(&mut gate, (0..=50).step_by(5), 10);
        assert_eq!(fired, [10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_gate_drops_missed_intervals() {
        let mut gate = Gate::new();
        // A long stall fires once, then the next interval counts from there
        let fired = firing_ticks(&mut gate, [10, 95, 96, 104, 105], 10);
        assert_eq!(fired, [10, 95, 105]);
    }

    #[test]
    fn test_gate_is_independent_of_call_count() {
        let mut sparse = Gate::new();
        let mut dense = Gate::new();
        let sparse_fired = firing_ticks(&mut sparse, (0..=200).step_by(10), 50);
        let dense_fired: Vec<u64> = firing_ticks(&mut dense, 0..=200, 50)
            .into_iter()
            .filter(|ms| ms % 10 == 0)
            .collect();
        assert_eq!(sparse_fired, [50, 100, 150, 200]);
        assert_eq!(sparse_fired, dense_fired);
    }

    #[test]
    fn test_gate_starting_at_and_reset() {
        let mut gate = Gate::starting_at(Instant::from_millis(1000));
        assert!(!gate.ready_ms(Instant::from_millis(1004), 5));
        assert!(gate.ready_ms(Instant::from_millis(1005), 5));
        assert_eq!(gate.mark(), Instant::from_millis(1005));

        gate.reset(Instant::from_millis(2000));
        assert!(!gate.ready(Instant::from_millis(2001), Duration::from_millis(5)));
    }

    #[test]
    fn test_gate_tolerates_clock_before_mark() {
        let mut gate = Gate::starting_at(Instant::from_millis(500));
        assert!(!gate.ready_ms(Instant::from_millis(100), 10));
    }
}
