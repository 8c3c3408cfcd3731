//! Audio-reactivity input
//!
//! An external pipeline refreshes one snapshot per tick before any strip
//! renders. Effects only ever borrow it, so every strip ticked in the same
//! frame sees the same values.

/// Read-only audio state for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioSnapshot {
    /// Smoothed amplitude (0-255)
    pub sample_average: u8,
    /// True for exactly one tick per detected onset
    pub sample_peak: bool,
    /// Last sample, used to derive hues
    pub previous_sample: u8,
}

impl AudioSnapshot {
    /// Silence: no amplitude, no peak
    pub const SILENT: Self = Self {
        sample_average: 0,
        sample_peak: false,
        previous_sample: 0,
    };

    pub const fn new(sample_average: u8, sample_peak: bool, previous_sample: u8) -> Self {
        Self {
            sample_average,
            sample_peak,
            previous_sample,
        }
    }

    /// Same snapshot with the peak flag set
    #[must_use]
    pub const fn with_peak(mut self) -> Self {
        self.sample_peak = true;
        self
    }
}
