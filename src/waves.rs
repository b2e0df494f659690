use std::f64::consts::TAU;

use crate::config::WaveParams;
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl Wave {
    /// Vertical position at column `x`, centred on the canvas midline.
    pub fn sample(&self, x: f64, height: f64) -> f64 {
        height / 2.0 + (x * self.frequency + self.phase).sin() * self.amplitude
    }
}

/// Stacked sine waves that slide sideways as their phase advances.
#[derive(Debug, Clone)]
pub struct BrainWaves {
    waves: Vec<Wave>,
    params: WaveParams,
    width: f64,
    height: f64,
}

impl BrainWaves {
    pub fn new(width: f64, height: f64, params: &WaveParams, rng: &mut impl RandomSource) -> Self {
        let waves = (0..params.wave_count)
            .map(|_| Wave {
                amplitude: params.min_amplitude + rng.next_f64() * params.amplitude_spread,
                frequency: params.min_frequency + rng.next_f64() * params.frequency_spread,
                phase: rng.next_f64() * TAU,
            })
            .collect();
        Self {
            waves,
            params: params.clone(),
            width,
            height,
        }
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn line_width(&self) -> f64 {
        self.params.line_width
    }

    /// Stroke alpha for the wave at `index`; later waves are fainter and the
    /// value may go negative for long stacks, which the canvas treats as 0.
    pub fn alpha(&self, index: usize) -> f64 {
        self.params.base_alpha - index as f64 * self.params.alpha_falloff
    }

    pub fn stroke_style(&self, index: usize) -> String {
        format!("rgba(100, 200, 255, {})", self.alpha(index))
    }

    /// One point per whole pixel column in `[0, width)`.
    pub fn polyline(&self, index: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        let wave = self.waves[index];
        let columns = self.width.max(0.0).ceil() as usize;
        let height = self.height;
        (0..columns).map(move |x| {
            let x = x as f64;
            (x, wave.sample(x, height))
        })
    }

    /// Advances every wave's phase by one frame.
    pub fn advance(&mut self) {
        let step = self.params.phase_step;
        self.waves.iter_mut().for_each(|w| w.phase += step);
    }
}
