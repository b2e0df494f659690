//! Count-up animation for the `.stat-number` figures.

/// Reads an integer prefix the way `parseInt(s, 10)` does: leading
/// whitespace, an optional sign, then digits up to the first non-digit.
/// Returns `None` when no digit follows. Digit runs beyond `i64` keep their
/// magnitude as a float, as JavaScript numbers do.
pub fn parse_int_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<f64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Keep animating; show this value.
    Running(f64),
    /// Final frame; show the exact target.
    Done(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    target: f64,
    step: f64,
    current: f64,
}

impl Counter {
    /// A counter reaching `target` in roughly `duration_ms` at one increment
    /// per `frame_ms`.
    pub fn new(target: f64, duration_ms: f64, frame_ms: f64) -> Self {
        let frames = duration_ms / frame_ms;
        let step = if frames > 0.0 { target / frames } else { target };
        Self {
            target,
            step,
            current: 0.0,
        }
    }

    /// Builds a counter from a `data-target` attribute; anything that is not
    /// an integer counts to 0.
    pub fn from_attribute(raw: Option<&str>, duration_ms: f64, frame_ms: f64) -> Self {
        let target = raw.and_then(parse_int_prefix).unwrap_or(0.0);
        Self::new(target, duration_ms, frame_ms)
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn tick(&mut self) -> Tick {
        self.current += self.step;
        if self.current < self.target {
            Tick::Running(self.current.floor())
        } else {
            Tick::Done(self.target)
        }
    }
}

/// Text shown for a counter value; integral floats print without a fraction.
pub fn format_count(value: f64) -> String {
    // floor() of a tiny negative step yields -0, which JS prints as "0"
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
