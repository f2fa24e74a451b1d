use std::time::{Duration, Instant};

/// How many untimed and timed repetitions a benchmark measurement uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampling {
    pub warmup: usize,
    pub iterations: usize,
}

impl Default for Sampling {
    /// A single timed run with no warm-up.
    fn default() -> Self {
        Sampling {
            warmup: 0,
            iterations: 1,
        }
    }
}

/// Runs `f` once and returns its result with the elapsed wall-clock time.
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Runs `f` `warmup` times untimed, then `iterations` times timed, and
/// returns the mean duration of the timed runs.
///
/// `iterations` of 0 is treated as 1. The first error from `f` stops the
/// measurement and is returned.
pub fn measure_avg<T, E, F>(warmup: usize, iterations: usize, mut f: F) -> Result<Duration, E>
where
    F: FnMut() -> Result<T, E>,
{
    for _ in 0..warmup {
        std::hint::black_box(f()?);
    }
    let iterations = iterations.max(1);
    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let (out, elapsed) = measure(&mut f);
        std::hint::black_box(out?);
        total += elapsed;
    }
    Ok(total / iterations as u32)
}

/// Milliseconds as a float, for report tables.
pub fn as_millis_f64(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
