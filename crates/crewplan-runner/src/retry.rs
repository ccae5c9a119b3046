use std::fmt::Display;
use std::sync::Mutex;
use std::time::Duration;

use crewplan_core::CrewplanError;
use thiserror::Error;

use crate::logger::Logger;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);
pub const DEFAULT_MIN_WAIT: Duration = Duration::from_millis(83);
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(60);

/// How long to wait before each retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Same pause before every retry.
    Constant(Duration),
    /// `base * 2^n` before the n-th retry (0-based), clamped to `[min, max]`.
    Exponential {
        base: Duration,
        min: Duration,
        max: Duration,
    },
}

impl Backoff {
    pub fn delay(&self, retry: u32) -> Duration {
        match *self {
            Backoff::Constant(d) => d,
            Backoff::Exponential { base, min, max } => {
                let base_ms = base.as_millis();
                let multiplier = 1u128 << retry.min(20);
                let ms = base_ms
                    .saturating_mul(multiplier)
                    .clamp(min.as_millis(), max.as_millis().max(min.as_millis()));
                Duration::from_millis(u64::try_from(ms).unwrap_or(u64::MAX))
            }
        }
    }
}

/// Attempt budget and backoff for a retried call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Backoff,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Backoff) -> Result<Self, CrewplanError> {
        if max_attempts == 0 {
            return Err(CrewplanError::InvalidInput(
                "max_attempts must be at least 1".into(),
            ));
        }
        if let Backoff::Exponential { min, max, .. } = backoff {
            if max < min {
                return Err(CrewplanError::InvalidInput(
                    "maximum wait must not be below minimum wait".into(),
                ));
            }
        }
        Ok(Self {
            max_attempts,
            backoff,
        })
    }

    /// `max_attempts` tries with no pause between them.
    pub fn immediate(max_attempts: u32) -> Result<Self, CrewplanError> {
        Self::new(max_attempts, Backoff::Constant(Duration::ZERO))
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff(&self) -> Backoff {
        self.backoff
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: Backoff::Exponential {
                base: DEFAULT_BACKOFF_BASE,
                min: DEFAULT_MIN_WAIT,
                max: DEFAULT_MAX_WAIT,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum RetryError<E> {
    #[error("gave up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: E,
    },

    #[error("attempt {attempt} failed with a non-retryable error: {source}")]
    Aborted { attempt: u32, source: E },
}

impl<E> RetryError<E> {
    /// Number of attempts made before giving up.
    pub fn attempts(&self) -> u32 {
        match self {
            RetryError::Exhausted { attempts, .. } => *attempts,
            RetryError::Aborted { attempt, .. } => *attempt,
        }
    }

    /// The last underlying error.
    pub fn into_inner(self) -> E {
        match self {
            RetryError::Exhausted { last, .. } => last,
            RetryError::Aborted { source, .. } => source,
        }
    }
}

/// Blocks the caller between attempts.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Records requested pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        if let Ok(mut slept) = self.slept.lock() {
            slept.push(duration);
        }
    }
}

/// Run `op` until it succeeds or the policy's attempts are spent. Every error
/// is retried.
pub fn retry<T, E, F>(
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    logger: &dyn Logger,
    op: F,
) -> Result<T, RetryError<E>>
where
    E: Display,
    F: FnMut() -> Result<T, E>,
{
    retry_if(policy, sleeper, logger, |_| true, op)
}

/// Like [`retry`], but only errors for which `should_retry` returns true are
/// retried; any other error is returned at once as [`RetryError::Aborted`].
pub fn retry_if<T, E, F, P>(
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    logger: &dyn Logger,
    should_retry: P,
    mut op: F,
) -> Result<T, RetryError<E>>
where
    E: Display,
    F: FnMut() -> Result<T, E>,
    P: Fn(&E) -> bool,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        let err = match op() {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if !should_retry(&err) {
            logger.warn(&format!("attempt {attempt} failed, not retrying: {err}"));
            return Err(RetryError::Aborted {
                attempt,
                source: err,
            });
        }

        if attempt >= policy.max_attempts {
            logger.error(&format!("giving up after {attempt} attempts: {err}"));
            return Err(RetryError::Exhausted {
                attempts: attempt,
                last: err,
            });
        }

        let delay = policy.backoff.delay(attempt - 1);
        logger.debug(&format!(
            "attempt {attempt}/{} failed: {err}; retrying in {}ms",
            policy.max_attempts,
            delay.as_millis()
        ));
        sleeper.sleep(delay);
    }
}
