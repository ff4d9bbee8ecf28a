// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Truncated exponential backoff with full jitter.
//!
//! The n-th retry waits a random time in `[0, min(initial * scaling^(n-1), maximum)]`.
//! Every [MethodConfig] maps to one of these policies, see
//! [MethodConfig::backoff_policy].
//!
//! [MethodConfig]: crate::method_config::MethodConfig
//! [MethodConfig::backoff_policy]: crate::method_config::MethodConfig::backoff_policy

use crate::method_config::MethodConfig;
use crate::retry_state::RetryState;
use std::time::Duration;

const MIN_INITIAL_DELAY: Duration = Duration::from_millis(1);
const MIN_MAXIMUM_DELAY: Duration = Duration::from_secs(1);
const MAX_MAXIMUM_DELAY: Duration = Duration::from_secs(24 * 60 * 60);
const MAX_SCALING: f64 = 32.0;

/// Invalid parameters for an [ExponentialBackoff].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling factor must be at least 1.0, got {0}")]
    InvalidScalingFactor(f64),
    #[error("the initial delay must be positive, got {0:?}")]
    InvalidInitialDelay(Duration),
    #[error("the maximum delay ({maximum:?}) is shorter than the initial delay ({initial:?})")]
    EmptyRange {
        maximum: Duration,
        initial: Duration,
    },
}

/// Builds [ExponentialBackoff] policies.
///
/// # Example
/// ```
/// # use google_cloud_dlp_gax::exponential_backoff::*;
/// use std::time::Duration;
/// let policy = ExponentialBackoffBuilder::new()
///     .with_initial_delay(Duration::from_millis(250))
///     .with_maximum_delay(Duration::from_secs(30))
///     .with_scaling(2.0)
///     .build();
/// assert!(policy.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffBuilder {
    /// Starts from the parameters of [MethodConfig::retry_transient].
    pub fn new() -> Self {
        Self::from(&MethodConfig::retry_transient())
    }

    /// Sets the delay before the first retry.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Sets the upper bound for all delays.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Sets the growth factor between consecutive delays.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Returns the policy, or an error if the parameters are inconsistent.
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        let Self {
            initial_delay: initial,
            maximum_delay: maximum,
            scaling,
        } = self;
        if scaling.is_nan() || scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(scaling));
        }
        if initial.is_zero() {
            return Err(Error::InvalidInitialDelay(initial));
        }
        if maximum < initial {
            return Err(Error::EmptyRange { maximum, initial });
        }
        Ok(ExponentialBackoff {
            initial,
            maximum,
            scaling,
        })
    }

    /// Returns the policy, forcing each parameter into its supported range.
    ///
    /// The maximum delay is kept between one second and one day, the initial
    /// delay between one millisecond and the maximum delay, and the scaling
    /// factor between 1.0 and 32.0.
    pub fn clamp(self) -> ExponentialBackoff {
        let maximum = self.maximum_delay.clamp(MIN_MAXIMUM_DELAY, MAX_MAXIMUM_DELAY);
        let scaling = if self.scaling.is_nan() {
            1.0
        } else {
            self.scaling.clamp(1.0, MAX_SCALING)
        };
        ExponentialBackoff {
            initial: self.initial_delay.clamp(MIN_INITIAL_DELAY, maximum),
            maximum,
            scaling,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&MethodConfig> for ExponentialBackoffBuilder {
    fn from(config: &MethodConfig) -> Self {
        Self {
            initial_delay: config.initial_delay,
            maximum_delay: config.maximum_delay,
            scaling: config.multiplier,
        }
    }
}

/// Truncated exponential backoff with full jitter.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial: Duration,
    maximum: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    // The upper bound for the delay after `attempt_count` failures.
    fn ceiling(&self, attempt_count: u32) -> Duration {
        let exponent = i32::try_from(attempt_count.saturating_sub(1)).unwrap_or(i32::MAX);
        let factor = self.scaling.powi(exponent);
        let limit = self.maximum.div_duration_f64(self.initial);
        if !factor.is_finite() || factor >= limit {
            return self.maximum;
        }
        self.initial.mul_f64(factor)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        ExponentialBackoffBuilder::new().clamp()
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, state: &RetryState) -> Duration {
        use rand::Rng;
        let ceiling = self.ceiling(state.attempt_count);
        rand::rng().random_range(Duration::ZERO..=ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff_policy::BackoffPolicy;
    use test_case::test_case;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test_case(Duration::ZERO, secs(5), 2.0)]
    #[test_case(secs(10), secs(5), 2.0)]
    #[test_case(secs(1), secs(5), 0.5)]
    #[test_case(secs(1), secs(5), f64::NAN)]
    fn build_rejects(initial: Duration, maximum: Duration, scaling: f64) {
        let got = ExponentialBackoffBuilder::new()
            .with_initial_delay(initial)
            .with_maximum_delay(maximum)
            .with_scaling(scaling)
            .build();
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn build_accepts_extremes() {
        let got = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_nanos(1))
            .with_maximum_delay(Duration::MAX)
            .with_scaling(1.0)
            .build();
        assert!(got.is_ok(), "{got:?}");
    }

    #[test]
    fn clamp() {
        let got = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .with_maximum_delay(Duration::from_millis(1))
            .with_scaling(64.0)
            .clamp();
        assert_eq!(got.initial, MIN_INITIAL_DELAY);
        assert_eq!(got.maximum, MIN_MAXIMUM_DELAY);
        assert_eq!(got.scaling, MAX_SCALING);
    }

    #[test]
    fn ceiling_grows_then_saturates() -> anyhow::Result<()> {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(secs(1))
            .with_maximum_delay(secs(4))
            .with_scaling(2.0)
            .build()?;
        let got = [1, 2, 3, 4, u32::MAX].map(|n| policy.ceiling(n));
        assert_eq!(got, [secs(1), secs(2), secs(4), secs(4), secs(4)]);
        Ok(())
    }

    #[test]
    fn from_method_config() {
        let policy = ExponentialBackoffBuilder::from(&MethodConfig::retry_transient()).clamp();
        assert_eq!(policy.ceiling(1), Duration::from_millis(100));
        assert_eq!(policy.ceiling(2), Duration::from_millis(130));
        assert_eq!(policy.ceiling(100), secs(60));
    }

    #[test]
    fn jitter_within_ceiling() {
        let policy = ExponentialBackoff::default();
        for attempt in 1..10 {
            let state = RetryState::new(true).set_attempt_count(attempt);
            let got = policy.on_failure(&state);
            assert!(got <= policy.ceiling(attempt), "attempt={attempt} got={got:?}");
        }
    }
}
