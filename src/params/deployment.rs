//! Version-bits deployment schedules

use serde::{Deserialize, Serialize};

/// Soft forks signaled through header version bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentId {
    /// Dummy deployment exercised only by signaling tests
    TestDummy,
    /// BIP68/BIP112/BIP113 relative lock-time rules
    Csv,
    /// Block-size step increase
    Dip0001,
}

impl DeploymentId {
    /// Number of defined deployments
    pub const COUNT: usize = 3;

    /// All deployments in schedule order
    pub const ALL: [DeploymentId; Self::COUNT] =
        [DeploymentId::TestDummy, DeploymentId::Csv, DeploymentId::Dip0001];

    /// Lowercase deployment name
    pub fn name(&self) -> &'static str {
        match self {
            DeploymentId::TestDummy => "testdummy",
            DeploymentId::Csv => "csv",
            DeploymentId::Dip0001 => "dip0001",
        }
    }
}

/// One deployment's activation schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Header version bit used for signaling (below 29)
    pub bit: u8,
    /// Earliest median-time-past at which signaling counts
    pub start_time: u64,
    /// Median-time-past after which lock-in can no longer happen
    pub timeout: u64,
    /// Per-deployment signaling window, inherits the network default when None
    pub window_size: Option<u32>,
    /// Per-deployment lock-in threshold, inherits the network default when None
    pub threshold: Option<u32>,
}

impl Deployment {
    /// Timeout far enough out to never expire
    pub const NO_TIMEOUT: u64 = 999_999_999_999;

    /// Schedule inheriting the network-wide window and threshold
    pub const fn new(bit: u8, start_time: u64, timeout: u64) -> Self {
        Deployment {
            bit,
            start_time,
            timeout,
            window_size: None,
            threshold: None,
        }
    }

    /// Schedule with its own signaling window and threshold
    pub const fn with_window(
        bit: u8,
        start_time: u64,
        timeout: u64,
        window_size: u32,
        threshold: u32,
    ) -> Self {
        Deployment {
            bit,
            start_time,
            timeout,
            window_size: Some(window_size),
            threshold: Some(threshold),
        }
    }

    /// True when the schedule can never activate
    pub fn is_disabled(&self) -> bool {
        self.timeout == 0 || self.start_time == self.timeout
    }

    /// True for the start-immediately, never-expire schedule
    pub fn is_always_active(&self) -> bool {
        self.start_time == 0 && !self.is_disabled()
    }

    /// Signaling window, falling back to the network-wide default
    pub fn confirmation_window(&self, default: u32) -> u32 {
        self.window_size.unwrap_or(default)
    }

    /// Lock-in threshold, falling back to the network-wide default
    pub fn activation_threshold(&self, default: u32) -> u32 {
        self.threshold.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeout_is_disabled() {
        let d = Deployment::new(28, 0, 0);
        assert!(d.is_disabled());
        assert!(!d.is_always_active());
    }

    #[test]
    fn test_start_equal_timeout_is_disabled() {
        let d = Deployment::new(0, 1_500_000_000, 1_500_000_000);
        assert!(d.is_disabled());
    }

    #[test]
    fn test_zero_start_far_timeout_is_always_active() {
        let d = Deployment::new(1, 0, Deployment::NO_TIMEOUT);
        assert!(d.is_always_active());
        assert!(!d.is_disabled());
    }

    #[test]
    fn test_scheduled_deployment_is_neither() {
        let d = Deployment::new(0, 1_508_025_600, 1_539_561_600);
        assert!(!d.is_disabled());
        assert!(!d.is_always_active());
    }

    #[test]
    fn test_window_and_threshold_inherit_defaults() {
        let d = Deployment::new(28, 0, Deployment::NO_TIMEOUT);
        assert_eq!(d.confirmation_window(2016), 2016);
        assert_eq!(d.activation_threshold(1916), 1916);
    }

    #[test]
    fn test_window_and_threshold_overrides_win() {
        let d = Deployment::with_window(1, 0, Deployment::NO_TIMEOUT, 4032, 3226);
        assert_eq!(d.confirmation_window(2016), 4032);
        assert_eq!(d.activation_threshold(1916), 3226);
    }
}
