//! The health check configuration attached to a load balancer.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{present, write_fields};

/// How the load balancer probes its registered instances.
///
/// Every field is optional on the value itself; the service rejects a `ConfigureHealthCheck` call unless all
/// five are present, which [`missing_fields`](HealthCheck::missing_fields) reports ahead of time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthCheck {
    /// The instance being checked, as `PROTOCOL:PORT[/PATH]`, for example `HTTP:80/ping` or `TCP:5000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    /// Approximate interval between health checks of an individual instance, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interval: Option<u32>,
    /// Time without a response after which the check counts as failed, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout: Option<u32>,
    /// Consecutive failures before an instance is moved to the `Unhealthy` state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unhealthy_threshold: Option<u32>,
    /// Consecutive successes before an instance is moved to the `Healthy` state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    healthy_threshold: Option<u32>,
}

impl HealthCheck {
    /// Creates a health check with every field set.
    pub fn new(
        target: impl Into<String>,
        interval: u32,
        timeout: u32,
        unhealthy_threshold: u32,
        healthy_threshold: u32,
    ) -> Self {
        Self {
            target: Some(target.into()),
            interval: Some(interval),
            timeout: Some(timeout),
            unhealthy_threshold: Some(unhealthy_threshold),
            healthy_threshold: Some(healthy_threshold),
        }
    }

    /// The instance being checked.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Sets or clears the target.
    pub fn set_target(&mut self, target: Option<String>) {
        self.target = target;
    }

    /// Pass in an optional target. If this is [`None`], the target is cleared.
    pub fn with_optional_target(self, target: Option<String>) -> Self {
        Self { target, ..self }
    }

    /// Pass in the target.
    pub fn with_target(self, target: impl Into<String>) -> Self {
        self.with_optional_target(Some(target.into()))
    }

    /// The interval between checks, in seconds.
    pub fn interval(&self) -> Option<u32> {
        self.interval
    }

    /// Sets or clears the interval.
    pub fn set_interval(&mut self, interval: Option<u32>) {
        self.interval = interval;
    }

    /// Pass in an optional interval. If this is [`None`], the interval is cleared.
    pub fn with_optional_interval(self, interval: Option<u32>) -> Self {
        Self { interval, ..self }
    }

    /// Pass in the interval, in seconds.
    pub fn with_interval(self, interval: u32) -> Self {
        self.with_optional_interval(Some(interval))
    }

    /// The check timeout, in seconds.
    pub fn timeout(&self) -> Option<u32> {
        self.timeout
    }

    /// Sets or clears the timeout.
    pub fn set_timeout(&mut self, timeout: Option<u32>) {
        self.timeout = timeout;
    }

    /// Pass in an optional timeout. If this is [`None`], the timeout is cleared.
    pub fn with_optional_timeout(self, timeout: Option<u32>) -> Self {
        Self { timeout, ..self }
    }

    /// Pass in the timeout, in seconds.
    pub fn with_timeout(self, timeout: u32) -> Self {
        self.with_optional_timeout(Some(timeout))
    }

    /// Failures needed to mark an instance unhealthy.
    pub fn unhealthy_threshold(&self) -> Option<u32> {
        self.unhealthy_threshold
    }

    /// Sets or clears the unhealthy threshold.
    pub fn set_unhealthy_threshold(&mut self, unhealthy_threshold: Option<u32>) {
        self.unhealthy_threshold = unhealthy_threshold;
    }

    /// Pass in an optional unhealthy threshold. If this is [`None`], the threshold is cleared.
    pub fn with_optional_unhealthy_threshold(self, unhealthy_threshold: Option<u32>) -> Self {
        Self {
            unhealthy_threshold,
            ..self
        }
    }

    /// Pass in the unhealthy threshold.
    pub fn with_unhealthy_threshold(self, unhealthy_threshold: u32) -> Self {
        self.with_optional_unhealthy_threshold(Some(unhealthy_threshold))
    }

    /// Successes needed to mark an instance healthy.
    pub fn healthy_threshold(&self) -> Option<u32> {
        self.healthy_threshold
    }

    /// Sets or clears the healthy threshold.
    pub fn set_healthy_threshold(&mut self, healthy_threshold: Option<u32>) {
        self.healthy_threshold = healthy_threshold;
    }

    /// Pass in an optional healthy threshold. If this is [`None`], the threshold is cleared.
    pub fn with_optional_healthy_threshold(self, healthy_threshold: Option<u32>) -> Self {
        Self {
            healthy_threshold,
            ..self
        }
    }

    /// Pass in the healthy threshold.
    pub fn with_healthy_threshold(self, healthy_threshold: u32) -> Self {
        self.with_optional_healthy_threshold(Some(healthy_threshold))
    }

    /// Wire names of the members that are not set, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Target", self.target.is_none()),
            ("Interval", self.interval.is_none()),
            ("Timeout", self.timeout.is_none()),
            ("UnhealthyThreshold", self.unhealthy_threshold.is_none()),
            ("HealthyThreshold", self.healthy_threshold.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

impl Display for HealthCheck {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_fields(
            f,
            &[
                ("Target", present(&self.target)),
                ("Interval", present(&self.interval)),
                ("Timeout", present(&self.timeout)),
                ("UnhealthyThreshold", present(&self.unhealthy_threshold)),
                ("HealthyThreshold", present(&self.healthy_threshold)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_every_field() {
        let check = HealthCheck::new("HTTP:80/ping", 30, 5, 2, 10);
        assert_eq!(check.target(), Some("HTTP:80/ping"));
        assert_eq!(check.interval(), Some(30));
        assert_eq!(check.timeout(), Some(5));
        assert_eq!(check.unhealthy_threshold(), Some(2));
        assert_eq!(check.healthy_threshold(), Some(10));
        assert!(check.missing_fields().is_empty());
    }

    #[test]
    fn builder_matches_constructor() {
        let built = HealthCheck::default()
            .with_target("HTTP:80/ping")
            .with_interval(30)
            .with_timeout(5)
            .with_unhealthy_threshold(2)
            .with_healthy_threshold(10);
        assert_eq!(built, HealthCheck::new("HTTP:80/ping", 30, 5, 2, 10));
    }

    #[test]
    fn setters_round_trip_including_none() {
        let mut check = HealthCheck::new("TCP:5000", 10, 3, 4, 5);
        check.set_target(None);
        check.set_timeout(Some(7));
        assert_eq!(check.target(), None);
        assert_eq!(check.timeout(), Some(7));

        let cleared = check.with_optional_interval(None);
        assert_eq!(cleared.interval(), None);
        assert_eq!(cleared.missing_fields(), vec!["Target", "Interval"]);
    }

    #[test]
    fn display_lists_present_fields_in_order() {
        assert_eq!(HealthCheck::default().to_string(), "{}");
        assert_eq!(
            HealthCheck::new("HTTP:80/ping", 30, 5, 2, 10).to_string(),
            "{Target: HTTP:80/ping,Interval: 30,Timeout: 5,UnhealthyThreshold: 2,HealthyThreshold: 10}"
        );
        assert_eq!(
            HealthCheck::default()
                .with_target("TCP:22")
                .with_timeout(4)
                .to_string(),
            "{Target: TCP:22,Timeout: 4,}"
        );
        assert_eq!(
            HealthCheck::default().with_healthy_threshold(3).to_string(),
            "{HealthyThreshold: 3}"
        );
    }

    #[test]
    fn serde_uses_wire_names_and_skips_absent() {
        let check = HealthCheck::default()
            .with_target("SSL:443")
            .with_unhealthy_threshold(2);
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Target": "SSL:443", "UnhealthyThreshold": 2 })
        );
        let back: HealthCheck = serde_json::from_value(json).unwrap();
        assert_eq!(back, check);
    }
}
