//! Parameters and result of the `ConfigureHealthCheck` operation.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{present, query::AwsRequest, write_fields, HealthCheck, QueryError};

/// Specifies the health check settings to use when evaluating the health of a load balancer's
/// registered instances.
///
/// Both fields may be left unset; whether they are present is only checked when the request is
/// encoded for the wire (see [`AwsRequest::validate`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigureHealthCheckRequest {
    /// The name of the load balancer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    /// The configuration information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    health_check: Option<HealthCheck>,
}

impl ConfigureHealthCheckRequest {
    /// Creates a request with both fields set. Equivalent to
    /// `ConfigureHealthCheckRequest::default().with_load_balancer_name(..).with_health_check(..)`.
    ///
    /// To start from absent values, use [`default`](Default::default) together with
    /// [`with_optional_load_balancer_name`](Self::with_optional_load_balancer_name) and
    /// [`with_optional_health_check`](Self::with_optional_health_check).
    pub fn new(load_balancer_name: impl Into<String>, health_check: HealthCheck) -> Self {
        Self {
            load_balancer_name: Some(load_balancer_name.into()),
            health_check: Some(health_check),
        }
    }

    /// The name of the load balancer.
    pub fn load_balancer_name(&self) -> Option<&str> {
        self.load_balancer_name.as_deref()
    }

    /// Sets or clears the load balancer name.
    pub fn set_load_balancer_name(&mut self, load_balancer_name: Option<String>) {
        self.load_balancer_name = load_balancer_name;
    }

    /// Pass in an optional load balancer name. If this is [`None`], the name is cleared.
    pub fn with_optional_load_balancer_name(self, load_balancer_name: Option<String>) -> Self {
        Self {
            load_balancer_name,
            ..self
        }
    }

    /// Pass in the load balancer name.
    pub fn with_load_balancer_name(self, load_balancer_name: impl Into<String>) -> Self {
        self.with_optional_load_balancer_name(Some(load_balancer_name.into()))
    }

    /// The health check configuration.
    pub fn health_check(&self) -> Option<&HealthCheck> {
        self.health_check.as_ref()
    }

    /// Sets or clears the health check configuration.
    pub fn set_health_check(&mut self, health_check: Option<HealthCheck>) {
        self.health_check = health_check;
    }

    /// Pass in an optional health check. If this is [`None`], the health check is cleared.
    pub fn with_optional_health_check(self, health_check: Option<HealthCheck>) -> Self {
        Self {
            health_check,
            ..self
        }
    }

    /// Pass in the health check.
    pub fn with_health_check(self, health_check: HealthCheck) -> Self {
        self.with_optional_health_check(Some(health_check))
    }
}

impl Display for ConfigureHealthCheckRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_fields(
            f,
            &[
                ("LoadBalancerName", present(&self.load_balancer_name)),
                ("HealthCheck", present(&self.health_check)),
            ],
        )
    }
}

impl AwsRequest for ConfigureHealthCheckRequest {
    const ACTION: &'static str = "ConfigureHealthCheck";

    fn validate(&self) -> Result<(), QueryError> {
        if self.load_balancer_name.is_none() {
            return Err(QueryError::MissingRequiredField("LoadBalancerName".to_owned()));
        }
        let Some(health_check) = &self.health_check else {
            return Err(QueryError::MissingRequiredField("HealthCheck".to_owned()));
        };
        match health_check.missing_fields().first() {
            Some(field) => Err(QueryError::MissingRequiredField(format!(
                "HealthCheck.{field}"
            ))),
            None => Ok(()),
        }
    }
}

/// The output of a `ConfigureHealthCheck` call: the health check now in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigureHealthCheckResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    health_check: Option<HealthCheck>,
}

impl ConfigureHealthCheckResult {
    /// The updated health check.
    pub fn health_check(&self) -> Option<&HealthCheck> {
        self.health_check.as_ref()
    }

    /// Sets or clears the health check.
    pub fn set_health_check(&mut self, health_check: Option<HealthCheck>) {
        self.health_check = health_check;
    }

    /// Pass in an optional health check. If this is [`None`], the health check is cleared.
    pub fn with_optional_health_check(self, health_check: Option<HealthCheck>) -> Self {
        Self { health_check }
    }

    /// Pass in the health check.
    pub fn with_health_check(self, health_check: HealthCheck) -> Self {
        self.with_optional_health_check(Some(health_check))
    }
}

impl Display for ConfigureHealthCheckResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_fields(f, &[("HealthCheck", present(&self.health_check))])
    }
}
