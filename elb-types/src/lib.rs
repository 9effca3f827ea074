//! Request and response types for the Elastic Load Balancing
//! [`ConfigureHealthCheck`](https://docs.aws.amazon.com/elasticloadbalancing/2012-06-01/APIReference/API_ConfigureHealthCheck.html)
//! operation, together with the Query protocol encoder a transport uses to turn them into wire parameters.
//!
//! The value types carry no behavior beyond storage, accessors and structural equality. Sending them is the
//! job of whatever HTTP client sits on top of [`to_query_params`].

#![warn(missing_docs, missing_debug_implementations)]
#![deny(elided_lifetimes_in_paths)]

pub mod configure_health_check;
pub mod health_check;
pub mod query;

#[doc(inline)]
pub use configure_health_check::{ConfigureHealthCheckRequest, ConfigureHealthCheckResult};
#[doc(inline)]
pub use health_check::HealthCheck;
#[doc(inline)]
pub use query::{
    to_query_members, to_query_params, AwsRequest, QueryError, QueryParams, API_VERSION,
};

/// Borrows a present field as a [`Display`](std::fmt::Display) trait object.
pub(crate) fn present<T: std::fmt::Display>(
    value: &Option<T>,
) -> Option<&dyn std::fmt::Display> {
    value.as_ref().map(|v| v as &dyn std::fmt::Display)
}

/// Writes `{Name: value,Name: value}` for the present fields of a value type.
///
/// Every present field except the last declared one is followed by a comma, so a value whose
/// trailing fields are absent keeps a dangling comma (`{LoadBalancerName: lb1,}`).
pub(crate) fn write_fields(
    f: &mut std::fmt::Formatter<'_>,
    fields: &[(&str, Option<&dyn std::fmt::Display>)],
) -> std::fmt::Result {
    f.write_str("{")?;
    let last = fields.len().saturating_sub(1);
    for (i, (name, value)) in fields.iter().enumerate() {
        if let Some(value) = value {
            write!(f, "{name}: {value}")?;
            if i != last {
                f.write_str(",")?;
            }
        }
    }
    f.write_str("}")
}
