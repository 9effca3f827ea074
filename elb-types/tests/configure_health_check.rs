use elb_types::{
    to_query_params, AwsRequest, ConfigureHealthCheckRequest, HealthCheck, QueryError,
};
use std::{
    collections::{hash_map::DefaultHasher, HashSet},
    hash::{Hash, Hasher},
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn seattle_check() -> HealthCheck {
    HealthCheck::default()
        .with_target("HTTP:80/weather/us/wa/seattle")
        .with_interval(30)
        .with_timeout(3)
        .with_unhealthy_threshold(2)
        .with_healthy_threshold(2)
}

#[test]
fn build_describe_and_encode() {
    let request = ConfigureHealthCheckRequest::default();
    assert_eq!(request.to_string(), "{}");

    let request = request.with_load_balancer_name("MyLoadBalancer");
    assert_eq!(request.to_string(), "{LoadBalancerName: MyLoadBalancer,}");

    let request = request.with_health_check(seattle_check());
    assert_eq!(
        request.to_string(),
        "{LoadBalancerName: MyLoadBalancer,HealthCheck: {Target: HTTP:80/weather/us/wa/seattle,\
         Interval: 30,Timeout: 3,UnhealthyThreshold: 2,HealthyThreshold: 2}}"
    );

    assert_eq!(ConfigureHealthCheckRequest::ACTION, "ConfigureHealthCheck");
    let params = to_query_params(&request).unwrap();
    assert_eq!(params.len(), 8);
    assert_eq!(params.get("Action"), Some("ConfigureHealthCheck"));
    assert_eq!(params.get("LoadBalancerName"), Some("MyLoadBalancer"));
    assert_eq!(
        params.get("HealthCheck.Target"),
        Some("HTTP:80/weather/us/wa/seattle")
    );
}

#[test]
fn equal_requests_collapse_in_a_set() {
    let a = ConfigureHealthCheckRequest::new("lb1", seattle_check());
    let mut b = ConfigureHealthCheckRequest::default();
    b.set_health_check(Some(seattle_check()));
    b.set_load_balancer_name(Some("lb1".to_owned()));
    let c = ConfigureHealthCheckRequest::new("lb2", seattle_check());

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let set: HashSet<_> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn incomplete_health_check_is_not_encoded() {
    let request = ConfigureHealthCheckRequest::new(
        "lb1",
        seattle_check().with_optional_target(None),
    );
    assert_eq!(request.health_check().and_then(HealthCheck::target), None);
    assert_eq!(
        to_query_params(&request),
        Err(QueryError::MissingRequiredField(
            "HealthCheck.Target".to_owned()
        ))
    );
    assert_eq!(
        to_query_params(&request).unwrap_err().to_string(),
        "Missing required parameter: HealthCheck.Target"
    );
}
