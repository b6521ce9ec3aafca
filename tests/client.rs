mod common;

use common::{closed_url, serve_once};
use regionfilter::{find_matches, ClientBuilder, Match};

/*-------------------------------------------------------------------------------------------------
  Test Fixtures
-------------------------------------------------------------------------------------------------*/

const AWS_RANGES_JSON: &str = r#"{
  "syncToken": "1640995200",
  "createDate": "2022-01-01-00-00-00",
  "prefixes": [
    {"ip_prefix": "3.5.140.0/22", "region": "ap-northeast-2", "service": "AMAZON"},
    {"ip_prefix": "35.80.0.0/12", "region": "us-west-2", "service": "AMAZON"},
    {"ip_prefix": "35.80.0.0/12", "region": "us-west-2", "service": "EC2"},
    {"ip_prefix": "34.208.0.0/12", "region": "us-west-2", "service": "EC2"},
    {"ip_prefix": "52.94.76.0/22", "region": "GLOBAL", "service": "AMAZON"}
  ],
  "ipv6_prefixes": [
    {"ipv6_prefix": "2600:1f14::/35", "region": "us-west-2", "service": "EC2"},
    {"ipv6_prefix": "2406:da12::/36", "region": "ap-northeast-2", "service": "EC2"}
  ]
}"#;

/// Publishers may escape `/` and use `\uXXXX` sequences anywhere in a string.
const ESCAPED_AWS_RANGES_JSON: &str = r#"{
  "syncToken": "1640995200",
  "prefixes": [
    {"ip_prefix": "35.80.0.0\/12", "region": "us-west-2"}
  ],
  "ipv6_prefixes": [
    {"ipv6_prefix": "2600:1f14::\/35", "region": "us-west-2"}
  ]
}"#;

/*-------------------------------------------------------------------------------------------------
  AWS Ranges
-------------------------------------------------------------------------------------------------*/

#[test]
fn test_get_aws_ranges() {
    let client = ClientBuilder::default()
        .aws_ranges_url(&serve_once("200 OK", AWS_RANGES_JSON))
        .build();
    assert_eq!(
        client.get_aws_ranges("us-west-2").unwrap(),
        vec![
            "35.80.0.0/12",
            "35.80.0.0/12",
            "34.208.0.0/12",
            "2600:1f14::/35"
        ]
    );
}

#[test]
fn test_get_aws_ranges_escaped_strings() {
    let client = ClientBuilder::default()
        .aws_ranges_url(&serve_once("200 OK", ESCAPED_AWS_RANGES_JSON))
        .build();
    let aws_ranges = client.get_aws_ranges("us-west-2").unwrap();
    assert_eq!(aws_ranges, vec!["35.80.0.0/12", "2600:1f14::/35"]);

    let matches = find_matches(["35.80.1.2", "8.8.8.8"], &aws_ranges);
    assert_eq!(matches, vec![Match::new("35.80.1.2", "35.80.0.0/12")]);
}

#[test]
fn test_get_aws_ranges_unknown_region() {
    let client = ClientBuilder::default()
        .aws_ranges_url(&serve_once("200 OK", AWS_RANGES_JSON))
        .build();
    assert!(client.get_aws_ranges("xx-nowhere-1").unwrap().is_empty());
}

#[test]
fn test_get_aws_ranges_invalid_json() {
    let client = ClientBuilder::default()
        .aws_ranges_url(&serve_once("200 OK", "<html>maintenance</html>"))
        .build();
    assert!(client.get_aws_ranges("us-west-2").is_err());
}

#[test]
fn test_get_aws_ranges_http_error() {
    let client = ClientBuilder::default()
        .aws_ranges_url(&serve_once("503 Service Unavailable", "{}"))
        .build();
    assert!(client.get_aws_ranges("us-west-2").is_err());
}

/*-------------------------------------------------------------------------------------------------
  Source IPs
-------------------------------------------------------------------------------------------------*/

#[test]
fn test_get_source_ips() {
    let body = "34.86.171.82\n2600:1f14:0:0:0:0:0:1\n35.197.111.167\n";

    let client = ClientBuilder::default()
        .source_ips_url(&serve_once("200 OK", body))
        .build();
    assert_eq!(
        client.get_source_ips(false).unwrap(),
        vec!["34.86.171.82", "35.197.111.167"]
    );

    let client = ClientBuilder::default()
        .source_ips_url(&serve_once("200 OK", body))
        .build();
    assert_eq!(
        client.get_source_ips(true).unwrap(),
        vec!["34.86.171.82", "35.197.111.167", "2600:1f14:0:0:0:0:0:1"]
    );
}

#[test]
fn test_get_source_text_connection_refused() {
    let client = ClientBuilder::default()
        .source_ips_url(&closed_url())
        .timeout(2000)
        .build();
    assert!(client.get_source_text().is_err());
}
