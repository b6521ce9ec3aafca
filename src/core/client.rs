use crate::core::errors::{Error, Result};
use crate::core::extract;
use crate::core::json;
use log::{debug, info, warn};
use std::env;
use std::num::NonZeroU64;
use std::time;

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct that allows you to customize the client configuration. The
/// [ClientBuilder] struct provides setters for each configuration value and a
/// [ClientBuilder::build] method to create a [Client] instance.
///
/// ```
/// let client = regionfilter::ClientBuilder::new()
///     .aws_ranges_url("https://ip-ranges.amazonaws.com/ip-ranges.json")
///     .source_ips_url("https://grafana.com/api/hosted-grafana/source-ips.txt")
///     .timeout(10_000) // 10 seconds
///     .build();
/// ```
///
/// The [ClientBuilder::new] method attempts to source configuration values from environment
/// variables when set and uses default values when the environment variables are not set.
///
/// If you want to use the default configuration values, ignoring any environment variables, use
/// the [ClientBuilder::default] method to create a new [ClientBuilder] instance.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    aws_ranges_url: String,
    source_ips_url: String,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = regionfilter::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.aws_ranges_url(), "https://ip-ranges.amazonaws.com/ip-ranges.json");
    /// assert_eq!(client.source_ips_url(), "https://grafana.com/api/hosted-grafana/source-ips.txt");
    /// assert_eq!(client.timeout(), 30000);
    /// ```
    fn default() -> Self {
        Self {
            aws_ranges_url: "https://ip-ranges.amazonaws.com/ip-ranges.json".to_string(),
            source_ips_url: "https://grafana.com/api/hosted-grafana/source-ips.txt".to_string(),
            timeout: 30_000, // 30 seconds
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from
    /// environment variables when set and default values when the environment
    /// variables are not set.
    ///
    /// The environment variables used to set the initial configuration values
    /// are:
    /// - `REGIONFILTER_AWS_RANGES_URL`
    /// - `REGIONFILTER_SOURCE_IPS_URL`
    /// - `REGIONFILTER_TIMEOUT` (milliseconds; must be greater than zero)
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            aws_ranges_url: get_env_var("REGIONFILTER_AWS_RANGES_URL", default.aws_ranges_url),
            source_ips_url: get_env_var("REGIONFILTER_SOURCE_IPS_URL", default.source_ips_url),
            timeout: parse_env_var::<NonZeroU64>("REGIONFILTER_TIMEOUT")
                .map_or(default.timeout, NonZeroU64::get),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the URL used to retrieve the AWS IP Ranges JSON; defaults to
    /// `https://ip-ranges.amazonaws.com/ip-ranges.json` - see
    /// [AWS IP address ranges](https://docs.aws.amazon.com/vpc/latest/userguide/aws-ip-ranges.html)
    /// in the Amazon Virtual Private Cloud (VPC) User Guide for details.
    pub fn aws_ranges_url(&mut self, url: &str) -> &mut Self {
        self.aws_ranges_url = url.to_string();
        self
    }

    /// Set the URL of the plain-text source IP list; defaults to
    /// `https://grafana.com/api/hosted-grafana/source-ips.txt`.
    pub fn source_ips_url(&mut self, url: &str) -> &mut Self {
        self.source_ips_url = url.to_string();
        self
    }

    /// Set the per-request timeout (in milliseconds); defaults to `30000`
    /// milliseconds (30 seconds).
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Client {
        Client {
            aws_ranges_url: self.aws_ranges_url.clone(),
            source_ips_url: self.source_ips_url.clone(),
            timeout: self.timeout,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for downloading the AWS IP Ranges JSON and the source IP list.
///
/// The [Client::new] method attempts to source configuration values from environment variables
/// when set and uses default values when the environment variables are not set.
///
/// ```no_run
/// let client = regionfilter::Client::new();
/// let aws_ranges = client.get_aws_ranges("us-west-2").unwrap();
/// let source_ips = client.get_source_ips(false).unwrap();
/// let matches = regionfilter::find_matches(&source_ips, &aws_ranges);
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    aws_ranges_url: String,
    source_ips_url: String,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Get the URL used to retrieve the AWS IP Ranges JSON.
    pub fn aws_ranges_url(&self) -> &str {
        &self.aws_ranges_url
    }

    /// Get the URL used to retrieve the source IP list.
    pub fn source_ips_url(&self) -> &str {
        &self.source_ips_url
    }

    /// Get the per-request timeout (in milliseconds).
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /*-------------------------------------------------------------------------
      AWS Ranges
    -------------------------------------------------------------------------*/

    /// Download the AWS IP Ranges JSON and return the IPv4 and IPv6 CIDR
    /// literals published for `region`.
    pub fn get_aws_ranges(&self, region: &str) -> Result<Vec<String>> {
        info!("Fetching AWS ranges for region: {region}...");

        let json = self.get_text(&self.aws_ranges_url).and_then(validate_json)?;
        let json_ip_ranges = json::parse(&json)?;

        if let (Some(sync_token), Some(create_date)) =
            (&json_ip_ranges.sync_token, json_ip_ranges.create_date)
        {
            info!("AWS IP Ranges syncToken {sync_token} created {create_date}");
        }

        let aws_ranges = json_ip_ranges.region_prefixes(region);
        if aws_ranges.is_empty() {
            warn!("{}", region_not_found(region, &json_ip_ranges));
        } else {
            info!("Found {} AWS IP prefixes for {region}", aws_ranges.len());
        }

        Ok(aws_ranges)
    }

    /*-------------------------------------------------------------------------
      Source IPs
    -------------------------------------------------------------------------*/

    /// Download the raw source IP text.
    pub fn get_source_text(&self) -> Result<String> {
        info!("Fetching source IPs...");
        self.get_text(&self.source_ips_url)
    }

    /// Download the source IP text and extract the IP-looking literals from
    /// it (see [extract](crate::extract)).
    pub fn get_source_ips(&self, include_ipv6: bool) -> Result<Vec<String>> {
        let text = self.get_source_text()?;
        let source_ips: Vec<String> = extract::extract(&text, include_ipv6)
            .into_iter()
            .map(String::from)
            .collect();

        info!("Extracted {} source IP literals", source_ips.len());
        Ok(source_ips)
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    /// GET a URL and return the response body; non-success statuses are errors.
    fn get_text(&self, url: &str) -> Result<String> {
        info!("GET {url}");
        reqwest::blocking::Client::builder()
            .timeout(time::Duration::from_millis(self.timeout))
            .build()
            .and_then(|client| client.get(url).send())
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(Error::from)
            .inspect_err(|error| debug!("GET {url} FAILED: {error}"))
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    parse_env_var(env_var).unwrap_or(default)
}

/// Parse an environment variable value; unset and unparsable values are `None`.
fn parse_env_var<T: std::str::FromStr>(env_var: &str) -> Option<T> {
    env::var(env_var).ok().and_then(|value| {
        value
            .parse::<T>()
            .inspect(|_| info!("Using {}: {}", env_var, value))
            .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
            .ok()
    })
}

/// Warning text for a region with no published prefixes.
fn region_not_found(region: &str, json_ip_ranges: &json::JsonIpRanges) -> String {
    let regions: Vec<&str> = json_ip_ranges.regions().into_iter().collect();
    format!(
        "Region {region:?} not found; AWS IP Ranges regions: {}",
        regions.join(", ")
    )
}

/// Validate a string contains parsable JSON.
fn validate_json(json: String) -> Result<String> {
    serde_json::from_str::<serde::de::IgnoredAny>(&json)
        .and(Ok(json))
        .or(Err("Invalid JSON".into()))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
