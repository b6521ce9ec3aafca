use crate::core::errors::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeSet;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &str) -> Result<JsonIpRanges<'_>> {
    Ok(serde_json::from_str(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*
    Every field is optional. Prefix entries missing a prefix or region are
    ignored rather than failing the whole document. Strings are `Cow` so values
    containing JSON escapes (`\/`, `\uXXXX`) are decoded into owned strings.
*/

/*--------------------------------------------------------------------------------------
  JSON IP Ranges
--------------------------------------------------------------------------------------*/

#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
pub struct JsonIpRanges<'j> {
    #[serde(rename = "syncToken", default, borrow)]
    pub sync_token: Option<Cow<'j, str>>,

    #[serde(
        rename = "createDate",
        default,
        deserialize_with = "crate::core::datetime::deserialize_option"
    )]
    pub create_date: Option<DateTime<Utc>>,

    #[serde(default, borrow)]
    pub prefixes: Vec<JsonIpPrefix<'j>>,

    #[serde(default, borrow)]
    pub ipv6_prefixes: Vec<JsonIpv6Prefix<'j>>,
}

impl<'j> JsonIpRanges<'j> {
    /// CIDR literals published for `region`; IPv4 prefixes first, then IPv6
    /// prefixes, each in document order.
    pub fn region_prefixes(&self, region: &str) -> Vec<String> {
        let ipv4_prefixes = self
            .prefixes
            .iter()
            .filter(|prefix| prefix.region.as_deref() == Some(region))
            .filter_map(|prefix| prefix.ip_prefix.as_deref());

        let ipv6_prefixes = self
            .ipv6_prefixes
            .iter()
            .filter(|ipv6_prefix| ipv6_prefix.region.as_deref() == Some(region))
            .filter_map(|ipv6_prefix| ipv6_prefix.ipv6_prefix.as_deref());

        ipv4_prefixes
            .chain(ipv6_prefixes)
            .filter(|prefix| !prefix.is_empty())
            .map(String::from)
            .collect()
    }

    /// All regions named in the document.
    pub fn regions(&self) -> BTreeSet<&str> {
        self.prefixes
            .iter()
            .filter_map(|prefix| prefix.region.as_deref())
            .chain(
                self.ipv6_prefixes
                    .iter()
                    .filter_map(|ipv6_prefix| ipv6_prefix.region.as_deref()),
            )
            .collect()
    }
}

/*--------------------------------------------------------------------------------------
  JSON IP (IPv4) Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
pub struct JsonIpPrefix<'j> {
    #[serde(default, borrow)]
    pub ip_prefix: Option<Cow<'j, str>>,

    #[serde(default, borrow)]
    pub region: Option<Cow<'j, str>>,
}

/*--------------------------------------------------------------------------------------
  JSON IPv6 Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
pub struct JsonIpv6Prefix<'j> {
    #[serde(default, borrow)]
    pub ipv6_prefix: Option<Cow<'j, str>>,

    #[serde(default, borrow)]
    pub region: Option<Cow<'j, str>>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
