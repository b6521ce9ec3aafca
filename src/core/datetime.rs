use chrono::{DateTime, NaiveDateTime, Utc};
use log::warn;
use serde::{Deserialize, Deserializer};

/*-------------------------------------------------------------------------------------------------
  DateTime Format
-------------------------------------------------------------------------------------------------*/

const AWS_IP_RANGES_DATETIME_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, AWS_IP_RANGES_DATETIME_FORMAT)
        .map(|naive_date_time| naive_date_time.and_utc())
        .inspect_err(|error| warn!("Invalid AWS IP Ranges createDate {value:?}: {error}"))
        .ok()
}

/// Deserialize an optional `createDate`; a malformed value is logged and
/// treated as absent since nothing downstream depends on it.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
