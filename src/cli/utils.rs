/*-------------------------------------------------------------------------------------------------
  Utility Functions
-------------------------------------------------------------------------------------------------*/

/// Lowercase an AWS region name; names listed in `exceptions` (compared
/// case-insensitively) are uppercased instead, e.g. `GLOBAL`.
pub fn normalize_region<const COUNT: usize>(region: &str, exceptions: [&str; COUNT]) -> String {
    let upper = region.to_uppercase();
    if exceptions.contains(&upper.as_str()) {
        upper
    } else {
        region.to_lowercase()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_region() {
        assert_eq!(normalize_region("US-West-2", ["GLOBAL"]), "us-west-2");
        assert_eq!(normalize_region("us-east-1", ["GLOBAL"]), "us-east-1");
        assert_eq!(normalize_region("global", ["GLOBAL"]), "GLOBAL");
        assert_eq!(normalize_region("Global", []), "global");
    }
}
