use lazy_static::lazy_static;
use regex::Regex;

/*-------------------------------------------------------------------------------------------------
  IP Literal Patterns
-------------------------------------------------------------------------------------------------*/

/*
    These patterns are a lexical filter, not address validation. The IPv4
    pattern accepts any four dot-separated groups of 1-3 digits (`10.0.0.999`
    included), and the IPv6 pattern only recognizes the fully expanded
    eight-group form plus the `::1` and `::` literals. Extracted literals are
    validated later, when they are parsed into an Address for matching.
*/

lazy_static! {
    static ref IPV4_PATTERN: Regex = Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").unwrap();
    static ref IPV6_PATTERN: Regex =
        Regex::new(r"\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b|::1|::").unwrap();
}

/*-------------------------------------------------------------------------------------------------
  Extract IP Literals
-------------------------------------------------------------------------------------------------*/

/// Scan `text` for substrings that look like IP address literals.
///
/// Returns every IPv4-looking literal in order of appearance, followed by every
/// IPv6-looking literal in order of appearance when `include_ipv6` is set.
/// Duplicates are kept.
///
/// ```
/// let ips = regionfilter::extract("host 192.168.1.1 and 10.0.0.999 end", false);
/// assert_eq!(ips, ["192.168.1.1", "10.0.0.999"]);
/// ```
pub fn extract(text: &str, include_ipv6: bool) -> Vec<&str> {
    let ipv4 = IPV4_PATTERN.find_iter(text).map(|m| m.as_str());

    if include_ipv6 {
        ipv4.chain(IPV6_PATTERN.find_iter(text).map(|m| m.as_str()))
            .collect()
    } else {
        ipv4.collect()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    /*----------------------------------------------------------------------------------
      IPv4
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_extract_ipv4() {
        let ips = extract("host 192.168.1.1 and 10.0.0.999 end", false);
        assert_eq!(ips, vec!["192.168.1.1", "10.0.0.999"]);
    }

    #[test]
    fn test_extract_ipv4_one_per_line() {
        let text = "34.86.171.82\n35.197.111.167\n34.86.171.82\n";
        let ips = extract(text, false);
        assert_eq!(ips, vec!["34.86.171.82", "35.197.111.167", "34.86.171.82"]);
    }

    #[test]
    fn test_extract_ipv4_requires_word_boundaries() {
        assert!(extract("1234.1.1.1", false).is_empty());
        assert!(extract("a1.2.3.4", false).is_empty());
        assert!(extract("1.2.3", false).is_empty());
        assert_eq!(extract("(1.2.3.4),", false), vec!["1.2.3.4"]);
        assert_eq!(extract("10.0.0.0/8", false), vec!["10.0.0.0"]);
    }

    /*----------------------------------------------------------------------------------
      IPv6
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_ipv6_disabled() {
        let text = "2001:0db8:0000:0000:0000:0000:0000:0001 ::1 10.1.1.1";
        assert_eq!(extract(text, false), vec!["10.1.1.1"]);
    }

    #[test]
    fn test_extract_ipv6_expanded_form() {
        let text = "a 2001:db8:0:0:0:0:0:1 b FFFF:ffff:1:2:3:4:5:6 c";
        assert_eq!(
            extract(text, true),
            vec!["2001:db8:0:0:0:0:0:1", "FFFF:ffff:1:2:3:4:5:6"]
        );
    }

    #[test]
    fn test_extract_ipv6_special_literals() {
        assert_eq!(extract("loopback ::1", true), vec!["::1"]);
        assert_eq!(extract("unspecified :: here", true), vec!["::"]);
    }

    #[test]
    fn test_extract_ipv6_compressed_form_not_recognized() {
        // Only the `::` in the middle is picked up
        assert_eq!(extract("2600:1f14::", true), vec!["::"]);
        assert_eq!(extract("2001:db8::5", true), vec!["::"]);
        assert_eq!(extract("2001:db8::1", true), vec!["::1"]);
    }

    #[test]
    fn test_extract_ipv4_before_ipv6() {
        let text = "::1\n10.0.0.1\n2001:db8:0:0:0:0:0:1\n10.0.0.2";
        assert_eq!(
            extract(text, true),
            vec!["10.0.0.1", "10.0.0.2", "::1", "2001:db8:0:0:0:0:0:1"]
        );
    }

    #[test]
    fn test_extract_empty_text() {
        assert!(extract("", true).is_empty());
        assert!(extract("no addresses here", true).is_empty());
    }
}
