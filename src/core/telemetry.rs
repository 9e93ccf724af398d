use std::collections::HashMap;

/// Parse one telemetry line of comma-separated `key:value` pairs.
///
/// Splits each fragment on the first colon only; fragments without a colon
/// are dropped and a later duplicate key overwrites an earlier one. Parsing
/// is best-effort and never fails: at worst the result is empty.
pub fn parse_telemetry(line: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for fragment in line.split(',') {
        if let Some((key, value)) = fragment.split_once(':') {
            fields.insert(key.to_string(), value.to_string());
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_colon_yields_empty() {
        assert!(parse_telemetry("no colons here").is_empty());
        assert!(parse_telemetry("").is_empty());
    }

    #[test]
    fn test_last_occurrence_wins() {
        let parsed = parse_telemetry("A:1,B:2,A:3");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["A"], "3");
        assert_eq!(parsed["B"], "2");
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let parsed = parse_telemetry("KEY:VAL:UE");
        assert_eq!(parsed["KEY"], "VAL:UE");
    }

    #[test]
    fn test_colonless_fragments_are_dropped() {
        let parsed = parse_telemetry("ROLL:1.25,garbage,PITCH:-0.50");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["ROLL"], "1.25");
        assert_eq!(parsed["PITCH"], "-0.50");
    }
}
