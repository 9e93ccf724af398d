use proptest::prelude::*;
use stabterm::parse_telemetry;

/// Telemetry line parser contract
#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_no_colon_yields_empty_mapping() {
        assert!(parse_telemetry("").is_empty());
        assert!(parse_telemetry("no colons at all").is_empty());
        assert!(parse_telemetry(",,,").is_empty());
    }

    #[test]
    fn test_last_occurrence_wins() {
        let parsed = parse_telemetry("A:1,B:2,A:3");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["A"], "3");
        assert_eq!(parsed["B"], "2");
    }

    #[test]
    fn test_value_keeps_embedded_colons() {
        let parsed = parse_telemetry("KEY:VAL:UE");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["KEY"], "VAL:UE");
    }

    #[test]
    fn test_typical_telemetry_line() {
        let parsed = parse_telemetry("ROLL:1.25,PITCH:-0.50,KP:2.5,STATUS:STABLE");
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed["ROLL"], "1.25");
        assert_eq!(parsed["STATUS"], "STABLE");
    }

    #[test]
    fn test_mixed_valid_and_invalid_fragments() {
        let parsed = parse_telemetry("garbage,ROLL:1.0,noise,PITCH:0.5,");
        assert_eq!(parsed.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_colon_free_input_yields_empty(s in "[^:]{0,64}") {
            prop_assert!(parse_telemetry(&s).is_empty());
        }

        #[test]
        fn prop_parser_never_panics(s in ".{0,128}") {
            let _ = parse_telemetry(&s);
        }

        #[test]
        fn prop_single_pair_roundtrips(key in "[A-Z_]{1,8}", value in "[0-9.\\-]{1,8}") {
            let line = format!("{key}:{value}");
            let parsed = parse_telemetry(&line);
            prop_assert_eq!(parsed.get(&key).map(String::as_str), Some(value.as_str()));
        }
    }
}
