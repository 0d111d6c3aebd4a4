#[cfg(test)]
mod tests {
    use crate::{PerfLogError, Series, SeriesMap, parse_lines, to_log_string};
    use approx::assert_relative_eq;

    fn sample_lines() -> Vec<&'static str> {
        vec!["alpha:", "1020", "2040", "beta--chm:", "3060"]
    }

    #[test]
    fn test_parse_sample_log() {
        let map = parse_lines(&sample_lines()).unwrap();
        assert_eq!(map.len(), 2);

        let alpha = map.get("alpha:").unwrap();
        assert_eq!(alpha.sizes(), &[10, 20]);
        assert_relative_eq!(alpha.times()[0], 0.00002);
        assert_relative_eq!(alpha.times()[1], 0.00004);

        let beta = map.get("beta--chm:").unwrap();
        assert_eq!(beta.sizes(), &[30]);
        assert_relative_eq!(beta.times()[0], 0.00006);
    }

    #[test]
    fn test_series_count_matches_label_lines() {
        let lines = vec![
            "option: -a chm",
            "",
            "1122",
            "option: -a bdz",
            "option: -a chm3",
            "5566",
            "",
        ];
        let map = parse_lines(&lines).unwrap();
        let label_lines = lines.iter().filter(|l| l.contains(':')).count();
        assert_eq!(map.len(), label_lines);
        assert!(map.get("option: -a bdz").unwrap().is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let lines = vec!["zeta:", "11", "alpha:", "22", "mid:", "33"];
        let map = parse_lines(&lines).unwrap();
        let labels: Vec<&str> = map.labels().collect();
        assert_eq!(labels, vec!["zeta:", "alpha:", "mid:"]);
    }

    #[test]
    fn test_repeated_label_resets_in_place() {
        let lines = vec!["a:", "11", "b:", "22", "a:", "33"];
        let map = parse_lines(&lines).unwrap();
        let labels: Vec<&str> = map.labels().collect();
        assert_eq!(labels, vec!["a:", "b:"]);
        assert_eq!(map.get("a:").unwrap().sizes(), &[3]);
    }

    #[test]
    fn test_empty_input() {
        let lines: Vec<String> = Vec::new();
        let map = parse_lines(&lines).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_data_before_label() {
        let err = parse_lines(&["", "1020", "alpha:"]).unwrap_err();
        assert!(matches!(err, PerfLogError::OrphanDataLine { line: 2 }));
    }

    #[test]
    fn test_invalid_field_reports_line() {
        let err = parse_lines(&["alpha:", "1020", "10x0"]).unwrap_err();
        match err {
            PerfLogError::InvalidField { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_even_length_split_property() {
        for n in 1..=9usize {
            let size_digits: String = (0..n).map(|i| char::from(b'1' + (i % 9) as u8)).collect();
            let time_digits: String = (0..n).map(|i| char::from(b'9' - (i % 9) as u8)).collect();
            let line = format!("{size_digits}{time_digits}");
            let map = parse_lines(&["s:", line.as_str()]).unwrap();
            let series = map.get("s:").unwrap();
            assert_eq!(series.sizes()[0], size_digits.parse::<u64>().unwrap());
            assert_relative_eq!(
                series.times()[0],
                time_digits.parse::<u64>().unwrap() as f64 / 1e6
            );
        }
    }

    #[test]
    fn test_write_then_parse_preserves_values() {
        let mut first = Series::new("option: -a chm");
        first.push(20, 0.004521);
        first.push(2_000_000, 12.5);
        let mut second = Series::new("option: -a bdz --bpz");
        second.push(200, 0.0);
        let map: SeriesMap = vec![first, second].into_iter().collect();

        let text = to_log_string(&map).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        let parsed = parse_lines(&lines).unwrap();

        assert_eq!(parsed.len(), map.len());
        for (orig, back) in map.iter().zip(parsed.iter()) {
            assert_eq!(orig.label, back.label);
            assert_eq!(orig.sizes(), back.sizes());
            for (a, b) in orig.times().iter().zip(back.times()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-12);
            }
        }
    }
}
