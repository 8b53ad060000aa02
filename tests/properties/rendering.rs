//! Property tests for the renderers.

use proptest::prelude::*;

use prchecks::domain::services::{aggregate, deduplicate};
use prchecks::ui::views::checks::{render_table, render_tsv};

use super::strategies::records;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Table and stream report the same bucket for every check.
    #[test]
    fn property_table_and_stream_agree(input in records()) {
        let report = aggregate(deduplicate(input));

        let mut from_stream: Vec<(String, String)> = render_tsv(&report)
            .lines()
            .map(|line| {
                let fields: Vec<&str> = line.split('\t').collect();
                (fields[0].to_string(), fields[1].to_string())
            })
            .collect();
        from_stream.sort();

        let mut from_report: Vec<(String, String)> = report
            .checks
            .iter()
            .map(|c| (c.record.identity.clone(), c.classification.to_string()))
            .collect();
        from_report.sort();

        prop_assert_eq!(from_stream, from_report);

        let table = render_table(&report, false);
        let rows = table.lines().skip(3).count();
        prop_assert_eq!(rows, report.summary.total);
        prop_assert!(table.starts_with(report.outcome().headline()));
    }

    /// PROPERTY: Table rows are sorted by name.
    #[test]
    fn property_table_rows_sorted(input in records()) {
        let report = aggregate(deduplicate(input));
        let table = render_table(&report, false);

        let names: Vec<String> = table
            .lines()
            .skip(3)
            .map(|row| row[row.find("  ").unwrap() + 2..].split("  ").next().unwrap().trim().to_string())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);
    }
}
