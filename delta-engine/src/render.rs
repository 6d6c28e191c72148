//! Textual rendering of comparison output.

use crate::compare::{Comparison, DeltaRecord};

/// Formats one report line: `<title> <baseline> <current> (+ <delta>)`.
///
/// Negative deltas render as `(- <abs>)`; a zero delta carries no suffix.
pub fn delta_line(record: &DeltaRecord) -> String {
    match record.delta {
        d if d > 0 => format!(
            "{} {} {} (+ {})",
            record.title, record.baseline, record.current, d
        ),
        d if d < 0 => format!(
            "{} {} {} (- {})",
            record.title, record.baseline, record.current, -d
        ),
        _ => format!("{} {} {}", record.title, record.baseline, record.current),
    }
}

/// Renders the full report: one line per delta plus the summary block.
///
/// Summary lines for most/fewest are omitted when there is no data, and the
/// average line is omitted when undefined, rather than printing misleading
/// zero placeholders. The label wording (including the historical "starts"
/// in the average line) is kept for output compatibility.
pub fn render_report(comparison: &Comparison) -> String {
    let mut out = String::new();
    for record in &comparison.deltas {
        out.push_str(&delta_line(record));
        out.push('\n');
    }
    out.push('\n');

    let summary = &comparison.summary;
    if let Some(most) = &summary.most_gained {
        out.push_str(&format!(
            "Most number of new stars: {} {}\n",
            most.title, most.delta
        ));
    }
    if let Some(least) = &summary.least_gained {
        out.push_str(&format!(
            "Fewest number of new stars: {} {}\n",
            least.title, least.delta
        ));
    }
    out.push_str(&format!("Total number of new stars: {}\n", summary.total));
    if let Some(average) = summary.average {
        out.push_str(&format!("Average number of new starts: {}\n", average));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Extreme, Summary};

    fn record(title: &str, baseline: u64, current: u64) -> DeltaRecord {
        DeltaRecord {
            title: title.into(),
            baseline,
            current,
            delta: current as i64 - baseline as i64,
        }
    }

    #[test]
    fn positive_delta_line() {
        assert_eq!(delta_line(&record("octo/repo", 100, 130)), "octo/repo 100 130 (+ 30)");
    }

    #[test]
    fn negative_delta_line() {
        assert_eq!(delta_line(&record("octo/repo", 130, 100)), "octo/repo 130 100 (- 30)");
    }

    #[test]
    fn zero_delta_line_has_no_suffix() {
        assert_eq!(delta_line(&record("octo/repo", 100, 100)), "octo/repo 100 100");
    }

    #[test]
    fn full_report_for_single_record() {
        let comparison = Comparison {
            deltas: vec![record("octo/repo", 100, 130)],
            summary: Summary {
                most_gained: Some(Extreme {
                    title: "octo/repo".into(),
                    delta: 30,
                }),
                least_gained: Some(Extreme {
                    title: "octo/repo".into(),
                    delta: 30,
                }),
                total: 30,
                average: Some(30),
                count: 1,
            },
        };

        let report = render_report(&comparison);
        assert_eq!(
            report,
            "octo/repo 100 130 (+ 30)\n\
             \n\
             Most number of new stars: octo/repo 30\n\
             Fewest number of new stars: octo/repo 30\n\
             Total number of new stars: 30\n\
             Average number of new starts: 30\n"
        );
    }

    #[test]
    fn empty_comparison_omits_extremes_and_average() {
        let comparison = Comparison {
            deltas: vec![],
            summary: Summary::default(),
        };

        let report = render_report(&comparison);
        assert!(!report.contains("Most number"));
        assert!(!report.contains("Fewest number"));
        assert!(!report.contains("Average"));
        assert!(report.contains("Total number of new stars: 0"));
    }
}
