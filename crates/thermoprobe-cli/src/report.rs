//! Plain-text report rendering.

use crate::stats::Summary;

/// Renders the fixed-layout summary block.
pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Temperature summary:\n  Samples: {}\n  Minimum: {:.2} °C\n  Maximum: {:.2} °C\n  Median: {:.2} °C\n",
        summary.count, summary.min, summary.max, summary.median
    )
}

/// Renders the raw sample series as a comma-separated block.
pub fn render_raw(samples: &[f64]) -> String {
    let values = samples
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Raw samples:\n  {values}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats;

    #[test]
    fn test_summary_layout() {
        let summary = Summary {
            count: 3,
            min: 41.0,
            max: 47.5,
            median: 44.25,
        };
        let rendered = render_summary(&summary);
        assert_eq!(
            rendered,
            "Temperature summary:\n  Samples: 3\n  Minimum: 41.00 °C\n  Maximum: 47.50 °C\n  Median: 44.25 °C\n"
        );
    }

    #[test]
    fn test_raw_block() {
        let rendered = render_raw(&[41.25, 47.3, 44.0]);
        assert_eq!(rendered, "Raw samples:\n  41.25, 47.30, 44.00\n");
    }

    #[test]
    fn test_raw_block_single_sample() {
        assert_eq!(render_raw(&[42.5]), "Raw samples:\n  42.50\n");
    }

    /// Extracts a numeric field from the rendered summary block.
    fn field(rendered: &str, name: &str) -> f64 {
        rendered
            .lines()
            .filter_map(|line| line.trim_start().strip_prefix(&format!("{name}: ")))
            .filter_map(|rest| rest.strip_suffix(" °C"))
            .filter_map(|value| value.parse().ok())
            .next()
            .unwrap()
    }

    #[test]
    fn test_rendered_fields_match_statistics() {
        let samples = [47.25, 41.0, 68.5, 44.75, 50.1];
        let summary = stats::summarize(&samples).unwrap();
        let rendered = render_summary(&summary);

        assert!((field(&rendered, "Minimum") - summary.min).abs() < 0.005);
        assert!((field(&rendered, "Maximum") - summary.max).abs() < 0.005);
        assert!((field(&rendered, "Median") - summary.median).abs() < 0.005);
    }
}
