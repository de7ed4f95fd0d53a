use crate::types::report::Report;
use crate::types::scoring::Metric;

pub fn to_markdown(report: &Report) -> String {
    let mut output = String::new();
    output.push_str("# LLM Summary Comparison\n\n");
    output.push_str(&format!(
        "Date: {}\n\n",
        report.generated_on.format("%d.%m.%Y")
    ));

    output.push_str("## Results\n\n");
    output.push_str("| Model | Score | Words |\n");
    output.push_str("|-------|-------|-------|\n");
    for record in &report.records {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            record.model,
            format_total(record.total_score),
            record.word_count
        ));
    }

    output.push_str("\n## Detailed Metrics\n\n");
    for record in &report.records {
        output.push_str(&format!("### {}\n\n", record.model));
        for metric in Metric::ALL {
            output.push_str(&format!(
                "- **{}**: {:.1}\n",
                metric,
                record.metric(metric)
            ));
        }
        output.push('\n');
    }

    output
}

fn format_total(total: f64) -> String {
    if total.is_finite() && total.fract() == 0.0 {
        format!("{total:.1}")
    } else {
        format!("{total}")
    }
}
