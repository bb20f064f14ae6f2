//! Markdown report generator adapter.
//!
//! Renders a decision outcome as a fixed-structure Markdown document:
//! criteria weights, option scores, cost projection, comparative synthesis,
//! verdict.

use crate::domain::ahp::ConsistencyScale;
use crate::domain::analysis::CostComparison;
use crate::domain::decision::DecisionOutcome;
use crate::ports::{ReportError, ReportFormat, ReportGenerator, ReportOptions};

/// Markdown implementation of ReportGenerator.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    /// Creates a new Markdown report generator.
    pub fn new() -> Self {
        Self
    }

    fn generate_header(&self, outcome: &DecisionOutcome, options: &ReportOptions) -> String {
        format!(
            "# {}\n\n*Analysis for the {} district ({}, {}) - generated on {}*\n\n",
            options.title,
            outcome.zone.district,
            outcome.zone.city,
            outcome.zone.sector,
            options.generated_on.format("%Y-%m-%d"),
        )
    }

    fn generate_criteria(&self, outcome: &DecisionOutcome) -> String {
        let mut section = String::from("## 1. Criteria Analysis (AHP method)\n\n");
        section.push_str("| Criterion | Weight |\n");
        section.push_str("|-----------|--------|\n");
        for (label, weight) in outcome.labelled_weights() {
            section.push_str(&format!("| {} | {} |\n", label, weight));
        }
        section.push('\n');

        section.push_str(&format!(
            "- **Consistency ratio (CR):** {:.4} (threshold {:.2})\n",
            outcome.ahp.consistency_ratio, outcome.consistency_threshold
        ));
        section.push_str(&format!("- **Verdict:** {}\n\n", outcome.verdict.label()));

        if outcome.ahp.scale == ConsistencyScale::Unscaled {
            section.push_str(&format!(
                "> CR is not normalized: no random index is tabulated for {} criteria.\n\n",
                outcome.ahp.order()
            ));
        }
        if !outcome.verdict.is_trustworthy() {
            section.push_str(
                "> Warning: the pairwise judgments contradict each other. \
                 Review them before relying on the weights.\n\n",
            );
        }

        section
    }

    fn generate_scores(&self, outcome: &DecisionOutcome) -> String {
        let mut section = String::from("## 2. Option Scores\n\n");
        section.push_str("| Rank | Option | Score |\n");
        section.push_str("|------|--------|-------|\n");
        for option in &outcome.ranking {
            section.push_str(&format!(
                "| {} | {} | {} |\n",
                option.rank, option.name, option.score
            ));
        }
        section.push('\n');

        for dominated in &outcome.dominated {
            section.push_str(&format!(
                "- `{}` is dominated by `{}`: {}\n",
                dominated.option_id, dominated.dominated_by_id, dominated.explanation
            ));
        }
        if !outcome.dominated.is_empty() {
            section.push('\n');
        }

        section
    }

    fn generate_costs(
        &self,
        outcome: &DecisionOutcome,
        costs: &CostComparison,
        options: &ReportOptions,
    ) -> String {
        let incumbent = option_name(outcome, &costs.incumbent_id);
        let challenger = option_name(outcome, &costs.challenger_id);

        let mut section = format!(
            "## 3. Financial Analysis over {} years\n\n",
            costs.horizon_years
        );
        section.push_str(&format!(
            "- Initial investment {}: {} FCFA\n",
            incumbent,
            format_amount(costs.incumbent_curve.first().copied().unwrap_or_default())
        ));
        section.push_str(&format!(
            "- Initial investment {}: {} FCFA\n",
            challenger,
            format_amount(costs.challenger_curve.first().copied().unwrap_or_default())
        ));
        section.push_str(&format!(
            "- Cumulative cost ({} years) {}: {} FCFA\n",
            costs.horizon_years,
            incumbent,
            format_amount(costs.incumbent_total())
        ));
        section.push_str(&format!(
            "- Cumulative cost ({} years) {}: {} FCFA\n\n",
            costs.horizon_years,
            challenger,
            format_amount(costs.challenger_total())
        ));

        match costs.break_even_years {
            Some(years) if years > 0.0 => section.push_str(&format!(
                "*Note: {} becomes cheaper than {} after {:.1} years.*\n\n",
                challenger, incumbent, years
            )),
            // Cheaper to build and to run: no crossing point to report.
            Some(_) => section.push_str(&format!(
                "*Note: {} is cheaper than {} from year 0.*\n\n",
                challenger, incumbent
            )),
            None => section.push_str(&format!(
                "*Note: {} stays cheaper over time; weigh this against availability.*\n\n",
                incumbent
            )),
        }

        if options.include_cost_curves {
            section.push_str(&format!("| Year | {} | {} |\n", incumbent, challenger));
            section.push_str("|------|------|------|\n");
            for (year, (a, b)) in costs
                .incumbent_curve
                .iter()
                .zip(&costs.challenger_curve)
                .enumerate()
            {
                section.push_str(&format!(
                    "| {} | {} | {} |\n",
                    year,
                    format_amount(*a),
                    format_amount(*b)
                ));
            }
            section.push('\n');
        }

        section
    }

    fn generate_synthesis(&self, outcome: &DecisionOutcome) -> String {
        let mut section = String::from("## Comparative Synthesis\n\n");
        for option in &outcome.synthesis {
            section.push_str(&format!("### {}\n\n", option.name));
            if option.notes.is_empty() {
                section.push_str("- No marked advantage or drawback.\n");
            }
            for note in &option.notes {
                section.push_str(&format!("- **{}:** {}\n", note.kind.label(), note.text));
            }
            section.push('\n');
        }
        section
    }

    fn generate_footer(&self, options: &ReportOptions) -> String {
        format!("---\n\n*Document generated by {}.*\n", options.organization)
    }
}

impl ReportGenerator for MarkdownReportGenerator {
    fn generate(
        &self,
        outcome: &DecisionOutcome,
        options: &ReportOptions,
    ) -> Result<String, ReportError> {
        let recommendation = outcome
            .recommendation()
            .ok_or_else(|| ReportError::missing_data("ranking"))?;

        let mut doc = self.generate_header(outcome, options);
        doc.push_str(&self.generate_criteria(outcome));
        doc.push_str(&self.generate_scores(outcome));
        if let Some(costs) = &outcome.cost_comparison {
            doc.push_str(&self.generate_costs(outcome, costs, options));
        }
        if !outcome.synthesis.is_empty() {
            doc.push_str(&self.generate_synthesis(outcome));
        }

        doc.push_str(&format!(
            "## Verdict\n\n**RECOMMENDATION: OPTION {}** ({})\n\n",
            recommendation.name.to_uppercase(),
            recommendation.score
        ));
        doc.push_str(&self.generate_footer(options));

        Ok(doc)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

fn option_name<'a>(outcome: &'a DecisionOutcome, id: &'a str) -> &'a str {
    outcome
        .ranking
        .iter()
        .find(|o| o.option_id == id)
        .map(|o| o.name.as_str())
        .unwrap_or(id)
}

/// Rounds to whole units and groups thousands with commas.
fn format_amount(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::report::test_support::sample_outcome;
    use crate::domain::analysis::CostProfile;
    use chrono::NaiveDate;

    fn options() -> ReportOptions {
        ReportOptions {
            generated_on: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            ..ReportOptions::default()
        }
    }

    #[test]
    fn report_contains_all_sections() {
        let doc = MarkdownReportGenerator::new()
            .generate(&sample_outcome(true), &options())
            .unwrap();

        assert!(doc.starts_with("# Expert Report: Hydro-Decisio"));
        assert!(doc.contains("generated on 2026-03-14"));
        assert!(doc.contains("## 1. Criteria Analysis (AHP method)"));
        assert!(doc.contains("| Cost | 33.33% |"));
        assert!(doc.contains("## 2. Option Scores"));
        assert!(doc.contains("## 3. Financial Analysis over 10 years"));
        assert!(doc.contains("Initial investment CAMWATER network: 150,000 FCFA"));
        assert!(doc.contains("after 19.6 years"));
        assert!(doc.contains("**RECOMMENDATION: OPTION SELF-SUPPLY BOREHOLE**"));
        assert!(doc.ends_with("*Document generated by Hydro-Decisio decision support.*\n"));
    }

    #[test]
    fn challenger_cheaper_on_both_costs_has_no_negative_break_even() {
        let mut outcome = sample_outcome(true);
        outcome.cost_comparison = Some(CostComparison::compute(
            "camwater",
            &CostProfile::new(2_500_000.0, 15_000.0).unwrap(),
            "borehole",
            &CostProfile::new(150_000.0, 5_000.0).unwrap(),
            10,
        ));

        let doc = MarkdownReportGenerator::new().generate(&outcome, &options()).unwrap();

        assert!(doc.contains("*Note: Self-supply borehole is cheaper than CAMWATER network from year 0.*"));
        assert!(!doc.contains("becomes cheaper"));
        assert!(!doc.contains("after -"));
    }

    #[test]
    fn report_renders_comparative_synthesis() {
        let doc = MarkdownReportGenerator::new()
            .generate(&sample_outcome(false), &options())
            .unwrap();

        let synthesis = doc.find("## Comparative Synthesis").unwrap();
        assert!(synthesis < doc.find("## Verdict").unwrap());
        assert!(doc.contains("### CAMWATER network\n\n- **Advantage:** Low initial investment.\n"));
        assert!(doc.contains("- **Drawback:** Unreliable network supply in this zone."));
        assert!(doc.contains("- **Advantage:** Autonomy and water around the clock."));
        assert!(doc.contains("- **Drawback:** Very high installation cost."));
        assert!(doc.contains("- **Advantage:** Independent of network extensions."));
    }

    #[test]
    fn report_omits_synthesis_when_empty() {
        let mut outcome = sample_outcome(false);
        outcome.synthesis.clear();
        let doc = MarkdownReportGenerator::new().generate(&outcome, &options()).unwrap();
        assert!(!doc.contains("Comparative Synthesis"));
    }

    #[test]
    fn report_skips_costs_when_absent() {
        let doc = MarkdownReportGenerator::new()
            .generate(&sample_outcome(false), &options())
            .unwrap();
        assert!(!doc.contains("Financial Analysis"));
    }

    #[test]
    fn report_includes_curves_when_requested() {
        let opts = ReportOptions {
            include_cost_curves: true,
            ..options()
        };
        let doc = MarkdownReportGenerator::new()
            .generate(&sample_outcome(true), &opts)
            .unwrap();
        assert!(doc.contains("| 10 | 1,950,000 | 3,100,000 |"));
    }

    #[test]
    fn report_warns_on_contradictory_judgments() {
        let mut outcome = sample_outcome(false);
        outcome.verdict = crate::domain::analysis::ConsistencyVerdict::Contradictory;
        let doc = MarkdownReportGenerator::new().generate(&outcome, &options()).unwrap();
        assert!(doc.contains("contradict each other"));
    }

    #[test]
    fn report_without_ranking_is_error() {
        let mut outcome = sample_outcome(false);
        outcome.ranking.clear();
        let err = MarkdownReportGenerator::new()
            .generate(&outcome, &options())
            .unwrap_err();
        assert!(matches!(err, ReportError::MissingData { .. }));
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1_000.0), "1,000");
        assert_eq!(format_amount(2_500_000.4), "2,500,000");
        assert_eq!(format_amount(-12_345.0), "-12,345");
    }
}
