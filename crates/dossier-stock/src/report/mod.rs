//! Plain-text rendering of dossier sections.

use std::fmt::Write;

use crate::domain::{FinancialField, QualitativeReport, SectorReport, ValuationReport};

fn section_header(title: &str) -> String {
    format!("{}\n{}\n", title, "-".repeat(title.len()))
}

fn write_map(output: &mut String, heading: &str, entries: &std::collections::HashMap<String, String>) {
    if entries.is_empty() {
        return;
    }
    let _ = writeln!(output, "{heading}:");
    let mut keys: Vec<_> = entries.keys().collect();
    keys.sort();
    for key in keys {
        let _ = writeln!(output, "  - {}: {}", key, entries[key]);
    }
}

/// Render the valuation section: one block per tracked metric, in the
/// fixed field order, with yearly values and the growth figure.
pub fn format_quantitative(report: &ValuationReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", section_header("QUANTITATIVE ANALYSIS"));
    let _ = writeln!(output, "{}\n", report.ticker);

    for field in FinancialField::ALL {
        let Some(analysis) = report.metrics.get(field.name()) else {
            continue;
        };

        let _ = writeln!(output, "{}", analysis.metric_name);
        for point in &analysis.yearly_data {
            let _ = writeln!(output, "  {:<12} | {:>24}", point.date, point.value);
        }
        match analysis.cagr {
            Some(cagr) => {
                let _ = writeln!(output, "  CAGR: {cagr}%");
            }
            None => {
                let _ = writeln!(output, "  CAGR: N/A");
            }
        }
        output.push('\n');
    }

    output
}

/// Render the company profile section.
pub fn format_qualitative(report: &QualitativeReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", section_header("QUALITATIVE ANALYSIS"));
    let _ = writeln!(output, "{}\n", report.ticker);

    let profile = &report.profile;
    let _ = writeln!(output, "Business: {}", profile.business_description);
    let _ = writeln!(output, "History: {}", profile.company_history);
    let _ = writeln!(
        output,
        "CEO: {} (ownership: {}%)",
        profile.ceo_name, profile.ceo_ownership
    );

    if !profile.major_shareholders.is_empty() {
        let _ = writeln!(output, "Major shareholders:");
        let mut holders: Vec<_> = profile.major_shareholders.iter().collect();
        holders.sort_by(|a, b| a.0.cmp(b.0));
        for (holder, stake) in holders {
            let _ = writeln!(output, "  - {holder}: {stake}%");
        }
    }

    let _ = writeln!(output, "Revenue model: {}", profile.revenue_model);
    let _ = writeln!(output, "Strategy: {}", profile.strategy);
    write_map(&mut output, "Products and services", &profile.products_services);
    let _ = writeln!(
        output,
        "Competitive advantage: {}",
        profile.competitive_advantage
    );
    write_map(&mut output, "Competitors", &profile.competitors);
    let _ = writeln!(output, "Management: {}", profile.management_insights);
    write_map(&mut output, "Risk factors", &profile.risk_factors);
    let _ = writeln!(
        output,
        "Crisis track record: {}",
        profile.historical_context_crises
    );

    output
}

/// Render the sector/industry section.
pub fn format_sector(report: &SectorReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", section_header("SECTOR ANALYSIS"));
    let _ = writeln!(output, "{}\n", report.ticker);

    let dynamics = &report.dynamics;
    let _ = writeln!(
        output,
        "Industry: {} ({})\n",
        dynamics.industry, dynamics.sector
    );
    write_map(
        &mut output,
        "Rivalry among competitors",
        &dynamics.rivalry_among_competitors,
    );
    write_map(
        &mut output,
        "Bargaining power of suppliers",
        &dynamics.bargaining_power_of_suppliers,
    );
    write_map(
        &mut output,
        "Bargaining power of customers",
        &dynamics.bargaining_power_of_customers,
    );
    write_map(
        &mut output,
        "Threat of new entrants",
        &dynamics.threat_of_new_entrants,
    );
    write_map(
        &mut output,
        "Threat of obsolescence",
        &dynamics.threat_of_obsolescence,
    );
    let _ = writeln!(
        output,
        "Economic sensitivity: {}",
        dynamics.economic_sensitivity
    );
    let _ = writeln!(
        output,
        "Interest rate exposure: {}",
        dynamics.interest_rate_exposure
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CompanyProfile, IndustryDynamics, MetricAnalysis, MetricPoint, Ticker,
    };
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn ticker() -> Ticker {
        let mut ticker = Ticker::new("TEST");
        ticker.name = "Test Corp".to_string();
        ticker
    }

    #[test]
    fn test_quantitative_lists_metrics_in_field_order() {
        let mut metrics = HashMap::new();
        metrics.insert(
            "revenue".to_string(),
            MetricAnalysis {
                metric_name: "Revenue".to_string(),
                yearly_data: vec![MetricPoint {
                    date: "2024-12-31".to_string(),
                    value: dec!(1000),
                }],
                cagr: Some(dec!(12.50)),
            },
        );
        metrics.insert(
            "net_income".to_string(),
            MetricAnalysis {
                metric_name: "Net Income".to_string(),
                yearly_data: vec![],
                cagr: None,
            },
        );

        let rendered = format_quantitative(&ValuationReport {
            ticker: ticker(),
            metrics,
        });

        assert!(rendered.contains("QUANTITATIVE ANALYSIS"));
        assert!(rendered.contains("CAGR: 12.50%"));
        assert!(rendered.contains("CAGR: N/A"));

        // Revenue comes before income regardless of map iteration order.
        let revenue_at = rendered.find("Revenue").unwrap();
        let income_at = rendered.find("Net Income").unwrap();
        assert!(revenue_at < income_at);
    }

    #[test]
    fn test_qualitative_renders_profile() {
        let mut profile = CompanyProfile {
            ceo_name: "Jane Doe".to_string(),
            ceo_ownership: dec!(2.5),
            ..CompanyProfile::default()
        };
        profile
            .risk_factors
            .insert("Concentration".to_string(), "One large customer".to_string());

        let rendered = format_qualitative(&QualitativeReport {
            ticker: ticker(),
            profile,
        });

        assert!(rendered.contains("CEO: Jane Doe (ownership: 2.5%)"));
        assert!(rendered.contains("Concentration: One large customer"));
    }

    #[test]
    fn test_sector_renders_five_forces() {
        let mut dynamics = IndustryDynamics {
            sector: "Technology".to_string(),
            industry: "Semiconductors".to_string(),
            ..IndustryDynamics::default()
        };
        dynamics
            .threat_of_new_entrants
            .insert("Capital".to_string(), "Fabs cost billions".to_string());

        let rendered = format_sector(&SectorReport {
            ticker: ticker(),
            dynamics,
        });

        assert!(rendered.contains("Semiconductors (Technology)"));
        assert!(rendered.contains("Threat of new entrants:"));
        assert!(rendered.contains("Fabs cost billions"));
    }
}
