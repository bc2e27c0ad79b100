//! The closed set of tracked financial fields
//!
//! The dossier loops over every tracked line item of a fiscal year. Rather
//! than reading struct fields by name at runtime, the fields are an explicit
//! enum with an accessor per variant, so "loop over all fields" stays a
//! plain array iteration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entities::FiscalYear;

/// One of the fourteen numeric line items tracked per fiscal year.
///
/// The fiscal period end date is not a member; it is the record's key, not
/// a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialField {
    Revenue,
    Ebitda,
    GrossProfit,
    OperatingIncome,
    NetIncome,
    OperatingCashFlow,
    CapitalExpenditures,
    SharesOutstanding,
    ShortTermDebt,
    LongTermDebt,
    TotalDebt,
    TotalAssets,
    TotalLiabilities,
    CashAndEquivalents,
}

impl FinancialField {
    /// Every tracked field, in fiscal-year declaration order.
    pub const ALL: [FinancialField; 14] = [
        FinancialField::Revenue,
        FinancialField::Ebitda,
        FinancialField::GrossProfit,
        FinancialField::OperatingIncome,
        FinancialField::NetIncome,
        FinancialField::OperatingCashFlow,
        FinancialField::CapitalExpenditures,
        FinancialField::SharesOutstanding,
        FinancialField::ShortTermDebt,
        FinancialField::LongTermDebt,
        FinancialField::TotalDebt,
        FinancialField::TotalAssets,
        FinancialField::TotalLiabilities,
        FinancialField::CashAndEquivalents,
    ];

    /// The field's snake_case name, used as the key in valuation reports.
    pub fn name(self) -> &'static str {
        match self {
            FinancialField::Revenue => "revenue",
            FinancialField::Ebitda => "ebitda",
            FinancialField::GrossProfit => "gross_profit",
            FinancialField::OperatingIncome => "operating_income",
            FinancialField::NetIncome => "net_income",
            FinancialField::OperatingCashFlow => "operating_cash_flow",
            FinancialField::CapitalExpenditures => "capital_expenditures",
            FinancialField::SharesOutstanding => "shares_outstanding",
            FinancialField::ShortTermDebt => "short_term_debt",
            FinancialField::LongTermDebt => "long_term_debt",
            FinancialField::TotalDebt => "total_debt",
            FinancialField::TotalAssets => "total_assets",
            FinancialField::TotalLiabilities => "total_liabilities",
            FinancialField::CashAndEquivalents => "cash_and_equivalents",
        }
    }

    /// Reads this field's value out of a fiscal year record.
    pub fn extract(self, year: &FiscalYear) -> Decimal {
        match self {
            FinancialField::Revenue => year.revenue,
            FinancialField::Ebitda => year.ebitda,
            FinancialField::GrossProfit => year.gross_profit,
            FinancialField::OperatingIncome => year.operating_income,
            FinancialField::NetIncome => year.net_income,
            FinancialField::OperatingCashFlow => year.operating_cash_flow,
            FinancialField::CapitalExpenditures => year.capital_expenditures,
            FinancialField::SharesOutstanding => year.shares_outstanding,
            FinancialField::ShortTermDebt => year.short_term_debt,
            FinancialField::LongTermDebt => year.long_term_debt,
            FinancialField::TotalDebt => year.total_debt,
            FinancialField::TotalAssets => year.total_assets,
            FinancialField::TotalLiabilities => year.total_liabilities,
            FinancialField::CashAndEquivalents => year.cash_and_equivalents,
        }
    }

    /// Human-readable name: underscores become spaces, each word is
    /// capitalized. Plain word capitalization, so acronyms render as
    /// ordinary words (`ebitda` becomes `Ebitda`).
    pub fn display_name(self) -> String {
        self.name()
            .split('_')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn sample_year() -> FiscalYear {
        FiscalYear {
            fiscal_date_ending: "2024-12-31".to_string(),
            revenue: dec!(100),
            ebitda: dec!(30),
            gross_profit: dec!(40),
            operating_income: dec!(25),
            net_income: dec!(20),
            operating_cash_flow: dec!(28),
            capital_expenditures: dec!(10),
            shares_outstanding: dec!(1000),
            short_term_debt: dec!(5),
            long_term_debt: dec!(15),
            total_debt: dec!(20),
            total_assets: dec!(200),
            total_liabilities: dec!(80),
            cash_and_equivalents: dec!(50),
        }
    }

    #[test]
    fn test_all_fields_have_unique_names() {
        let names: HashSet<_> = FinancialField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn test_extract_reads_matching_field() {
        let year = sample_year();
        assert_eq!(FinancialField::Revenue.extract(&year), dec!(100));
        assert_eq!(FinancialField::TotalDebt.extract(&year), dec!(20));
        assert_eq!(FinancialField::CashAndEquivalents.extract(&year), dec!(50));
    }

    #[test]
    fn test_display_name_word_split_and_capitalize() {
        assert_eq!(
            FinancialField::OperatingCashFlow.display_name(),
            "Operating Cash Flow"
        );
        assert_eq!(FinancialField::Revenue.display_name(), "Revenue");
        // Acronyms are not special-cased; this is the expected rendering.
        assert_eq!(FinancialField::Ebitda.display_name(), "Ebitda");
    }
}
