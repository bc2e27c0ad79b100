//! Statement reconciliation
//!
//! Merges yearly income, balance-sheet and cash-flow reports into unified
//! [`FiscalYear`] records by matching fiscal period end dates. A year with
//! a missing counterpart statement fails the whole reconciliation: zero
//! filling one statement's worth of fields would silently corrupt every
//! downstream trend calculation for that year.

use serde_json::Value;
use std::collections::HashMap;

use super::parser::decimal_field;
use crate::domain::FiscalYear;
use crate::error::{DossierError, Result};

const FISCAL_DATE_KEY: &str = "fiscalDateEnding";

/// Merges the three statements into per-fiscal-year records.
///
/// The income list drives iteration, so output order follows the income
/// list's order (provider order, typically most-recent-first). Income
/// reports without a fiscal date are skipped; a date with no matching
/// balance or cash-flow report is a [`DossierError::DataIntegrity`].
pub fn reconcile_fiscal_years(
    income_reports: &[Value],
    balance_reports: &[Value],
    cash_reports: &[Value],
) -> Result<Vec<FiscalYear>> {
    let balance_by_date = index_by_date(balance_reports);
    let cash_by_date = index_by_date(cash_reports);

    let mut years = Vec::with_capacity(income_reports.len());

    for income in income_reports {
        let Some(fiscal_date) = income.get(FISCAL_DATE_KEY).and_then(Value::as_str) else {
            continue;
        };

        let balance = balance_by_date.get(fiscal_date).copied();
        let cash = cash_by_date.get(fiscal_date).copied();

        let (Some(balance), Some(cash)) = (balance, cash) else {
            return Err(DossierError::DataIntegrity(format!(
                "Missing data on date: {fiscal_date}. Balance: {}, CashFlow: {}",
                if balance.is_some() { "OK" } else { "MISSING" },
                if cash.is_some() { "OK" } else { "MISSING" },
            )));
        };

        let short_term_debt = decimal_field(balance, "shortTermDebt");
        let long_term_debt = decimal_field(balance, "longTermDebt");

        years.push(FiscalYear {
            fiscal_date_ending: fiscal_date.to_owned(),
            revenue: decimal_field(income, "totalRevenue"),
            ebitda: decimal_field(income, "ebitda"),
            gross_profit: decimal_field(income, "grossProfit"),
            operating_income: decimal_field(income, "operatingIncome"),
            net_income: decimal_field(income, "netIncome"),
            operating_cash_flow: decimal_field(cash, "operatingCashflow"),
            capital_expenditures: decimal_field(cash, "capitalExpenditures"),
            shares_outstanding: decimal_field(balance, "commonStockSharesOutstanding"),
            short_term_debt,
            long_term_debt,
            // The provider has no reliable combined figure; always derive.
            total_debt: short_term_debt + long_term_debt,
            total_assets: decimal_field(balance, "totalAssets"),
            total_liabilities: decimal_field(balance, "totalLiabilities"),
            cash_and_equivalents: decimal_field(balance, "cashAndCashEquivalentsAtCarryingValue"),
        });
    }

    Ok(years)
}

fn index_by_date(reports: &[Value]) -> HashMap<&str, &Value> {
    reports
        .iter()
        .filter_map(|report| {
            report
                .get(FISCAL_DATE_KEY)
                .and_then(Value::as_str)
                .map(|date| (date, report))
        })
        .collect()
}
