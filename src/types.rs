use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the leading column that carries the period labels in every table.
pub const PERIOD_COLUMN: &str = "Period";

/// The three statement tables a workbook is normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Statement {
    IncomeStatement,
    Assets,
    LiabilitiesEquity,
}

impl Statement {
    pub fn title(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "Income Statement",
            Self::Assets => "Balance Sheet - Assets",
            Self::LiabilitiesEquity => "Balance Sheet - Liabilities & Equity",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::IncomeStatement, Self::Assets, Self::LiabilitiesEquity]
    }

    /// Metrics of this statement, in report order
    pub fn metrics(&self) -> Vec<Metric> {
        Metric::all()
            .into_iter()
            .filter(|m| m.statement() == *self)
            .collect()
    }
}

/// Every line item read from the workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    // Income statement
    Revenue,
    #[serde(rename = "COGS")]
    Cogs,
    #[serde(rename = "Gross Profit")]
    GrossProfit,
    #[serde(rename = "SG&A")]
    SellingGeneralAdmin,
    Other,
    #[serde(rename = "EBITDA")]
    Ebitda,
    Depreciation,
    #[serde(rename = "EBIT")]
    Ebit,
    #[serde(rename = "Interest Expense")]
    InterestExpense,
    #[serde(rename = "Interest Income")]
    InterestIncome,
    #[serde(rename = "EBT")]
    Ebt,
    Taxes,
    #[serde(rename = "Net Income")]
    NetIncome,

    // Assets
    Cash,
    #[serde(rename = "Accounts Receivable")]
    AccountsReceivable,
    Inventory,
    #[serde(rename = "Current Assets")]
    CurrentAssets,
    #[serde(rename = "PP&E")]
    PropertyPlantEquipment,
    #[serde(rename = "Other Assets")]
    OtherAssets,
    #[serde(rename = "Total Assets")]
    TotalAssets,

    // Liabilities & equity
    #[serde(rename = "Accounts Payable")]
    AccountsPayable,
    #[serde(rename = "Current Liabilities")]
    CurrentLiabilities,
    #[serde(rename = "Long Term Debt")]
    LongTermDebt,
    #[serde(rename = "Total Liabilities")]
    TotalLiabilities,
    #[serde(rename = "Common Equity")]
    CommonEquity,
    #[serde(rename = "Retained Earnings")]
    RetainedEarnings,
    #[serde(rename = "Total Equity")]
    TotalEquity,
    #[serde(rename = "Total Liab & Equity")]
    TotalLiabilitiesEquity,
}

impl Metric {
    /// Column name used in the statement tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Cogs => "COGS",
            Self::GrossProfit => "Gross Profit",
            Self::SellingGeneralAdmin => "SG&A",
            Self::Other => "Other",
            Self::Ebitda => "EBITDA",
            Self::Depreciation => "Depreciation",
            Self::Ebit => "EBIT",
            Self::InterestExpense => "Interest Expense",
            Self::InterestIncome => "Interest Income",
            Self::Ebt => "EBT",
            Self::Taxes => "Taxes",
            Self::NetIncome => "Net Income",
            Self::Cash => "Cash",
            Self::AccountsReceivable => "Accounts Receivable",
            Self::Inventory => "Inventory",
            Self::CurrentAssets => "Current Assets",
            Self::PropertyPlantEquipment => "PP&E",
            Self::OtherAssets => "Other Assets",
            Self::TotalAssets => "Total Assets",
            Self::AccountsPayable => "Accounts Payable",
            Self::CurrentLiabilities => "Current Liabilities",
            Self::LongTermDebt => "Long Term Debt",
            Self::TotalLiabilities => "Total Liabilities",
            Self::CommonEquity => "Common Equity",
            Self::RetainedEarnings => "Retained Earnings",
            Self::TotalEquity => "Total Equity",
            Self::TotalLiabilitiesEquity => "Total Liab & Equity",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Revenue,
            Self::Cogs,
            Self::GrossProfit,
            Self::SellingGeneralAdmin,
            Self::Other,
            Self::Ebitda,
            Self::Depreciation,
            Self::Ebit,
            Self::InterestExpense,
            Self::InterestIncome,
            Self::Ebt,
            Self::Taxes,
            Self::NetIncome,
            Self::Cash,
            Self::AccountsReceivable,
            Self::Inventory,
            Self::CurrentAssets,
            Self::PropertyPlantEquipment,
            Self::OtherAssets,
            Self::TotalAssets,
            Self::AccountsPayable,
            Self::CurrentLiabilities,
            Self::LongTermDebt,
            Self::TotalLiabilities,
            Self::CommonEquity,
            Self::RetainedEarnings,
            Self::TotalEquity,
            Self::TotalLiabilitiesEquity,
        ]
    }

    pub fn statement(&self) -> Statement {
        match self {
            Self::Revenue
            | Self::Cogs
            | Self::GrossProfit
            | Self::SellingGeneralAdmin
            | Self::Other
            | Self::Ebitda
            | Self::Depreciation
            | Self::Ebit
            | Self::InterestExpense
            | Self::InterestIncome
            | Self::Ebt
            | Self::Taxes
            | Self::NetIncome => Statement::IncomeStatement,
            Self::Cash
            | Self::AccountsReceivable
            | Self::Inventory
            | Self::CurrentAssets
            | Self::PropertyPlantEquipment
            | Self::OtherAssets
            | Self::TotalAssets => Statement::Assets,
            Self::AccountsPayable
            | Self::CurrentLiabilities
            | Self::LongTermDebt
            | Self::TotalLiabilities
            | Self::CommonEquity
            | Self::RetainedEarnings
            | Self::TotalEquity
            | Self::TotalLiabilitiesEquity => Statement::LiabilitiesEquity,
        }
    }

    /// Zero-based sheet row of this line item in the retailer workbook
    pub fn default_row(&self) -> u32 {
        match self {
            Self::Revenue => 7,
            Self::Cogs => 8,
            Self::GrossProfit => 9,
            Self::SellingGeneralAdmin => 12,
            Self::Other => 13,
            Self::Ebitda => 14,
            Self::Depreciation => 17,
            Self::Ebit => 18,
            Self::InterestExpense => 21,
            Self::InterestIncome => 22,
            Self::Ebt => 23,
            Self::Taxes => 26,
            Self::NetIncome => 29,
            Self::Cash => 75,
            Self::AccountsReceivable => 76,
            Self::Inventory => 77,
            Self::CurrentAssets => 78,
            Self::PropertyPlantEquipment => 80,
            Self::OtherAssets => 81,
            Self::TotalAssets => 83,
            Self::AccountsPayable => 88,
            Self::CurrentLiabilities => 90,
            Self::LongTermDebt => 92,
            Self::TotalLiabilities => 93,
            Self::CommonEquity => 98,
            Self::RetainedEarnings => 99,
            Self::TotalEquity => 100,
            Self::TotalLiabilitiesEquity => 103,
        }
    }

    /// Row labels this line item commonly carries in a statement sheet (lowercase)
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Revenue => vec!["revenue", "revenues", "sales", "net sales", "total revenue"],
            Self::Cogs => vec!["cogs", "cost of goods sold", "cost of sales"],
            Self::GrossProfit => vec!["gross profit", "gross margin"],
            Self::SellingGeneralAdmin => vec![
                "sg&a",
                "sga",
                "selling, general & administrative",
                "selling, general and administrative",
            ],
            Self::Other => vec!["other", "other expense", "other expenses", "other income"],
            Self::Ebitda => vec!["ebitda"],
            Self::Depreciation => vec!["depreciation", "depreciation & amortization", "d&a"],
            Self::Ebit => vec!["ebit", "operating income"],
            Self::InterestExpense => vec!["interest expense", "interest"],
            Self::InterestIncome => vec!["interest income"],
            Self::Ebt => vec!["ebt", "pre-tax income", "income before taxes"],
            Self::Taxes => vec!["taxes", "tax", "income taxes", "tax expense"],
            Self::NetIncome => vec!["net income", "net earnings", "net profit"],
            Self::Cash => vec!["cash", "cash & equivalents", "cash and equivalents"],
            Self::AccountsReceivable => vec!["accounts receivable", "receivables", "a/r"],
            Self::Inventory => vec!["inventory", "inventories"],
            Self::CurrentAssets => vec!["current assets", "total current assets"],
            Self::PropertyPlantEquipment => vec!["pp&e", "property, plant & equipment", "net pp&e"],
            Self::OtherAssets => vec!["other assets"],
            Self::TotalAssets => vec!["total assets"],
            Self::AccountsPayable => vec!["accounts payable", "payables", "a/p"],
            Self::CurrentLiabilities => {
                vec!["current liabilities", "total current liabilities"]
            }
            Self::LongTermDebt => vec!["long term debt", "long-term debt"],
            Self::TotalLiabilities => vec!["total liabilities"],
            Self::CommonEquity => vec!["common equity", "common stock"],
            Self::RetainedEarnings => vec!["retained earnings"],
            Self::TotalEquity => vec!["total equity", "shareholders' equity", "total shareholders' equity"],
            Self::TotalLiabilitiesEquity => vec![
                "total liab & equity",
                "total liabilities & equity",
                "total liabilities and equity",
            ],
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
