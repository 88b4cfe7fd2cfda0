//! Indonesian market insights: static salary bands, tech cities, company
//! ecosystem, learning resources, success stories and government
//! programs, plus IDR formatting and a simplified PPh 21 tax calculator.
//!
//! Data is simulated for prototype demonstration purposes; production use
//! would integrate real market research (salary guides, job-board
//! reports).

pub mod data;
pub mod handlers;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBand {
    /// Monthly salary in IDR.
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSalaries {
    pub field: &'static str,
    pub entry_level: SalaryBand,
    pub mid_level: SalaryBand,
    pub senior_level: SalaryBand,
    pub expert_level: SalaryBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechCity {
    pub name: &'static str,
    pub companies: u32,
    pub avg_salary_multiplier: f64,
    pub remote_culture: &'static str,
    pub description: &'static str,
    /// Relative to Jakarta = 1.0.
    pub cost_of_living_index: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyTier {
    pub tier: &'static str,
    pub companies: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Bootcamp {
    pub name: &'static str,
    pub focus: &'static str,
    pub duration: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningResources {
    pub bootcamps: &'static [Bootcamp],
    pub universities: &'static [&'static str],
    pub communities: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessStory {
    pub name: &'static str,
    pub from_role: &'static str,
    pub to_role: &'static str,
    pub duration_months: u32,
    pub training: &'static str,
    pub salary_increase_pct: u32,
    pub story: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GovernmentProgram {
    pub name: &'static str,
    pub description: &'static str,
    pub focus: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<&'static str>,
    pub categories: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxBreakdown {
    pub annual_tax: f64,
    pub monthly_tax: f64,
    pub net_annual: f64,
    pub net_monthly: f64,
}

/// Formats an IDR amount the way the dashboard displays it:
/// billions as "Rp 1.2 M", millions as "Rp 15 juta", and smaller amounts
/// with dot thousands separators.
pub fn format_idr(amount: f64) -> String {
    if amount >= 1_000_000_000.0 {
        format!("Rp {:.1} M", amount / 1_000_000_000.0)
    } else if amount >= 1_000_000.0 {
        format!("Rp {:.0} juta", amount / 1_000_000.0)
    } else {
        format!("Rp {}", group_thousands(amount.round() as u64))
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Scales a salary band by a city's salary multiplier.
pub fn adjusted_salary(band: SalaryBand, city: &TechCity) -> SalaryBand {
    SalaryBand {
        min: (band.min as f64 * city.avg_salary_multiplier) as u64,
        max: (band.max as f64 * city.avg_salary_multiplier) as u64,
    }
}

/// Salary divided by the city's cost-of-living index (Jakarta = 1.0).
pub fn cost_of_living_ratio(salary: f64, city: &TechCity) -> f64 {
    salary / city.cost_of_living_index
}

/// Tax-free annual income threshold (PTKP), 2024 rates.
const PTKP: f64 = 54_000_000.0;

/// Simplified progressive PPh 21 calculation over annual gross salary.
/// Brackets (taxable income): 5% to 60M, 15% to 250M, 25% to 500M, 30%
/// above.
pub fn pph21(annual_salary: f64) -> TaxBreakdown {
    let taxable = (annual_salary - PTKP).max(0.0);

    let tax = if taxable <= 60_000_000.0 {
        taxable * 0.05
    } else if taxable <= 250_000_000.0 {
        60_000_000.0 * 0.05 + (taxable - 60_000_000.0) * 0.15
    } else if taxable <= 500_000_000.0 {
        60_000_000.0 * 0.05 + 190_000_000.0 * 0.15 + (taxable - 250_000_000.0) * 0.25
    } else {
        60_000_000.0 * 0.05
            + 190_000_000.0 * 0.15
            + 250_000_000.0 * 0.25
            + (taxable - 500_000_000.0) * 0.30
    };

    TaxBreakdown {
        annual_tax: tax,
        monthly_tax: tax / 12.0,
        net_annual: annual_salary - tax,
        net_monthly: (annual_salary - tax) / 12.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_idr_billions() {
        assert_eq!(format_idr(1_200_000_000.0), "Rp 1.2 M");
    }

    #[test]
    fn test_format_idr_millions() {
        assert_eq!(format_idr(15_000_000.0), "Rp 15 juta");
    }

    #[test]
    fn test_format_idr_thousands_separator() {
        assert_eq!(format_idr(950_000.0), "Rp 950.000");
        assert_eq!(format_idr(1_500.0), "Rp 1.500");
        assert_eq!(format_idr(999.0), "Rp 999");
    }

    #[test]
    fn test_pph21_below_ptkp_is_tax_free() {
        let breakdown = pph21(50_000_000.0);
        assert_eq!(breakdown.annual_tax, 0.0);
        assert_eq!(breakdown.net_annual, 50_000_000.0);
    }

    #[test]
    fn test_pph21_first_bracket() {
        // 100M gross - 54M PTKP = 46M taxable, all at 5%.
        let breakdown = pph21(100_000_000.0);
        assert!((breakdown.annual_tax - 2_300_000.0).abs() < 1.0);
    }

    #[test]
    fn test_pph21_second_bracket() {
        // 200M gross - 54M = 146M taxable: 60M @ 5% + 86M @ 15% = 15.9M.
        let breakdown = pph21(200_000_000.0);
        assert!((breakdown.annual_tax - 15_900_000.0).abs() < 1.0);
    }

    #[test]
    fn test_pph21_top_bracket() {
        // 600M gross - 54M = 546M taxable:
        // 3M + 28.5M + 62.5M + 46M * 0.30 = 107.8M.
        let breakdown = pph21(600_000_000.0);
        assert!((breakdown.annual_tax - 107_800_000.0).abs() < 1.0);
        assert!((breakdown.net_monthly - (600_000_000.0 - 107_800_000.0) / 12.0).abs() < 1.0);
    }

    #[test]
    fn test_adjusted_salary_applies_multiplier() {
        let bandung = data::find_city("Bandung").unwrap();
        let band = adjusted_salary(
            SalaryBand {
                min: 10_000_000,
                max: 20_000_000,
            },
            bandung,
        );
        assert_eq!(band.min, 8_000_000);
        assert_eq!(band.max, 16_000_000);
    }

    #[test]
    fn test_cost_of_living_ratio_favors_cheaper_cities() {
        let jakarta = data::find_city("Jakarta").unwrap();
        let yogyakarta = data::find_city("Yogyakarta").unwrap();
        assert!(
            cost_of_living_ratio(10_000_000.0, yogyakarta)
                > cost_of_living_ratio(10_000_000.0, jakarta)
        );
    }
}
