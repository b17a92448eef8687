//! NIFTY 50 reference dataset.
//!
//! Published free-float weights and sectors for the NIFTY 50 constituents,
//! with the index level and point moves used in the standard impact report.
//! Nothing here is read implicitly; pass [`constituents`] to
//! [`ConstituentRegistry::load`](crate::ConstituentRegistry::load).

use crate::types::ScenarioSet;

/// Index name.
pub const INDEX_NAME: &str = "NIFTY 50";

/// Reference index level.
pub const INDEX_LEVEL: f64 = 25509.7;

/// Standard point moves, rises first.
pub const SCENARIOS: [i64; 8] = [100, 200, 250, 500, -100, -200, -250, -500];

/// Constituent name used for the standard case study.
pub const CASE_STUDY_CONSTITUENT: &str = "INFOSYS";

const CONSTITUENTS: &[(&str, f64, &str)] = &[
    ("RELIANCE INDUSTRIES LTD", 9.91, "Energy/Refineries"),
    ("HDFC BANK LTD", 7.41, "Banking"),
    ("BHARTI AIRTEL LTD", 6.25, "Telecom"),
    ("TATA CONSULTANCY SERVICES LTD", 5.33, "IT"),
    ("ICICI BANK LTD", 4.62, "Banking"),
    ("STATE BANK OF INDIA", 4.34, "Banking"),
    ("BAJAJ FINANCE LTD", 3.17, "Finance - NBFC"),
    ("INFOSYS LTD", 2.98, "IT"),
    ("HINDUSTAN UNILEVER LTD", 2.80, "FMCG"),
    ("LARSEN & TOUBRO LTD", 2.61, "Construction/Engineering"),
    ("ITC LTD", 2.50, "FMCG"),
    ("MARUTI SUZUKI INDIA LTD", 2.38, "Automobile"),
    ("MAHINDRA & MAHINDRA LTD", 2.20, "Automobile"),
    ("KOTAK MAHINDRA BANK LTD", 2.03, "Banking"),
    ("HCL TECHNOLOGIES LTD", 2.03, "IT"),
    ("SUN PHARMACEUTICAL INDUSTRIES LTD", 1.98, "Pharma"),
    ("AXIS BANK LTD", 1.87, "Banking"),
    ("ULTRATECH CEMENT LTD", 1.72, "Cement"),
    ("TITAN COMPANY LTD", 1.64, "Consumer Durables"),
    ("BAJAJ FINSERV LTD", 1.61, "Finance"),
    ("NTPC LTD", 1.55, "Power"),
    ("OIL & NATURAL GAS CORPORATION LTD", 1.55, "Energy"),
    ("ADANI PORTS AND SEZ LTD", 1.52, "Infrastructure"),
    ("BHARAT ELECTRONICS LTD", 1.46, "Defence"),
    ("ZOMATO LTD", 1.44, "Services"),
    ("JSW STEEL LTD", 1.40, "Metals/Steel"),
    ("ADANI ENTERPRISES LTD", 1.31, "Conglomerate"),
    ("WIPRO LTD", 1.23, "IT"),
    ("POWER GRID CORPORATION OF INDIA LTD", 1.23, "Power"),
    ("ASIAN PAINTS LTD", 1.22, "Consumer Durables"),
    ("NESTLE INDIA LTD", 1.20, "FMCG"),
    ("BAJAJ AUTO LTD", 1.19, "Automobile"),
    ("COAL INDIA LTD", 1.13, "Mining"),
    ("TATA STEEL LTD", 1.08, "Metals/Steel"),
    ("INTERGLOBE AVIATION LTD", 1.08, "Aviation"),
    ("SBI LIFE INSURANCE COMPANY LTD", 0.97, "Insurance"),
    ("JIO FINANCIAL SERVICES LTD", 0.93, "Finance"),
    ("EICHER MOTORS LTD", 0.91, "Automobile"),
    ("GRASIM INDUSTRIES LTD", 0.90, "Diversified"),
    ("HINDALCO INDUSTRIES LTD", 0.87, "Metals/Aluminium"),
    ("TRENT LTD", 0.81, "Retail"),
    ("HDFC LIFE INSURANCE CO LTD", 0.78, "Insurance"),
    ("TATA MOTORS LTD", 0.73, "Automobile"),
    ("SHRIRAM FINANCE LTD", 0.73, "Finance - NBFC"),
    ("TECH MAHINDRA LTD", 0.68, "IT"),
    ("CIPLA LTD", 0.59, "Pharma"),
    ("TATA CONSUMER PRODUCTS LTD", 0.58, "FMCG"),
    ("APOLLO HOSPITALS ENTERPRISES LTD", 0.55, "Healthcare"),
    ("MAX HEALTHCARE INSTITUTE LTD", 0.54, "Healthcare"),
    ("DR REDDYS LABORATORIES LTD", 0.49, "Pharma"),
];

/// The 50 constituents as `(name, weight_pct, sector)`, largest weight first.
#[must_use]
pub fn constituents() -> &'static [(&'static str, f64, &'static str)] {
    CONSTITUENTS
}

/// The standard scenario set.
#[must_use]
pub fn default_scenarios() -> ScenarioSet {
    ScenarioSet::new(SCENARIOS)
}
