pub mod company;
pub mod report;
pub mod websearch;

pub use company::{CompanyDetail, CompanySearchResult, ContactInfo};
pub use report::{
    BusinessModel, CompanyBasicInfo, InvestmentReport, InvestmentSuggestion, MarketAnalysis,
    ProductAndTechnology, REQUIRED_SECTIONS, TeamInfo, parse_report_json,
};
pub use websearch::WebSearchResult;
