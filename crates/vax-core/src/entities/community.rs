//! Community statistics and news
//!
//! Static figures shown on the community dashboard.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoverageSummary {
    /// Percentage of the population fully vaccinated
    pub rate: u32,
    pub population: u64,
}

impl CoverageSummary {
    /// Number of vaccinated people implied by `rate`
    pub fn vaccinated(&self) -> u64 {
        self.population * u64::from(self.rate) / 100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeGroupCoverage {
    pub group: &'static str,
    pub rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: &'static str,
    pub source: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    pub link: &'static str,
}

pub const OVERALL_COVERAGE: CoverageSummary = CoverageSummary {
    rate: 78,
    population: 1_350_482,
};

pub static AGE_GROUP_COVERAGE: &[AgeGroupCoverage] = &[
    AgeGroupCoverage { group: "0-17", rate: 65 },
    AgeGroupCoverage { group: "18-49", rate: 75 },
    AgeGroupCoverage { group: "50-64", rate: 85 },
    AgeGroupCoverage { group: "65+", rate: 92 },
];

pub static COMMUNITY_ARTICLES: &[Article] = &[
    Article {
        title: "Four countries in WHO\u{2019}s Western Pacific Region eliminate rubella",
        source: "World Health Organization",
        date: "May 15, 2024",
        excerpt: "Brunei Darussalam, Hong Kong SAR (China), Macao SAR (China) and the Republic of Korea have eliminated rubella, a contagious viral infection that can have devastating consequences for pregnant women and their babies.",
        link: "https://www.who.int/news/item/15-05-2024-four-countries-in-who-s-western-pacific-region-eliminate-rubella",
    },
    Article {
        title: "Getting a Flu Vaccine in the 2023-2024 Season",
        source: "Centers for Disease Control (CDC)",
        date: "May 10, 2024",
        excerpt: "An annual flu vaccine is recommended for everyone 6 months and older. The CDC provides the latest information and recommendations for the current flu season.",
        link: "https://www.cdc.gov/flu/prevent/vaccinations.htm",
    },
    Article {
        title: "Five things you need to know about the HPV vaccine",
        source: "Gavi, the Vaccine Alliance",
        date: "April 29, 2024",
        excerpt: "The HPV vaccine is a critical tool in the fight against cervical cancer, which is the fourth most common cancer in women. Learn key facts about its safety and efficacy.",
        link: "https://www.gavi.org/vaccineswork/five-things-you-need-know-about-hpv-vaccine",
    },
    Article {
        title: "Childhood vaccination starts to recover from COVID-19 backsliding",
        source: "UNICEF",
        date: "July 18, 2023",
        excerpt: "Global immunization services reached 4 million more children in 2022 compared to the previous year, as countries step up their efforts to address the historic backsliding in vaccination.",
        link: "https://www.unicef.org/press-releases/childhood-vaccination-starts-recover-covid-19-backsliding",
    },
];
