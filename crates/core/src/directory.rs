//! The company directory: seed data, search, filters, sorting and paging.
//!
//! # Example
//!
//! ```rust
//! use scout_core::directory::{DirectoryQuery, SortKey, SortState, seed_companies};
//!
//! let companies = seed_companies();
//! let query = DirectoryQuery { query: "pay".into(), ..Default::default() };
//! let sort = SortState::default().request(SortKey::Name);
//! let page = query.run(&companies, Some(sort), 1);
//! assert!(page.total <= companies.len());
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use crate::model::{Company, PendingSearch};

/// Filter value meaning "no filter".
pub const ALL: &str = "All";

/// Rows per directory page.
pub const ITEMS_PER_PAGE: usize = 10;

static SEED: LazyLock<Vec<Company>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/companies.json")).expect("bundled company seed data is valid")
});

/// The bundled seed directory.
pub fn seed_companies() -> Vec<Company> {
    SEED.clone()
}

/// Column a directory can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Industry,
    Stage,
    Location,
}

impl SortKey {
    fn field(self, company: &Company) -> &str {
        match self {
            SortKey::Name => &company.name,
            SortKey::Industry => &company.industry,
            SortKey::Stage => &company.stage,
            SortKey::Location => &company.location,
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "industry" => Ok(Self::Industry),
            "stage" => Ok(Self::Stage),
            "location" => Ok(Self::Location),
            _ => Err(format!("Invalid sort key: {}. Valid options: name, industry, stage, location", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Current sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Sort state driven by column clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState(pub Option<SortConfig>);

impl SortState {
    /// Sorting by the current ascending key flips to descending; anything
    /// else sorts ascending by `key`.
    pub fn request(self, key: SortKey) -> SortConfig {
        let direction = match self.0 {
            Some(SortConfig { key: current, direction: SortDirection::Ascending }) if current == key => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        SortConfig { key, direction }
    }
}

/// Search text plus industry and stage filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub query: String,
    pub industry: String,
    pub stage: String,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self { query: String::new(), industry: ALL.to_string(), stage: ALL.to_string() }
    }
}

impl DirectoryQuery {
    /// Overlays the non-empty fields of `pending`; empty fields keep the
    /// current value.
    pub fn apply(self, pending: PendingSearch) -> Self {
        let pick = |current: String, value: String| if value.is_empty() { current } else { value };
        Self {
            query: pick(self.query, pending.query),
            industry: pick(self.industry, pending.industry),
            stage: pick(self.stage, pending.stage),
        }
    }
}

impl From<PendingSearch> for DirectoryQuery {
    fn from(pending: PendingSearch) -> Self {
        Self::default().apply(pending)
    }
}

/// One page of directory results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPage {
    pub companies: Vec<Company>,
    /// 1-based page number actually shown.
    pub page: usize,
    pub total_pages: usize,
    /// Matching companies across all pages.
    pub total: usize,
    /// 1-based index of the first row, 0 when empty.
    pub from: usize,
    /// 1-based index of the last row, 0 when empty.
    pub to: usize,
}

impl DirectoryQuery {
    /// Whether `company` matches the query text and both filters.
    ///
    /// Text matches case-insensitively against name or industry.
    pub fn matches(&self, company: &Company) -> bool {
        let needle = self.query.to_lowercase();
        let matches_search =
            company.name.to_lowercase().contains(&needle) || company.industry.to_lowercase().contains(&needle);
        let matches_industry = self.industry == ALL || company.industry == self.industry;
        let matches_stage = self.stage == ALL || company.stage == self.stage;

        matches_search && matches_industry && matches_stage
    }

    pub fn filter(&self, companies: &[Company]) -> Vec<Company> {
        companies.iter().filter(|c| self.matches(c)).cloned().collect()
    }

    /// Filters, sorts and returns page `page` (1-based, clamped).
    pub fn run(&self, companies: &[Company], sort: Option<SortConfig>, page: usize) -> DirectoryPage {
        let mut matched = self.filter(companies);
        if let Some(sort) = sort {
            sort_companies(&mut matched, sort);
        }
        paginate(matched, page)
    }
}

/// Stable sort by one column.
pub fn sort_companies(companies: &mut [Company], sort: SortConfig) {
    companies.sort_by(|a, b| {
        let ordering = sort.key.field(a).cmp(sort.key.field(b));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn paginate(companies: Vec<Company>, page: usize) -> DirectoryPage {
    let total = companies.len();
    let total_pages = total.div_ceil(ITEMS_PER_PAGE);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page - 1) * ITEMS_PER_PAGE;
    let rows: Vec<Company> = companies.into_iter().skip(start).take(ITEMS_PER_PAGE).collect();

    let (from, to) = match rows.len() {
        0 => (0, 0),
        n => (start + 1, start + n),
    };

    DirectoryPage { companies: rows, page, total_pages, total, from, to }
}

/// `All` followed by the distinct industries in first-seen order.
pub fn industries(companies: &[Company]) -> Vec<String> {
    facet(companies, |c| &c.industry)
}

/// `All` followed by the distinct stages in first-seen order.
pub fn stages(companies: &[Company]) -> Vec<String> {
    facet(companies, |c| &c.stage)
}

fn facet(companies: &[Company], field: impl Fn(&Company) -> &String) -> Vec<String> {
    let mut values = vec![ALL.to_string()];
    for company in companies {
        let value = field(company);
        if !values[1..].iter().any(|v| v == value) {
            values.push(value.clone());
        }
    }
    values
}
