use super::{CUSTOM_COMPANIES_KEY, JsonBlob, KeyValueStore, new_id};
use crate::directory::seed_companies;
use crate::model::Company;
use crate::{Result, ScoutError};

/// Fields a user supplies when adding a company.
#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: String,
    pub url: String,
    pub industry: String,
    pub stage: String,
    pub location: String,
}

/// User-added companies, newest first, layered over the seed directory.
pub struct CompanyRepository<'a> {
    blob: JsonBlob<'a, Vec<Company>>,
}

impl<'a> CompanyRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { blob: JsonBlob::new(store, CUSTOM_COMPANIES_KEY) }
    }

    /// Adds a custom company.
    ///
    /// Name and URL are required; blank industry becomes `Other`, blank stage
    /// and location become `Unknown`.
    pub fn add(&self, input: NewCompany) -> Result<Company> {
        let name = input.name.trim();
        let url = input.url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(ScoutError::Validation("Name and URL are required".to_string()));
        }

        let company = Company {
            id: new_id("custom"),
            name: name.to_string(),
            url: url.to_string(),
            industry: or_default(&input.industry, "Other"),
            stage: or_default(&input.stage, "Unknown"),
            location: or_default(&input.location, "Unknown"),
        };
        self.blob.update(|custom| custom.insert(0, company.clone()))?;
        Ok(company)
    }

    pub fn custom(&self) -> Result<Vec<Company>> {
        self.blob.load()
    }

    /// Seed companies followed by custom ones.
    pub fn all(&self) -> Result<Vec<Company>> {
        let mut companies = seed_companies();
        companies.extend(self.custom()?);
        Ok(companies)
    }

    /// Looks up a company in the seed data first, then in custom companies.
    pub fn find(&self, id: &str) -> Result<Option<Company>> {
        if let Some(company) = seed_companies().into_iter().find(|c| c.id == id) {
            return Ok(Some(company));
        }
        Ok(self.custom()?.into_iter().find(|c| c.id == id))
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() { fallback.to_string() } else { value.to_string() }
}
