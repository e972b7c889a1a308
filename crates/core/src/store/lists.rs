use std::collections::BTreeMap;

use super::{JsonBlob, KeyValueStore, LISTS_KEY, new_id};
use crate::model::{Company, CompanyList};
use crate::{Result, ScoutError};

/// User-curated company lists keyed by list id.
///
/// Ids are creation-ordered, so iteration order is creation order.
pub struct ListsRepository<'a> {
    blob: JsonBlob<'a, BTreeMap<String, CompanyList>>,
}

impl<'a> ListsRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { blob: JsonBlob::new(store, LISTS_KEY) }
    }

    /// Creates a list, optionally seeded with one company, and returns its id.
    pub fn create(&self, name: &str, first_company: Option<&str>) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScoutError::Validation("List name is required".to_string()));
        }

        let id = new_id("list");
        let list = CompanyList {
            name: name.to_string(),
            companies: first_company.map(|c| vec![c.to_string()]).unwrap_or_default(),
        };
        self.blob.update(|lists| {
            lists.insert(id.clone(), list);
        })?;
        Ok(id)
    }

    pub fn get(&self, list_id: &str) -> Result<Option<CompanyList>> {
        Ok(self.blob.load()?.remove(list_id))
    }

    pub fn all(&self) -> Result<BTreeMap<String, CompanyList>> {
        self.blob.load()
    }

    /// Removes the list and returns it.
    pub fn delete(&self, list_id: &str) -> Result<CompanyList> {
        self.blob
            .update(|lists| lists.remove(list_id))?
            .ok_or_else(|| not_found(list_id))
    }

    /// Appends `company_id` unless the list already holds it.
    ///
    /// Returns `true` if the company was added.
    pub fn add_company(&self, list_id: &str, company_id: &str) -> Result<bool> {
        self.blob.update(|lists| -> Result<bool> {
            let list = lists.get_mut(list_id).ok_or_else(|| not_found(list_id))?;
            if list.companies.iter().any(|c| c == company_id) {
                return Ok(false);
            }
            list.companies.push(company_id.to_string());
            Ok(true)
        })?
    }

    /// Returns `true` if the company was present.
    pub fn remove_company(&self, list_id: &str, company_id: &str) -> Result<bool> {
        self.blob.update(|lists| -> Result<bool> {
            let list = lists.get_mut(list_id).ok_or_else(|| not_found(list_id))?;
            let before = list.companies.len();
            list.companies.retain(|c| c != company_id);
            Ok(list.companies.len() != before)
        })?
    }

    /// Lists that reference `company_id`.
    pub fn containing(&self, company_id: &str) -> Result<Vec<(String, CompanyList)>> {
        Ok(self
            .blob
            .load()?
            .into_iter()
            .filter(|(_, list)| list.companies.iter().any(|c| c == company_id))
            .collect())
    }
}

/// Resolves a list's ids against `companies`, in list order.
///
/// Ids that no longer resolve are skipped, not repaired.
pub fn resolve_companies(list: &CompanyList, companies: &[Company]) -> Vec<Company> {
    list.companies
        .iter()
        .filter_map(|id| companies.iter().find(|c| &c.id == id).cloned())
        .collect()
}

fn not_found(list_id: &str) -> ScoutError {
    ScoutError::NotFound { kind: "list", id: list_id.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn company(id: &str) -> Company {
        Company {
            id: id.to_string(),
            name: id.to_uppercase(),
            url: format!("https://{id}.com"),
            industry: "Fintech".to_string(),
            stage: "Seed".to_string(),
            location: "Remote".to_string(),
        }
    }

    #[test]
    fn test_adding_twice_keeps_one_entry() {
        let store = MemoryStore::new();
        let lists = ListsRepository::new(&store);
        let id = lists.create("Fintech watch", None).unwrap();

        assert!(lists.add_company(&id, "stripe").unwrap());
        assert!(!lists.add_company(&id, "stripe").unwrap());

        let list = lists.get(&id).unwrap().unwrap();
        assert_eq!(list.companies, vec!["stripe"]);
    }

    #[test]
    fn test_create_with_first_company_and_trimmed_name() {
        let store = MemoryStore::new();
        let lists = ListsRepository::new(&store);
        let id = lists.create("  Top picks ", Some("plaid")).unwrap();
        let list = lists.get(&id).unwrap().unwrap();
        assert_eq!(list.name, "Top picks");
        assert_eq!(list.companies, vec!["plaid"]);
    }

    #[test]
    fn test_blank_name_rejected() {
        let store = MemoryStore::new();
        let lists = ListsRepository::new(&store);
        assert!(matches!(lists.create("   ", None), Err(ScoutError::Validation(_))));
        assert!(lists.all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_list_is_not_found() {
        let store = MemoryStore::new();
        let lists = ListsRepository::new(&store);
        assert!(matches!(lists.add_company("list_x", "a"), Err(ScoutError::NotFound { .. })));
        assert!(matches!(lists.delete("list_x"), Err(ScoutError::NotFound { .. })));
    }

    #[test]
    fn test_remove_delete_and_containing() {
        let store = MemoryStore::new();
        let lists = ListsRepository::new(&store);
        let a = lists.create("A", Some("x")).unwrap();
        let b = lists.create("B", Some("y")).unwrap();
        lists.add_company(&b, "x").unwrap();

        let holding: Vec<String> = lists.containing("x").unwrap().into_iter().map(|(id, _)| id).collect();
        assert_eq!(holding, vec![a.clone(), b.clone()]);

        assert!(lists.remove_company(&b, "x").unwrap());
        assert!(!lists.remove_company(&b, "x").unwrap());

        let deleted = lists.delete(&a).unwrap();
        assert_eq!(deleted.name, "A");
        assert!(lists.containing("x").unwrap().is_empty());
        assert_eq!(lists.all().unwrap().len(), 1);
    }

    #[test]
    fn test_resolve_skips_dangling_ids() {
        let list = CompanyList { name: "L".to_string(), companies: vec!["b".into(), "gone".into(), "a".into()] };
        let resolved = resolve_companies(&list, &[company("a"), company("b")]);
        let ids: Vec<&str> = resolved.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
