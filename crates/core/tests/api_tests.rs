//! Library API integration tests
use scout_core::*;
use tempfile::TempDir;

fn get_fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

struct CannedProvider(&'static str);

impl LlmProvider for CannedProvider {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

#[test]
fn test_extract_fixture_site() {
    let html = std::fs::read_to_string(get_fixture_path("company_site.html")).unwrap();
    let text = extract_text(&html, &ExtractConfig::default());

    assert!(text.starts_with("Home Careers Robots that pick, pack and ship"));
    assert!(text.contains("Fleet orchestration software"));
    assert!(!text.contains("dataLayer"));
    assert!(!text.contains("font-family"));
    assert!(!text.contains('<'));
    assert!(!text.contains("  "));
}

#[test]
fn test_extract_respects_limit() {
    let html = std::fs::read_to_string(get_fixture_path("company_site.html")).unwrap();
    let config = ExtractConfig { max_chars: 40, ..Default::default() };
    assert_eq!(extract_text(&html, &config).chars().count(), 40);
}

#[test]
fn test_prompt_embeds_fixture_text() {
    let html = std::fs::read_to_string(get_fixture_path("company_site.html")).unwrap();
    let text = extract_text(&html, &ExtractConfig::default());
    let prompt = build_prompt("https://acme-robotics.io", &text);

    assert!(prompt.contains("https://acme-robotics.io"));
    assert!(prompt.contains("Vision-guided picking arms"));
}

#[tokio::test]
async fn test_enrich_fixture_with_canned_provider() {
    let html = std::fs::read_to_string(get_fixture_path("company_site.html")).unwrap();
    let enricher = Enricher::new(CannedProvider(
        "```json\n{\"summary\":\"Warehouse robots.\",\"whatTheyDo\":[\"Builds AMRs\"],\"keywords\":[\"robotics\",\"logistics\"],\"derivedSignals\":[\"Hiring engineers\"]}\n```",
    ));

    let normalized = enricher.enrich_html("https://acme-robotics.io", &html).await.unwrap();
    assert!(normalized.is_complete());
    assert_eq!(normalized.data.summary, "Warehouse robots.");
    assert_eq!(normalized.data.keywords, vec!["robotics", "logistics"]);
    assert_eq!(normalized.data.sources[0].url, "https://acme-robotics.io");
}

#[test]
fn test_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();

    {
        let store = FileStore::new(dir.path());
        NotesRepository::new(&store).put("stripe", "Met the founders").unwrap();
        ThemeRepository::new(&store).set(Theme::Light).unwrap();
    }

    let store = FileStore::new(dir.path());
    assert_eq!(NotesRepository::new(&store).get("stripe").unwrap().as_deref(), Some("Met the founders"));
    assert_eq!(ThemeRepository::new(&store).get().unwrap(), Theme::Light);
}

#[test]
fn test_list_workflow_and_export() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    let companies = CompanyRepository::new(&store);
    let lists = ListsRepository::new(&store);

    let custom = companies
        .add(NewCompany { name: "Acme Robotics".into(), url: "https://acme-robotics.io".into(), ..Default::default() })
        .unwrap();

    let list_id = lists.create("Q3 Pipeline", Some("stripe")).unwrap();
    assert!(lists.add_company(&list_id, &custom.id).unwrap());
    assert!(!lists.add_company(&list_id, "stripe").unwrap());
    assert!(lists.add_company(&list_id, "deleted_company").unwrap());

    let list = lists.get(&list_id).unwrap().unwrap();
    let resolved = resolve_companies(&list, &companies.all().unwrap());
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].id, "stripe");

    let csv = to_csv(&resolved).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains("\"Acme Robotics\",\"Other\",\"Unknown\",\"Unknown\",\"https://acme-robotics.io\""));
    assert_eq!(export_filename(&list.name, ExportFormat::Csv), "Q3_Pipeline_export.csv");
}

#[test]
fn test_saved_search_round_trip_through_directory() {
    let store = MemoryStore::new();
    let searches = SavedSearchRepository::new(&store);
    let slot = PendingSearchSlot::new(&store);

    let saved = searches.save("", "Fintech", "").unwrap();
    searches.rerun(&saved.id, &slot).unwrap();

    let query = DirectoryQuery::from(slot.take().unwrap().unwrap());
    assert_eq!(slot.take().unwrap(), None);

    let page = query.run(&seed_companies(), Some(SortState::default().request(SortKey::Name)), 1);
    assert!(page.total > 0);
    assert!(page.companies.iter().all(|c| c.industry == "Fintech"));
    let names: Vec<&str> = page.companies.iter().map(|c| c.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_enrichment_cache_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    let cache = EnrichmentCache::new(&store);

    let data = normalize_response(r#"{"summary":"Payments."}"#, "https://stripe.com").unwrap().data;
    cache.put("https://stripe.com", &data).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("vc_enrichment.json")).unwrap();
    assert!(raw.contains("\"whatTheyDo\":[]"));
    assert_eq!(cache.get("https://stripe.com").unwrap(), Some(data));
}
