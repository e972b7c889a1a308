#[cfg(feature = "fetch")]
pub mod client;
pub mod directory;
#[cfg(feature = "fetch")]
pub mod enrich;
pub mod error;
pub mod export;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
#[cfg(feature = "fetch")]
pub mod llm;
pub mod model;
pub mod normalize;
pub mod prompt;
pub mod store;

#[cfg(feature = "fetch")]
pub use client::{EndpointClient, EnrichRequest, ErrorBody};
pub use directory::{
    ALL, DirectoryPage, DirectoryQuery, ITEMS_PER_PAGE, SortConfig, SortDirection, SortKey, SortState, industries,
    seed_companies, sort_companies, stages,
};
#[cfg(feature = "fetch")]
pub use enrich::Enricher;
pub use error::{Result, ScoutError};
pub use export::{ExportFormat, export_filename, to_csv, to_json};
pub use extract::{ExtractConfig, MAX_TEXT_CHARS, extract_text};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url};
#[cfg(feature = "fetch")]
pub use llm::{GeminiClient, LlmConfig, LlmProvider};
pub use model::{Company, CompanyList, EnrichmentData, PendingSearch, SavedSearch, Source, Theme};
pub use normalize::{EnrichmentField, NO_SUMMARY, Normalized, normalize_response, strip_code_fence};
pub use prompt::build_prompt;
pub use store::{
    CompanyRepository, EnrichmentCache, FileStore, KeyValueStore, ListsRepository, MemoryStore, NewCompany,
    NotesRepository, PendingSearchSlot, SavedSearchRepository, ThemeRepository, resolve_companies,
};
