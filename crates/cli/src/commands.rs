use std::fs;

use anyhow::{Context, bail};
use owo_colors::OwoColorize;
use scout_core::{
    Company, CompanyRepository, DirectoryQuery, EndpointClient, EnrichmentCache, EnrichmentData, Enricher, FetchConfig,
    FileStore, GeminiClient, KeyValueStore, LlmConfig, ListsRepository, NewCompany, NotesRepository,
    PendingSearchSlot, SavedSearchRepository, ScoutError, SortConfig, SortState, ThemeRepository, export_filename,
    resolve_companies,
};

use crate::echo;
use crate::{Args, Command, CompaniesCommand, ListsCommand, NoteCommand, SearchesCommand, ThemeCommand};

pub async fn run(args: Args) -> anyhow::Result<()> {
    let store = match args.data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::default_location().context("Failed to locate a data directory")?,
    };

    if args.verbose {
        eprintln!("  {} {}", "Data:".dimmed(), store.dir().display().bright_white());
        eprintln!();
    }

    match args.command {
        Command::Companies(cmd) => companies(&store, cmd),
        Command::Enrich { id, server, timeout } => enrich(&store, &id, server.as_deref(), timeout, args.verbose).await,
        Command::Note(cmd) => note(&store, cmd),
        Command::Lists(cmd) => lists(&store, cmd),
        Command::Searches(cmd) => searches(&store, cmd),
        Command::Theme(cmd) => theme(&store, cmd),
    }
}

fn not_found(kind: &'static str, id: &str) -> ScoutError {
    ScoutError::NotFound { kind, id: id.to_string() }
}

fn companies(store: &dyn KeyValueStore, cmd: CompaniesCommand) -> anyhow::Result<()> {
    let repo = CompanyRepository::new(store);

    match cmd {
        CompaniesCommand::List { query, industry, stage, sort, desc, page } => {
            let mut query = DirectoryQuery { query, industry, stage };
            if let Some(pending) = PendingSearchSlot::new(store).take()? {
                echo::print_info("Applied saved search over the given filters");
                query = query.apply(pending);
            }

            // --desc is a second request on the same column.
            let sort = sort.map(|key| {
                let ascending = SortState::default().request(key);
                if desc { SortState(Some(ascending)).request(key) } else { ascending }
            });

            print_directory(&repo.all()?, &query, sort, page);
        }
        CompaniesCommand::Add { name, url, industry, stage, location } => {
            let company = repo.add(NewCompany { name, url, industry, stage, location })?;
            echo::print_success(&format!("Added {} ({})", company.name, company.id));
            println!("{}", company.id);
        }
        CompaniesCommand::Show { id } => {
            let company = repo.find(&id)?.ok_or_else(|| not_found("company", &id))?;

            echo::print_heading(&company.name);
            echo::print_field("ID", &company.id);
            echo::print_field("URL", &company.url);
            echo::print_field("Industry", &company.industry);
            echo::print_field("Stage", &company.stage);
            echo::print_field("Location", &company.location);

            echo::print_heading("Notes");
            match NotesRepository::new(store).get(&company.id)? {
                Some(note) => println!("  {}", note),
                None => println!("  {}", "No notes yet".dimmed()),
            }

            let lists = ListsRepository::new(store).containing(&company.id)?;
            echo::print_heading("Lists");
            if lists.is_empty() {
                println!("  {}", "Not in any list".dimmed());
            }
            for (list_id, list) in lists {
                println!("  {} {}", list.name, format!("({})", list_id).dimmed());
            }

            match EnrichmentCache::new(store).get(&company.url)? {
                Some(data) => echo::print_enrichment(&data),
                None => echo::print_info(&format!("Not enriched yet; run `scout enrich {}`", company.id)),
            }
        }
    }

    Ok(())
}

fn print_directory(companies: &[Company], query: &DirectoryQuery, sort: Option<SortConfig>, page: usize) {
    let page = query.run(companies, sort, page);
    if page.total == 0 {
        echo::print_warning("No companies found matching your criteria");
        return;
    }

    echo::print_companies(&page.companies);
    println!(
        "\nShowing {} to {} of {} results (page {} of {})",
        page.from, page.to, page.total, page.page, page.total_pages
    );
}

async fn enrich(
    store: &dyn KeyValueStore, id: &str, server: Option<&str>, timeout: u64, verbose: bool,
) -> anyhow::Result<()> {
    let company = CompanyRepository::new(store)
        .find(id)?
        .ok_or_else(|| not_found("company", id))?;

    if verbose {
        echo::print_step(1, 2, &format!("Enriching {}", company.url.bright_white().underline()));
    }

    let data: EnrichmentData = match server {
        Some(base) => {
            let client = EndpointClient::new(base).context("Invalid server URL")?;
            client.enrich(&company.url).await.context("Enrichment failed")?
        }
        None => {
            let config = LlmConfig::from_env()?;
            let fetch = FetchConfig { timeout, ..Default::default() };
            let enricher = Enricher::new(GeminiClient::new(config)).with_fetch_config(fetch);
            enricher
                .enrich(&company.url)
                .await
                .with_context(|| format!("Failed to enrich {}", company.url))?
        }
    };

    if verbose {
        echo::print_step(2, 2, "Caching result");
    }
    EnrichmentCache::new(store).put(&company.url, &data)?;

    echo::print_enrichment(&data);
    echo::print_success(&format!("Enriched {}", company.name));
    Ok(())
}

fn note(store: &dyn KeyValueStore, cmd: NoteCommand) -> anyhow::Result<()> {
    let notes = NotesRepository::new(store);

    match cmd {
        NoteCommand::Show { id } => match notes.get(&id)? {
            Some(text) => println!("{}", text),
            None => echo::print_info(&format!("No note for {}", id)),
        },
        NoteCommand::Set { id, text } => {
            notes.put(&id, &text)?;
            echo::print_success(&format!("Note saved for {}", id));
        }
        NoteCommand::Delete { id } => {
            if notes.delete(&id)? {
                echo::print_success(&format!("Note deleted for {}", id));
            } else {
                echo::print_info(&format!("No note for {}", id));
            }
        }
    }

    Ok(())
}

fn lists(store: &dyn KeyValueStore, cmd: ListsCommand) -> anyhow::Result<()> {
    let lists = ListsRepository::new(store);
    let companies = CompanyRepository::new(store);

    match cmd {
        ListsCommand::List => {
            let all = lists.all()?;
            if all.is_empty() {
                echo::print_info("No lists yet");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = all
                .iter()
                .map(|(id, list)| vec![id.clone(), list.name.clone(), list.companies.len().to_string()])
                .collect();
            echo::print_table(&["ID", "NAME", "COMPANIES"], &rows);
        }
        ListsCommand::Show { id } => {
            let list = lists.get(&id)?.ok_or_else(|| not_found("list", &id))?;
            let resolved = resolve_companies(&list, &companies.all()?);
            echo::print_heading(&list.name);
            if resolved.is_empty() {
                echo::print_info("This list is empty");
            } else {
                echo::print_companies(&resolved);
            }
        }
        ListsCommand::Create { name, company } => {
            if let Some(company_id) = &company {
                companies.find(company_id)?.ok_or_else(|| not_found("company", company_id))?;
            }
            let id = lists.create(&name, company.as_deref())?;
            echo::print_success(&format!("Created list {}", name.trim()));
            println!("{}", id);
        }
        ListsCommand::Add { list_id, company_id } => {
            let company = companies.find(&company_id)?.ok_or_else(|| not_found("company", &company_id))?;
            if lists.add_company(&list_id, &company.id)? {
                echo::print_success(&format!("Added {} to list", company.name));
            } else {
                echo::print_info(&format!("{} is already in this list", company.name));
            }
        }
        ListsCommand::Remove { list_id, company_id } => {
            if lists.remove_company(&list_id, &company_id)? {
                echo::print_success(&format!("Removed {} from list", company_id));
            } else {
                echo::print_info(&format!("{} is not in this list", company_id));
            }
        }
        ListsCommand::Delete { id } => {
            let list = lists.delete(&id)?;
            echo::print_success(&format!("Deleted list {}", list.name));
        }
        ListsCommand::Export { id, format, output } => {
            let list = lists.get(&id)?.ok_or_else(|| not_found("list", &id))?;
            let resolved = resolve_companies(&list, &companies.all()?);
            let content = format.render(&resolved)?;
            let path = output.unwrap_or_else(|| export_filename(&list.name, format).into());

            fs::write(&path, &content).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!(
                "Exported {} companies to {} ({}, {})",
                resolved.len(),
                path.display().bright_white(),
                format.mime_type(),
                echo::format_size(content.len())
            ));
        }
    }

    Ok(())
}

fn searches(store: &dyn KeyValueStore, cmd: SearchesCommand) -> anyhow::Result<()> {
    let searches = SavedSearchRepository::new(store);

    match cmd {
        SearchesCommand::List => {
            let all = searches.all()?;
            if all.is_empty() {
                echo::print_info("No saved searches yet");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = all
                .iter()
                .map(|s| {
                    let query = if s.query.is_empty() { "(any)".to_string() } else { format!("\"{}\"", s.query) };
                    vec![s.id.clone(), query, s.industry.clone(), s.stage.clone(), s.timestamp.date().to_string()]
                })
                .collect();
            echo::print_table(&["ID", "QUERY", "INDUSTRY", "STAGE", "SAVED"], &rows);
        }
        SearchesCommand::Save { query, industry, stage } => {
            let saved = searches.save(&query, &industry, &stage)?;
            echo::print_success("Search saved");
            println!("{}", saved.id);
        }
        SearchesCommand::Delete { id } => {
            if !searches.delete(&id)? {
                bail!(not_found("saved search", &id));
            }
            echo::print_success("Search deleted");
        }
        SearchesCommand::Run { id } => {
            let pending = searches.rerun(&id, &PendingSearchSlot::new(store))?;
            let query = DirectoryQuery::from(pending);
            print_directory(&CompanyRepository::new(store).all()?, &query, None, 1);
            echo::print_info("Search applied; the next `scout companies list` starts from it");
        }
    }

    Ok(())
}

fn theme(store: &dyn KeyValueStore, cmd: ThemeCommand) -> anyhow::Result<()> {
    let themes = ThemeRepository::new(store);

    let current = match cmd {
        ThemeCommand::Show => themes.get()?,
        ThemeCommand::Set { theme } => {
            themes.set(theme)?;
            theme
        }
        ThemeCommand::Toggle => themes.toggle()?,
    };
    println!("{}", current.as_str());
    Ok(())
}
