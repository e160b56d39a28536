//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::pagination::{PageEvent, PaginationController, VisibleRange};
use crate::source::PeopleSource;
use crate::types::{PeopleResponse, Person};
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tracing::{debug, info};

type PeopleController = PaginationController<PeopleSource>;
type PeopleEvents = mpsc::UnboundedReceiver<PageEvent<Person>>;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.app_config()?;
        match &self.cli.command {
            Commands::Page { page } => self.page(&config, *page).await,
            Commands::Browse {
                max_pages,
                scroll_threshold,
            } => {
                let mut config = config;
                if let Some(threshold) = scroll_threshold {
                    config.scroll_threshold = *threshold;
                }
                self.browse(&config, *max_pages).await
            }
            Commands::Detail { index } => self.detail(&config, *index).await,
        }
    }

    /// Resolve configuration: file (if any), then command-line overrides
    fn app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.cli.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        config.validate()?;
        debug!("Using API at {}", config.base_url);
        Ok(config)
    }

    /// Fetch and print a single page
    async fn page(&self, config: &AppConfig, page: u32) -> Result<()> {
        let source = config.people_source()?;
        let response = source.fetch_response(page).await?;
        self.print_page(page, &response)
    }

    /// Load pages as an infinite-scroll list would, printing each event
    async fn browse(&self, config: &AppConfig, max_pages: Option<u32>) -> Result<()> {
        let (mut controller, mut events) = new_controller(config)?;
        let pages = scroll_until(
            &mut controller,
            &mut events,
            |event| self.print_event(event),
            |_, pages| reached_page_limit(max_pages, pages),
        )
        .await?;

        let total = controller.items().len();
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", json!({"event": "done", "pages": pages, "total": total}));
            }
            OutputFormat::Pretty => println!("Loaded {total} people across {pages} page(s)"),
        }
        Ok(())
    }

    /// Load pages until `index` is available, then print that person
    async fn detail(&self, config: &AppConfig, index: usize) -> Result<()> {
        let (mut controller, mut events) = new_controller(config)?;
        let person = load_person(&mut controller, &mut events, index).await?;
        self.print_person(&person)
    }

    fn print_page(&self, page: u32, response: &PeopleResponse) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(response)?),
            OutputFormat::Pretty => {
                let total = response
                    .count
                    .map_or_else(|| "?".to_string(), |count| count.to_string());
                println!("Page {page} ({} of {total} people)", response.results.len());
                for person in &response.results {
                    println!("  {}", person.summary());
                }
                if response.has_next() {
                    println!("More pages available");
                }
            }
        }
        Ok(())
    }

    fn print_event(&self, event: &PageEvent<Person>) {
        match self.cli.format {
            OutputFormat::Json => println!("{}", event_to_json(event)),
            OutputFormat::Pretty => match event {
                PageEvent::LoadingStarted { page } => println!("Loading page {page}..."),
                PageEvent::DataReplaced { items } => {
                    println!("List replaced with {} people", items.len());
                    print_rows(0, items);
                }
                PageEvent::DataAppended { start_index, items } => {
                    println!("Appended {} people", items.len());
                    print_rows(*start_index, items);
                }
                PageEvent::EmptyResult => println!("No people found"),
                PageEvent::FetchFailed { page, error } => {
                    println!("Loading page {page} failed: {error}");
                }
            },
        }
    }

    fn print_person(&self, person: &Person) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(person)?),
            OutputFormat::Pretty => {
                for (label, value) in person.detail_fields() {
                    match label {
                        "Height" => println!("{label}: {value} cm"),
                        _ => println!("{label}: {value}"),
                    }
                }
            }
        }
        Ok(())
    }
}

fn new_controller(config: &AppConfig) -> Result<(PeopleController, PeopleEvents)> {
    let (tx, rx) = mpsc::unbounded_channel();
    let controller =
        PaginationController::with_config(config.people_source()?, config.controller_config(), tx);
    Ok((controller, rx))
}

/// Reset, then keep scrolling to the bottom after every loaded page
///
/// Stops at the end of the data, when the list is too short to trigger
/// infinite scroll, or when `done` says so. A failed fetch ends the run with
/// that error. Returns the number of pages loaded.
async fn scroll_until(
    controller: &mut PeopleController,
    events: &mut PeopleEvents,
    mut on_event: impl FnMut(&PageEvent<Person>),
    done: impl Fn(&PeopleController, u32) -> bool,
) -> Result<u32> {
    let mut pages = 0;
    controller.reset();

    loop {
        controller.settle().await;
        while let Ok(event) = events.try_recv() {
            on_event(&event);
            match event {
                PageEvent::FetchFailed { error, .. } => return Err(error),
                PageEvent::DataReplaced { .. }
                | PageEvent::DataAppended { .. }
                | PageEvent::EmptyResult => pages += 1,
                PageEvent::LoadingStarted { .. } => {}
            }
        }

        if done(controller, pages) {
            break;
        }
        if !controller.snapshot().has_more {
            info!("Reached the end of the list");
            break;
        }

        let total = controller.items().len();
        let visible = VisibleRange::from_window(total.saturating_sub(1), 1);
        if !controller.maybe_load_more(visible, total) {
            info!(
                "List has {total} entries, below the scroll threshold of {}",
                controller.config().scroll_threshold
            );
            break;
        }
    }

    Ok(pages)
}

/// Scroll until list position `index` is loaded and return that person
async fn load_person(
    controller: &mut PeopleController,
    events: &mut PeopleEvents,
    index: usize,
) -> Result<Person> {
    scroll_until(
        controller,
        events,
        |_| {},
        |controller, _| controller.items().len() > index,
    )
    .await?;

    controller.items().get(index).cloned().ok_or_else(|| {
        Error::Other(format!(
            "No person at position {index}; the list has {} entries",
            controller.items().len()
        ))
    })
}

fn reached_page_limit(max_pages: Option<u32>, pages: u32) -> bool {
    max_pages.is_some_and(|max| pages >= max)
}

fn print_rows(start_index: usize, people: &[Person]) {
    for (offset, person) in people.iter().enumerate() {
        println!("  {:>4}  {}", start_index + offset, person.summary());
    }
}

/// Machine-readable form of an event
pub fn event_to_json(event: &PageEvent<Person>) -> Value {
    match event {
        PageEvent::LoadingStarted { page } => json!({"event": event.name(), "page": page}),
        PageEvent::DataReplaced { items } => json!({"event": event.name(), "items": items}),
        PageEvent::DataAppended { start_index, items } => json!({
            "event": event.name(),
            "start_index": start_index,
            "items": items,
        }),
        PageEvent::EmptyResult => json!({"event": event.name()}),
        PageEvent::FetchFailed { page, error } => json!({
            "event": event.name(),
            "page": page,
            "error": error.to_string(),
        }),
    }
}
