use anyhow::{Context, Result};
use catalog::{KeywordRequest, PlaceCatalog, PlaceRequest};
use chrono::{Local, NaiveTime};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use place_store::{KeywordId, OpeningHours, Place, PlaceId, Position};
use std::path::{Path, PathBuf};
use visibility::{EvalContext, FilterConfig, OpeningWindow};

/// placemap - Points of interest with keywords and opening hours
#[derive(Parser)]
#[command(name = "placemap")]
#[command(about = "Manage map places and filter them by title, keyword and opening hours", long_about = None)]
struct Cli {
    /// Directory holding places.json, keywords.json and keyword_places.json
    #[arg(short, long, default_value = "data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List places, optionally filtered
    List {
        /// Only places whose title contains this text (case-insensitive, literal)
        #[arg(long)]
        title: Option<String>,

        /// Only places tagged with any of these keyword labels
        #[arg(long = "keyword")]
        keywords: Vec<String>,

        /// Only places that are open right now
        #[arg(long)]
        open_now: bool,

        /// Evaluate "open now" at this time today instead of the current time (HH:MM)
        #[arg(long, value_parser = parse_time_arg)]
        at: Option<NaiveTime>,
    },

    /// Show one place with its keywords
    Show {
        #[arg(long)]
        id: PlaceId,
    },

    /// Create a place
    Add {
        #[command(flatten)]
        place: PlaceArgs,
    },

    /// Change fields of an existing place
    Edit {
        #[arg(long)]
        id: PlaceId,

        #[command(flatten)]
        changes: EditArgs,
    },

    /// Delete a place
    Delete {
        #[arg(long)]
        id: PlaceId,
    },

    /// List keywords, or suggest the ones whose label contains some text
    Keywords {
        /// Text to autocomplete (case-insensitive substring)
        #[arg(long)]
        search: Option<String>,
    },

    /// Create a keyword
    AddKeyword {
        #[arg(long)]
        label: String,
    },

    /// Rename a keyword
    RenameKeyword {
        #[arg(long)]
        id: KeywordId,

        #[arg(long)]
        label: String,
    },

    /// Delete a keyword and remove it from every place
    DeleteKeyword {
        #[arg(long)]
        id: KeywordId,
    },

    /// Tag a place with a keyword label, creating the keyword if needed
    Tag {
        #[arg(long)]
        place_id: PlaceId,

        #[arg(long)]
        label: String,
    },

    /// Remove a keyword from a place
    Untag {
        #[arg(long)]
        place_id: PlaceId,

        #[arg(long)]
        keyword_id: KeywordId,
    },
}

#[derive(Args)]
struct PlaceArgs {
    #[arg(long)]
    title: String,

    #[arg(long)]
    description: String,

    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    lng: f64,

    /// Opening time (HH:MM)
    #[arg(long)]
    opens: String,

    /// Closing time (HH:MM); earlier than --opens means open past midnight
    #[arg(long)]
    closes: String,
}

#[derive(Args)]
struct EditArgs {
    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,

    #[arg(long)]
    opens: Option<String>,

    #[arg(long)]
    closes: Option<String>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut catalog = PlaceCatalog::open(&cli.data_dir)
        .with_context(|| format!("Failed to load places from {}", cli.data_dir.display()))?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            title,
            keywords,
            open_now,
            at,
        } => handle_list(&catalog, title, &keywords, open_now, at)?,
        Commands::Show { id } => print_place(&catalog.get_place(id)?),
        Commands::Add { place } => {
            let created = catalog.create_place(place.into_request())?;
            save(&catalog, &cli.data_dir)?;
            println!("{} Created place {}", "✓".green(), created.id);
            print_place(&created);
        }
        Commands::Edit { id, changes } => {
            let current = catalog.get_place(id)?;
            let updated = catalog.update_place(id, changes.apply_to(current))?;
            save(&catalog, &cli.data_dir)?;
            println!("{} Updated place {}", "✓".green(), id);
            print_place(&updated);
        }
        Commands::Delete { id } => {
            if catalog.delete_place(id) {
                save(&catalog, &cli.data_dir)?;
                println!("{} Deleted place {}", "✓".green(), id);
            } else {
                println!("No place with id {}", id);
            }
        }
        Commands::Keywords { search } => handle_keywords(&catalog, search),
        Commands::AddKeyword { label } => {
            let keyword = catalog.create_keyword(KeywordRequest::new(label))?;
            save(&catalog, &cli.data_dir)?;
            println!("{} Created keyword {} ({})", "✓".green(), keyword.label, keyword.id);
        }
        Commands::RenameKeyword { id, label } => {
            let keyword = catalog.update_keyword(id, KeywordRequest::new(label))?;
            save(&catalog, &cli.data_dir)?;
            println!("{} Renamed keyword {} to {}", "✓".green(), id, keyword.label);
        }
        Commands::DeleteKeyword { id } => {
            if catalog.delete_keyword(id) {
                save(&catalog, &cli.data_dir)?;
                println!("{} Deleted keyword {}", "✓".green(), id);
            } else {
                println!("No keyword with id {}", id);
            }
        }
        Commands::Tag { place_id, label } => {
            let keyword = catalog.tag_place_with_label(place_id, &label)?;
            save(&catalog, &cli.data_dir)?;
            println!("{} Place {} tagged with {}", "✓".green(), place_id, keyword.label);
        }
        Commands::Untag {
            place_id,
            keyword_id,
        } => {
            if catalog.detach_keyword(keyword_id, place_id) {
                save(&catalog, &cli.data_dir)?;
                println!("{} Removed keyword {} from place {}", "✓".green(), keyword_id, place_id);
            } else {
                println!("Place {} is not tagged with {}", place_id, keyword_id);
            }
        }
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(
    catalog: &PlaceCatalog,
    title: Option<String>,
    keyword_labels: &[String],
    open_now: bool,
    at: Option<NaiveTime>,
) -> Result<()> {
    let mut config = FilterConfig::new();
    if let Some(title) = title {
        config.set_title_search(&title);
    }
    for keyword in catalog.keywords_by_labels(keyword_labels)? {
        config.select_keyword(keyword);
    }
    config.set_open_only(open_now);
    tracing::debug!("Listing places with {:?}", config);

    let context = match at {
        Some(time) => EvalContext::at(Local::now().date_naive().and_time(time)),
        None => EvalContext::now_local(),
    };

    let total = catalog.list_places().len();
    let places = catalog.visible_places(&config, &context);

    println!(
        "{}",
        format!("{} of {} places visible", places.len(), total).bold().blue()
    );
    for place in &places {
        print_place_line(place, &context);
    }
    Ok(())
}

/// Handle the 'keywords' command
fn handle_keywords(catalog: &PlaceCatalog, search: Option<String>) {
    let keywords = match search {
        Some(input) => catalog.suggest_keywords(&input, &FilterConfig::new()),
        None => catalog.list_keywords(),
    };

    println!("{}", "Keywords:".bold().blue());
    for keyword in keywords {
        let count = catalog.store().places_for_keyword(keyword.id).len();
        println!("  {} {} ({} places)", keyword.id.to_string().dimmed(), keyword.label, count);
    }
}

impl PlaceArgs {
    fn into_request(self) -> PlaceRequest {
        PlaceRequest {
            title: self.title,
            description: self.description,
            position: Position {
                lat: self.lat,
                lng: self.lng,
            },
            opening_hours: OpeningHours::new(self.opens, self.closes),
        }
    }
}

impl EditArgs {
    /// Overlay the given fields on the current place
    fn apply_to(self, current: Place) -> PlaceRequest {
        PlaceRequest {
            title: self.title.unwrap_or(current.title),
            description: self.description.unwrap_or(current.description),
            position: Position {
                lat: self.lat.unwrap_or(current.position.lat),
                lng: self.lng.unwrap_or(current.position.lng),
            },
            opening_hours: OpeningHours::new(
                self.opens.unwrap_or(current.opening_hours.start),
                self.closes.unwrap_or(current.opening_hours.end),
            ),
        }
    }
}

fn save(catalog: &PlaceCatalog, data_dir: &Path) -> Result<()> {
    catalog
        .save(data_dir)
        .with_context(|| format!("Failed to save places to {}", data_dir.display()))
}

fn parse_time_arg(s: &str) -> std::result::Result<NaiveTime, String> {
    place_store::parse_clock_time(s).map_err(|e| e.to_string())
}

/// One line per place in listings
fn print_place_line(place: &Place, context: &EvalContext) {
    let status = match OpeningWindow::from_hours(&place.opening_hours) {
        Ok(window) if window.is_open_at(context.now) => "open".green(),
        Ok(_) => "closed".red(),
        Err(_) => "hours?".yellow(),
    };
    let keywords = place
        .keywords
        .iter()
        .map(|k| k.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "{} {} [{}-{} {}] [{}]",
        place.id.to_string().dimmed(),
        place.title.bold(),
        place.opening_hours.start,
        place.opening_hours.end,
        status,
        keywords
    );
}

/// Full details of one place
fn print_place(place: &Place) {
    println!("{}", place.title.bold().blue());
    println!("{}Id: {}", "• ".green(), place.id);
    println!("{}Description: {}", "• ".green(), place.description);
    println!(
        "{}Position: {:.5}, {:.5}",
        "• ".green(),
        place.position.lat,
        place.position.lng
    );
    println!(
        "{}Opening hours: {} - {}",
        "• ".green(),
        place.opening_hours.start,
        place.opening_hours.end
    );
    if place.keywords.is_empty() {
        println!("{}Keywords: none", "• ".cyan());
    } else {
        println!("{}Keywords:", "• ".cyan());
        for keyword in &place.keywords {
            println!("  - {} ({})", keyword.label, keyword.id);
        }
    }
}
