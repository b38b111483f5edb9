//! `camprama` - CLI for the campsite guide
//!
//! This binary manages packing lists and prints the built-in reference data.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use camprama::catalog::{
    filter_locations, find_location, find_template, find_wildlife, option_index,
    order_by_favorites, Favorites, QuizSession, LETTERS, TEMPLATES, WILDLIFE,
};
use camprama::cli::{
    Cli, Command, ConfigCommand, ListsCommand, LocationCommand, LocationsCommand, OutputFormat,
    QuizCommand, SettingsCommand, StatusCommand, SwitchArg, TemplatesCommand, WildlifeCommand,
};
use camprama::packlist::TemplateSelection;
use camprama::settings::APP_SHARE_MESSAGE;
use camprama::{
    init_logging, Config, Error, KeyValueStore, MemoryStore, MyList, PacklistStore, Settings,
    SqliteStore, TemplateEditor,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let config_path = cli.config;
    let load_config = || Config::load_from(config_path.clone());

    // Execute the command
    match cli.command {
        Command::Lists(cmd) => handle_lists(&load_config()?, cmd).await,
        Command::Templates(cmd) => handle_templates(&load_config()?, cmd).await,
        Command::Locations(cmd) => handle_locations(&cmd),
        Command::Wildlife(cmd) => handle_wildlife(&cmd),
        Command::Quiz(cmd) => handle_quiz(&cmd),
        Command::Settings(cmd) => handle_settings(&load_config()?, cmd).await,
        Command::Status(cmd) => handle_status(&load_config()?, &cmd).await,
        Command::Config(cmd) => handle_config(config_path.clone(), cmd),
    }
}

fn open_backend(config: &Config) -> camprama::Result<Arc<dyn KeyValueStore>> {
    if config.storage.in_memory {
        return Ok(Arc::new(MemoryStore::new()));
    }
    Ok(Arc::new(SqliteStore::open(config.database_path())?))
}

fn open_store(config: &Config) -> camprama::Result<Arc<PacklistStore>> {
    let backend = open_backend(config)?;
    Ok(Arc::new(PacklistStore::from_config(
        backend,
        &config.packlists,
    )))
}

async fn require_list(store: &PacklistStore, id: &str) -> anyhow::Result<MyList> {
    match store.get_list(id).await {
        Some(list) => Ok(list),
        None => Err(Error::not_found("list", id).into()),
    }
}

fn print_list(list: &MyList) {
    println!("{} ({})", list.title, list.id);
    if let Some(source) = &list.source_id {
        println!("From template: {source}");
    }
    println!("{}/{} packed", list.done_count(), list.items.len());
    println!();
    for item in &list.items {
        let mark = if item.done { 'x' } else { ' ' };
        println!("  [{mark}] {}  {}", item.text, item.id);
    }
}

async fn handle_lists(config: &Config, cmd: ListsCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;

    match cmd {
        ListsCommand::Ls { format } => {
            let lists = store.load_all().await;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lists)?),
                OutputFormat::Plain if lists.is_empty() => println!("No saved lists."),
                OutputFormat::Plain => {
                    for list in &lists {
                        println!(
                            "{}  {}  ({}/{})",
                            list.id,
                            list.title,
                            list.done_count(),
                            list.items.len()
                        );
                    }
                }
            }
        }
        ListsCommand::Create { title } => {
            let title = title.trim();
            if title.is_empty() {
                return Err(Error::invalid_input("list title must not be empty").into());
            }
            let list = store.create_list(title).await;
            println!("Created {} ({})", list.title, list.id);
        }
        ListsCommand::Show { list, format } => {
            let list = require_list(&store, &list).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&list)?),
                OutputFormat::Plain => print_list(&list),
            }
        }
        ListsCommand::Add { list, text } => {
            let text = text.trim();
            if text.is_empty() {
                return Err(Error::invalid_input("item text must not be empty").into());
            }
            let updated = store
                .add_item(&list, text)
                .await
                .ok_or_else(|| Error::not_found("list", &list))?;
            if let Some(item) = updated.items.first() {
                println!("Added {} ({})", item.text, item.id);
            }
        }
        ListsCommand::Toggle { list, item } => {
            let current = require_list(&store, &list).await?;
            if current.item(&item).is_none() {
                return Err(Error::not_found("item", item).into());
            }
            let updated = store
                .toggle_item(&list, &item)
                .await
                .ok_or_else(|| Error::not_found("list", &list))?;
            if let Some(it) = updated.item(&item) {
                let state = if it.done { "packed" } else { "not packed" };
                println!("{}: {state}", it.text);
            }
        }
        ListsCommand::Rm { list, item } => {
            let current = require_list(&store, &list).await?;
            let Some(removed) = current.item(&item) else {
                return Err(Error::not_found("item", item).into());
            };
            let text = removed.text.clone();
            store.remove_item(&list, &item).await;
            println!("Removed {text}");
        }
        ListsCommand::Share { list } => {
            println!("{}", require_list(&store, &list).await?.share_message());
        }
        ListsCommand::Delete { list } => {
            let current = require_list(&store, &list).await?;
            store.delete_list(&list).await;
            println!("Deleted {}", current.title);
        }
        ListsCommand::Import { template } => {
            let template =
                find_template(&template).ok_or_else(|| Error::not_found("template", &template))?;
            let list = store.copy_from_template(template).await;
            println!(
                "{} ({}) has {} items",
                list.title,
                list.id,
                list.items.len()
            );
        }
        ListsCommand::Clear { yes } => {
            if yes {
                store.clear_all().await;
                println!("All saved lists deleted.");
            } else {
                println!("This will permanently delete all your lists and checkmarks.");
                println!("Use --yes to confirm.");
            }
        }
    }
    Ok(())
}

async fn handle_templates(config: &Config, cmd: TemplatesCommand) -> anyhow::Result<()> {
    match cmd {
        TemplatesCommand::Ls { format } => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(TEMPLATES)?),
            OutputFormat::Plain => {
                for template in TEMPLATES {
                    println!("{}  {}", template.id, template.share_message());
                }
            }
        },
        TemplatesCommand::Show { template, format } => {
            let template =
                find_template(&template).ok_or_else(|| Error::not_found("template", &template))?;
            let store = open_store(config)?;

            let mut selection = TemplateSelection::from_template(template);
            if let Some(saved) = store.find_by_title(template.title).await {
                selection.merge_saved(&saved);
            }

            match format {
                OutputFormat::Json => {
                    let items: Vec<_> = selection
                        .items()
                        .iter()
                        .map(|it| {
                            serde_json::json!({
                                "id": it.id,
                                "text": it.text,
                                "checked": selection.is_checked(&it.id),
                            })
                        })
                        .collect();
                    let out = serde_json::json!({
                        "id": template.id,
                        "title": template.title,
                        "items": items,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                OutputFormat::Plain => {
                    println!("{}", selection.share_message());
                    println!();
                    for it in selection.items() {
                        let mark = if selection.is_checked(&it.id) { 'x' } else { ' ' };
                        println!("  [{mark}] {}  {}", it.text, it.id);
                    }
                }
            }
        }
        TemplatesCommand::Pick {
            template,
            items,
            extra,
        } => {
            let template =
                find_template(&template).ok_or_else(|| Error::not_found("template", &template))?;
            if let Some(unknown) = items
                .iter()
                .find(|id| !template.items.iter().any(|it| it.id == id.as_str()))
            {
                return Err(Error::not_found("template item", unknown).into());
            }

            let store = open_store(config)?;
            let editor = TemplateEditor::open(store.clone(), template, config.debounce_window()).await;

            let selection = editor.snapshot().await;
            for id in &items {
                if !selection.is_checked(id) {
                    editor.toggle(id).await;
                }
            }
            for text in &extra {
                editor.add_item(text).await;
            }
            let list_id = editor.list_id().await;
            editor.close().await;

            let list_id = match list_id {
                Some(id) => Some(id),
                None => store.find_by_title(template.title).await.map(|l| l.id),
            };
            match list_id {
                Some(id) => print_list(&require_list(&store, &id).await?),
                None => println!("Nothing selected."),
            }
        }
    }
    Ok(())
}

fn handle_locations(cmd: &LocationsCommand) -> anyhow::Result<()> {
    if let Some(LocationCommand::Show { id }) = &cmd.command {
        let location = find_location(id).ok_or_else(|| Error::not_found("location", id))?;
        if cmd.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(location)?);
        } else {
            println!("{}", location.share_message());
            println!("{} | {}", location.category, location.access);
            println!();
            println!("{}", location.description);
        }
        return Ok(());
    }

    let favorites: Favorites = cmd.favorites.iter().map(String::as_str).collect();
    let found = filter_locations(
        cmd.query.as_deref().unwrap_or_default(),
        cmd.category.map(Into::into),
    );
    let found = order_by_favorites(found, &favorites);

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
        OutputFormat::Plain if found.is_empty() => println!("No matching locations."),
        OutputFormat::Plain => {
            for location in found {
                let star = if favorites.contains(location.id) { '*' } else { ' ' };
                println!(
                    "{star} {}  {}, {}  [{}]",
                    location.id, location.title, location.region, location.category
                );
            }
        }
    }
    Ok(())
}

fn handle_wildlife(cmd: &WildlifeCommand) -> anyhow::Result<()> {
    let Some(id) = &cmd.id else {
        match cmd.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(WILDLIFE)?),
            OutputFormat::Plain => {
                for animal in WILDLIFE {
                    println!(
                        "{}  {} ({})  {}",
                        animal.id, animal.name, animal.latin, animal.level
                    );
                }
            }
        }
        return Ok(());
    };

    let animal = find_wildlife(id).ok_or_else(|| Error::not_found("wildlife", id))?;
    if cmd.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(animal)?);
        return Ok(());
    }

    println!("{} ({})", animal.name, animal.latin);
    println!("Danger level: {}", animal.level);
    if let Some(note) = animal.region_note {
        println!("Range: {note}");
    }
    println!("Habitat: {}", animal.habitat);
    if let Some(signs) = animal.signs {
        println!("Signs: {signs}");
    }
    if let Some(behavior) = animal.behavior {
        println!("Behavior: {behavior}");
    }
    println!();
    println!("What to do:");
    for (i, step) in animal.what_to_do.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
    println!();
    println!("Food security: {}", animal.food_security);
    println!("Add to packlist: {}", animal.add_to_packlist);
    Ok(())
}

fn handle_quiz(cmd: &QuizCommand) -> anyhow::Result<()> {
    let mut given = cmd
        .answers
        .as_ref()
        .map(|a| a.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>().into_iter());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut session = QuizSession::new();
    session.start();

    while let Some(question) = session.current() {
        println!(
            "Question {}/{}: {}",
            session.position() + 1,
            session.total(),
            question.prompt
        );
        for (letter, option) in LETTERS.iter().zip(question.options) {
            println!("  {letter}) {option}");
        }

        let picked = match given.as_mut() {
            Some(answers) => {
                let Some(letter) = answers.next() else {
                    break;
                };
                option_index(letter).with_context(|| format!("'{letter}' is not an option"))?
            }
            None => match prompt_answer(&mut lines)? {
                Some(index) => index,
                None => break,
            },
        };

        if let Some(answer) = session.answer(picked) {
            if answer.is_correct() {
                println!("Correct. {}", answer.why);
            } else {
                println!(
                    "Not quite, it's {}. {}",
                    LETTERS[answer.correct], answer.why
                );
            }
        }
        println!();
        session.advance();
    }

    println!("{}", session.report());
    Ok(())
}

/// Ask until a valid letter arrives. `None` once input runs out.
fn prompt_answer(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<usize>> {
    loop {
        print!("Answer: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("failed to read answer")?;
        match line.trim().chars().next().and_then(option_index) {
            Some(index) => return Ok(Some(index)),
            None => println!("Pick one of A, B, C or D."),
        }
    }
}

async fn handle_settings(config: &Config, cmd: SettingsCommand) -> anyhow::Result<()> {
    match cmd {
        SettingsCommand::Notifications { state } => {
            let settings = Settings::new(open_backend(config)?);
            let enabled = match state {
                None => settings.notifications_enabled().await,
                Some(SwitchArg::On) => {
                    settings.set_notifications_enabled(true).await?;
                    true
                }
                Some(SwitchArg::Off) => {
                    settings.set_notifications_enabled(false).await?;
                    false
                }
                Some(SwitchArg::Toggle) => settings.toggle_notifications().await?,
            };
            println!("Notifications: {}", if enabled { "on" } else { "off" });
        }
        SettingsCommand::Share => println!("{APP_SHARE_MESSAGE}"),
    }
    Ok(())
}

async fn handle_status(config: &Config, cmd: &StatusCommand) -> anyhow::Result<()> {
    let (backend, stats) = if config.storage.in_memory {
        (Arc::new(MemoryStore::new()) as Arc<dyn KeyValueStore>, None)
    } else {
        let sqlite = SqliteStore::open(config.database_path())?;
        let stats = (sqlite.stats().await?, sqlite.keys().await?);
        (Arc::new(sqlite) as Arc<dyn KeyValueStore>, Some(stats))
    };
    let database_path = (!config.storage.in_memory).then(|| config.database_path());

    let store = PacklistStore::from_config(backend.clone(), &config.packlists);
    let lists = store.load_all().await;
    let items: usize = lists.iter().map(|l| l.items.len()).sum();
    let packed: usize = lists.iter().map(MyList::done_count).sum();
    let notifications = Settings::new(backend).notifications_enabled().await;

    if cmd.json {
        let status = serde_json::json!({
            "database_path": database_path,
            "storage_key": config.packlists.storage_key,
            "lists": lists.len(),
            "items": items,
            "packed": packed,
            "notifications_enabled": notifications,
            "entries": stats.as_ref().map(|(s, _)| s.entries),
            "keys": stats.as_ref().map(|(_, keys)| keys),
            "last_updated": stats.as_ref().and_then(|(s, _)| s.last_updated),
            "db_size_bytes": stats.as_ref().map(|(s, _)| s.db_size_bytes),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("camprama status");
        println!("---------------");
        match &database_path {
            Some(path) => println!("Database:      {}", path.display()),
            None => println!("Database:      in memory"),
        }
        if let Some((stats, keys)) = &stats {
            println!("Entries:       {} ({})", stats.entries, keys.join(", "));
            println!("Size:          {} bytes", stats.db_size_bytes);
            if let Some(at) = stats.last_updated {
                println!("Last write:    {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
            }
        }
        println!("Lists:         {}", lists.len());
        println!("Packed:        {packed}/{items}");
        println!(
            "Notifications: {}",
            if notifications { "on" } else { "off" }
        );
    }
    Ok(())
}

fn handle_config(
    config_path: Option<std::path::PathBuf>,
    cmd: ConfigCommand,
) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:   {}", config.database_path().display());
                println!("  In memory:       {}", config.storage.in_memory);
                println!();
                println!("[Packlists]");
                println!("  Storage key:     {}", config.packlists.storage_key);
                println!("  Debounce (ms):   {}", config.packlists.debounce_ms);
                println!("  Event capacity:  {}", config.packlists.event_capacity);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => bail!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
