use clap::Parser;
use colored::*;
use daybook::api::{CmdMessage, ConfigAction, DaybookApi, MessageLevel};
use daybook::config::JournalSettings;
use daybook::editor;
use daybook::error::Result;
use daybook::prompt::ConsolePrompt;
use daybook::store::fs::FileWorkspace;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: DaybookApi<FileWorkspace>,
    no_editor: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Open) | None => handle_open(&mut ctx),
        Some(Commands::Append { text }) => handle_append(&mut ctx, text),
        Some(Commands::Route { url }) => handle_route(&mut ctx, url),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Path) => handle_path(&ctx),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let home = daybook_home();
    let settings = JournalSettings::load(&home).unwrap_or_default();
    let workspace = FileWorkspace::new(home.clone());
    let api = DaybookApi::new(workspace, home, settings);

    AppContext {
        api,
        no_editor: cli.no_editor,
    }
}

fn daybook_home() -> PathBuf {
    if let Ok(home) = std::env::var("DAYBOOK_HOME") {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }

    let proj_dirs =
        ProjectDirs::from("com", "daybook", "daybook").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn handle_open(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.open_journal()?;
    print_messages(&result.messages);

    if let Some(path) = &result.journal_path {
        if !ctx.no_editor {
            editor::reveal(path)?;
        }
    }
    Ok(())
}

fn handle_append(ctx: &mut AppContext, text: Option<String>) -> Result<()> {
    let result = match text {
        Some(text) => Some(ctx.api.append_entry(&text)?),
        None => {
            let mut prompt = ConsolePrompt::new();
            ctx.api.quick_append(&mut prompt)?
        }
    };

    // A dismissed prompt is a cancelled operation, not an error.
    if let Some(result) = result {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_route(ctx: &mut AppContext, url: String) -> Result<()> {
    let result = ctx.api.route(&url)?;
    print_messages(&result.messages);

    // Both routes reveal the journal afterwards.
    if let Some(path) = &result.journal_path {
        if !ctx.no_editor {
            editor::reveal(path)?;
        }
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(settings) = &result.settings {
        for key in [
            "automatic-date-headings",
            "heading-date-format",
            "locale",
            "journal-note-path",
        ] {
            if let Some(value) = settings.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.journal_path().display());
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
