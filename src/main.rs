use clap::Parser;
use listwise::actions::ActionKind;
use listwise::controller::ListController;
use listwise::error::Result;
use listwise::model::{Record, RecordId};
use listwise::query::SortDirection;
use listwise::records::{Campaign, Contact};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{self, TableRow};
use cli::sink::CliSink;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.campaigns {
        let records =
            load_records(cli.data.as_deref())?.unwrap_or_else(cli::seed::sample_campaigns);
        run_page(
            ListController::with_records(Campaign::schema(), records),
            cli.command,
        )
    } else {
        let records =
            load_records(cli.data.as_deref())?.unwrap_or_else(cli::seed::sample_contacts);
        run_page(
            ListController::with_records(Contact::schema(), records),
            cli.command,
        )
    }
}

/// Loads a JSON array of records, or `None` when no file was given.
fn load_records<T: DeserializeOwned>(path: Option<&Path>) -> Result<Option<Vec<T>>> {
    match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)?;
            Ok(Some(serde_json::from_str(&content)?))
        }
        None => Ok(None),
    }
}

fn run_page<T>(mut ctl: ListController<T>, command: Option<Commands>) -> Result<()>
where
    T: Record + Serialize + TableRow,
{
    // Bare `listwise` behaves like `listwise list`.
    let command = command.unwrap_or(Commands::List {
        search: None,
        status: Vec::new(),
        tag: Vec::new(),
        sort: None,
        desc: false,
    });

    match command {
        Commands::List {
            search,
            status,
            tag,
            sort,
            desc,
        } => {
            if let Some(term) = search {
                ctl.set_search_fields(T::search_fields().iter().copied());
                ctl.set_search_text(term);
            }
            if !status.is_empty() {
                ctl.set_filter("status", status);
            }
            if !tag.is_empty() {
                ctl.set_filter("tags", tag);
            }
            if let Some(key) = sort {
                let direction = if desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                };
                ctl.set_sort(key, direction);
            }
            print::print_table(&ctl.view());
            Ok(())
        }
        Commands::Delete { ids } => run_action(&mut ctl, ActionKind::Delete, &ids, CliSink::new("")),
        Commands::Tag { name, ids } => run_action(&mut ctl, ActionKind::Tag, &ids, CliSink::new(name)),
        Commands::Email { ids } => run_action(&mut ctl, ActionKind::Email, &ids, CliSink::new("")),
        Commands::Export { ids } => run_action(&mut ctl, ActionKind::Export, &ids, CliSink::new("")),
    }
}

fn run_action<T>(
    ctl: &mut ListController<T>,
    kind: ActionKind,
    ids: &[String],
    mut sink: CliSink,
) -> Result<()>
where
    T: Record + Serialize + TableRow,
{
    if ids.is_empty() {
        // No explicit ids means "everything currently visible".
        ctl.select_all(true);
    } else {
        for raw in ids {
            ctl.toggle_select(RecordId::parse(raw));
        }
    }

    let outcome = ctl.run_bulk_action(kind, &mut sink)?;

    print::print_notices(&sink.notices);
    print::print_messages(&outcome.messages);

    if kind == ActionKind::Delete && !outcome.is_noop() {
        print::print_table(&ctl.view());
    }
    Ok(())
}
