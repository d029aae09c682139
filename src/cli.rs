/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::{CategoryStore, InputStore};
use crate::code::CodeAllocator;
use crate::config::Config;
use crate::import::{self, ImportOptions};
use crate::types::{CategoryDraft, CategoryId, DraftError, InputId};

#[derive(Parser)]
#[command(
    name = "labelr",
    version,
    about = "Labelr - A terminal front-end for a text-classification labeling service"
)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Category {
        #[command(subcommand)]
        command: CategoryCommand,
    },
    Input {
        #[command(subcommand)]
        command: InputCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    List,
    Add { name: String },
    Rename { id: CategoryId, name: String },
    Remove { id: CategoryId },
    /// Show the code the next category would receive
    Next,
}

#[derive(Subcommand, Debug)]
pub enum InputCommand {
    List,
    Submit { text: String },
    /// Submit one input per CSV row
    Import {
        path: PathBuf,
        /// Column header name, or zero-based index without --headers
        #[arg(short = 'c', long = "column")]
        column: Option<String>,
        /// Treat the first row as a header
        #[arg(long = "headers")]
        headers: bool,
    },
    Remove { id: InputId },
}

/// Execute a one-shot CLI command against the stores.
pub fn run(
    command: Command,
    categories: &dyn CategoryStore,
    inputs: &dyn InputStore,
    allocator: &CodeAllocator,
) -> Result<()> {
    match command {
        Command::Category { command } => match command {
            CategoryCommand::List => handle_category_list(categories)?,
            CategoryCommand::Add { name } => handle_category_add(&name, categories, allocator)?,
            CategoryCommand::Rename { id, name } => {
                let category = categories.update(id, name.trim())?;
                println!("Renamed {} to '{}'.", category.code, category.name);
            }
            CategoryCommand::Remove { id } => {
                categories.delete(id)?;
                println!("Category {id} removed.");
            }
            CategoryCommand::Next => {
                let code = allocator.allocate(&categories.list()?)?;
                println!("{code}");
            }
        },
        Command::Input { command } => match command {
            InputCommand::List => handle_input_list(inputs)?,
            InputCommand::Submit { text } => {
                if text.trim().is_empty() {
                    println!("Please enter some text before submitting.");
                    return Ok(());
                }
                let input = inputs.submit(&text)?;
                println!("Submitted input #{}.", input.id);
            }
            InputCommand::Import {
                path,
                column,
                headers,
            } => {
                let options = ImportOptions {
                    column,
                    has_headers: headers,
                };
                let report = import::import_csv(&path, &options, inputs)?;
                for (row, err) in &report.failed {
                    println!("Row {row}: {err}");
                }
                println!("{}", report.summary());
            }
            InputCommand::Remove { id } => {
                inputs.delete(id)?;
                println!("Input {id} removed.");
            }
        },
    }
    Ok(())
}

fn handle_category_list(store: &dyn CategoryStore) -> Result<()> {
    let categories = store.list()?;
    if categories.is_empty() {
        println!("No categories.");
        return Ok(());
    }
    for category in categories {
        let id = category
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:>5}  {}  {:<24} {}", id, category.code, category.name, category.color);
    }
    Ok(())
}

fn handle_category_add(name: &str, store: &dyn CategoryStore, allocator: &CodeAllocator) -> Result<()> {
    let existing = store.list()?;
    let draft = match CategoryDraft::prepare(name, &existing, allocator) {
        Ok(draft) => draft,
        Err(DraftError::EmptyName) => {
            println!("Category name is required.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    let category = store.create(&draft)?;
    println!("Created {} '{}' ({}).", category.code, category.name, category.color);
    Ok(())
}

fn handle_input_list(store: &dyn InputStore) -> Result<()> {
    let inputs = store.list()?;
    if inputs.is_empty() {
        println!("No inputs.");
        return Ok(());
    }
    for input in inputs {
        let codes = input
            .categories
            .iter()
            .map(|category| category.code.as_str())
            .collect::<Vec<_>>()
            .join(",");
        println!("{:>5}  [{}]  {}", input.id, codes, input.input_data);
    }
    Ok(())
}
