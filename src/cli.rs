//! Command-line interface over the document store
//!
//! Supports:
//! - Listing and inspecting stored documents
//! - Importing/exporting markdown files
//! - Rendering a document to standalone HTML

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use crate::render;
use crate::store::DocumentStore;

/// A markdown authoring tool
#[derive(Parser, Debug)]
#[command(name = "markpad", version, about = "A markdown authoring tool")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List stored documents, most recently updated first
    List,
    /// Print a document's markdown content
    Show {
        /// Document id
        id: String,
    },
    /// Create a document from a markdown file ("-" reads stdin)
    Import {
        /// Markdown file to import
        file: PathBuf,
    },
    /// Replace a document's content from a markdown file ("-" reads stdin)
    Update {
        /// Document id
        id: String,
        /// Markdown file with the new content
        file: PathBuf,
    },
    /// Write a document's markdown content to a file
    Export {
        /// Document id
        id: String,
        /// Destination path
        file: PathBuf,
    },
    /// Render a document to a standalone HTML page
    Render {
        /// Document id
        id: String,
        /// Write HTML here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Delete a document
    Delete {
        /// Document id
        id: String,
    },
    /// Show the document last open in the editor
    Current,
}

/// Execute a parsed command against the store.
pub fn run(args: CliArgs, store: &mut DocumentStore) -> anyhow::Result<()> {
    match args.command {
        Command::List => {
            for doc in store.list() {
                println!("{}  {}", doc.id, doc.title);
            }
        }
        Command::Show { id } => {
            let doc = store
                .get(&id)
                .with_context(|| format!("no document with id {id}"))?;
            print!("{}", doc.content);
        }
        Command::Import { file } => {
            let content = read_input(&file)?;
            let doc = store.create(&content);
            println!("{}  {}", doc.id, doc.title);
            store.save().context("failed to save document store")?;
        }
        Command::Update { id, file } => {
            let content = read_input(&file)?;
            let Some(doc) = store.update(&id, &content) else {
                bail!("no document with id {id}");
            };
            println!("{}  {}", doc.id, doc.title);
            store.save().context("failed to save document store")?;
        }
        Command::Export { id, file } => {
            let doc = store
                .get(&id)
                .with_context(|| format!("no document with id {id}"))?;
            std::fs::write(&file, &doc.content)
                .with_context(|| format!("failed to write {}", file.display()))?;
        }
        Command::Render { id, out } => {
            let doc = store
                .get(&id)
                .with_context(|| format!("no document with id {id}"))?;
            let html = render::render_document(&doc.title, &doc.content);
            match out {
                Some(path) => std::fs::write(&path, html)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{html}"),
            }
        }
        Command::Delete { id } => {
            if !store.delete(&id) {
                bail!("no document with id {id}");
            }
            store.save().context("failed to save document store")?;
        }
        Command::Current => match store.current() {
            Some(doc) => println!("{}  {}", doc.id, doc.title),
            None => println!("(none)"),
        },
    }
    Ok(())
}

/// Read a markdown file, or stdin when the path is "-".
fn read_input(file: &PathBuf) -> anyhow::Result<String> {
    if file.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))
    }
}
