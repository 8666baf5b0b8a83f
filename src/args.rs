use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listwise")]
#[command(about = "Search, filter, sort and bulk-edit a record collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load the collection from a JSON array file instead of the built-in
    /// sample data
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Operate on campaigns instead of contacts
    #[arg(short, long, global = true)]
    pub campaigns: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records, optionally searched, filtered and sorted
    #[command(alias = "ls")]
    List {
        /// Free-text search term
        #[arg(short, long)]
        search: Option<String>,

        /// Keep only these statuses (repeatable)
        #[arg(long)]
        status: Vec<String>,

        /// Keep only records carrying one of these tags (repeatable)
        #[arg(long)]
        tag: Vec<String>,

        /// Field to sort by (e.g. name, status, joined_at)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Delete records by id
    #[command(alias = "rm")]
    Delete {
        /// Ids of the records (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Apply a tag to records by id
    Tag {
        /// Tag to apply
        name: String,

        /// Ids of the records
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Queue an email to records by id
    Email {
        /// Ids of the records
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Export records by id to a .tar.gz archive (all records if no ids)
    Export {
        /// Ids of the records
        #[arg(num_args = 0..)]
        ids: Vec<String>,
    },
}
