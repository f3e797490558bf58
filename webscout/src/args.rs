use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the WebScout backend, overrides the config file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the crawl graph of a project
    Tree { project: String },
    /// List the analyst's own and shared projects
    Dashboard { initials: String },
    /// List project folders
    Folders,
    /// Create a project
    Create {
        project_name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        machine_ip: String,
        #[arg(long, default_value = "active")]
        status: String,
        #[arg(long)]
        lead_analyst_initials: String,
        #[arg(long, default_value = "false")]
        locked: String,
    },
    /// Delete a project
    Delete { project: String },
    /// Restore a deleted project
    Restore { project: String },
    /// Lock a project for an analyst
    Lock { project: String, initials: String },
    /// Unlock a project
    Unlock { project: String, initials: String },
    /// Check analyst login
    Login { initials: String },
    /// Export a full project dump
    Export { project: String },
    /// Check whether a URL is reachable
    ValidateUrl { url: String },
    /// Control a running crawl
    Crawler {
        #[command(subcommand)]
        action: ScanAction,
    },
    /// Control a running fuzz scan
    Fuzzer {
        #[command(subcommand)]
        action: ScanAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScanAction {
    Stop,
    Pause,
    Resume,
}
