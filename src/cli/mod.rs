//! CLI module - Command-line interface for Pawdex
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Pawdex - Dog breed browser
/// Browse breeds and images, keep favourite images in a local store
#[derive(Parser)]
#[command(name = "pawdex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the favourites API server
    #[command(alias = "-d", alias = "--daemon")]
    Daemon,

    /// List all dog breeds with their sub-breeds
    Breeds,

    /// Fetch random images for a breed
    Images {
        /// Breed name, optionally "breed/subbreed"
        breed: String,
        /// Number of images to fetch
        #[arg(short = 'n', long)]
        count: Option<u32>,
    },

    /// Manage favourite images
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

#[derive(Subcommand)]
pub enum FavCommands {
    /// List favourites, newest first
    #[command(alias = "ls")]
    List,

    /// Add an image to favourites
    Add {
        /// Absolute image URL
        image_url: String,
        /// Breed name
        breed: String,
    },

    /// Remove an image from favourites
    #[command(alias = "rm")]
    Remove {
        /// Absolute image URL
        image_url: String,
    },
}

pub use commands::*;
