//! Favourites command handlers.
//!
//! These talk to a running daemon over HTTP through the query cache, the
//! same way a web frontend would.

use reqwest::StatusCode;

use crate::browser::Browser;
use crate::config::Config;

pub async fn cmd_fav_list(config: &Config) -> anyhow::Result<()> {
    let browser = Browser::new(config)?;
    let favourites = browser.favourites().await?;

    if favourites.is_empty() {
        println!("No favourites yet.");
        println!();
        println!("Add one with: pawdex fav add <image_url> <breed>");
        return Ok(());
    }

    println!("Favourites ({} total)", favourites.len());
    println!("{:-<70}", "");

    for fav in favourites {
        println!("{} [{}]", fav.image_url, fav.breed);
        println!("  added: {}", fav.created_at);
    }

    Ok(())
}

pub async fn cmd_fav_add(config: &Config, image_url: &str, breed: &str) -> anyhow::Result<()> {
    let browser = Browser::new(config)?;

    match browser.add_favourite(image_url, breed).await {
        Ok(()) => {
            println!("✓ Favourite added: {}", image_url);
            Ok(())
        }
        Err(err) if err.status == Some(StatusCode::CONFLICT) => {
            println!("Already in favourites: {}", image_url);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn cmd_fav_remove(config: &Config, image_url: &str) -> anyhow::Result<()> {
    let browser = Browser::new(config)?;

    match browser.remove_favourite(image_url).await {
        Ok(()) => {
            println!("✓ Favourite removed: {}", image_url);
            Ok(())
        }
        Err(err) if err.status == Some(StatusCode::NOT_FOUND) => {
            println!("Not in favourites: {}", image_url);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
