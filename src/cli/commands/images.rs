//! Breed images command handler

use crate::browser::Browser;
use crate::config::Config;

pub async fn cmd_images(config: &Config, breed: &str, count: Option<u32>) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(count) = count {
        config.dog_api.image_count = count;
    }

    let browser = Browser::new(&config)?;
    let images = browser.breed_images(breed).await?;

    println!("Random images for {} ({} total)", breed, images.len());
    println!("{:-<70}", "");

    for image in images {
        println!("{}", image.url);
    }

    println!();
    println!("Favourite one with: pawdex fav add <image_url> {}", breed);

    Ok(())
}
