//! List breeds command handler

use crate::browser::Browser;
use crate::config::Config;

pub async fn cmd_breeds(config: &Config) -> anyhow::Result<()> {
    let browser = Browser::new(config)?;
    let breeds = browser.breeds().await?;

    println!("Dog breeds ({} total)", breeds.len());
    println!("{:-<40}", "");

    for (breed, sub_breeds) in &breeds {
        if sub_breeds.is_empty() {
            println!("{}", breed);
        } else {
            println!("{} ({})", breed, sub_breeds.join(", "));
        }
    }

    println!();
    println!("Fetch images with: pawdex images <breed>");

    Ok(())
}
