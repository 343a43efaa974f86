//! List every image visible to the account.
//!
//! Usage: LINODE_API_KEY=... cargo run --example list_images

use anyhow::Context;
use lingo::Linode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_key = std::env::var("LINODE_API_KEY").context("LINODE_API_KEY is not set")?;
    let linode = Linode::new(api_key)?;

    let images = linode.images.list_images().await?;
    println!(
        "{} images (page {} of {})",
        images.results, images.page, images.pages
    );
    for image in images {
        println!("{}\t{}", image.id, image.label);
    }

    Ok(())
}
