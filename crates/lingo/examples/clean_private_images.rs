//! Delete every private image on the account, then print the surviving
//! image list as JSON.
//!
//! Usage: LINODE_API_KEY=... cargo run --example clean_private_images

use anyhow::Context;
use lingo::Linode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_key = std::env::var("LINODE_API_KEY").context("LINODE_API_KEY is not set")?;
    let linode = Linode::new(api_key)?;

    let images = linode.images.list_images().await?;
    for image in images {
        if image.id.starts_with("private/") {
            println!("deleting {}", image.id);
            linode
                .images
                .delete_image(&image.id)
                .await
                .with_context(|| format!("failed to delete private image {}", image.id))?;
        }
    }

    let cleaned = linode.images.list_images().await?;
    let json = serde_json::to_string_pretty(&cleaned.into_data())?;
    println!("{json}");

    Ok(())
}
