// src/bin/mirror.rs
use pol_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let summary = cli::mirror()?;
    println!(
        "Done! {} downloaded, {} already present, {} failed.",
        summary.downloads,
        summary.cache_hits,
        summary.image_failures.len()
    );
    Ok(())
}
