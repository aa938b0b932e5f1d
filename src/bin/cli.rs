// src/bin/cli.rs
use pol_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let summary = cli::run()?;
    println!(
        "Success! Created {} with {} entries.",
        summary.out_file.display(),
        summary.records
    );
    Ok(())
}
