use anyhow::Result;
use placeholder_assets::constants::messages;
use placeholder_assets::generator::generate_placeholders;
use std::path::Path;

fn main() -> Result<()> {
    generate_placeholders(Path::new("."))?;

    println!("{}", messages::SUCCESS);

    Ok(())
}
