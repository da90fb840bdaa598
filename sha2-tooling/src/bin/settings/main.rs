use anyhow::Result;

use sha2_tooling::SETTINGS;

fn main() -> Result<()> {
    println!("{:#?}", *SETTINGS);
    Ok(())
}
