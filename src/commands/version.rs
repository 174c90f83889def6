use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("wattmon version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
