use anyhow::Result;

fn main() -> Result<()> {
    mt_import::cli::run()
}
