use anyhow::Result;

fn main() -> Result<()> {
    redshift_site::cli::run()
}
