fn main() -> anyhow::Result<()> {
    xsrc::cli::run_cli()
}
