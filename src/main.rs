use exonqc::{
    cli::{init_verbose, parse_cli, FULL_VERSION},
    commands::exon_qc,
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = parse_cli();
    init_verbose(&cli);

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        cli.args.run
    );
    exon_qc::exon_qc(cli.args)?;
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
