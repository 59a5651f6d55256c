use crate::cli::MotifsArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::render;
use std::io::Write;
use tracing::info;

pub fn run(args: MotifsArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_motifs(&args, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn write_motifs(args: &MotifsArgs, out: &mut impl Write) -> Result<()> {
    let app_config = build_config(&args.config)?;
    let registry = app_config.core_config.motif_registry()?;
    info!("Listing {} registered motif(s).", registry.len());
    out.write_all(render::render_motifs(&registry, app_config.format)?.as_bytes())?;
    Ok(())
}
