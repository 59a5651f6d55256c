use crate::cli::SamplesArgs;
use crate::error::Result;
use aminoscope::core::io::json::{JsonFile, template};
use aminoscope::core::io::traits::DatasetFile;
use aminoscope::core::models::protein::sample_dataset;
use std::io::Write;

pub fn run(args: SamplesArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_samples(&args, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn write_samples(args: &SamplesArgs, out: &mut impl Write) -> Result<()> {
    if args.template {
        JsonFile::write_to(&template(), out)?;
        return Ok(());
    }

    writeln!(out, "{:<4} {:<24} {:<16} {:>6}  Tags", "ID", "Name", "Organism", "Length")?;
    for protein in sample_dataset() {
        writeln!(
            out,
            "{:<4} {:<24} {:<16} {:>6}  {}",
            protein.id,
            protein.name,
            protein.organism.as_deref().unwrap_or("-"),
            protein.length,
            protein.tags.join(", ")
        )?;
    }
    Ok(())
}
