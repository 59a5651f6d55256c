use crate::cli::DescribeArgs;
use crate::error::Result;
use aminoscope::describe_residue;
use std::io::Write;
use tracing::debug;

pub fn run(args: DescribeArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_description(args.code, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn write_description(code: char, out: &mut impl Write) -> Result<()> {
    let descriptor = describe_residue(code);
    debug!("Resolved '{}' to {:?}", code, descriptor);

    writeln!(out, "{} - {}", descriptor.code, descriptor.name)?;
    if descriptor.is_canonical() {
        writeln!(out, "  Class: {}", descriptor.class)?;
        writeln!(out, "  Note:  {}", descriptor.note)?;
    } else {
        writeln!(out, "  Not one of the 20 canonical amino acids.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(code: char) -> String {
        let mut buffer = Vec::new();
        write_description(code, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn canonical_code_lists_class_and_note() {
        assert_eq!(
            describe('w'),
            "W - Tryptophan\n  Class: hydrophobic\n  Note:  Large aromatic; binding\n"
        );
    }

    #[test]
    fn unknown_code_is_reported_as_such() {
        assert_eq!(
            describe('x'),
            "X - Unknown\n  Not one of the 20 canonical amino acids.\n"
        );
    }
}
