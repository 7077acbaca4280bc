use cicd_report::report::{content, ReportAssembler};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "cicd-report",
    version,
    about = "Generate the SoundPlus++ CI/CD documentation as a DOCX file"
)]
struct Args {
    /// Output DOCX file
    #[arg(default_value = content::DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Print the outline of the written document
    #[arg(long)]
    outline: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args.output, args.outline) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("{}", error_line(&e));
            std::process::exit(1);
        }
    }
}

/// Write the report to `output`, returning the lines to print
fn run(output: &Path, outline: bool) -> cicd_report::Result<Vec<String>> {
    let plan = content::plan();
    log::info!("rendering {} blocks", plan.len());

    let mut assembler = ReportAssembler::new();
    assembler.set_properties(content::properties());
    assembler.push_all(&plan)?;
    let doc = assembler.save(output)?;

    let mut lines = vec![format!("Document created successfully: {}", output.display())];
    if outline {
        lines.extend(doc.outline().iter().map(ToString::to_string));
    }
    Ok(lines)
}

fn error_line(e: &cicd_report::Error) -> String {
    format!("Error: {e}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cicd_report::Error;

    #[test]
    fn test_default_output() {
        let args = Args::try_parse_from(["cicd-report"]).unwrap();
        assert_eq!(args.output, PathBuf::from("SoundPlus_CICD_Documentation.docx"));
        assert!(!args.outline);

        let args = Args::try_parse_from(["cicd-report", "out.docx", "--outline"]).unwrap();
        assert_eq!(args.output, PathBuf::from("out.docx"));
        assert!(args.outline);
    }

    #[test]
    fn test_confirmation_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");

        let lines = run(&path, false).unwrap();
        assert_eq!(lines, vec![format!("Document created successfully: {}", path.display())]);
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_outline_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");

        let lines = run(&path, true).unwrap();
        assert_eq!(lines.len(), 1 + content::plan().len());
        assert_eq!(lines[1], "H0 SoundPlus++ Project");
    }

    #[test]
    fn test_missing_directory_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.docx");

        let err = run(&path, false).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(error_line(&err).starts_with("Error: IO error: "));
        assert!(!path.exists());
    }
}
