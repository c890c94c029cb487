//! fods CLI - build a flat OpenDocument spreadsheet from JSON rows

use clap::Parser;
use fods::common::xml::EscapePolicy;
use fods::odf::fods::{parse_rows, read_rows};
use fods::{Diagnostic, EncoderOptions, Row, SpreadsheetBuilder, Template};
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fods")]
#[command(version)]
#[command(about = "Build a Flat OpenDocument Spreadsheet (.fods) from JSON rows", long_about = None)]
struct Cli {
    /// Input JSON file (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Template file containing the TABLE_ROWS marker (bundled template if not provided)
    #[arg(short, long)]
    template: Option<String>,

    /// Currency code written on currency cells
    #[arg(long, default_value = fods::odf::constants::DEFAULT_CURRENCY)]
    currency: String,

    /// Write values without XML escaping (legacy output)
    #[arg(long)]
    no_escape: bool,

    /// Write only the table rows, without the template
    #[arg(long)]
    fragment: bool,

    /// Strict mode: exit with error if any diagnostics occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress diagnostic output to stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Result of turning rows into output text.
struct Rendered {
    /// `None` when strict mode rejected the build.
    output: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

/// Read, render and write. Returns `false` when strict mode withheld the output.
fn run(cli: &Cli) -> fods::Result<bool> {
    let rows = match cli.input_file {
        Some(ref path) => parse_rows(&fs::read_to_string(path)?)?,
        None => read_rows(io::stdin().lock())?,
    };

    let rendered = render(cli, &rows)?;

    if !cli.quiet {
        for diag in &rendered.diagnostics {
            eprintln!("{}", diag);
        }
    }

    let Some(output) = rendered.output else {
        eprintln!(
            "error: {} diagnostic(s) in strict mode, no output written",
            rendered.diagnostics.len()
        );
        return Ok(false);
    };

    match cli.output {
        Some(ref path) => fs::write(path, output)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        },
    }

    Ok(true)
}

fn render(cli: &Cli, rows: &[Row]) -> fods::Result<Rendered> {
    let template = if cli.fragment {
        None
    } else {
        Some(match cli.template {
            Some(ref path) => Template::open(path)?,
            None => Template::bundled()?,
        })
    };

    let options = EncoderOptions::default()
        .currency(cli.currency.as_str())
        .escape(if cli.no_escape {
            EscapePolicy::Verbatim
        } else {
            EscapePolicy::Escape
        });
    let build = SpreadsheetBuilder::with_options(options).build_with_diagnostics(rows);

    if cli.strict && !build.diagnostics.is_empty() {
        return Ok(Rendered {
            output: None,
            diagnostics: build.diagnostics,
        });
    }

    let output = match template {
        Some(ref template) => template.render(&build.markup),
        None => build.markup,
    };

    Ok(Rendered {
        output: Some(output),
        diagnostics: build.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fods::Cell;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fods").chain(args.iter().copied())).unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::from(vec![Cell::from("R&D"), Cell::currency("2.22")]),
            Row::from(vec![Cell::time("19:03:00")]),
        ]
    }

    #[test]
    fn test_default_run_wraps_rows_in_bundled_template() {
        let rendered = render(&cli(&["-q"]), &rows()).unwrap();
        let output = rendered.output.unwrap();
        assert!(output.contains("<office:document"));
        assert!(output.contains("<text:p>R&amp;D</text:p>"));
        assert!(output.contains(r#"office:currency="EUR""#));
        assert!(!output.contains("TABLE_ROWS"));
        assert!(rendered.diagnostics.is_empty());
    }

    #[test]
    fn test_fragment_leaves_out_the_template() {
        let output = render(&cli(&["--fragment"]), &rows()).unwrap().output.unwrap();
        assert!(output.starts_with("<table:table-row"));
        assert!(!output.contains("<office:document"));
    }

    #[test]
    fn test_no_escape_writes_values_verbatim() {
        let output = render(&cli(&["--fragment", "--no-escape"]), &rows())
            .unwrap()
            .output
            .unwrap();
        assert!(output.contains("<text:p>R&D</text:p>"));
        assert!(output.contains(r#"office:value="R&D""#));
    }

    #[test]
    fn test_currency_option() {
        let output = render(&cli(&["--fragment", "--currency", "USD"]), &rows())
            .unwrap()
            .output
            .unwrap();
        assert!(output.contains(r#"office:currency="USD""#));
        assert!(!output.contains("EUR"));
    }

    #[test]
    fn test_malformed_time_is_reported_but_written() {
        let malformed = vec![Row::from(vec![Cell::time("19:03")])];
        let rendered = render(&cli(&["--fragment"]), &malformed).unwrap();
        assert_eq!(rendered.diagnostics.len(), 1);
        assert!(rendered.output.unwrap().contains("PT19H03MS"));
    }

    #[test]
    fn test_strict_withholds_output_on_diagnostics() {
        let malformed = vec![Row::from(vec![Cell::time("19:03")])];
        let rendered = render(&cli(&["--strict"]), &malformed).unwrap();
        assert!(rendered.output.is_none());
        assert_eq!(rendered.diagnostics.len(), 1);

        let clean = render(&cli(&["--strict"]), &rows()).unwrap();
        assert!(clean.output.is_some());
    }

    #[test]
    fn test_strict_run_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rows.json");
        let output = dir.path().join("out.fods");
        fs::write(&input, r#"[[{"value": "19:03", "valueType": "time"}]]"#).unwrap();

        let cli = cli(&[
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--strict",
            "-q",
        ]);
        assert!(!run(&cli).unwrap());
        assert!(!output.exists());
    }

    #[test]
    fn test_run_with_custom_template_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rows.json");
        let template = dir.path().join("budget.fods");
        let output = dir.path().join("out.fods");
        fs::write(&input, r#"[["ABBA", {"value": "0.4", "valueType": "percentage"}]]"#).unwrap();
        let source = Template::bundled().unwrap().source().replace("Sheet1", "Budget");
        fs::write(&template, source).unwrap();

        let cli = cli(&[
            input.to_str().unwrap(),
            "-t",
            template.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);
        assert!(run(&cli).unwrap());

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains(r#"table:name="Budget""#));
        assert!(written.contains("<text:p>ABBA</text:p>"));
        assert!(written.contains(r#"table:style-name="ce4""#));
    }

    #[test]
    fn test_run_reports_input_errors() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rows.json");
        fs::write(&input, r#"[["a", null]]"#).unwrap();

        let err = run(&cli(&[input.to_str().unwrap(), "-q"])).unwrap_err();
        assert!(matches!(err, fods::Error::InvalidCell { .. }));
    }
}
