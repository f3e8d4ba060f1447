use crate::Span;
use colored::{ColoredString, Colorize};

pub(crate) trait DiagnosticColorer {
    fn title(&self) -> &'static str;

    fn primary_color(&self, token: &str) -> ColoredString;
}

/// Renders the diagnostic with the source lines around the span, the
/// offending segment highlighted.
pub(crate) fn pretty_print(
    f: &mut dyn std::io::Write,
    file_name: &str,
    text: &str,
    span: &Span,
    description: &str,
    colorer: &dyn DiagnosticColorer,
) -> std::io::Result<()> {
    let start = std::cmp::min(span.start, text.len());
    let start_line_number = text[..start].matches('\n').count();
    let file_lines = text.split('\n').collect::<Vec<&str>>();

    let chars_in_line_before: usize = file_lines[..start_line_number].iter().map(|l| l.len()).sum();
    // Don't forget to count the line breaks.
    let chars_in_line_before = chars_in_line_before + start_line_number;

    let line = file_lines[start_line_number];

    let start_in_line = std::cmp::min(start - chars_in_line_before, line.len());
    let end_in_line = std::cmp::min(start_in_line + (span.end - span.start), line.len());

    let prefix = &line[..start_in_line];
    let offending = &line[start_in_line..end_in_line];
    let suffix = &line[end_in_line..];

    let expanded_line = format!("{}{}{}", prefix, colorer.primary_color(offending).bold(), suffix);

    writeln!(
        f,
        "{}: {}",
        colorer.primary_color(colorer.title()).bold(),
        description.bold()
    )?;
    writeln!(
        f,
        "  {}  {}",
        "-->".bright_blue().bold(),
        format!("{}:{}", file_name, start_line_number + 1).underline()
    )?;
    writeln!(f, "{}", format_line_number(0))?;

    let previous_line = if start_line_number > 0 {
        file_lines[start_line_number - 1]
    } else {
        ""
    };
    writeln!(f, "{}{}", format_line_number(start_line_number), previous_line)?;
    writeln!(f, "{}{}", format_line_number(start_line_number + 1), expanded_line)?;

    // When the span continues past the end of the line, also print the line
    // the span runs into.
    if span.end > chars_in_line_before + line.len() {
        if let Some(next_line) = file_lines.get(start_line_number + 1) {
            writeln!(f, "{}{}", format_line_number(start_line_number + 2), next_line)?;
        }
    }

    writeln!(f, "{}", format_line_number(0))
}

fn format_line_number(line_number: usize) -> ColoredString {
    if line_number > 0 {
        format!("{line_number:2} | ").bright_blue().bold()
    } else {
        "   | ".bright_blue().bold()
    }
}
