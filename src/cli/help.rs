//! Column-aligned flag help
//!
//! Renders a subcommand's flag set in the classic
//! `--name <ARG>   usage   (default: "value")` layout, aligned on the
//! longest flag name and the longest usage text.

use std::fmt::Write;

use clap::Command;

struct FlagLine {
    name: String,
    usage: String,
    default: Option<String>,
}

fn flag_lines(flags: &Command) -> Vec<FlagLine> {
    let mut lines: Vec<FlagLine> = flags
        .get_arguments()
        .filter_map(|arg| {
            let name = arg.get_long()?.to_string();
            let usage = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            let default = arg
                .get_default_values()
                .first()
                .map(|v| v.to_string_lossy().into_owned())
                .filter(|v| !v.is_empty());
            Some(FlagLine {
                name,
                usage,
                default,
            })
        })
        .collect();
    lines.sort_by(|a, b| a.name.cmp(&b.name));
    lines
}

/// Render help for `usage` (e.g. `tool sub [<args>]`) and every long flag of `flags`.
///
/// Flags are listed by name; the default annotation is omitted for empty defaults.
pub fn render_flag_help(usage: &str, flags: &Command) -> String {
    let lines = flag_lines(flags);
    let longest_name = lines.iter().map(|l| l.name.len()).max().unwrap_or(0);
    let longest_usage = lines.iter().map(|l| l.usage.len()).max().unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "\nUsage: {}\n\n", usage);
    for line in &lines {
        let _ = write!(
            out,
            "    --{} <ARG> {}{}{}",
            line.name,
            " ".repeat(longest_name - line.name.len() + 2),
            line.usage,
            " ".repeat(longest_usage - line.usage.len() + 2),
        );
        if let Some(default) = &line.default {
            let _ = write!(out, "  (default: {:?})", default);
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    fn sample_flags() -> Command {
        Command::new("sample")
            .arg(Arg::new("zeta").long("zeta").help("last flag"))
            .arg(
                Arg::new("alpha")
                    .long("alpha")
                    .help("first flag with longer usage")
                    .default_value("a"),
            )
    }

    #[test]
    fn given_flags_when_render_then_sorted_and_aligned() {
        let help = render_flag_help("tool sample [<args>]", &sample_flags());

        let expected = concat!(
            "\nUsage: tool sample [<args>]\n\n",
            "    --alpha <ARG>   first flag with longer usage    (default: \"a\")\n",
            "    --zeta <ARG>    last flag                     \n",
            "\n",
        );
        assert_eq!(help, expected);
    }

    #[test]
    fn given_no_flags_when_render_then_only_usage() {
        let help = render_flag_help("tool empty", &Command::new("empty"));
        assert_eq!(help, "\nUsage: tool empty\n\n\n");
    }
}
