//! Command definition table and the generic routine that turns it into a
//! `clap::Command`.

use clap::{value_parser, Arg, ArgAction, Command};

/// Value shape of a command-line option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// TCP port, 1-65535.
    Port,
    /// Free-form text.
    Text,
    /// Filesystem path (existence is checked later, not here).
    Path,
    /// Positive number of seconds.
    Seconds,
    /// Presence flag, false unless given.
    Switch,
    /// `--long` / `--negated` pair; the last one given wins.
    Toggle { negated: &'static str },
}

/// One option of the command surface.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Key used to read the value back from `ArgMatches`.
    pub id: &'static str,
    pub long: &'static str,
    pub short: Option<char>,
    pub kind: OptionKind,
    /// Default as the user would type it. `None` means absent.
    pub default: Option<&'static str>,
    pub help: &'static str,
}

pub const PORT: &str = "port";
pub const HOST: &str = "host";
pub const PROJECT: &str = "project";
pub const SETTINGS: &str = "settings";
pub const TIMEOUT: &str = "timeout";
pub const DEBUG: &str = "debug";
pub const INCLUDE_LOGS: &str = "include_logs";

/// `--include-logs` / `--no-logs`.
pub const INCLUDE_LOGS_OPTION: OptionSpec = OptionSpec {
    id: INCLUDE_LOGS,
    long: "include-logs",
    short: None,
    kind: OptionKind::Toggle { negated: "no-logs" },
    default: Some("true"),
    help: "Include logs in API responses (default: true)",
};

/// The options accepted by the server command.
pub const RUN_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        id: PORT,
        long: "port",
        short: Some('p'),
        kind: OptionKind::Port,
        default: Some("9080"),
        help: "Port number to bind to",
    },
    OptionSpec {
        id: HOST,
        long: "host",
        short: Some('i'),
        kind: OptionKind::Text,
        default: Some("0.0.0.0"),
        help: "Host address to bind to",
    },
    OptionSpec {
        id: PROJECT,
        long: "project",
        short: Some('P'),
        kind: OptionKind::Path,
        default: None,
        help: "Path to the crawl project (defaults to the current directory)",
    },
    OptionSpec {
        id: SETTINGS,
        long: "settings",
        short: Some('s'),
        kind: OptionKind::Text,
        default: None,
        help: "Crawl engine settings as KEY=VALUE[,KEY=VALUE...]",
    },
    OptionSpec {
        id: TIMEOUT,
        long: "timeout",
        short: Some('t'),
        kind: OptionKind::Seconds,
        default: None,
        help: "Default timeout for crawls in seconds",
    },
    OptionSpec {
        id: DEBUG,
        long: "debug",
        short: Some('d'),
        kind: OptionKind::Switch,
        default: None,
        help: "Enable debug mode with verbose logging",
    },
    INCLUDE_LOGS_OPTION,
];

/// Build a `clap::Command` from option definitions.
pub fn build_command(name: &'static str, about: &'static str, specs: &[OptionSpec]) -> Command {
    let mut command = Command::new(name)
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .args_override_self(true);

    for spec in specs {
        command = command.arg(value_arg(spec));
        if let OptionKind::Toggle { negated } = spec.kind {
            command = command.arg(
                Arg::new(negated)
                    .long(negated)
                    .action(ArgAction::SetTrue)
                    .overrides_with(spec.id)
                    .help(format!("Opposite of --{}", spec.long)),
            );
        }
    }
    command
}

fn base_arg(spec: &OptionSpec) -> Arg {
    let mut arg = Arg::new(spec.id).long(spec.long).help(spec.help);
    if let Some(short) = spec.short {
        arg = arg.short(short);
    }
    arg
}

fn value_arg(spec: &OptionSpec) -> Arg {
    let arg = base_arg(spec);
    let arg = match spec.kind {
        OptionKind::Port => arg
            .value_name("PORT")
            .value_parser(value_parser!(u16).range(1..)),
        OptionKind::Text => arg.value_name("TEXT"),
        OptionKind::Path => arg
            .value_name("PATH")
            .value_parser(value_parser!(std::path::PathBuf)),
        OptionKind::Seconds => arg
            .value_name("SECONDS")
            .value_parser(parse_seconds),
        // Flags default to unset; a toggle's table default is read back
        // when neither half was given.
        OptionKind::Switch => return arg.action(ArgAction::SetTrue),
        OptionKind::Toggle { negated } => {
            return arg.action(ArgAction::SetTrue).overrides_with(negated)
        }
    };
    match spec.default {
        Some(default) => arg.default_value(default),
        None => arg,
    }
}

fn parse_seconds(raw: &str) -> Result<f64, String> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(format!("{secs} is not a positive number of seconds"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_option_registered() {
        let command = build_command("test", "test", RUN_OPTIONS);

        for spec in RUN_OPTIONS {
            let arg = command
                .get_arguments()
                .find(|a| a.get_id() == spec.id)
                .unwrap();
            assert_eq!(arg.get_long(), Some(spec.long));
            assert_eq!(arg.get_short(), spec.short);
        }
        assert!(command.get_arguments().any(|a| a.get_long() == Some("no-logs")));
    }

    #[test]
    fn test_flags_are_set_true() {
        let command = build_command("test", "test", RUN_OPTIONS);

        for id in [DEBUG, INCLUDE_LOGS, "no-logs"] {
            let arg = command.get_arguments().find(|a| a.get_id() == id).unwrap();
            assert!(matches!(arg.get_action(), ArgAction::SetTrue));
        }
        assert_eq!(
            INCLUDE_LOGS_OPTION.kind,
            OptionKind::Toggle { negated: "no-logs" }
        );
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("2.5"), Ok(2.5));
        assert_eq!(parse_seconds("30"), Ok(30.0));
        assert!(parse_seconds("0").is_err());
        assert!(parse_seconds("-1").is_err());
        assert!(parse_seconds("inf").is_err());
        assert!(parse_seconds("soon").is_err());
    }

    #[test]
    fn test_command_definition_is_consistent() {
        build_command("test", "test", RUN_OPTIONS).debug_assert();
    }
}
