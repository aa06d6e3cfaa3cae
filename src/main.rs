//! banner - print a short string in large block letters
//!
//! ```text
//! ######      #     #     #  #     #  #######  ######
//! #     #    # #    ##    #  ##    #  #        #     #
//! #     #   #   #   # #   #  # #   #  #        #     #
//! ######   #     #  #  #  #  #  #  #  #####    ######
//! #     #  #######  #   # #  #   # #  #        #   #
//! #     #  #     #  #    ##  #    ##  #        #    #
//! ######   #     #  #     #  #     #  #######  #     #
//! ```

use std::ffi::OsString;

use anyhow::Context;
use banner_core::{Banner, BannerComposer};
use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status for malformed command lines
const EXIT_USAGE: i32 = 1;

/// Flags that `--` can escape so they print as text
const ESCAPABLE_FLAGS: &[&str] = &["--help", "--version", "--debug"];

/// Print a string in large letters
#[derive(Parser, Debug)]
#[command(name = "banner")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(after_help = "To print the literal text \"--help\", run: banner -- --help")]
struct Args {
    /// String to print (max 10 characters)
    #[arg(allow_hyphen_values = true)]
    text: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Args {
    /// Parse a full command line, program name first.
    ///
    /// Text may start with a hyphen. `--` is only accepted as the last but
    /// one argument, directly before a flag name to print literally.
    fn parse_from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

        if let Some(pos) = argv.iter().skip(1).position(|arg| arg == "--") {
            let escaped = argv.get(pos + 2).and_then(|arg| arg.to_str());
            let is_flag = escaped.is_some_and(|arg| ESCAPABLE_FLAGS.contains(&arg));
            if !is_flag || argv.len() != pos + 3 {
                return Err(Self::command().error(
                    ErrorKind::InvalidValue,
                    "'--' may only come right before a flag name to print, e.g. '-- --help'",
                ));
            }
        }

        Self::try_parse_from(argv)
    }
}

fn main() -> anyhow::Result<()> {
    let args = match Args::parse_from_argv(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too and are not failures
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            err.print()?;
            std::process::exit(code);
        }
    };

    // Logs go to stderr; stdout carries nothing but the banner
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("banner={log_level},banner_core={log_level}")),
        ))
        .init();

    banner_core::init()?;
    tracing::debug!("Core initialized");

    let banner = render(&args);
    match banner.write_to(&mut std::io::stdout().lock()) {
        // Reader went away, e.g. `banner HELLO | head -1`
        Err(err) if err.is_broken_pipe() => {
            tracing::debug!("stdout closed early: {}", err);
            Ok(())
        }
        result => result.context("Failed to write banner to stdout"),
    }
}

fn render(args: &Args) -> Banner {
    tracing::debug!(text = %args.text, "Rendering banner");
    BannerComposer::new().render(&args.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use banner_core::Font;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arg_parsing() {
        let args = Args::try_parse_from(["banner", "hello"]).unwrap();
        assert_eq!(args.text, "hello");
        assert!(!args.debug);
    }

    #[test]
    fn test_arg_parsing_with_debug() {
        let args = Args::try_parse_from(["banner", "--debug", "hello"]).unwrap();
        assert_eq!(args.text, "hello");
        assert!(args.debug);
    }

    #[test]
    fn test_help_is_not_an_error() {
        let err = Args::parse_from_argv(["banner", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
        assert!(err.to_string().contains("max 10 characters"));
    }

    #[test]
    fn test_usage_errors() {
        for argv in [
            vec!["banner"],
            vec!["banner", "one", "two"],
            vec!["banner", "--", "FOO"],
            vec!["banner", "--"],
            vec!["banner", "HI", "--"],
            vec!["banner", "--", "--help", "extra"],
        ] {
            let err = Args::parse_from_argv(&argv).unwrap_err();
            assert!(err.use_stderr(), "{argv:?} should be a usage error");
        }
    }

    #[test]
    fn test_hyphen_leading_text() {
        for text in ["-5", "-HI-", "--HI", "-h", "-V", "-"] {
            let args = Args::parse_from_argv(["banner", text]).unwrap();
            assert_eq!(args.text, text);
        }

        let banner = render(&Args::parse_from_argv(["banner", "-5"]).unwrap());
        // '-' and '5' are 7 and 5 columns wide
        assert_eq!(banner.width(), 7 + 2 + 5 + 2);
    }

    #[test]
    fn test_escaped_flag_names() {
        for flag in ["--help", "--version", "--debug"] {
            let args = Args::parse_from_argv(["banner", "--", flag]).unwrap();
            assert_eq!(args.text, flag);
            assert!(!args.debug);
        }
    }

    #[test]
    fn test_version_is_not_an_error() {
        let err = Args::parse_from_argv(["banner", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_literal_help_text() {
        let args = Args::parse_from_argv(["banner", "--", "--help"]).unwrap();
        assert_eq!(args.text, "--help");

        let banner = render(&args);
        assert_eq!(banner.height(), 7);
        // six glyphs of width 7, each with a two column gutter
        assert_eq!(banner.width(), 6 * 9);
    }

    #[test]
    fn test_end_to_end_hi() {
        let args = Args::try_parse_from(["banner", "HI"]).unwrap();
        let output = render(&args).to_string();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|line| line.len() == 7 + 2 + 3 + 2));

        let font = Font::standard();
        let h = font.glyph('H').unwrap();
        let i = font.glyph('I').unwrap();
        for (row, line) in lines.iter().enumerate() {
            let expected = format!("{}  {}  ", h.rows()[row], i.rows()[row]);
            assert_eq!(*line, expected);
        }
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        let lower = render(&Args::try_parse_from(["banner", "hi"]).unwrap());
        let upper = render(&Args::try_parse_from(["banner", "HI"]).unwrap());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_long_text_truncated() {
        let args = Args::try_parse_from(["banner", "ABCDEFGHIJKLMNOP"]).unwrap();
        let capped = render(&Args::try_parse_from(["banner", "ABCDEFGHIJ"]).unwrap());
        assert_eq!(render(&args), capped);
    }
}
