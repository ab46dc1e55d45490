//! Code Cracker - CLI
//!
//! Plays one game of Code Cracker on the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use code_cracker::{
    config::GameConfig,
    game::{GuessReader, Session},
    logging,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ffi::OsStr;
use std::io;

#[derive(Parser)]
#[command(
    name = "code_cracker",
    about = "Crack the hidden color code in 10 tries",
    version,
    author
)]
struct Cli {
    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output (also disabled by a non-empty `NO_COLOR`)
    #[arg(long)]
    no_color: bool,

    /// Seed for the secret code (same seed, same code)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let no_color = color_disabled(cli.no_color, std::env::var_os("NO_COLOR").as_deref());
    if no_color {
        colored::control::set_override(false);
    }
    logging::init_logging(cli.verbose, no_color)?;

    let config = GameConfig::standard().context("Invalid built-in game configuration")?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = Session::random(config, &mut rng);

    let mut reader = GuessReader::new(io::stdin().lock(), io::stdout().lock());
    session.play(&mut reader).context("Game ended early")?;

    Ok(())
}

/// Colors are off if `--no-color` was passed or `NO_COLOR` is set to any
/// non-empty value (<https://no-color.org>)
fn color_disabled(flag: bool, no_color_env: Option<&OsStr>) -> bool {
    flag || no_color_env.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_plays_with_defaults() {
        let cli = Cli::try_parse_from(["code_cracker"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_color);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn optional_flags_parse() {
        let cli =
            Cli::try_parse_from(["code_cracker", "-vv", "--no-color", "--seed", "42"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn invalid_seed_is_rejected() {
        assert!(Cli::try_parse_from(["code_cracker", "--seed", "abc"]).is_err());
    }

    #[test]
    fn any_non_empty_no_color_disables_colors() {
        for value in ["1", "yes", "true", "false", "0"] {
            assert!(color_disabled(false, Some(OsStr::new(value))), "NO_COLOR={value}");
        }
    }

    #[test]
    fn empty_or_unset_no_color_keeps_colors() {
        assert!(!color_disabled(false, None));
        assert!(!color_disabled(false, Some(OsStr::new(""))));
    }

    #[test]
    fn no_color_flag_wins_without_env() {
        assert!(color_disabled(true, None));
    }
}
