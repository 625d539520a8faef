use anyhow::Result;
use camino::Utf8PathBuf;
use clap::{Command, arg};

mod compare;
mod config;
mod input;
mod sort;
mod tokens;

pub use config::Config;

pub fn get_cli() -> Command {
    build_cli(Command::new("vsort"))
}

pub fn build_cli(cmd: Command) -> Command {
    cmd.version(clap::crate_version!())
        .about("Sort version strings in natural order: 1.2.9 < 1.2.10, 2.0-rc1 < 2.0")
        .arg(arg!(-c --config <file> "use a specific config file"))
        .subcommand_required(true)
        .subcommand(sort::args("sort")
            .about("Sort versions in ascending order")
            .arg(arg!(-r --reverse "Sort in descending order"))
            .arg(arg!(-a --ascending "Sort in ascending order, even when the config says descending")
                .conflicts_with("reverse")
            )
        )
        .subcommand(sort::args("rsort")
            .about("Sort versions in descending order")
        )
        .subcommand(compare::args())
        .subcommand(tokens::args())
}

pub fn main_cli(matches: &clap::ArgMatches) -> Result<()> {

    let config_path = matches.get_one::<String>("config").map(Utf8PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    match matches.subcommand() {

        Some(("sort", matches)) => {
            return sort::main(matches, &config, sort_direction(matches));
        }

        Some(("rsort", matches)) => {
            return sort::main(matches, &config, Some(true));
        }

        Some(("compare", matches)) => {
            return compare::main(matches, &config);
        }

        Some(("tokens", matches)) => {
            return tokens::main(matches, &config);
        }

        _ => {
            anyhow::bail!("no subcmd");
        }
    }
}

// None leaves the direction to the config file
fn sort_direction(matches: &clap::ArgMatches) -> Option<bool> {
    if matches.get_flag("reverse") {
        Some(true)
    } else if matches.get_flag("ascending") {
        Some(false)
    } else {
        None
    }
}

fn hyphen_arg() -> clap::Arg {
    arg!(--hyphen <mode> "How '-' is treated: 'separator' (default) or 'pre-release'")
        .value_parser(clap::value_parser!(version_sorter::HyphenMode))
}
