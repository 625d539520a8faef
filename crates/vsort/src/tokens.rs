use anyhow::Context;
use anyhow::Result;
use clap::{Command, arg};
use version_sorter::{HyphenMode, Tokenizer};

use crate::config::Config;

pub fn args() -> Command {
    Command::new("tokens")
        .about("Show how versions are split into pieces")
        .long_about("Print the pieces each version is compared by. Words are quoted, numbers too large to compare by value end in '!'")
        .arg(arg!(<versions>... "Versions to split"))
        .arg(crate::hyphen_arg())
}

pub fn main(matches: &clap::ArgMatches, config: &Config) -> Result<()> {

    let versions = matches.get_many::<String>("versions").context("version expected")?;
    let hyphen = matches.get_one::<HyphenMode>("hyphen").copied();
    let sorter = config.sorter(hyphen, None);
    for v in versions {
        println!("{}", explain(sorter.tokenizer(), v));
    }

    Ok(())
}

// "1.0-rc2" -> "1.0-rc2 -> (1, 0, "rc", 2)"
fn explain(tokenizer: &Tokenizer, v: &str) -> String {
    let pieces = tokenizer.pieces(v).map(|p| p.to_string()).collect::<Vec<_>>();
    format!("{v} -> ({})", pieces.join(", "))
}
