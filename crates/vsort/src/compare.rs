use anyhow::Context;
use anyhow::Result;
use clap::{Command, arg};
use version_sorter::{HyphenMode, Tokenizer};

use crate::config::Config;

pub fn args() -> Command {
    Command::new("compare")
        .about("Compare two versions")
        .long_about("Print -1, 0 or 1 when the first version is lesser, equal or greater than the second")
        .visible_alias("cmp")
        .arg(arg!(<a> "First version"))
        .arg(arg!(<b> "Second version"))
        .arg(crate::hyphen_arg())
}

pub fn main(matches: &clap::ArgMatches, config: &Config) -> Result<()> {

    let a = matches.get_one::<String>("a").context("version expected")?;
    let b = matches.get_one::<String>("b").context("version expected")?;
    let hyphen = matches.get_one::<HyphenMode>("hyphen").copied();
    let sorter = config.sorter(hyphen, None);

    println!("{}", compare(sorter.tokenizer(), a, b));

    Ok(())
}

fn compare(tokenizer: &Tokenizer, a: &str, b: &str) -> i8 {
    tokenizer.compare(a, b) as i8
}
