use anyhow::Result;
use clap::{Command, arg};
use serde_json::Value;
use version_sorter::{HyphenMode, Sorter};

use crate::config::Config;
use crate::input;

pub fn args(name: &'static str) -> Command {
    Command::new(name)
        .long_about("Sort versions given as arguments, or one per line on stdin when none are given")
        .arg(arg!([versions]... "Versions to sort"))
        .arg(crate::hyphen_arg())
        .arg(arg!(--indices "Print the original position of each version instead of the version"))
        .arg(arg!(--unique "Drop versions equal to the one before them, 1.0 and 1.00 are equal"))
        .arg(arg!(--json "Read a JSON array on stdin and print a JSON array")
            .conflicts_with("versions")
        )
        .arg(arg!(--key <field> "With --json, sort objects by this string field")
            .requires("json")
        )
}

/// `descending` is `None` when the command line leaves the direction to the config.
pub fn main(matches: &clap::ArgMatches, config: &Config, descending: Option<bool>) -> Result<()> {

    let hyphen = matches.get_one::<HyphenMode>("hyphen").copied();
    let unique = matches.get_flag("unique") || config.unique;
    let indices = matches.get_flag("indices");

    let sorter = config.sorter(hyphen, descending);

    if matches.get_flag("json") {
        let items = input::read_json(std::io::stdin().lock())?;
        let key = matches.get_one::<String>("key").map(|s| s.as_str());
        println!("{}", sort_json(&sorter, &items, key, unique, indices)?);
        return Ok(());
    }

    let versions = match matches.get_many::<String>("versions") {
        Some(versions) => versions.cloned().collect(),
        None => input::read_lines(std::io::stdin().lock())?,
    };

    for line in sort_lines(&sorter, &versions, unique, indices) {
        println!("{line}");
    }

    Ok(())
}

fn order(sorter: &Sorter, keys: &[&str], unique: bool) -> Vec<usize> {
    let mut order = sorter.indices(keys);
    if unique {
        order.dedup_by(|a, b| sorter.compare(keys[*a], keys[*b]).is_eq());
    }
    order
}

pub fn sort_lines(sorter: &Sorter, versions: &[String], unique: bool, indices: bool) -> Vec<String> {
    let keys = versions.iter().map(String::as_str).collect::<Vec<_>>();
    let order = order(sorter, &keys, unique);
    if indices {
        order.iter().map(|i| i.to_string()).collect()
    } else {
        order.iter().map(|&i| versions[i].clone()).collect()
    }
}

/// Items that are not usable as versions fail the whole batch, before
/// anything is printed.
pub fn sort_json(sorter: &Sorter, items: &[Value], key: Option<&str>, unique: bool, indices: bool) -> Result<String> {
    let keys = input::versions_of(items, key)?;
    let order = order(sorter, &keys, unique);
    let out = if indices {
        serde_json::to_string(&order)?
    } else {
        let sorted = order.iter().map(|&i| items[i].clone()).collect::<Vec<_>>();
        serde_json::to_string(&sorted)?
    };
    Ok(out)
}
