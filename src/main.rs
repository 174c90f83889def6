use anyhow::Result;
use clap::{value_parser, Arg, Command};
use colored::*;

use wattmon::commands;

fn build_cli() -> Command {
    Command::new("wattmon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Real-time energy consumption tracking simulator")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("track")
                .about("Run the energy tracking dashboard")
                .long_about(
                    "Run the energy tracking dashboard\n\n\
                     Simulates device energy consumption on a fixed tick: each tick adds\n\
                     the minutes-normalized watt rate to the kWh reading and accumulates\n\
                     the running cost. Use --json for a headless line-per-tick stream.",
                )
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("MS")
                        .help("Tick period in milliseconds")
                        .value_parser(value_parser!(u64))
                        .default_value("1000"),
                )
                .arg(
                    Arg::new("rate")
                        .short('r')
                        .long("rate")
                        .value_name("WATTS_PER_MIN")
                        .help("Initial device watt rate, minutes-normalized")
                        .value_parser(value_parser!(f64))
                        .default_value("1.0"),
                )
                .arg(
                    Arg::new("price")
                        .short('p')
                        .long("price")
                        .value_name("PRICE_PER_WH")
                        .help("Initial price per accumulated watt-hour")
                        .value_parser(value_parser!(f64))
                        .default_value("0.1"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Headless mode: print one JSON snapshot per tick")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("ticks")
                        .short('n')
                        .long("ticks")
                        .value_name("COUNT")
                        .help("Stop the JSON stream after COUNT ticks (0 = run until Ctrl-C)")
                        .value_parser(value_parser!(u64))
                        .default_value("0"),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1),
                ),
        )
}

fn main() -> Result<()> {
    wattmon::init_logging();

    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    if matches.get_flag("version") {
        commands::version()?;
        return Ok(());
    }

    match matches.subcommand() {
        Some(("track", sub_matches)) => {
            commands::track(sub_matches)?;
        }
        Some(("version", _)) => {
            commands::version()?;
        }
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut cli)?;
        }
        _ => {
            println!("{}", "Welcome to wattmon!".cyan().bold());
            println!();
            println!("{}", "Track simulated energy consumption in real time:".white());
            println!("  {}", "wattmon track".cyan().bold());
            println!();
            println!("{}", "Or stream readings for scripting:".white());
            println!("  {}", "wattmon track --json --ticks 10".dimmed());
            println!();
            println!("Use 'wattmon --help' for more information.");
        }
    }

    Ok(())
}
