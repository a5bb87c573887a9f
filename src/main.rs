use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use macmunge::{FormatOptions, MacAddress, ParseOptions};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print hex digits in upper case
    #[arg(long, global = true)]
    upper: bool,

    /// Separator printed between octets (empty for bare hex)
    #[arg(long, global = true, default_value = ":")]
    separator: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List interfaces that have a usable hardware address
    List,
    /// Print the hardware address of one interface
    Find { name: String },
    /// Decode an address and print it in canonical lowercase colon form
    Parse {
        text: String,

        /// Separators to strip before decoding (defaults to ":" and "-")
        #[arg(short = 's', long = "strip")]
        strip: Vec<String>,
    },
    /// Decode an address and print it with --upper / --separator applied
    Format {
        text: String,

        /// Separators to strip before decoding (defaults to ":" and "-")
        #[arg(short = 's', long = "strip")]
        strip: Vec<String>,
    },
    /// Randomize an address, a named interface's address, or this host's
    Munge {
        address: Option<MacAddress>,

        #[arg(short, long, conflicts_with = "address")]
        interface: Option<String>,
    },
    /// Print a random address with the group bit set
    Broadcast,
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;

    Ok(())
}

fn parse_options(strip: Vec<String>) -> ParseOptions {
    if strip.is_empty() {
        ParseOptions::default()
    } else {
        ParseOptions::new().separators(strip)
    }
}

/// Executes one command and returns the lines to print.
fn run(args: Args) -> Result<Vec<String>> {
    let format = FormatOptions::new().separator(args.separator.as_str());
    let format = if args.upper { format.upper() } else { format };
    let render = |mac: MacAddress| macmunge::format_hex(mac, &format);

    let lines = match args.command {
        Command::List => macmunge::interfaces()?
            .into_iter()
            .map(|interface| format!("{}\t{}", interface.name, render(interface.address)))
            .collect(),
        Command::Find { name } => {
            let mac = macmunge::interface(&name)
                .with_context(|| format!("looking up interface {name}"))?;
            vec![render(mac)]
        }
        Command::Parse { text, strip } => {
            vec![macmunge::parse_hex(&text, &parse_options(strip))?.to_string()]
        }
        Command::Format { text, strip } => {
            vec![render(macmunge::parse_hex(&text, &parse_options(strip))?)]
        }
        Command::Munge { address, interface } => {
            let mac = match (address, interface) {
                (Some(address), _) => macmunge::munge(address)?,
                (None, Some(name)) => {
                    let address = macmunge::interface(&name)
                        .with_context(|| format!("looking up interface {name}"))?;
                    info!("munging address of {name}");
                    macmunge::munge(address)?
                }
                (None, None) => macmunge::munge_host()?,
            };
            vec![render(mac)]
        }
        Command::Broadcast => vec![render(macmunge::broadcast_address()?)],
    };

    Ok(lines)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    for line in run(args)? {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(argv: &[&str]) -> Result<Vec<String>> {
        let args = Args::try_parse_from(std::iter::once("macmunge").chain(argv.iter().copied()))?;
        run(args)
    }

    #[test]
    fn format_applies_case_and_separator() {
        let lines = run_with(&["format", "75:df:40:2c:60:a2", "--upper", "--separator", "-"]).unwrap();

        assert_eq!(lines, vec!["75-DF-40-2C-60-A2".to_string()]);
    }

    #[test]
    fn format_with_empty_separator_is_bare() {
        let lines = run_with(&["format", "75-DF-40-2C-60-A2", "--separator", ""]).unwrap();

        assert_eq!(lines, vec!["75df402c60a2".to_string()]);
    }

    #[test]
    fn parse_prints_canonical_form() {
        let lines = run_with(&["parse", "75BBQdfBBQ40BBQ2cBBQ60BBQa2", "-s", "BBQ", "--upper"]).unwrap();

        assert_eq!(lines, vec!["75:df:40:2c:60:a2".to_string()]);
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(run_with(&["format", "F"]).is_err());
    }

    #[test]
    fn broadcast_has_group_bit() {
        let lines = run_with(&["broadcast", "--separator", ""]).unwrap();
        let mac: MacAddress = lines[0].parse().unwrap();

        assert!(mac.is_group());
    }

    #[test]
    fn munge_rejects_address_with_interface() {
        assert!(run_with(&["munge", "75:df:40:2c:60:a2", "--interface", "eth0"]).is_err());
    }
}
