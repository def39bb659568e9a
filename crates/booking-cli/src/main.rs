//! `booking` command line front end
//!
//! Configuration comes from defaults, an optional `--config` TOML file, the
//! `BOOKING_*` environment variables and finally the global flags. Logs go
//! to stderr and honour `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use booking_core::{BookingConfig, BookingError};
use booking_model::BookingField;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let config = match resolve_config(&matches) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_level);

    match commands::run(&matches, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn build_cli() -> Command {
    let user = Arg::new("user")
        .long("user")
        .short('u')
        .required(true)
        .help("Username or email to sign in with");
    let password = Arg::new("password")
        .long("password")
        .short('p')
        .required(true)
        .help("Account password");
    let json = Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON");

    Command::new("booking")
        .version(booking_core::VERSION)
        .about("Luxury boutique booking: accounts, validated bookings and listings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding bookings.csv and users.csv"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Shop catalog TOML file instead of the built-in one"),
        )
        .subcommand(Command::new("init").about("Create the booking and account files"))
        .subcommand(
            Command::new("signup")
                .about("Register a new account")
                .arg(Arg::new("username").long("username").required(true).help("Username"))
                .arg(Arg::new("email").long("email").required(true).help("Email address"))
                .arg(password.clone()),
        )
        .subcommand(
            Command::new("signin")
                .about("Check credentials")
                .arg(user.clone())
                .arg(password.clone()),
        )
        .subcommand(
            Command::new("book")
                .about("Book a shop visit as a signed-in user")
                .arg(user.clone())
                .arg(password.clone())
                .arg(Arg::new("phone").long("phone").required(true).help("Contact phone, digits only"))
                .arg(Arg::new("shop").long("shop").required(true).help("Shop name"))
                .arg(
                    Arg::new("time")
                        .long("time")
                        .required(true)
                        .help("Booking time, HH:MM AM/PM"),
                )
                .arg(
                    Arg::new("location")
                        .long("location")
                        .required(true)
                        .help("Shop location"),
                )
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("list")
                .about("List all bookings")
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .value_parser(value_parser!(BookingField))
                        .help("Column to sort by (default: Booking Time)"),
                )
                .arg(
                    Arg::new("desc")
                        .long("desc")
                        .action(ArgAction::SetTrue)
                        .help("Sort descending"),
                )
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("search")
                .about("Find bookings whose column contains a text, ignoring case")
                .arg(
                    Arg::new("field")
                        .required(true)
                        .value_parser(value_parser!(BookingField))
                        .help("Column to search, e.g. Email or shop_name"),
                )
                .arg(Arg::new("query").required(true).help("Text to look for"))
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("mine")
                .about("List the signed-in user's bookings")
                .arg(user)
                .arg(password)
                .arg(json),
        )
        .subcommand(
            Command::new("shops")
                .about("Show the shop catalog")
                .arg(
                    Arg::new("location")
                        .long("location")
                        .help("Only shops at this location"),
                ),
        )
}

/// Defaults, then the config file, then environment, then flags
fn resolve_config(matches: &ArgMatches) -> anyhow::Result<BookingConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => BookingConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => BookingConfig::new(),
    };
    config = config.with_env();

    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir);
    }
    if let Some(path) = matches.get_one::<PathBuf>("catalog") {
        config = config.with_catalog_file(path);
    }
    Ok(config)
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<BookingError>() {
        Some(booking) => {
            if !booking.is_user_error() {
                tracing::warn!("{err:#}");
            }
            eprintln!("{}", booking.user_message());
        }
        None => eprintln!("Error: {err:#}"),
    }
}
