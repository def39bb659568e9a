//! Subcommand handlers

use anyhow::Context;
use booking_core::{BookingConfig, BookingRequest, BookingService, BOOKING_SUCCESS};
use booking_model::{BookingField, BookingRecord};
use clap::ArgMatches;

use crate::output;

pub(crate) fn run(matches: &ArgMatches, config: &BookingConfig) -> anyhow::Result<()> {
    let Some((name, args)) = matches.subcommand() else {
        anyhow::bail!("no subcommand given");
    };
    let service = BookingService::open(config)?;

    match name {
        "init" => {
            println!("Bookings: {}", service.bookings().path().display());
            println!("Accounts: {}", service.accounts().path().display());
        }
        "signup" => {
            let account = service.sign_up(
                arg(args, "username")?,
                arg(args, "email")?,
                arg(args, "password")?,
            )?;
            println!("Registered {} <{}>", account.username, account.email);
        }
        "signin" => {
            let account = service.sign_in(arg(args, "user")?, arg(args, "password")?)?;
            println!("Signed in as {} <{}>", account.username, account.email);
        }
        "book" => book(&service, args)?,
        "list" => {
            let records = match args.get_one::<BookingField>("sort") {
                Some(field) => service.sort(*field, args.get_flag("desc"))?,
                None if args.get_flag("desc") => {
                    service.sort(BookingField::BookingTime, true)?
                }
                None => service.all_bookings()?,
            };
            print_records(&records, args.get_flag("json"))?;
        }
        "search" => {
            let field = args
                .get_one::<BookingField>("field")
                .copied()
                .context("missing search field")?;
            let records = service.search(arg(args, "query")?, field)?;
            print_records(&records, args.get_flag("json"))?;
        }
        "mine" => {
            let account = service.sign_in(arg(args, "user")?, arg(args, "password")?)?;
            let records = service.bookings_for(&account)?;
            print_records(&records, args.get_flag("json"))?;
        }
        "shops" => {
            let location = args.get_one::<String>("location").map(String::as_str);
            print!("{}", output::catalog(service.catalog(), location));
        }
        other => anyhow::bail!("unknown subcommand '{other}'"),
    }
    Ok(())
}

fn book(service: &BookingService, args: &ArgMatches) -> anyhow::Result<()> {
    let account = service.sign_in(arg(args, "user")?, arg(args, "password")?)?;
    let request = BookingRequest::new(
        arg(args, "phone")?,
        arg(args, "shop")?,
        arg(args, "time")?,
        arg(args, "location")?,
    );

    let confirmation = service.submit(&account, request)?;
    if args.get_flag("json") {
        println!(
            "{}",
            serde_json::to_string_pretty(&confirmation).context("encoding confirmation as JSON")?
        );
        return Ok(());
    }

    println!("{BOOKING_SUCCESS}");
    println!();
    println!("{confirmation}");
    println!();
    println!("{}", confirmation.sent_message());
    Ok(())
}

fn print_records(records: &[BookingRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(records).context("encoding bookings as JSON")?
        );
    } else {
        print!("{}", output::table(records));
    }
    Ok(())
}

fn arg<'a>(args: &'a ArgMatches, name: &str) -> anyhow::Result<&'a str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("missing argument '{name}'"))
}
