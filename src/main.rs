use std::net::IpAddr;
use std::process::exit;

use clap::parser::MatchesError;
use clap::{Arg, Command};

mod config;
mod endpoints;
mod error;
mod models;
mod musicbrainz;
mod routes;
mod youtube;

use crate::config::SplicrConfig;

struct Args {
    address: IpAddr,
    port: u16,
}

fn parse_cli_args() -> Result<Args, MatchesError> {
    let cmd = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("address")
                .short('a')
                .long("address")
                .required(false)
                .value_parser(clap::value_parser!(IpAddr))
                .default_value("127.0.0.1"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .required(false)
                .value_parser(clap::value_parser!(u16))
                .default_value("8000"),
        )
        .get_matches();

    let args = Args {
        address: *cmd.try_get_one::<IpAddr>("address")?.unwrap(),
        port: *cmd.try_get_one::<u16>("port")?.unwrap(),
    };
    Ok(args)
}

#[rocket::main]
async fn main() {
    let args = parse_cli_args().unwrap_or_else(|err| {
        eprintln!("Error parsing arguments: {}", err);
        exit(1);
    });
    let config = SplicrConfig::from_env().unwrap_or_else(|err| {
        eprintln!("{}", err);
        exit(1);
    });

    let figment = rocket::Config::figment()
        .merge(("address", args.address))
        .merge(("port", args.port));
    if let Err(err) = routes::build(figment, config).launch().await {
        eprintln!("Error launching server: {}", err);
        exit(1);
    }
}
