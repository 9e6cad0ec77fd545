use crate::{config::Config, gateways};
use anyhow::Result;
use clap::{Parser, Subcommand};
use geoloc_core::{
    entities::{Address, Location, Units},
    gateways::cache::{CacheError, GeoLocationCache},
    geo,
    service_url::ServiceParameters,
};
use std::{path::PathBuf, process};

#[derive(Debug, Parser)]
#[command(version, about = "Resolve postal addresses to geo locations")]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the location of an address
    Locate {
        address: String,
        /// Language of the results
        #[arg(long)]
        language: Option<String>,
        /// Region bias as ccTLD code
        #[arg(long)]
        region: Option<String>,
        /// Bounding box bias, e.g. "34.17,-118.60|34.23,-118.50"
        #[arg(long)]
        bounds: Option<String>,
        /// Component filter, e.g. "country:DE"
        #[arg(long)]
        components: Option<String>,
    },
    /// Resolve the location of an address given by its parts
    Update {
        #[arg(long)]
        place: String,
        #[arg(long)]
        zip: Option<String>,
        #[arg(long)]
        street: Option<String>,
    },
    /// Calculate the destination from a starting point, bearing and distance
    #[command(allow_negative_numbers = true)]
    Destination {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        /// Bearing in degrees (0 = north, 90 = east)
        #[arg(long)]
        bearing: f64,
        #[arg(long)]
        distance: f64,
        /// "km" or any other value for miles
        #[arg(long, default_value = "km")]
        units: Units,
    },
    /// Calculate the bounding box around a point
    #[command(allow_negative_numbers = true)]
    Bbox {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        #[arg(long)]
        distance: f64,
        #[arg(long, default_value = "km")]
        units: Units,
    },
    /// Calculate the great-circle distance between two points
    #[command(allow_negative_numbers = true)]
    Distance {
        lat_a: f64,
        lng_a: f64,
        lat_b: f64,
        lng_b: f64,
        #[arg(long, default_value = "km")]
        units: Units,
    },
    /// Remove cached locations
    FlushCache {
        /// Only remove entries with this tag
        #[arg(long)]
        tag: Option<String>,
    },
}

fn service_parameters(pairs: [(&str, Option<String>); 4]) -> ServiceParameters {
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect()
}

fn load_geocoder(config: Option<PathBuf>) -> Result<gateways::GeoCoderGw> {
    let cfg = Config::try_load_from_file_or_default(config)?;
    gateways::geocoder(&cfg)
}

pub fn run(args: Args) -> Result<()> {
    let Args { config, command } = args;
    match command {
        Command::Locate {
            address,
            language,
            region,
            bounds,
            components,
        } => {
            let geocoder = load_geocoder(config)?;
            let params = service_parameters([
                ("language", language),
                ("region", region),
                ("bounds", bounds),
                ("components", components),
            ]);
            match geocoder.get_location(&address, &params)? {
                Some(pos) => println!("{pos}"),
                None => {
                    log::warn!("No location found for '{address}'");
                    process::exit(1);
                }
            }
        }
        Command::Update { place, zip, street } => {
            let geocoder = load_geocoder(config)?;
            let mut location = Location {
                pos: None,
                address: Address {
                    street,
                    zip,
                    place: Some(place),
                },
            };
            match geocoder.update_geo_location(&mut location)? {
                Some(pos) => {
                    log::info!("Updated location of {:?}", location.address);
                    println!("{pos}");
                }
                None => {
                    log::warn!("Location of {:?} remains unchanged", location.address);
                    process::exit(1);
                }
            }
        }
        Command::Destination {
            lat,
            lng,
            bearing,
            distance,
            units,
        } => {
            println!("{}", geo::destination(lat, lng, bearing, distance, units));
        }
        Command::Bbox {
            lat,
            lng,
            distance,
            units,
        } => {
            println!("{}", geo::bounding_box(lat, lng, distance, units));
        }
        Command::Distance {
            lat_a,
            lng_a,
            lat_b,
            lng_b,
            units,
        } => {
            let d = geo::distance(lat_a, lng_a, lat_b, lng_b, units);
            println!("{d} {units}");
        }
        Command::FlushCache { tag } => {
            let geocoder = load_geocoder(config)?;
            let cache = geocoder.cache();
            let result = match tag {
                Some(tag) => cache
                    .flush_by_tag(&tag)
                    .map(|count| log::info!("Removed {count} entries tagged with '{tag}'")),
                None => cache.flush().map(|()| log::info!("Removed all entries")),
            };
            match result {
                Ok(()) => {}
                Err(CacheError::Unavailable) => log::warn!("No cache was configured"),
                Err(err) => return Err(err.into()),
            }
        }
    }
    Ok(())
}
