use clap::Parser;

use crate::{
    domain::location::{Location, ID_PARAM, QUERY_PARAM},
    utils::version,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 1.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    /// Launch Library 2 base URL, overriding the configured one
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Start with a search for QUERY, as if opened at `/?query=QUERY`
    #[arg(short, long)]
    pub query: Option<String>,

    /// Start on the detail page of launch ID, as if opened at `/?id=ID`
    #[arg(short, long)]
    pub id: Option<String>,
}

impl Cli {
    /// The location the first view is mounted from
    pub fn initial_location(&self) -> Location {
        let mut location = Location::root();
        if let Some(query) = &self.query {
            location = location.with_param(QUERY_PARAM, query);
        }
        if let Some(id) = &self.id {
            location = location.with_param(ID_PARAM, id);
        }
        location
    }
}
