//! Interactive prompt to collect stations and routes and query shortest routes
use std::path::{Path, PathBuf};

use reedline_repl_rs::clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use reedline_repl_rs::Repl;
use route_core::{
    error::{InputError, SearchError},
    input::{Network, Route},
    search::dijkstra::Dijkstra,
    statistics::average_degree,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum ReplError {
    #[error("{0}")]
    Repl(reedline_repl_rs::Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Load(#[from] anyhow::Error),

    #[error("missing argument `{0}`")]
    MissingArgument(&'static str),
}

impl From<reedline_repl_rs::Error> for ReplError {
    fn from(err: reedline_repl_rs::Error) -> Self {
        ReplError::Repl(err)
    }
}

type Result<T> = std::result::Result<T, ReplError>;

#[derive(Default)]
struct Context {
    network: Network,
}

fn arg<'a>(args: &'a ArgMatches, name: &'static str) -> Result<&'a String> {
    args.get_one::<String>(name)
        .ok_or(ReplError::MissingArgument(name))
}

fn station_command() -> Command {
    Command::new("station")
        .arg(
            Arg::new("name")
                .required(true)
                .num_args(1..)
                .help("Names of the new stations"),
        )
        .about("Add one or more stations")
}

/// Add stations
fn add_stations(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let names = args
        .get_many::<String>("name")
        .ok_or(ReplError::MissingArgument("name"))?;

    let mut added = 0;
    for name in names {
        context.network.add_station(name.as_str())?;
        added += 1;
    }
    Ok(Some(format!(
        "Added {} station(s), {} known",
        added,
        context.network.stations().len()
    )))
}

fn route_command() -> Command {
    Command::new("route")
        .arg(Arg::new("from").required(true).help("Station the route starts at"))
        .arg(Arg::new("to").required(true).help("Station the route ends at"))
        .arg(
            Arg::new("distance")
                .value_parser(value_parser!(u64))
                .required(true)
                .help("Distance between both stations"),
        )
        .about("Add a route between two known stations")
}

fn add_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = arg(&args, "from")?;
    let to = arg(&args, "to")?;
    let distance = *args
        .get_one::<u64>("distance")
        .ok_or(ReplError::MissingArgument("distance"))?;

    context
        .network
        .add_route(Route::new(from.as_str(), to.as_str(), distance))?;
    Ok(Some(format!("Added route {} <-> {} ({})", from, to, distance)))
}

fn routes_command() -> Command {
    Command::new("routes")
        .arg(
            Arg::new("line")
                .required(true)
                .num_args(1..)
                .help("Routes as FROM,TO,DISTANCE"),
        )
        .about("Add several routes between known stations")
}

/// Add routes given as text lines
fn add_route_lines(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let lines = args
        .get_many::<String>("line")
        .ok_or(ReplError::MissingArgument("line"))?;

    let mut added = 0;
    for line in lines {
        context.network.add_route_line(line)?;
        added += 1;
    }
    Ok(Some(format!(
        "Added {} route(s), {} known",
        added,
        context.network.routes().len()
    )))
}

fn load_command() -> Command {
    Command::new("load")
        .arg(
            Arg::new("file")
                .required(true)
                .help("Routes file with a `source,target,weight` header"),
        )
        .about("Load stations and routes from a file")
}

fn load(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let file = arg(&args, "file")?;
    let network = Network::read_csv(Path::new(file))?;
    let routes = network.routes().len();
    context.network.extend(network);

    Ok(Some(format!("Loaded {} route(s) from {}", routes, file)))
}

/// Print network info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = context.network.to_graph();
    Ok(Some(format!(
        "Network has {} stations and {} routes, {:.2} routes per station",
        g.num_nodes(),
        g.num_edges(),
        average_degree(&g)
    )))
}

/// List stations and their routes
fn list(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut out = String::new();
    for station in context.network.stations() {
        out.push_str(&format!("{}\n", station));
    }
    for route in context.network.routes() {
        out.push_str(&format!("{} <-> {}: {}\n", route.from, route.to, route.distance));
    }
    Ok(Some(out.trim_end().to_string()))
}

fn path_command() -> Command {
    Command::new("path")
        .arg(Arg::new("start").required(true).help("Name of the start station"))
        .arg(Arg::new("end").required(true).help("Name of the end station"))
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Also print the distance to every station reached"),
        )
        .about("Calculate the shortest route using Dijkstra's algorithm")
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let query = context
        .network
        .query(arg(&args, "start")?, arg(&args, "end")?)?;

    // Fresh graph for every query
    let g = context.network.to_graph();
    let mut dijkstra = Dijkstra::new(&g);
    let result = dijkstra.search(&query.start, &query.end)?;

    let mut out = String::new();
    if result.is_reachable() {
        out.push_str(&format!("Shortest Path: {}\n", result.render()));
        out.push_str(&format!("Total Distance: {}\n", result.distance));
    } else {
        out.push_str(&format!(
            "No path exists between {} and {}.\n",
            query.start, query.end
        ));
    }

    if args.get_flag("all") {
        for (station, distance) in result.distances.iter() {
            out.push_str(&format!("  {}: {}\n", station, distance));
        }
    }
    out.push_str(&format!("Took: {:?}", dijkstra.stats.duration));
    Ok(Some(out))
}

fn reset(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    context.network = Network::new();
    Ok(Some("Removed all stations and routes".to_string()))
}

fn main() -> Result<()> {
    env_logger::init();

    let mut context = Context::default();
    if let Some(path_to_routes) = std::env::args().nth(1) {
        context.network = Network::read_csv(Path::new(&path_to_routes))?;
    }

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Shortest routes between stations")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(".pathfinder_history"), 100)
        .with_command(station_command(), add_stations)
        .with_command(route_command(), add_route)
        .with_command(routes_command(), add_route_lines)
        .with_command(load_command(), load)
        .with_command(Command::new("info").about("Print network info"), info)
        .with_command(Command::new("list").about("List stations and routes"), list)
        .with_command(path_command(), run_dijkstra)
        .with_command(
            Command::new("reset").about("Remove all stations and routes"),
            reset,
        );

    Ok(repl.run()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(command: Command, args: &[&str]) -> ArgMatches {
        command.try_get_matches_from(args).unwrap()
    }

    fn session() -> Context {
        let mut context = Context::default();
        add_stations(
            matches(station_command(), &["station", "S1", "S2", "S3", "Depot"]),
            &mut context,
        )
        .unwrap();
        for (from, to, distance) in [("S1", "S2", "10"), ("S2", "S3", "15"), ("S1", "S3", "30")] {
            add_route(
                matches(route_command(), &["route", from, to, distance]),
                &mut context,
            )
            .unwrap();
        }
        context
    }

    #[test]
    fn shortest_path() {
        let mut context = session();

        let out = run_dijkstra(matches(path_command(), &["path", "S1", "S3"]), &mut context)
            .unwrap()
            .unwrap();

        assert!(out.starts_with("Shortest Path: S1 → (10) → S2 → (15) → S3\nTotal Distance: 25\n"));
    }

    #[test]
    fn no_path() {
        let mut context = session();

        let out = run_dijkstra(
            matches(path_command(), &["path", "--all", "S1", "Depot"]),
            &mut context,
        )
        .unwrap()
        .unwrap();

        assert!(out.starts_with("No path exists between S1 and Depot.\n"));
        assert!(out.contains("  S3: 25\n"));
        assert!(out.contains("  Depot: ∞\n"));
    }

    #[test]
    fn unknown_station() {
        let mut context = session();

        let err = run_dijkstra(matches(path_command(), &["path", "S1", "S9"]), &mut context)
            .unwrap_err();
        assert!(matches!(err, ReplError::Input(InputError::UnknownStation(_))));

        let err = add_route(
            matches(route_command(), &["route", "S1", "S9", "3"]),
            &mut context,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown station `S9`");
    }

    #[test]
    fn distance_must_be_a_number() {
        assert!(route_command()
            .try_get_matches_from(["route", "S1", "S2", "ten"])
            .is_err());
        assert!(route_command()
            .try_get_matches_from(["route", "S1", "S2", "-3"])
            .is_err());
    }

    #[test]
    fn routes_from_lines() {
        let mut context = Context::default();
        add_stations(
            matches(station_command(), &["station", "S1", "S2", "S3"]),
            &mut context,
        )
        .unwrap();

        let out = add_route_lines(
            matches(routes_command(), &["routes", "S1,S2,10", "S2 S3 15"]),
            &mut context,
        )
        .unwrap();
        assert_eq!(out, Some("Added 2 route(s), 2 known".to_string()));

        let out = run_dijkstra(matches(path_command(), &["path", "S1", "S3"]), &mut context)
            .unwrap()
            .unwrap();
        assert!(out.starts_with("Shortest Path: S1 → (10) → S2 → (15) → S3\nTotal Distance: 25\n"));

        let err = add_route_lines(
            matches(routes_command(), &["routes", "S1,S3"]),
            &mut context,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReplError::Input(InputError::MalformedRoute { .. })
        ));
        assert_eq!(context.network.routes().len(), 2);
    }

    #[test]
    fn list_stations_and_routes() {
        let mut context = session();

        let out = list(ArgMatches::default(), &mut context).unwrap().unwrap();
        assert_eq!(
            out,
            "S1\nS2\nS3\nDepot\nS1 <-> S2: 10\nS2 <-> S3: 15\nS1 <-> S3: 30"
        );
    }

    #[test]
    fn reset_clears_network() {
        let mut context = session();
        reset(ArgMatches::default(), &mut context).unwrap();

        assert!(context.network.stations().is_empty());
        assert!(context.network.routes().is_empty());
    }
}
