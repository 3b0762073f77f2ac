use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::process::ExitCode;

use clap::{Arg, Command};

use hampath::graph::{builder, hamiltonian};
use hampath::{Graph, Result};

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter("HAMPATH_LOG")
        .write_style("HAMPATH_LOG_STYLE");
    env_logger::init_from_env(env);

    let matches = Command::new("hampath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Searches for a Hamiltonian path in a small graph")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Graph description file; reads standard input when omitted"),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").map(String::as_str);
    let graph = match read_graph(input) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error reading graph: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match hamiltonian::find_path(&graph) {
        Some(path) => {
            let labels: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            println!("Hamiltonian path found: {}", labels.join(" "));
        }
        None => println!("No Hamiltonian path exists."),
    }
    ExitCode::SUCCESS
}

fn read_graph(input: Option<&str>) -> Result<Graph> {
    match input {
        Some(path) => builder::from_reader(BufReader::new(File::open(path)?)),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Reading graph from standard input; end with Ctrl-D.");
            }
            builder::from_reader(stdin.lock())
        }
    }
}
