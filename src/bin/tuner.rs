use lnetwork::command::{Outcome, Session};
use lnetwork::consts::DEFAULT_CONFIG_FILE;
use lnetwork::file::read_config;
use lnetwork::network::LNetwork;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::{env, process};

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "cmd> ")?;
    out.flush()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    println!("L-Network Simulator");

    let config_file = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

    let mut network = LNetwork::new();
    if let Err(e) = read_config(&config_file, &mut network) {
        eprintln!("Error loading config: {}: {}", config_file, e);
        process::exit(1);
    }

    let mut session = Session::new(network);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        match session.run(&line?) {
            Ok(Outcome::Output(out)) => print!("{}", out),
            Ok(Outcome::Quit) => return Ok(()),
            Err(e) => println!("cmd error: {}", e),
        }
        prompt(&mut stdout)?;
    }
    Ok(())
}
