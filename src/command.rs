use crate::network::LNetwork;
use crate::report::{parameters_report, TuningReport};
use log::debug;
use simple_error::bail;
use std::error::Error;

pub const HELP: &str = "
simulator commands:

c <x.x>    set capacitor
i <X|x.x>  set inductor
f <x.xxx>  set frequency
o          show config
q          quit
s          calculate swr
";

/// One line of the command language
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Capacitance(f64),
    Frequency(f64),
    Inductance(f64),
    Tap(char),
    Show,
    Swr,
    Quit,
    Help,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, Box<dyn Error>> {
        let mut fields = line.split_whitespace();
        let cmd = match fields.next() {
            Some(c) => c.to_lowercase(),
            None => return Ok(Command::Help),
        };
        let arg = fields.next();
        let cmd = match cmd.as_str() {
            "c" => Command::Capacitance(parse_value(arg, "c")?),
            "f" => Command::Frequency(parse_value(arg, "f")?),
            "i" => match arg {
                Some(a) => match a.parse::<f64>() {
                    Ok(h) => Command::Inductance(h),
                    Err(_) => match a.to_uppercase().chars().next() {
                        Some(tap) => Command::Tap(tap),
                        None => bail!("usage: i <value>"),
                    },
                },
                None => bail!("usage: i <value>"),
            },
            "o" => Command::Show,
            "s" => Command::Swr,
            "q" => Command::Quit,
            _ => Command::Help,
        };
        Ok(cmd)
    }
}

fn parse_value(arg: Option<&str>, cmd: &str) -> Result<f64, Box<dyn Error>> {
    match arg.map(str::parse::<f64>) {
        Some(Ok(v)) => Ok(v),
        Some(Err(_)) | None => bail!("usage: {} <value>", cmd),
    }
}

/// Result of running a command
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// Interactive session owning one tuning network
#[derive(Clone, Debug, Default)]
pub struct Session {
    network: LNetwork,
}

impl Session {
    pub fn new(network: LNetwork) -> Session {
        Session { network }
    }

    pub fn network(&self) -> &LNetwork {
        &self.network
    }

    /// Parse and execute one line, blank lines do nothing
    pub fn run(&mut self, line: &str) -> Result<Outcome, Box<dyn Error>> {
        if line.trim().is_empty() {
            return Ok(Outcome::Output(String::new()));
        }
        self.execute(Command::parse(line)?)
    }

    pub fn execute(&mut self, cmd: Command) -> Result<Outcome, Box<dyn Error>> {
        debug!("command: {:?}", cmd);
        let net = &mut self.network;
        let out = match cmd {
            Command::Capacitance(c) => {
                net.set_capacitance(c)?;
                String::new()
            }
            Command::Frequency(f) => {
                net.set_frequency(f)?;
                String::new()
            }
            Command::Inductance(h) => {
                net.set_arbitrary_inductance(h)?;
                String::new()
            }
            Command::Tap(tap) => {
                net.select_inductor_tap(tap)?;
                String::new()
            }
            Command::Show => parameters_report(net),
            Command::Swr => {
                debug!("Xl: {:.6}", net.inductive_reactance());
                if let Ok(xc) = net.capacitive_reactance() {
                    debug!("Xc: {:.3}", xc);
                }
                let report = TuningReport::compute(net)?;
                debug!("tuned: {:.6}", report.tuned);
                report.to_string()
            }
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => HELP.to_string(),
        };
        Ok(Outcome::Output(out))
    }
}

#[cfg(test)]
mod command_tests {
    use super::*;
    use crate::file::parse_config;

    fn session() -> Session {
        let mut net = LNetwork::new();
        parse_config(
            "CAPACITOR 10 500\nINDUCTOR 1.0 3.0\nANTENNA 25 -20\nFREQUENCY 7.1",
            &mut net,
        )
        .unwrap();
        Session::new(net)
    }

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse("c 250").unwrap(), Command::Capacitance(250.0));
        assert_eq!(Command::parse("F 14.2").unwrap(), Command::Frequency(14.2));
        assert_eq!(Command::parse("i 2.2").unwrap(), Command::Inductance(2.2));
        assert_eq!(Command::parse("i b").unwrap(), Command::Tap('B'));
        assert_eq!(Command::parse("o").unwrap(), Command::Show);
        assert_eq!(Command::parse("s").unwrap(), Command::Swr);
        assert_eq!(Command::parse("Q").unwrap(), Command::Quit);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_usage() {
        assert_eq!(Command::parse("i").unwrap_err().to_string(), "usage: i <value>");
        assert_eq!(Command::parse("c").unwrap_err().to_string(), "usage: c <value>");
        assert_eq!(Command::parse("f x").unwrap_err().to_string(), "usage: f <value>");
    }

    #[test]
    fn test_settings() {
        let mut s = session();
        s.run("c 250").unwrap();
        assert_eq!(s.network().capacitance(), 250.0);
        s.run("i B").unwrap();
        assert_eq!(s.network().inductance(), 3.0);
        s.run("i 10").unwrap();
        assert_eq!(s.network().inductance(), 10.0);
        s.run("i 0").unwrap();
        assert_eq!(s.network().inductance(), 3.0);
        s.run("f 14").unwrap();
        assert_eq!(s.network().frequency(), 14.0);
    }

    #[test]
    fn test_rejected_settings() {
        let mut s = session();
        assert!(s.run("c 600").is_err());
        assert!(s.run("i C").is_err());
        assert!(s.run("f -1").is_err());
        assert_eq!(s.network().capacitance(), 255.0);
        assert_eq!(s.network().frequency(), 7.1);
    }

    #[test]
    fn test_swr() {
        let mut s = session();
        s.run("c 250").unwrap();
        s.run("i B").unwrap();
        let out = match s.run("s").unwrap() {
            Outcome::Output(out) => out,
            Outcome::Quit => panic!("unexpected quit"),
        };
        assert!(out.contains("Antenna: 25.0 - j20.0 \u{03a9}"));
        assert!(out.contains("Input: 15.9 + j113.9 \u{03a9}"));
        assert!(out.contains("SWR: 19.7"));
        assert!(s.network().tuned_impedance().is_some());
    }

    #[test]
    fn test_show_quit_help() {
        let mut s = session();
        match s.run("o").unwrap() {
            Outcome::Output(out) => assert!(out.contains("Inductor Taps: A:1 \u{00b5}H, B:3 \u{00b5}H")),
            Outcome::Quit => panic!("unexpected quit"),
        }
        assert_eq!(s.run("q").unwrap(), Outcome::Quit);
        assert_eq!(s.run("?").unwrap(), Outcome::Output(HELP.to_string()));
        assert_eq!(s.run("   ").unwrap(), Outcome::Output(String::new()));
    }
}
