use crate::enums::Topology;
use crate::network::LNetwork;
use log::{info, warn};
use regex::Regex;
use simple_error::bail;
use std::error::Error;
use std::fs;
use std::iter::Peekable;
use std::str::{FromStr, SplitWhitespace};

macro_rules! unwrap_or_bail {
    ($opt: expr, $msg: expr) => {
        match $opt {
            Some(v) => v,
            None => {
                bail!($msg);
            }
        }
    };
}

/// What a configuration pass applied to the network
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigSummary {
    pub lines: usize,
    pub directives: usize,
    pub unknown: Vec<String>,
}

/// Configuration keywords
#[derive(Clone, Copy, Debug, PartialEq)]
enum Directive {
    Capacitor,
    Inductor,
    Antenna,
    Frequency,
    HighPass,
}

impl FromStr for Directive {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CAPACITOR" => Ok(Directive::Capacitor),
            "INDUCTOR" => Ok(Directive::Inductor),
            "ANTENNA" => Ok(Directive::Antenna),
            "FREQUENCY" => Ok(Directive::Frequency),
            "HIGHPASS" => Ok(Directive::HighPass),
            _ => bail!("Unknown config parameter: {}", s),
        }
    }
}

fn next_f64(fields: &mut Peekable<SplitWhitespace>, what: &str) -> Result<f64, Box<dyn Error>> {
    let field = unwrap_or_bail!(fields.next(), format!("missing {}", what));
    match field.parse::<f64>() {
        Ok(v) => Ok(v),
        Err(_) => bail!("invalid {} '{}'", what, field),
    }
}

fn apply_line(
    net: &mut LNetwork,
    line: &str,
    re_number: &Regex,
    summary: &mut ConfigSummary,
) -> Result<(), Box<dyn Error>> {
    let mut fields = line.split_whitespace().peekable();
    while let Some(keyword) = fields.next() {
        let directive = match keyword.parse::<Directive>() {
            Ok(d) => d,
            Err(e) => {
                warn!("{}", e);
                summary.unknown.push(keyword.to_string());
                continue;
            }
        };
        match directive {
            Directive::Capacitor => {
                let min = next_f64(&mut fields, "minimum capacitance")?;
                let max = next_f64(&mut fields, "maximum capacitance")?;
                net.set_capacitor_range(min, max)?;
            }
            Directive::Inductor => {
                while let Some(field) = fields.next_if(|f| re_number.is_match(f)) {
                    net.add_inductor_tap(field.parse()?)?;
                }
            }
            Directive::Antenna => {
                let re = next_f64(&mut fields, "antenna resistance")?;
                let im = next_f64(&mut fields, "antenna reactance")?;
                net.set_antenna_impedance(re, im);
            }
            Directive::Frequency => {
                net.set_frequency(next_f64(&mut fields, "frequency")?)?;
            }
            Directive::HighPass => {
                let field = unwrap_or_bail!(fields.next(), "missing highpass flag");
                let flag: i64 = match field.parse() {
                    Ok(v) => v,
                    Err(_) => bail!("invalid highpass flag '{}'", field),
                };
                if Topology::from_flag(flag).is_high_pass() {
                    net.set_high_pass();
                }
            }
        }
        summary.directives += 1;
    }
    Ok(())
}

/// Apply configuration text to a network
///
/// Blank lines and lines starting with `#` are skipped. Unknown keywords are
/// reported and skipped; malformed arguments and rejected values abort with
/// the offending line number.
pub fn parse_config(content: &str, net: &mut LNetwork) -> Result<ConfigSummary, Box<dyn Error>> {
    let re_skip = Regex::new(r"^\s*(#.*)?$").expect("Invalid regex!");
    let re_number =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("Invalid regex!");

    let mut summary = ConfigSummary::default();
    for (i, line) in content.lines().enumerate() {
        summary.lines += 1;
        if re_skip.is_match(line) {
            continue;
        }
        if let Err(e) = apply_line(net, line, &re_number, &mut summary) {
            bail!("line {}: {}", i + 1, e);
        }
    }
    Ok(summary)
}

/// Read a configuration file and apply it to a network
pub fn read_config(file_path: &str, net: &mut LNetwork) -> Result<ConfigSummary, Box<dyn Error>> {
    info!("Read config file: {}", file_path);
    let content = fs::read_to_string(file_path)?;
    parse_config(&content, net)
}
