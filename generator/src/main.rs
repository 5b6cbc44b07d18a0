use std::env::args;
use std::process::exit;

use ansi_term::{Color, Style};
use getopts::Options;
use lazy_static::lazy_static;
use log::debug;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod collect;
mod config;
mod error;
mod fetch;
mod generate;
mod lockfile;

use config::GenerateConfig;
use generate::generate;

lazy_static! {
    static ref BOLD_GREEN: Style = Style::new().bold().fg(Color::Green);
    static ref BOLD_YELLOW: Style = Style::new().bold().fg(Color::Yellow);
    static ref BOLD_RED: Style = Style::new().bold().fg(Color::Red);
}

pub fn info_print(title: &str, msg: &str) {
    println!("{} {}", BOLD_GREEN.paint(title), msg);
}

pub fn warn_print(title: &str, msg: &str) {
    eprintln!("{} {}", BOLD_YELLOW.paint(title), msg);
}

pub fn error_print(msg: &str) {
    eprintln!("{} {}", BOLD_RED.paint("error"), msg);
}

fn main() {
    let args = args().collect::<Vec<_>>();

    let mut opts = Options::new();
    opts.optflag("h", "help", "Print help information");
    opts.optflag("v", "verbose", "Print debug details during generation");
    opts.optopt("o", "output", "Write the generated source list to FILE", "FILE");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            error_print(&format!("args error: {e}"));
            show_help(&opts);
            exit(-1);
        }
    };

    if matches.opt_present("h") {
        show_help(&opts);
        exit(0);
    }

    init(matches.opt_present("v"));
    debug!("startup command line: {args:?}");

    let config = match GenerateConfig::from_matches(&matches) {
        Ok(config) => config,
        Err(err) => {
            error_print(&err.to_string());
            exit(err.exit_code());
        }
    };

    exit(generate(config))
}

/// Init the terminal logger, debug level when verbose.
fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .unwrap();
}

fn show_help(opts: &Options) {
    let brief = "Usage: node_generator [options] <manager> <lockfile>\n\n\
                 Generate offline cache sources from a package lockfile,\n\
                 `manager` must be `npm`.";
    print!("{}", opts.usage(brief));
}
