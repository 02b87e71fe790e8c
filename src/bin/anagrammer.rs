extern crate clap;

use std::io::{self, BufWriter, Read};
use std::process::exit;
use clap::{Arg, App};
use log::{info, warn, LevelFilter};

use anagrammer::*;

fn init_logging(debug: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if debug { LevelFilter::Debug } else { LevelFilter::Info });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn run<R: Read>(words: Words<R>, tokens: bool, params: ReportParameters) -> Result<usize> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    if tokens {
        info!("Outputting tokens...");
        write_tokens(words, &mut writer)
    } else {
        info!("Grouping anagrams...");
        process(words, params, &mut writer)
    }
}

fn main() {
    let args = App::new("Anagrammer")
                    .version("0.1")
                    .author("Maarten van Gompel (proycon) <proycon@anaproy.nl>")
                    .about("Groups all words in a text that are anagrams of one another")
                    .arg(Arg::with_name("file")
                        .help("Input file, use - for standard input")
                        .takes_value(true)
                        .required(true))
                    .arg(Arg::with_name("json")
                        .long("json")
                        .short("j")
                        .help("Output json instead of plain text")
                        .conflicts_with("signatures")
                        .required(false))
                    .arg(Arg::with_name("signatures")
                        .long("signatures")
                        .short("s")
                        .help("Output the signature (the sorted letters) before each group, tab separated")
                        .required(false))
                    .arg(Arg::with_name("min_size")
                        .long("min-size")
                        .short("m")
                        .help("Only output groups with at least this many words. Set to 1 to output all distinct words grouped by signature")
                        .takes_value(true)
                        .default_value("2")
                        .validator(|value| match value.parse::<usize>() {
                            Ok(size) if size > 0 => Ok(()),
                            _ => Err(String::from("Minimum group size should be a positive integer")),
                        }))
                    .arg(Arg::with_name("tokens")
                        .long("tokens")
                        .short("t")
                        .help("Do not group anything, just output the tokens found in the input, one per line")
                        .required(false))
                    .arg(Arg::with_name("debug")
                        .long("debug")
                        .short("D")
                        .help("Debug")
                        .required(false))
                    .get_matches();

    init_logging(args.is_present("debug"));

    let format = if args.is_present("json") {
        OutputFormat::Json
    } else if args.is_present("signatures") {
        OutputFormat::Signatures
    } else {
        OutputFormat::Plain
    };
    let min_group_size = args.value_of("min_size")
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(2);
    let params = ReportParameters::default()
        .with_format(format)
        .with_min_group_size(min_group_size);
    let tokens = args.is_present("tokens");

    let result = match args.value_of("file") {
        Some("-") | Some("STDIN") | Some("stdin") => {
            info!("(accepting standard input)");
            run(Words::new(io::stdin()), tokens, params)
        },
        Some(filename) => {
            info!("Reading corpus from {}...", filename);
            Words::open(filename).and_then(|words| run(words, tokens, params))
        },
        None => unreachable!("file is a required argument"),
    };

    match &result {
        Err(e) if e.is_fatal() => eprintln!("ERROR: {}", e),
        Err(AnagramError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => {},
        Err(e) => warn!("{}", e),
        Ok(_) => {},
    }
    exit(exit_status(&result));
}
