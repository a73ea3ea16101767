use clap::{Arg, ArgMatches, Command};

pub mod dashboard;
pub mod register;
pub mod schedule;

use campaign_cli::extensions::config::{Config, read_config};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;

const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";

/// Creates a writer of command result.
pub(crate) type OutWriterFn = fn(Option<File>) -> BufWriter<Box<dyn Write>>;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn create_config_arg() -> Arg {
    Arg::new(CONFIG_ARG_NAME).help("Specifies path to the configuration file").short('c').long(CONFIG_ARG_NAME)
}

fn create_out_result_arg() -> Arg {
    Arg::new(OUT_RESULT_ARG_NAME)
        .help("Specifies path to the file for result output")
        .short('o')
        .long(OUT_RESULT_ARG_NAME)
}

fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .unwrap_or_else(|| Ok(Config::default()))
}

fn get_out_writer(matches: &ArgMatches, out_writer_func: OutWriterFn) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    Ok(out_writer_func(out_file))
}

fn get_required_value<'a>(matches: &'a ArgMatches, arg_name: &str) -> Result<&'a str, String> {
    matches.get_one::<String>(arg_name).map(|value| value.as_str()).ok_or_else(|| format!("'{arg_name}' is not set"))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}
