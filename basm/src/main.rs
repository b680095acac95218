#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use clap::Arg;

#[derive(Debug)]
enum IOErrorContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
enum Error {
    Basm(basm::Error),
    Io(std::io::Error, IOErrorContext, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => writeln!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IOErrorContext::ReadInput => "Reading input",
                    IOErrorContext::WriteOutput => "Writing output",
                },
                path.display(),
                err
            ),
            Error::Basm(err) => {
                writeln!(f, "Assembling input failed:")?;
                write!(f, "{}", err)
            }
        }
    }
}

fn main() {
    env_logger::init();

    // Parse command line arguments
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the input file to use")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .help("Sets the output file to write the image to"),
        )
        .arg(
            Arg::with_name("symbols")
                .short("s")
                .long("symbols")
                .takes_value(true)
                .value_name("SYMBOLS")
                .help("Sets the file to write the symbol table to"),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let output = matches.value_of("output");
    let symbols = matches.value_of("symbols");

    if let Err(err) = basm(input, output, symbols) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn basm(input: &str, output: Option<&str>, symbols: Option<&str>) -> Result<(), Error> {
    let input_path = Path::new(input);

    // Read input file
    let input_file = File::open(input_path)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, input_path.to_owned()))?;
    let mut buf_reader = BufReader::new(input_file);
    let mut source = String::new();

    buf_reader
        .read_to_string(&mut source)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, input_path.to_owned()))?;

    // Perform assembly
    let (image, symbol_table) = basm::assemble(&source).map_err(Error::Basm)?;

    let output_path: PathBuf = output
        .map(PathBuf::from)
        .unwrap_or_else(|| input_path.with_extension("bin"));

    // Write output file
    write_image(&image[..], &output_path)
        .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, output_path))?;

    // Write symbol table file (if path is set)
    if let Some(symbols_path_str) = symbols {
        let symbols_path = PathBuf::from(symbols_path_str);
        write_symbols(&symbol_table, &symbols_path)
            .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, symbols_path))?;
    }

    Ok(())
}

fn write_image(image: &[u8], path: &PathBuf) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(image)?;
    Ok(())
}

fn write_symbols(symbols: &basm::SymbolTable, path: &PathBuf) -> std::io::Result<()> {
    let mut entries: Vec<_> = symbols.iter().collect();
    entries.sort_by_key(|(_, index)| **index);

    let mut writer = BufWriter::new(File::create(path)?);
    for (name, index) in entries {
        writeln!(writer, "{}\t{}", name, index)?;
    }
    Ok(())
}
