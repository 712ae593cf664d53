use std::process;

use clap::{App, Arg};
use failure::{format_err, Error};
use imgseam::{calculate_energy, energy_to_image, negative, SeamCarver};

fn parse_count(raw: &str, flag: &str) -> Result<u32, Error> {
    raw.parse()
        .map_err(|_| format_err!("{} wants a non-negative integer, not {:?}", flag, raw))
}

fn run() -> Result<(), Error> {
    let matches = App::new("imgseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("in")
                .long("in")
                .value_name("FILE")
                .help("The image to read")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .value_name("FILE")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("COUNT")
                .help("How many columns to carve away")
                .default_value("0"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("COUNT")
                .help("How many rows to carve away")
                .default_value("0"),
        )
        .arg(
            Arg::with_name("mode")
                .long("mode")
                .possible_values(&["negative", "grayscale", "reduce"])
                .default_value("reduce")
                .help("The operation to perform"),
        )
        .get_matches();

    let output = matches.value_of("out").unwrap();
    let width_count = parse_count(matches.value_of("width").unwrap(), "--width")?;
    let height_count = parse_count(matches.value_of("height").unwrap(), "--height")?;

    // The image crate's errors are std errors, not Fail, so the codec
    // calls get funneled through format_err by hand.
    let image = image::open(matches.value_of("in").unwrap())
        .map_err(|e| format_err!("{}", e))?
        .to_rgb();

    match matches.value_of("mode").unwrap() {
        "negative" => negative(&image).save(output),
        "grayscale" => energy_to_image(&calculate_energy(&image)).save(output),
        _ => SeamCarver::new(&image)
            .reduce(width_count, height_count)?
            .save(output),
    }
    .map_err(|e| format_err!("{}", e))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("imgseam: {}", err);
        process::exit(1);
    }
}
