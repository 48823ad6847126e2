// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use failure::{Error, ResultExt};
use log::info;
use seamcarve::SeamCarver;
use std::process;

fn dimension(matches: &ArgMatches, name: &str, current: u32) -> Result<u32, Error> {
    match matches.value_of(name) {
        None => Ok(current),
        Some(value) => Ok(value
            .parse::<u32>()
            .with_context(|_| format!("--{} expects a pixel count, got {:?}", name, value))?),
    }
}

fn run() -> Result<(), Error> {
    let matches = App::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the format follows the extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("PIXELS")
                .takes_value(true)
                .help("Target width (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .short("H")
                .long("height")
                .value_name("PIXELS")
                .takes_value(true)
                .help("Target height (default: unchanged)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the energy map instead of carving"),
        )
        .arg(Arg::with_name("grayscale").long("grayscale").help("Convert to grayscale"))
        .arg(Arg::with_name("invert").long("invert").help("Invert the colors"))
        .arg(
            Arg::with_name("flip-horizontal")
                .long("flip-horizontal")
                .help("Mirror left to right"),
        )
        .arg(
            Arg::with_name("flip-vertical")
                .long("flip-vertical")
                .help("Mirror top to bottom"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log every seam"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    // Both positionals are required, so clap has already refused to
    // get this far without them.
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input).with_context(|_| format!("could not read {}", input))?;
    let mut carver = SeamCarver::from_image(&image)?;
    info!("loaded {} at {:?}", input, carver.dimensions());

    if matches.is_present("energy") {
        carver
            .energy_image()
            .save(output)
            .with_context(|_| format!("could not write {}", output))?;
        return Ok(());
    }

    let (width, height) = carver.dimensions();
    let newwidth = dimension(&matches, "width", width)?;
    let newheight = dimension(&matches, "height", height)?;
    carver.resize(newwidth, newheight)?;

    if matches.is_present("grayscale") {
        carver.grayscale();
    }
    if matches.is_present("invert") {
        carver.invert_colors();
    }
    if matches.is_present("flip-horizontal") {
        carver.flip_horizontal();
    }
    if matches.is_present("flip-vertical") {
        carver.flip_vertical();
    }

    carver
        .to_image()
        .save(output)
        .with_context(|_| format!("could not write {}", output))?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("seamcarve: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
