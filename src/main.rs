// SPDX-License-Identifier: MPL-2.0
//! Binary entry point: parses CLI arguments and launches the application.

use iced_lightbox::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Iced Lightbox - a modal image viewer for a folder of pictures

USAGE:
  iced_lightbox [OPTIONS] [PATH]

OPTIONS:
  --lang <LOCALE>  Override the UI language (e.g. en-US, es)
  -h, --help       Print this help and exit
  --version        Print the version and exit

ARGS:
  <PATH>           Folder to browse, or an image file to open in the lightbox
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    if args.contains("--version") {
        println!("iced_lightbox {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let lang = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    let path = args.finish().into_iter().next().map(PathBuf::from);

    app::run(Flags { lang, path })
}
