//! Embedding example: wire the handler into a program's argument loop.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p helpmatch-core --example embed -- --hellp
//! cargo run -p helpmatch-core --example embed -- --version
//! ```

use helpmatch_core::{Dialogue, HelpHandler};

const HELP_TEXT: &str = "\
usage: demo [OPTIONS]

A demonstration program that answers help and version requests,
misspellings included.";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut handler = HelpHandler::new();
    handler.set_name("demo").expect("valid name");
    handler.set_version_text("0.3.0").expect("valid version");
    // Report extra arguments we do not recognize.
    handler.configure(true, true, true);

    match handler.handle(&args, HELP_TEXT) {
        Ok(Dialogue::NoMatch) => {
            println!("(no help or version request detected; run your real logic here)");
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("demo: {e}");
            std::process::exit(1);
        }
    }
}
