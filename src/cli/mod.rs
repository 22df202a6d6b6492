//! Command-line front end: gathers the five parameters and prints the result.

mod parse;
mod prompts;

use std::io;
use std::process::ExitCode;

use zeroize::Zeroize;

use parse::{Mode, Request};
use passgen::Generator;
use passgen::settings::Settings;

const USAGE_EXIT: u8 = 2;

pub fn run(args: Vec<String>) -> ExitCode {
    let program = args.first().map(String::as_str).unwrap_or("passgen");

    let mode = match parse::parse(&args) {
        Ok(mode) => mode,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::usage(program);
            return ExitCode::from(USAGE_EXIT);
        }
    };

    let (request, interactive) = match mode {
        Mode::Help => {
            prompts::usage(program);
            return ExitCode::SUCCESS;
        }
        Mode::Version => {
            println!(
                "passgen {} (entropy: {})",
                env!("CARGO_PKG_VERSION"),
                passgen::rand::source_name()
            );
            return ExitCode::SUCCESS;
        }
        Mode::Interactive => match prompts::ask_request(&mut io::stdin().lock()) {
            Ok(request) => (request, true),
            Err(e) => {
                prompts::error(&e.to_string());
                return ExitCode::from(USAGE_EXIT);
            }
        },
        Mode::Args(request) => (request, false),
    };

    let code = generate(&load_generator(), &request);
    if interactive {
        prompts::wait_for_enter();
    }
    code
}

fn load_generator() -> Generator {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!(
            "Failed to load settings from {}: {}",
            Settings::path().display(),
            e
        ));
        Settings::default()
    });
    Generator::new(Some(&settings.generator_input()))
}

fn generate(generator: &Generator, req: &Request) -> ExitCode {
    match generator.generate(
        req.length,
        req.num_digits,
        req.num_symbols,
        req.allow_upper,
        req.allow_repeat,
    ) {
        Ok(mut password) => {
            println!("{password}");
            password.zeroize();
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
