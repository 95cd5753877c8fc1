use std::env;
use std::fs;
use std::process;

use chordbook::{
    mini_keyboard_states, note_indices_or_empty, recompute, transpose_chord_name_with, Catalog,
    EnharmonicPreference, KeyState, Recomputed,
};

const USAGE: &str = "Usage: chordbook notes <chord>...
       chordbook transpose <semitones> [--flat|--sharp] <chord>...
       chordbook list [--catalog <file.yaml>]
       chordbook show <number> [transposition] [--flat|--sharp] [--catalog <file.yaml>] [--json]";

/// Flags shared by the subcommands
struct Options {
    preference: EnharmonicPreference,
    catalog_path: Option<String>,
    json: bool,
    positional: Vec<String>,
}

fn usage_exit() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn parse_options(args: &[String]) -> Options {
    let mut options = Options {
        preference: EnharmonicPreference::default(),
        catalog_path: None,
        json: false,
        positional: Vec::new(),
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--flat" => options.preference = EnharmonicPreference::Flat,
            "--sharp" => options.preference = EnharmonicPreference::Sharp,
            "--json" => options.json = true,
            "--catalog" => match iter.next() {
                Some(path) => options.catalog_path = Some(path.clone()),
                None => usage_exit(),
            },
            _ => options.positional.push(arg.clone()),
        }
    }
    options
}

fn load_catalog(path: Option<&str>) -> Catalog {
    let mut catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading built-in catalog: {}", e);
            process::exit(1);
        }
    };

    if let Some(path) = path {
        let text = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading catalog '{}': {}", path, e);
                process::exit(1);
            }
        };
        match Catalog::from_yaml(&text) {
            Ok(user) => catalog.merge(user),
            Err(e) => {
                eprintln!("Error in catalog '{}': {}", path, e);
                process::exit(1);
            }
        }
    }
    catalog
}

/// One line per key: index, chord, and the chord's notes on a mini keyboard.
fn render_keys(result: &Recomputed) -> String {
    let mut out = String::new();
    for key in &result.keyboard_mapping.keys {
        let states = mini_keyboard_states(&note_indices_or_empty(&key.chord_name));
        let strip: String = states
            .iter()
            .map(|state| match state {
                KeyState::Active => '*',
                KeyState::Black => '#',
                KeyState::White => '.',
            })
            .collect();
        let colour = if key.is_black_key { "black" } else { "white" };
        out.push_str(&format!(
            "{:>2} {:<5} {:<10} {}\n",
            key.key_index, colour, key.chord_name, strip
        ));
    }
    out
}

fn parse_semitones(value: &str) -> i32 {
    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Invalid semitone count '{}'", value);
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage_exit();
    }

    let options = parse_options(&args[2..]);

    match args[1].as_str() {
        "notes" => {
            if options.positional.is_empty() {
                usage_exit();
            }
            for name in &options.positional {
                match chordbook::try_note_indices(name) {
                    Ok(notes) => println!("{}: {:?}", name, notes),
                    Err(e) => {
                        eprintln!("{}", e);
                        process::exit(1);
                    }
                }
            }
        }
        "transpose" => {
            if options.positional.len() < 2 {
                usage_exit();
            }
            let semitones = parse_semitones(&options.positional[0]);
            let mut moved = Vec::new();
            for name in &options.positional[1..] {
                match transpose_chord_name_with(name, semitones, options.preference) {
                    Ok(chord) => moved.push(chord),
                    Err(e) => {
                        eprintln!("{}", e);
                        process::exit(1);
                    }
                }
            }
            println!("{}", moved.join(" "));
        }
        "list" => {
            let catalog = load_catalog(options.catalog_path.as_deref());
            for set in catalog.iter() {
                println!("{:>3}: {}", set.number, set.name);
            }
        }
        "show" => {
            let number = match options.positional.first().map(|n| n.parse::<u32>()) {
                Some(Ok(n)) => n,
                Some(Err(_)) => {
                    eprintln!("Invalid progression number '{}'", options.positional[0]);
                    process::exit(1);
                }
                None => usage_exit(),
            };
            let transposition = options
                .positional
                .get(1)
                .map(|value| parse_semitones(value))
                .unwrap_or(0);

            let catalog = load_catalog(options.catalog_path.as_deref());
            let result = catalog
                .get(number)
                .and_then(|set| recompute(set, transposition, options.preference));
            let result = match result {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            };

            if options.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing result: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                println!("{}", result.display_text);
                print!("{}", render_keys(&result));
            }
        }
        other => {
            eprintln!("Unknown command '{}'", other);
            usage_exit();
        }
    }
}
