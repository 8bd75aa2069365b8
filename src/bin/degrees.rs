//! Interactive degrees-of-separation CLI.
//!
//! `degrees [directory]` loads the CSV dataset (default `large`), prompts
//! for two names, disambiguates them if several people share a name, and
//! prints the shortest chain of shared movies.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use degrees_rs::{Dataset, Degrees, MovieId, NameMatch, PersonId};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: degrees [directory]");
        return ExitCode::FAILURE;
    }
    let directory = args.get(1).map(String::as_str).unwrap_or("large");

    println!("Loading data...");
    let degrees = match Degrees::from_csv_dir(directory) {
        Ok(degrees) => degrees,
        Err(err) => {
            eprintln!("Failed to load '{directory}': {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("Data loaded.");

    let Some(source) = prompt_person(&degrees) else {
        eprintln!("Person not found.");
        return ExitCode::FAILURE;
    };
    let Some(target) = prompt_person(&degrees) else {
        eprintln!("Person not found.");
        return ExitCode::FAILURE;
    };

    match degrees.shortest_path(&source, &target) {
        None => println!("Not connected."),
        Some(path) => {
            println!("{} degrees of separation.", path.len());
            let mut previous = source;
            for (i, hop) in path.iter().enumerate() {
                println!(
                    "{}: {} and {} starred in {}",
                    i + 1,
                    person_name(degrees.dataset(), &previous),
                    person_name(degrees.dataset(), &hop.person),
                    movie_title(degrees.dataset(), &hop.movie),
                );
                previous = hop.person.clone();
            }
        }
    }

    ExitCode::SUCCESS
}

/// Prompt for a name and resolve it to a single person id, asking the user
/// to pick an id when the name is ambiguous.
fn prompt_person(degrees: &Degrees) -> Option<PersonId> {
    let name = read_line("Name: ")?;
    match degrees.resolve(&name) {
        NameMatch::NotFound => None,
        NameMatch::Unique(id) => Some(id),
        NameMatch::Ambiguous(candidates) => {
            println!("Which '{name}'?");
            for id in &candidates {
                if let Some(person) = degrees.dataset().person(id) {
                    let birth = person
                        .birth
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    println!("ID: {}, Name: {}, Birth: {}", person.id, person.name, birth);
                }
            }
            let chosen = PersonId::from(read_line("Intended Person ID: ")?);
            candidates.contains(&chosen).then_some(chosen)
        }
    }
}

fn person_name<'a>(dataset: &'a Dataset, id: &PersonId) -> &'a str {
    dataset.person(id).map(|p| p.name.as_str()).unwrap_or("(unknown)")
}

fn movie_title<'a>(dataset: &'a Dataset, id: &MovieId) -> &'a str {
    dataset.movie(id).map(|m| m.title.as_str()).unwrap_or("(unknown)")
}

/// Print a prompt and read one trimmed line; `None` on EOF.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line).ok()?;
    if read == 0 {
        return None;
    }
    Some(line.trim().to_string())
}
