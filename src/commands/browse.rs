use std::io::{self, Write};

use anyhow::Result;

use crate::api::GitHub;
use crate::detail;
use crate::listing::Listing;
use crate::types::Repo;

/// Interactive listing prompt. One command per line; EOF or `quit` leaves.
pub fn run(github: &GitHub, mut listing: Listing) -> Result<()> {
    println!("\nRepositories of {}\n", listing.username());
    print_repos(listing.visible());
    println!("Type 'help' for commands.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        let (cmd, arg) = match line.split_once(' ') {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "more" | "m" => load_more(github, &mut listing),
            "filter" | "f" => match listing.set_language_filter(arg) {
                Ok(()) => print_repos(listing.visible()),
                Err(err) => eprintln!("{err}"),
            },
            "langs" => {
                if listing.languages().is_empty() {
                    println!("No languages detected yet.");
                } else {
                    println!("{}", listing.languages().join(", "));
                }
            }
            "list" => print_repos(listing.visible()),
            "show" | "s" => match arg.parse::<usize>() {
                Ok(n) if n >= 1 => match listing.select(n - 1) {
                    Some(repo) => println!("\n{}\n", detail::render(&repo)),
                    None => eprintln!("No repository at position {n}"),
                },
                _ => eprintln!("Usage: show <number>"),
            },
            "help" | "h" => print_help(),
            "quit" | "q" | "exit" => return Ok(()),
            other => eprintln!("Unknown command '{other}' (try 'help')"),
        }
    }
}

fn load_more(github: &GitHub, listing: &mut Listing) {
    let Some(page) = listing.begin_load() else {
        // Either a load is pending (impossible at this prompt) or the
        // terminal empty page was already seen.
        println!("All repositories loaded.");
        return;
    };

    match github.user_repos(listing.username(), page) {
        Ok(repos) => {
            listing.apply_page(repos);
            if listing.all_loaded() {
                println!("All repositories loaded.");
            } else {
                print_repos(listing.visible());
            }
        }
        Err(err) => {
            listing.abort_load();
            eprintln!("{err}");
        }
    }
}

fn print_repos(repos: &[Repo]) {
    for (i, repo) in repos.iter().enumerate() {
        println!("{:3}. {}", i + 1, repo.name);
        println!(
            "     {}",
            repo.description.as_deref().unwrap_or("No description available")
        );
        println!(
            "     Language: {}  |  ⭐ {}",
            repo.language.as_deref().unwrap_or("N/A"),
            repo.stargazers_count
        );
        println!();
    }
}

fn print_help() {
    println!("Commands:");
    println!("  more (m)          load the next page of repositories");
    println!("  filter <language> show only repositories in that language");
    println!("  filter            clear the language filter");
    println!("  langs             list the languages seen so far");
    println!("  list              reprint the current view");
    println!("  show <n>          show details for the n-th listed repository");
    println!("  quit (q)          leave");
}
