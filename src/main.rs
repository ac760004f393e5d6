// page-turner - an in-memory library catalog with an interactive menu
//
// This is the main entry point. Parses CLI args, seeds the catalog and
// runs the menu loop. All console formatting lives here; the library
// modules stay pure.

use page_turner_lib::{
    catalog::{default_catalog, load_seed},
    core::{search_books, sort_books_by_criterion},
    intelligence::{recommend, Recommendation},
    Book, CatalogError, Result, Session,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut seed_path: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --seed requires a file path");
                    print_usage();
                    return Err(CatalogError::Generic("--seed requires a file path".to_string()));
                }
                seed_path = Some(args[i].clone());
            }
            "version" | "-v" | "--version" => {
                println!("page-turner v{}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "help" | "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                return Ok(());
            }
        }
        i += 1;
    }

    let catalog = match seed_path {
        Some(path) => match load_seed(Path::new(&path)) {
            Ok(books) => books,
            Err(e) => {
                eprintln!("{}", e.user_message());
                return Err(e);
            }
        },
        None => default_catalog(),
    };

    let mut session = Session::with_catalog(catalog);
    run_menu(&mut session)
}

fn run_menu(session: &mut Session) -> Result<()> {
    let mut input = io::stdin().lock().lines();

    loop {
        println!("\n==== Library Catalog Menu ====");
        println!("1. View all books");
        println!("2. Search books");
        println!("3. Add new book");
        println!("4. View recommendations");
        println!("5. View search history");
        println!("6. Status");
        println!("7. Exit");

        // EOF on stdin ends the session the same way Exit does
        let Some(choice) = prompt(&mut input, "Choose an option (1-7): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => handle_list(session, &mut input)?,
            "2" => handle_search(session, &mut input)?,
            "3" => handle_add(session, &mut input)?,
            "4" => handle_recommendations(session),
            "5" => handle_history(session),
            "6" => handle_status(session),
            "7" => break,
            _ => println!("Invalid option. Please try again."),
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line; None means EOF
fn prompt(
    input: &mut io::Lines<io::StdinLock<'static>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    match input.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn handle_list(
    session: &Session,
    input: &mut io::Lines<io::StdinLock<'static>>,
) -> Result<()> {
    let Some(raw) = prompt(input, "Sort by (e.g. title_asc, author_desc) [title_asc]: ")? else {
        return Ok(());
    };

    let criterion = if raw.is_empty() { "title_asc".to_string() } else { raw };

    // Unknown criteria silently list in current order
    let sorted = sort_books_by_criterion(session.books(), &criterion);
    print_books(&sorted);

    Ok(())
}

fn handle_search(
    session: &mut Session,
    input: &mut io::Lines<io::StdinLock<'static>>,
) -> Result<()> {
    let Some(term) = prompt(input, "Enter search term: ")? else {
        return Ok(());
    };

    // Everything typed goes into the history, even empty terms
    session.record_search(&term);

    let results = search_books(session.books(), &term);
    print_books(&results);

    Ok(())
}

fn handle_add(
    session: &mut Session,
    input: &mut io::Lines<io::StdinLock<'static>>,
) -> Result<()> {
    let Some(title) = prompt(input, "Enter book title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(input, "Enter author name: ")? else {
        return Ok(());
    };
    let Some(genre) = prompt(input, "Enter genre: ")? else {
        return Ok(());
    };

    session.add_book(&title, &author, &genre);
    println!("Book added successfully.");

    Ok(())
}

fn handle_recommendations(session: &Session) {
    match recommend(session.books(), session.history()) {
        Recommendation::NoHistory => {
            println!("No search history available.");
        }
        Recommendation::NoMatches => {
            println!("No personalized recommendations found.");
        }
        Recommendation::Matches { genre, author } => {
            if let Some(genre) = genre {
                println!("- You might enjoy more books in the genre: {}", genre);
            }
            if let Some(author) = author {
                println!("- You may like more books by author: {}", author);
            }
        }
    }
}

fn handle_history(session: &Session) {
    let history = session.history();

    if history.is_empty() {
        println!("No searches recorded yet.");
        return;
    }

    println!("\nSearch history:");
    println!("{}", "=".repeat(60));
    for (i, entry) in history.entries().iter().enumerate() {
        println!(
            "{:3}. {}  ({})",
            i + 1,
            entry.term,
            entry.searched_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
    println!("{}", "=".repeat(60));
}

fn handle_status(session: &Session) {
    let stats = session.stats();

    println!("\npage-turner Status");
    println!("{}", "=".repeat(60));
    println!("  Books:            {}", stats.total_books);
    println!("  Searches:         {}", stats.total_searches);
    println!("  Distinct genres:  {}", stats.distinct_genres);
    println!("  Distinct authors: {}", stats.distinct_authors);
    println!("{}", "=".repeat(60));
}

fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }
    for book in books {
        println!(" - {}", book);
    }
}

fn print_usage() {
    println!(
        r#"page-turner v{} - An in-memory library catalog

USAGE:
    page-turner [OPTIONS]

OPTIONS:
    --seed <path>          Load the catalog from a JSON file
    version                Show version
    help                   Show this help

Without --seed the catalog starts with a built-in set of six books.
The seed file is a JSON array of {{"title", "author", "genre"}} objects.

Once running, use the menu to list, search and add books, and to view
recommendations based on what you have searched for.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
