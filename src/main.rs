use clap::Parser;
use jotter::application::NoteRepository;
use jotter::cli::{format_note, format_note_list, menu, Cli, Commands};
use jotter::error::JotterError;
use jotter::infrastructure::{resolve_store_path, JsonFileStore};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JotterError> {
    let store = JsonFileStore::new(resolve_store_path(cli.file));
    let mut repo = NoteRepository::open(store)?;

    match cli.command {
        Some(Commands::Add { title, body }) => {
            let note = repo.add(&title, &body)?;
            println!("Added '{}'", note.title);
            Ok(())
        }
        Some(Commands::List) => {
            println!("{}", format_note_list(repo.list_all()));
            Ok(())
        }
        Some(Commands::Read { query }) => match repo.find_by_title(&query) {
            Some(note) => {
                println!("{}", format_note(note));
                Ok(())
            }
            None => Err(JotterError::NoteNotFound(query)),
        },
        Some(Commands::Update { query, body }) => {
            let note = repo.update(&query, &body)?;
            println!("Updated '{}'", note.title);
            Ok(())
        }
        Some(Commands::Delete { query }) => {
            let note = repo.delete(&query)?;
            println!("Deleted '{}'", note.title);
            Ok(())
        }
        None => menu::run(&mut repo),
    }
}
