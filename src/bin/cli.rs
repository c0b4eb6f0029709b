use anyhow::bail;
use clap::{Parser, Subcommand};
use rollbook::engine::RecordStore;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Record file to operate on.
    #[arg(short, long, default_value = "students.json")]
    file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Add a student record.
    Add {
        name: String,
        age: String,
        programme: String,
    },
    /// Print all records in insertion order.
    List,
    /// Look up a record by id or name.
    Find { keyword: String },
    /// Remove the record matching an id or name.
    Delete { keyword: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut store = RecordStore::open(&cli.file)?;

    match cli.command {
        Commands::Add {
            name,
            age,
            programme,
        } => {
            // Input validation belongs here, not in the store.
            if name.trim().is_empty() || age.trim().is_empty() || programme.trim().is_empty() {
                bail!("name, age and programme must all be non-empty");
            }
            let record = store.add(&name, &age, &programme)?;
            println!("Added: {}", record);
        }
        Commands::List => {
            if store.is_empty() {
                println!("No students recorded.");
            }
            for record in store.records() {
                println!("{}", record);
            }
        }
        Commands::Find { keyword } => match store.find(&keyword) {
            Some(record) => println!("{}", record),
            None => println!("No student matched '{}'.", keyword.trim()),
        },
        Commands::Delete { keyword } => match store.find(&keyword).map(|r| r.id) {
            Some(id) => {
                store.delete(id)?;
                println!("Deleted student with id {}.", id);
            }
            None => println!("No student matched '{}'.", keyword.trim()),
        },
    }

    Ok(())
}
