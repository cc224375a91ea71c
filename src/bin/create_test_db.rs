use std::collections::HashMap;
use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use catalog_rs::{Category, CategoryName, add_child_category, create_category, initialize_db};

/// A utility for creating a test database for the REST API server of catalog_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Each top level category and its subcategories.
const CATEGORY_TREE: [(&str, &[&str]); 3] = [
    ("Books", &["Fiction", "Cooking", "Science"]),
    ("Music", &["Jazz", "Classical"]),
    ("Electronics", &["Computers", "Cameras"]),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test categories...");

    seed_category_tree(&conn)?;

    println!("Success!");

    Ok(())
}

/// Insert [CATEGORY_TREE] and link Science under Computers as well as Books.
fn seed_category_tree(
    conn: &Connection,
) -> Result<HashMap<&'static str, Category>, Box<dyn Error>> {
    let mut categories = HashMap::new();

    for (parent_name, child_names) in CATEGORY_TREE {
        let parent = create_category(CategoryName::new(parent_name)?, conn)?;

        for child_name in child_names {
            let child = create_category(CategoryName::new(child_name)?, conn)?;
            add_child_category(parent.id, child.id, conn)?;
            categories.insert(*child_name, child);
        }

        categories.insert(parent_name, parent);
    }

    // Science belongs to more than one parent.
    let science = categories.get("Science").ok_or("Science was not created")?;
    let computers = categories
        .get("Computers")
        .ok_or("Computers was not created")?;
    add_child_category(computers.id, science.id, conn)?;

    Ok(categories)
}

#[cfg(test)]
mod seed_category_tree_tests {
    use catalog_rs::initialize_db;
    use rusqlite::Connection;

    use super::{CATEGORY_TREE, seed_category_tree};

    #[test]
    fn seeds_every_category_and_the_extra_science_link() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_db(&conn).unwrap();

        let categories = seed_category_tree(&conn).unwrap();

        let want_count: usize = CATEGORY_TREE
            .iter()
            .map(|(_, children)| children.len() + 1)
            .sum();
        assert_eq!(categories.len(), want_count);

        let science_parents: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM category_child WHERE child_id = ?1",
                [categories["Science"].id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(science_parents, 2);
    }
}
