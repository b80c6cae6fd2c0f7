//! CLI tool to inspect and extend a stored recipe collection.
//!
//! Usage:
//!   recipe-box list
//!   recipe-box show <N>
//!   recipe-box add --title T --description D --ingredients I --steps S [--image cake.png]
//!   recipe-box export
//!
//! Recipes live in `<data-dir>/<key>.json`, the same JSON array the web
//! app keeps in localStorage.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use recipe_box::{
    DEFAULT_KEY, FileStorage, Recipe, RecipeBook, RecipeError, RecipeField, RecipeStore, Storage,
    image,
};

/// Characters of description shown per line by `list`.
const EXCERPT_CHARS: usize = 60;

#[derive(Parser, Debug)]
#[command(name = "recipe-box", version, about = "Manage a locally stored recipe collection")]
struct Cli {
    /// Directory holding the storage files.
    #[arg(long, env = "RECIPE_BOX_DATA_DIR", default_value = "recipe-box-data")]
    data_dir: PathBuf,

    /// Storage key of the collection.
    #[arg(long, env = "RECIPE_BOX_KEY", default_value = DEFAULT_KEY)]
    key: String,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List stored recipes.
    List,
    /// Show every field of one recipe.
    Show {
        /// Recipe number as printed by `list` (starting at 1).
        number: usize,
    },
    /// Submit a new recipe.
    Add(NewRecipe),
    /// Print the stored JSON array.
    Export,
}

/// Fields of a recipe submitted from the command line.
#[derive(Args, Debug)]
struct NewRecipe {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    ingredients: String,
    #[arg(long)]
    steps: String,
    /// Image file to embed as a data URL.
    #[arg(long)]
    image: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> recipe_box::Result<()> {
    let mut store = RecipeStore::with_key(FileStorage::new(&cli.data_dir), cli.key);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List => {
            if list(&store, &mut out)? == 0 {
                eprintln!(
                    "No recipes stored under '{}' in {}",
                    store.key(),
                    store.storage().dir().display()
                );
            }
        }
        Command::Show { number } => show(&store, number, &mut out)?,
        Command::Add(recipe) => {
            let (index, total) = add(&mut store, recipe)?;
            eprintln!("Added recipe {} of {}", index + 1, total);
        }
        Command::Export => export(&store, &mut out)?,
    }
    Ok(())
}

/// Print one numbered line per recipe, returning how many were printed.
fn list<S: Storage>(store: &RecipeStore<S>, out: &mut impl Write) -> recipe_box::Result<usize> {
    let book = RecipeBook::load(store);
    for (i, recipe) in book.recipes().iter().enumerate() {
        writeln!(out, "{:>3}. {} - {}", i + 1, recipe.title, recipe.excerpt(EXCERPT_CHARS))
            .map_err(stdout_error)?;
    }
    Ok(book.recipes().len())
}

/// Print recipe `number`, counting from 1 as `list` does.
fn show<S: Storage>(
    store: &RecipeStore<S>,
    number: usize,
    out: &mut impl Write,
) -> recipe_box::Result<()> {
    let mut book = RecipeBook::load(store);
    let out_of_range = |count| RecipeError::NoSuchNumber { number, count };
    let index = number
        .checked_sub(1)
        .ok_or_else(|| out_of_range(book.recipes().len()))?;
    book.select(index)
        .map_err(|_| out_of_range(book.recipes().len()))?;
    if let Some(recipe) = book.selected() {
        print_recipe(out, recipe).map_err(stdout_error)?;
    }
    Ok(())
}

/// Submit a recipe, returning its index and the new collection size.
fn add<S: Storage>(
    store: &mut RecipeStore<S>,
    recipe: NewRecipe,
) -> recipe_box::Result<(usize, usize)> {
    let mut book = RecipeBook::load(store);
    book.set_field(RecipeField::Title, recipe.title);
    book.set_field(RecipeField::Description, recipe.description);
    book.set_field(RecipeField::Ingredients, recipe.ingredients);
    book.set_field(RecipeField::Steps, recipe.steps);
    if let Some(path) = recipe.image {
        let bytes = fs::read(&path).map_err(|source| RecipeError::Io {
            path: path.clone(),
            source,
        })?;
        book.set_image(image::to_data_url(image::mime_for_path(&path), &bytes));
    }
    let index = book.submit(store)?;
    Ok((index, book.recipes().len()))
}

/// Print the stored JSON, or an empty array when nothing is stored.
fn export<S: Storage>(store: &RecipeStore<S>, out: &mut impl Write) -> recipe_box::Result<()> {
    let json = store.raw()?.unwrap_or_else(|| "[]".to_string());
    writeln!(out, "{}", json).map_err(stdout_error)
}

fn print_recipe(out: &mut impl Write, recipe: &Recipe) -> io::Result<()> {
    writeln!(out, "{}", recipe.title)?;
    writeln!(out)?;
    writeln!(out, "{}", recipe.description)?;
    writeln!(out)?;
    writeln!(out, "Ingredients:")?;
    writeln!(out, "{}", recipe.ingredients)?;
    writeln!(out)?;
    writeln!(out, "Steps:")?;
    writeln!(out, "{}", recipe.steps)?;
    if let Some(url) = recipe.image.as_deref().filter(|s| !s.is_empty()) {
        writeln!(out)?;
        match image::describe(url) {
            Some((mime, size)) => writeln!(out, "Image: {} ({} bytes)", mime, size)?,
            None => writeln!(out, "Image: {}", url)?,
        }
    }
    Ok(())
}

fn stdout_error(source: io::Error) -> RecipeError {
    RecipeError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_recipe(title: &str) -> NewRecipe {
        NewRecipe {
            title: title.to_string(),
            description: format!("{title} for two"),
            ingredients: "rice\nbeans".to_string(),
            steps: "Cook the rice.\nWarm the beans.".to_string(),
            image: None,
        }
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> recipe_box::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_add_then_list_numbers_from_one() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RecipeStore::new(FileStorage::new(dir.path()));

        assert_eq!(add(&mut store, new_recipe("Rice")).unwrap(), (0, 1));
        assert_eq!(add(&mut store, new_recipe("Beans")).unwrap(), (1, 2));

        let mut buf = Vec::new();
        assert_eq!(list(&store, &mut buf).unwrap(), 2);
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["  1. Rice - Rice for two", "  2. Beans - Beans for two"]);
    }

    #[test]
    fn test_list_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecipeStore::new(FileStorage::new(dir.path()));
        let mut buf = Vec::new();
        assert_eq!(list(&store, &mut buf).unwrap(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_add_incomplete_recipe_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RecipeStore::new(FileStorage::new(dir.path()));
        let mut recipe = new_recipe("Rice");
        recipe.steps.clear();
        assert!(matches!(
            add(&mut store, recipe),
            Err(RecipeError::MissingField(RecipeField::Steps))
        ));
        assert!(store.raw().unwrap().is_none());
    }

    #[test]
    fn test_show_prints_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RecipeStore::new(FileStorage::new(dir.path()));
        add(&mut store, new_recipe("Rice")).unwrap();
        add(&mut store, new_recipe("Beans")).unwrap();

        let text = output(|out| show(&store, 2, out));
        assert_eq!(
            text,
            "Beans\n\nBeans for two\n\nIngredients:\nrice\nbeans\n\nSteps:\nCook the rice.\nWarm the beans.\n"
        );
    }

    #[test]
    fn test_show_out_of_range_reports_number() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RecipeStore::new(FileStorage::new(dir.path()));
        add(&mut store, new_recipe("A")).unwrap();
        add(&mut store, new_recipe("B")).unwrap();

        let err = show(&store, 3, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, RecipeError::NoSuchNumber { number: 3, count: 2 }));
        assert_eq!(err.to_string(), "no recipe number 3 (there are 2)");

        let err = show(&store, 0, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "no recipe number 0 (there are 2)");
    }

    #[test]
    fn test_export_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecipeStore::new(FileStorage::new(dir.path()));
        assert_eq!(output(|out| export(&store, out)), "[]\n");
    }

    #[test]
    fn test_export_prints_stored_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RecipeStore::new(FileStorage::new(dir.path()));
        add(&mut store, new_recipe("Rice")).unwrap();

        let text = output(|out| export(&store, out));
        let recipes: Vec<Recipe> = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Rice");
        assert_eq!(recipes[0].image, None);
    }

    #[test]
    fn test_add_with_image_embeds_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("plate.png");
        fs::write(&image_path, [0x89, b'P', b'N', b'G', 0, 1, 2]).unwrap();

        let mut store = RecipeStore::new(FileStorage::new(dir.path().join("data")));
        let mut recipe = new_recipe("Plated");
        recipe.image = Some(image_path);
        add(&mut store, recipe).unwrap();

        let book = RecipeBook::load(&store);
        let url = book.recipes().get(0).unwrap().image.clone().unwrap();
        assert_eq!(image::describe(&url), Some(("image/png", 7)));

        let text = output(|out| show(&store, 1, out));
        assert!(text.ends_with("\nImage: image/png (7 bytes)\n"));
    }

    #[test]
    fn test_add_missing_image_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RecipeStore::new(FileStorage::new(dir.path()));
        let mut recipe = new_recipe("Ghost");
        recipe.image = Some(dir.path().join("missing.jpg"));
        assert!(matches!(add(&mut store, recipe), Err(RecipeError::Io { .. })));
        assert!(store.raw().unwrap().is_none());
    }
}
