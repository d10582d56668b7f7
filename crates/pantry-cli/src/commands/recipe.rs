//! Recipe suggestion CLI commands.

use std::io::{BufRead, Write};

use clap::Subcommand;
use pantry_core::{Config, PexelsClient, Recipe, RecipeStore, RecipeSynthesizer, Recommender, Toast};
use tracing::debug;

use super::runtime;

#[derive(Subcommand)]
pub enum RecipeAction {
    /// Suggest recipes for the given ingredients
    ///
    /// Ingredients may be given as separate arguments or comma-separated:
    /// `pantry-cli recipe suggest chicken rice` or
    /// `pantry-cli recipe suggest "chicken, rice"`.
    Suggest {
        /// Ingredients on hand
        ingredients: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Seed for reproducible recipe content
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Interactive session: search repeatedly and keep favorites
    Interactive {
        /// Seed for reproducible recipe content
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run(action: RecipeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RecipeAction::Suggest {
            ingredients,
            json,
            seed,
        } => suggest(ingredients, json, seed),
        RecipeAction::Interactive { seed } => interactive(seed),
    }
}

/// Split comma-separated arguments and drop blanks.
fn parse_ingredients<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.as_ref().split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn build_store(seed: Option<u64>) -> Result<RecipeStore<PexelsClient>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default().with_env_overrides();
    debug!(endpoint = %config.images.endpoint, "using image provider");

    let images = PexelsClient::new(&config.images)?;
    let synthesizer = seed.map(RecipeSynthesizer::with_seed).unwrap_or_default();
    Ok(RecipeStore::new(Recommender::with_synthesizer(synthesizer, images)))
}

fn suggest(
    args: Vec<String>,
    json: bool,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ingredients = parse_ingredients(&args);
    let mut store = build_store(seed)?;

    let rt = runtime()?;
    if let Err(e) = rt.block_on(store.fetch_recipes(ingredients.as_slice())) {
        let message = store.snapshot().error.unwrap_or_else(|| e.to_string());
        return Err(message.into());
    }

    let recipes = store.snapshot().recipes;
    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    for (i, recipe) in recipes.iter().enumerate() {
        print_recipe(i + 1, recipe);
    }
    Ok(())
}

fn print_recipe(position: usize, recipe: &Recipe) {
    println!(
        "{position}. {}  ({}, {} min)",
        recipe.name, recipe.difficulty, recipe.cooking_time
    );
    println!("   {}", recipe.description);
    println!("   Image: {}", recipe.image);
    println!("   Ingredients:");
    for line in &recipe.ingredients {
        println!("     - {} {} {}", line.quantity, line.unit, line.name);
    }
    println!("   Instructions:");
    for (step, text) in recipe.instructions.iter().enumerate() {
        println!("     {}. {text}", step + 1);
    }
    let n = &recipe.nutrition_info;
    println!(
        "   Nutrition: {} kcal | protein {}g | carbs {}g | fat {}g",
        n.calories, n.protein, n.carbs, n.fat
    );
    println!("   Id: {}", recipe.id);
    println!();
}

const INTERACTIVE_HELP: &str = "\
Commands:
  search <ingredients>   suggest recipes (comma-separated ingredients)
  show <n>               show recipe n from the last search
  fav <n>                add recipe n to favorites
  unfav <n>              remove favorite n
  favs                   list favorites
  help                   show this help
  quit                   leave";

fn interactive(seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = build_store(seed)?;
    let mut toast = Toast::new();
    let rt = runtime()?;

    println!("{INTERACTIVE_HELP}");
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let (command, rest) = line
            .trim()
            .split_once(' ')
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line.trim(), ""));

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{INTERACTIVE_HELP}"),
            "search" => {
                let ingredients = parse_ingredients(&[rest]);
                match rt.block_on(store.fetch_recipes(ingredients.as_slice())) {
                    Ok(()) => {
                        for (i, recipe) in store.snapshot().recipes.iter().enumerate() {
                            println!("{}. {} ({} min)", i + 1, recipe.name, recipe.cooking_time);
                        }
                    }
                    Err(e) => {
                        let message = store.snapshot().error.unwrap_or_else(|| e.to_string());
                        toast.show(message);
                    }
                }
            }
            "show" => match pick(&store.snapshot().recipes, rest) {
                Some((position, recipe)) => print_recipe(position, &recipe),
                None => toast.show("No such recipe"),
            },
            "fav" => match pick(&store.snapshot().recipes, rest) {
                Some((_, recipe)) => {
                    if store.add_to_favorites(recipe) {
                        toast.show("Recipe added to favorites!");
                    } else {
                        toast.show("Recipe is already in favorites");
                    }
                }
                None => toast.show("No such recipe"),
            },
            "unfav" => match pick(&store.snapshot().favorite_recipes, rest) {
                Some((_, recipe)) => {
                    store.remove_from_favorites(&recipe.id);
                    toast.show("Recipe removed from favorites");
                }
                None => toast.show("No such favorite"),
            },
            "favs" => {
                let favorites = store.snapshot().favorite_recipes;
                if favorites.is_empty() {
                    println!("No favorites yet.");
                }
                for (i, recipe) in favorites.iter().enumerate() {
                    println!("{}. {}", i + 1, recipe.name);
                }
            }
            other => toast.show(format!("Unknown command: {other}")),
        }

        let state = toast.state();
        if state.visible {
            println!("[{}]", state.message);
        }
    }

    Ok(())
}

/// 1-based lookup used by the interactive commands.
fn pick(recipes: &[Recipe], arg: &str) -> Option<(usize, Recipe)> {
    let n: usize = arg.parse().ok()?;
    let recipe = recipes.get(n.checked_sub(1)?)?;
    Some((n, recipe.clone()))
}
