use std::env;
use std::process;

use recipe_suggest::{ProviderKind, RecipeSuggester, SuggestedRecipe, UserPreferences};

fn print_usage() {
    eprintln!(
        "Usage: recipe-suggest [OPTIONS]

Options:
  --diet LIST       Comma-separated dietary preferences (e.g. vegetarian,low-sodium)
  --cuisine LIST    Comma-separated favorite cuisines (e.g. thai,mexican)
  --skill LEVEL     Cooking skill level (e.g. Beginner)
  --provider NAME   Text-generation backend: google (default) or openai
  --no-images       Skip image lookup for the suggestions
  --json            Print suggestions as JSON
  -h, --help        Show this help

At least one preference option is required. API keys are read from
GEMINI_API_KEY / OPENAI_API_KEY / SPOONACULAR_API_KEY or config.toml."
    );
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn print_recipe(recipe: &SuggestedRecipe) {
    println!("{}", recipe.name);
    println!("  {}", recipe.description);
    println!(
        "  Difficulty: {} | Time: {}",
        recipe.difficulty, recipe.cooking_time
    );
    if !recipe.ingredients.is_empty() {
        println!("  Ingredients: {}", recipe.ingredients.join(", "));
    }
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    if let Some(url) = &recipe.image_url {
        println!("  Image: {}", url);
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut preferences = UserPreferences::default();
    let mut provider: Option<ProviderKind> = None;
    let mut with_images = true;
    let mut json_output = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--diet" => {
                let value = args.next().ok_or("--diet requires a value")?;
                preferences.dietary_preferences = split_list(&value);
            }
            "--cuisine" => {
                let value = args.next().ok_or("--cuisine requires a value")?;
                preferences.favorite_cuisines = split_list(&value);
            }
            "--skill" => {
                preferences.cooking_skill_level =
                    Some(args.next().ok_or("--skill requires a value")?);
            }
            "--provider" => {
                let value = args.next().ok_or("--provider requires a value")?;
                provider = Some(value.parse()?);
            }
            "--no-images" => with_images = false,
            "--json" => json_output = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(2);
            }
        }
    }

    let mut builder = RecipeSuggester::builder();
    if let Some(kind) = provider {
        builder = builder.provider(kind);
    }
    if !with_images {
        builder = builder.without_images();
    }

    let suggester = builder.build()?;
    let recipes = suggester.suggest(&preferences).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
    } else {
        for recipe in &recipes {
            print_recipe(recipe);
        }
    }

    Ok(())
}
