// ABOUTME: NutriBuddy CLI - command-line view over the nutrition and hydration ledger
// ABOUTME: Loads the record set on start, runs one command, and saves after mutations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create or update the profile
//! nutribuddy-cli profile set --name Alex --age 30 --gender male --height 170 --weight 70
//!
//! # Show BMR, TDEE, and the calculated goal, then adopt it
//! nutribuddy-cli profile calculate --adopt
//!
//! # Log food by hand or from a photo
//! nutribuddy-cli food add "Oatmeal" --calories 320 --meal breakfast
//! nutribuddy-cli food add --image ./lunch.jpg --meal lunch
//!
//! # Track water
//! nutribuddy-cli water add
//! nutribuddy-cli water goal 10
//! nutribuddy-cli water remind
//!
//! # Recipes, chat, and the daily summary
//! nutribuddy-cli recipes --category dinner
//! nutribuddy-cli chat "How do I lose weight?"
//! nutribuddy-cli summary
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutribuddy::clock::SystemClock;
use nutribuddy::config::NutriBuddyConfig;
use nutribuddy::errors::AppResult;
use nutribuddy::logging::LoggingConfig;
use nutribuddy::session::NutritionSession;
use nutribuddy::storage::Store;
use nutribuddy_core::models::{ActivityLevel, CategoryFilter, DietType, Gender, MealType};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutribuddy-cli",
    about = "NutriBuddy nutrition and hydration ledger",
    long_about = "Track a profile with a calculated calorie goal, a daily food log, water intake with reminders, recipe suggestions, and a scripted nutrition assistant."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (`memory` or `sqlite:<path>`)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Food log
    Food {
        #[command(subcommand)]
        action: FoodCommand,
    },

    /// Water intake
    Water {
        #[command(subcommand)]
        action: WaterCommand,
    },

    /// List recipe suggestions for the profile's diet
    Recipes {
        /// Category filter (all, breakfast, lunch, dinner, snack)
        #[arg(long, short = 'c', default_value = "all")]
        category: CategoryFilter,
    },

    /// Ask the nutrition assistant a question
    Chat {
        /// Question text; omit to see suggested questions
        text: Option<String>,
    },

    /// Show today's dashboard
    Summary,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Create or update the profile; omitted fields keep their current value
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        /// male, female, or other
        #[arg(long)]
        gender: Option<Gender>,

        /// Height in centimeters
        #[arg(long)]
        height: Option<f64>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Target weight in kilograms
        #[arg(long)]
        target_weight: Option<f64>,

        /// vegetarian or non-vegetarian
        #[arg(long)]
        diet: Option<DietType>,

        /// sedentary, lightly-active, moderately-active, or very-active
        #[arg(long)]
        activity: Option<ActivityLevel>,

        /// Daily calorie goal (1000-5000)
        #[arg(long)]
        goal: Option<u32>,
    },

    /// Show the saved profile
    Show,

    /// Show BMR, TDEE, and the calculated daily goal
    Calculate {
        /// Replace the saved goal with the calculated one
        #[arg(long)]
        adopt: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FoodCommand {
    /// Log a food entry for today
    Add {
        /// Food name (omit with --image)
        #[arg(required_unless_present = "image")]
        name: Option<String>,

        /// Calories (omit with --image)
        #[arg(long, required_unless_present = "image")]
        calories: Option<f64>,

        /// breakfast, lunch, dinner, or snack
        #[arg(long, short = 'm', default_value = "snack")]
        meal: MealType,

        /// Recognize the food from a photo instead
        #[arg(long, conflicts_with_all = ["name", "calories"])]
        image: Option<PathBuf>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id
        id: String,
    },

    /// List today's entries
    List {
        /// List every logged entry instead of today's
        #[arg(long, short = 'a')]
        all: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WaterCommand {
    /// Add a glass
    Add,

    /// Remove a glass
    Remove,

    /// Set the daily goal in glasses
    Goal {
        /// Glasses per day
        glasses: u32,
    },

    /// Show today's intake
    Status,

    /// Stay running and print hydration reminders until interrupted
    Remind,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = NutriBuddyConfig::global().clone();
    if let Some(url) = cli.database_url {
        config.storage.database_url = url;
    }
    config.validate()?;

    info!("Opening store: {}", config.storage.database_url);
    let store = Arc::new(Store::from_config(&config).await?);
    let mut session = NutritionSession::open(store, Arc::new(SystemClock), config).await?;

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Set {
                name,
                age,
                gender,
                height,
                weight,
                target_weight,
                diet,
                activity,
                goal,
            } => {
                let update = commands::profile::ProfileUpdate {
                    name,
                    age,
                    gender,
                    height_cm: height,
                    weight_kg: weight,
                    target_weight_kg: target_weight,
                    diet_type: diet,
                    activity_level: activity,
                    daily_calorie_goal: goal,
                };
                commands::profile::set(&mut session, update).await?;
            }
            ProfileCommand::Show => commands::profile::show(&session),
            ProfileCommand::Calculate { adopt } => {
                commands::profile::calculate(&mut session, adopt).await?;
            }
        },
        Command::Food { action } => match action {
            FoodCommand::Add {
                name,
                calories,
                meal,
                image,
            } => match image {
                Some(path) => commands::food::add_from_image(&mut session, &path, meal).await?,
                None => {
                    commands::food::add(
                        &mut session,
                        name.as_deref().unwrap_or_default(),
                        calories.unwrap_or_default(),
                        meal,
                    )
                    .await?;
                }
            },
            FoodCommand::Delete { id } => commands::food::delete(&mut session, &id).await?,
            FoodCommand::List { all } => commands::food::list(&session, all),
        },
        Command::Water { action } => match action {
            WaterCommand::Add => commands::water::add(&session).await?,
            WaterCommand::Remove => commands::water::remove(&session).await?,
            WaterCommand::Goal { glasses } => commands::water::goal(&session, glasses).await?,
            WaterCommand::Status => commands::water::status(&session).await,
            WaterCommand::Remind => commands::water::remind(&session).await?,
        },
        Command::Recipes { category } => commands::recipes::list(&session, category),
        Command::Chat { text } => match text {
            Some(text) => commands::chat::ask(&mut session, &text).await?,
            None => commands::chat::suggest(&session),
        },
        Command::Summary => commands::summary::show(&session).await,
    }

    Ok(())
}
