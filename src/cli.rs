use clap::{Parser, Subcommand};

use crate::service::http::DEFAULT_BASE_URL;

/// MenuPlanner — builds varied daily and weekly menus from a remote
/// suggestion service.
#[derive(Parser, Debug)]
#[command(name = "menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the nutrition backend API.
    #[arg(short, long, env = "MENU_API_URL", default_value = DEFAULT_BASE_URL)]
    pub server: String,

    /// Height in cm, forwarded with suggestion requests.
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kg, forwarded with suggestion requests.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Age in years, forwarded with suggestion requests.
    #[arg(long)]
    pub age: Option<u32>,

    /// Prefer vegetarian candidates when filling meal slots.
    #[arg(long)]
    pub vegetarian: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a menu for today.
    Day,

    /// Build a non-repeating menu for the whole week.
    Week,
}

impl Default for Command {
    fn default() -> Self {
        Command::Day
    }
}
