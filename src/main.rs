use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use menu_planner_rs::cli::{Cli, Command};
use menu_planner_rs::error::Result;
use menu_planner_rs::interface::{
    display_candidates, display_day_plan, display_weekly_plan, prompt_pick_candidate,
    prompt_pick_day, prompt_pick_slot, prompt_profile, prompt_yes_no,
};
use menu_planner_rs::models::DayPlan;
use menu_planner_rs::planner::{
    prefer_vegetarian, DayPlanOutcome, PlanAssembler, ReplacementFlow,
};
use menu_planner_rs::service::{ApiClient, HistoryService, ProfileParams};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let client = Arc::new(ApiClient::new(&cli.server));
    let profile = resolve_profile(cli.height, cli.weight, cli.age)?;

    let mut assembler = PlanAssembler::new(client.clone());
    if cli.vegetarian {
        assembler = assembler.with_selection(prefer_vegetarian);
    }

    match command {
        Command::Day => cmd_day(client, assembler, &profile).await,
        Command::Week => cmd_week(client, assembler, &profile).await,
    }
}

/// Profile attributes come from flags; if none were given, offer to collect
/// them interactively.
fn resolve_profile(
    height: Option<f64>,
    weight: Option<f64>,
    age: Option<u32>,
) -> Result<ProfileParams> {
    if height.is_some() || weight.is_some() || age.is_some() {
        return Ok(ProfileParams { height, weight, age });
    }

    if prompt_yes_no("Provide profile details for better suggestions?", false)? {
        prompt_profile()
    } else {
        Ok(ProfileParams::default())
    }
}

/// Build and display today's menu.
async fn cmd_day(
    client: Arc<ApiClient>,
    assembler: PlanAssembler,
    profile: &ProfileParams,
) -> Result<()> {
    println!("Building today's menu...");
    match assembler.build_day_plan(profile).await? {
        DayPlanOutcome::ProfileIncomplete => {
            println!("Your profile is incomplete.");
            println!("Please fill in height, weight and age to receive suggestions.");
            Ok(())
        }
        DayPlanOutcome::Ready {
            mut day,
            daily_calories,
        } => {
            println!();
            println!("Daily target: ~{} kcal", daily_calories);
            println!();
            display_day_plan(&day);

            interact(client, std::slice::from_mut(&mut day)).await?;
            Ok(())
        }
    }
}

/// Build and display a full week, then hand off to the interactive loop.
async fn cmd_week(
    client: Arc<ApiClient>,
    assembler: PlanAssembler,
    profile: &ProfileParams,
) -> Result<()> {
    let cancel = CancellationToken::new();

    println!("Building a varied menu for the whole week...");
    let mut plan = assembler.build_weekly_plan(profile, &cancel).await?;
    display_weekly_plan(&plan);

    interact(client, plan.days_mut()).await?;
    Ok(())
}

/// Post-build interaction: replace meals, log meals.
async fn interact(client: Arc<ApiClient>, days: &mut [DayPlan]) -> Result<()> {
    let mut flow = ReplacementFlow::new(client.clone());

    while prompt_yes_no("Replace a meal?", false)? {
        let day_index = prompt_pick_day(days)?;
        let slot = prompt_pick_slot(&days[day_index])?;
        let label = days[day_index].label.clone();

        match flow.request(days, &label, slot).await {
            Ok(context) => {
                let candidates = context.candidates().to_vec();
                display_candidates(&candidates);
                match prompt_pick_candidate(&candidates)? {
                    Some(picked) => {
                        let chosen = candidates[picked].clone();
                        match flow.apply(days, chosen) {
                            Ok(()) => {
                                println!();
                                for day in days.iter() {
                                    display_day_plan(day);
                                    println!();
                                }
                            }
                            // Scoped to this attempt; the plan is untouched.
                            Err(e) => eprintln!("Could not apply replacement: {}", e),
                        }
                    }
                    None => flow.cancel(),
                }
            }
            Err(e) => {
                // A failed replacement only affects this attempt.
                eprintln!("Could not fetch replacements: {}", e);
            }
        }
    }

    while prompt_yes_no("Log a meal to your history?", false)? {
        let day_index = prompt_pick_day(days)?;
        let slot = prompt_pick_slot(&days[day_index])?;
        let meal = days[day_index].meals()[slot].clone();

        match client.log_meal(&meal).await {
            Ok(()) => println!("Saved \"{}\" to history.", meal.name),
            Err(e) => eprintln!("Could not log meal: {}", e),
        }
    }

    Ok(())
}
