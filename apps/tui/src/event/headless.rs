use color_eyre::Result;
use std::time::Instant;

use carstats::race::{format::format_value, Animator, RaceSettings, RenderPlan, Series};
use carstats::stats::{self, format_thousands, BrandTotal};

const TOP_COUNTRIES: usize = 10;
const RACE_LINE_ENTRIES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessMode {
    Stats,
    Race,
}

/// Run the application in headless mode (no UI)
pub fn run_headless(
    series: Series,
    settings: RaceSettings,
    mode: HeadlessMode,
    json: bool,
) -> Result<()> {
    match (mode, json) {
        (HeadlessMode::Stats, false) => render_headless_stats(),
        (HeadlessMode::Stats, true) => {
            let json = serde_json::to_string_pretty(&build_headless_stats())?;
            println!("{json}");
        }
        (HeadlessMode::Race, false) => render_headless_race(series, settings),
        (HeadlessMode::Race, true) => {
            let json = serde_json::to_string_pretty(&build_race_timeline(series, settings))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn render_headless_stats() {
    let stats = build_headless_stats();

    println!("\nCarStats");
    println!("========");
    println!("Cars worldwide: {}", format_thousands(stats.world_total));

    println!("\nTop countries:");
    for (country, cars) in stats.top_countries {
        println!("- {country}: {}", format_thousands(cars));
    }

    println!("\nBrand shares:");
    for brand in stats.brands {
        println!(
            "- {}: {:.1}% ({})",
            brand.name,
            brand.percent,
            format_thousands(brand.value)
        );
    }
}

fn render_headless_race(series: Series, settings: RaceSettings) {
    let timeline = build_race_timeline(series, settings);
    if timeline.is_empty() {
        println!("No race data.");
        return;
    }

    for plan in timeline {
        let leaders = plan
            .visible_entries
            .iter()
            .take(RACE_LINE_ENTRIES)
            .map(|entry| {
                format!(
                    "{}. {} {}",
                    entry.rank + 1,
                    entry.label,
                    format_value(entry.magnitude)
                )
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}  {leaders}", plan.timestamp);
    }
}

/// Plays the whole series without a timer and collects every tick's plan.
fn build_race_timeline(series: Series, settings: RaceSettings) -> Vec<RenderPlan> {
    let mut animator = Animator::new(series, settings);
    let mut timeline = Vec::new();

    if let Some(plan) = animator.start(Instant::now()) {
        timeline.push(plan.clone());
    }
    while let Some(plan) = animator.tick() {
        timeline.push(plan.clone());
    }
    animator.teardown();

    timeline
}

fn build_headless_stats() -> HeadlessStats {
    let world_total = stats::world_total();
    let top_countries = stats::countries_by_cars()
        .into_iter()
        .take(TOP_COUNTRIES)
        .map(|(country, cars)| (country.to_string(), cars))
        .collect();

    HeadlessStats {
        world_total,
        top_countries,
        brands: stats::brand_totals(world_total),
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    world_total: u64,
    top_countries: Vec<(String, u64)>,
    brands: Vec<BrandTotal>,
}
