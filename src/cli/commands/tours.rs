//! Tour and package listing command handlers

use crate::config::Config;
use crate::domain::{Difficulty, PageRequest, Region};
use crate::models::TourFilter;
use crate::state::SharedState;

pub struct TourListOptions {
    pub package: Option<String>,
    pub difficulty: Option<String>,
    pub region: Option<String>,
    pub max_price: Option<i32>,
    pub page: u64,
    pub size: u64,
}

pub async fn cmd_list_tours(config: &Config, options: TourListOptions) -> anyhow::Result<()> {
    let difficulty = match options.difficulty.as_deref() {
        Some(name) => Some(
            Difficulty::find_by_name(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown difficulty '{name}'"))?,
        ),
        None => None,
    };

    let region = match options.region.as_deref() {
        Some(label) => Some(
            Region::find_by_label(label)
                .ok_or_else(|| anyhow::anyhow!("Unknown region '{label}'"))?,
        ),
        None => None,
    };

    let filter = TourFilter {
        package_code: options.package,
        difficulty,
        region,
        max_price: options.max_price,
        keyword: None,
    };

    let request = PageRequest::new(options.page, options.size.max(1));
    anyhow::ensure!(
        request.offset().is_some(),
        "Page {} is out of range for page size {}",
        options.page,
        request.size
    );

    let state = SharedState::new(config.clone()).await?;
    let page = state
        .tour_service
        .lookup_tours(filter, request)
        .await?;

    if page.content.is_empty() {
        println!("No tours found.");
        println!();
        println!("Import tours with: booktour import <file.json>");
        return Ok(());
    }

    println!(
        "Tours (page {} of {}, {} total)",
        page.number + 1,
        page.total_pages,
        page.total_elements
    );
    println!("{:-<70}", "");

    for tour in &page.content {
        println!("{} [{}] ${}", tour.title, tour.package_code, tour.price);
        println!(
            "  ID: {} | Difficulty: {} | Region: {} | Length: {}",
            tour.id, tour.difficulty, tour.region, tour.duration
        );
    }

    Ok(())
}

pub async fn cmd_list_packages(config: &Config) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;
    let packages = state.tour_service.lookup_packages().await?;

    println!("Tour Packages ({} total)", packages.len());
    println!("{:-<40}", "");

    for package in packages {
        println!("  {:<4} {}", package.code, package.name);
    }

    Ok(())
}
