//! Ratings command handler

use crate::config::Config;
use crate::domain::{PageRequest, TourId};
use crate::state::SharedState;

pub async fn cmd_ratings(config: &Config, tour_id: i32, page: u64, size: u64) -> anyhow::Result<()> {
    let request = PageRequest::new(page, size.max(1));
    anyhow::ensure!(
        request.offset().is_some(),
        "Page {page} is out of range for page size {}",
        request.size
    );

    let state = SharedState::new(config.clone()).await?;
    let tour_id = TourId::new(tour_id);

    let ratings = state
        .rating_service
        .lookup_ratings(tour_id, request)
        .await?;
    let average = state.rating_service.get_average_score(tour_id).await?;

    match average {
        Some(avg) => println!(
            "Tour {} - average {:.2} from {} ratings",
            tour_id, avg, ratings.total_elements
        ),
        None => {
            println!("Tour {} has no ratings yet.", tour_id);
            return Ok(());
        }
    }
    println!("{:-<70}", "");

    for rating in &ratings.content {
        println!(
            "  Customer {:<6} {} ★  {}",
            rating.customer_id, rating.score, rating.comment
        );
    }

    if ratings.has_next() {
        println!();
        println!("More: booktour ratings {} --page {}", tour_id, page + 1);
    }

    Ok(())
}
