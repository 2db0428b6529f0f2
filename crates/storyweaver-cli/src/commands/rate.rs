//! `storyweaver rate`: record a 1-5 rating and print the acknowledgement.

use serde_json::json;
use tracing::info;

use storyweaver_core::domain::{Acknowledgement, Rating};

use crate::{cli::RateArgs, error::CliResult, output::OutputManager};

pub fn execute(args: RateArgs, output: OutputManager) -> CliResult<()> {
    let rating = Rating::new(args.rating)?;
    let ack = rating.acknowledgement();
    info!(rating = rating.get(), "Rating recorded");

    if output.is_json() {
        output.json(&json!({
            "rating": rating,
            "acknowledgement": ack,
            "message": ack.map(|a| a.message()),
        }))?;
        return Ok(());
    }

    report(&output, rating, ack)?;
    Ok(())
}

/// Shared with the interactive session.
pub fn report(
    output: &OutputManager,
    rating: Rating,
    ack: Option<Acknowledgement>,
) -> std::io::Result<()> {
    output.success(&format!("Rating recorded: {}/{}", rating.get(), Rating::MAX))?;
    if let Some(ack) = ack {
        output.print(&format!("{} {}", ack.icon(), ack.message()))?;
    }
    Ok(())
}
