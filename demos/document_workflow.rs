//! Document Workflow
//!
//! This example models a publishing workflow with the builder API.
//!
//! Key concepts:
//! - Validated construction with MachineBuilder
//! - Querying which states react to an event
//! - Explicit jumps versus event-driven transitions
//! - Reset keeps history
//!
//! Run with: cargo run --example document_workflow

use retrace::{MachineBuilder, StateBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Document Workflow ===\n");

    let mut doc = MachineBuilder::new()
        .initial("draft")
        .state(
            StateBuilder::new("draft")
                .on("submit", "review")
                .on("archive", "archived"),
        )
        .state(
            StateBuilder::new("review")
                .on("approve", "published")
                .on("reject", "draft")
                .on("archive", "archived"),
        )
        .state(StateBuilder::new("published").on("archive", "archived"))
        .state(StateBuilder::new("archived"))
        .build()?;

    let archivable: Vec<String> = doc
        .states(Some("archive"))
        .iter()
        .map(|s| s.to_string())
        .collect();
    println!("States that can be archived: {archivable:?}");

    doc.trigger("submit")?;
    println!("Submitted, now: {}", doc.state());
    println!("Available events: {:?}", doc.available_events());

    doc.trigger("reject")?;
    doc.trigger("submit")?;
    doc.trigger("approve")?;
    println!("Approved, now: {}", doc.state());

    // Administrative override ignores the graph edges.
    doc.change_state("draft")?;
    println!("Forced back to: {}", doc.state());

    doc.undo();
    println!("Undo override, now: {}", doc.state());

    doc.reset();
    println!(
        "Reset to {} with {} undo entries kept",
        doc.state(),
        doc.history().undo_stack().len()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
