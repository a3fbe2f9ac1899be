//! Light Switch
//!
//! This example walks a two-state machine loaded from JSON through
//! triggers, undo and redo.
//!
//! Key concepts:
//! - Declarative JSON definitions
//! - Event-driven transitions
//! - Undo/redo history
//!
//! Run with: RUST_LOG=debug cargo run --example light_switch

use retrace::{Fsm, MachineConfig};
use tracing_subscriber::EnvFilter;

const DEFINITION: &str = r#"{
    "initial": "off",
    "states": {
        "off": { "transitions": { "turnOn": "on" } },
        "on": { "transitions": { "turnOff": "off" } }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Light Switch ===\n");

    let mut fsm = Fsm::new(MachineConfig::from_json_str(DEFINITION)?);
    println!("Initial state: {}", fsm.state());

    fsm.trigger("turnOn")?;
    println!("After turnOn:  {}", fsm.state());
    fsm.trigger("turnOff")?;
    println!("After turnOff: {}", fsm.state());

    if let Err(err) = fsm.trigger("turnOff") {
        println!("Rejected:      {err}");
    }

    while fsm.undo() {
        println!("Undo ->        {}", fsm.state());
    }
    while fsm.redo() {
        println!("Redo ->        {}", fsm.state());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
