//! Claw Subsystem
//!
//! This example drives a two-position claw through a simulated control loop.
//!
//! Key concepts:
//! - Declaring a whitelist, entry hooks and a per-state handler
//! - Ticking the machine once per cycle through a tick action
//! - Scheduling transitions as named deferred actions
//! - Logging rejected transitions through `tracing`
//!
//! Run with: RUST_LOG=trace cargo run --example claw

use statekeeper::actions::Action;
use statekeeper::builder::StateMachineBuilder;
use statekeeper::machine::{InvalidTransitionPolicy, SharedMachine};
use statekeeper::states::OpenClose;
use statekeeper::subsystem::Subsystem;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

struct Claw {
    machine: SharedMachine<OpenClose>,
}

impl Claw {
    fn new() -> Self {
        let machine = StateMachineBuilder::new()
            .initial(OpenClose::Open)
            .name("Claw")
            .strict(true)
            .transition(OpenClose::Open, OpenClose::Closed)
            .transition(OpenClose::Closed, OpenClose::Open)
            .on_entry(OpenClose::Open, || info!("solenoid retracted"))
            .on_entry(OpenClose::Closed, || info!("solenoid extended"))
            .handle_next(OpenClose::Open, || OpenClose::Closed)
            .on_invalid_transition(InvalidTransitionPolicy::log())
            .build_shared();

        match machine {
            Ok(machine) => Self { machine },
            Err(err) => panic!("claw configuration is invalid: {err}"),
        }
    }
}

impl Subsystem<OpenClose> for Claw {
    fn machine(&self) -> &SharedMachine<OpenClose> {
        &self.machine
    }

    fn safe_state(&mut self) {
        self.machine.request_transition(OpenClose::Open);
    }
}

/// Directives from `RUST_LOG` win outright; INFO applies only without them.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(rust_log.as_deref());
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    println!("=== Claw Subsystem Example ===\n");

    let mut claw = Claw::new();
    let mut tick = claw.machine().tick_action();
    let mut close = claw.change_state(OpenClose::Closed);
    let mut open = claw.change_state(OpenClose::Open);

    for cycle in 0..3 {
        tick.execute();
        println!("cycle {cycle}: {:?} ({:?})", claw.state(), tick.last_outcome());
    }

    println!("\nRunning '{}':", open.name());
    open.execute();
    println!("  outcome: {:?}", open.last_outcome());

    println!("\nRunning '{}' twice:", close.name());
    close.execute();
    println!("  outcome: {:?}", close.last_outcome());
    close.execute();
    println!("  outcome: {:?}", close.last_outcome());

    claw.safe_state();
    println!("\nAfter safe state: {:?}", claw.state());

    println!("\n=== Example Complete ===");
}
