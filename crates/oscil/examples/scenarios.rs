//! Runs the two reference setups with a fixed 10 ms host tick and logs each
//! counted crossing.

use oscil::{OscillatorConfig, ParamsBuilder, SimEvent, SimulationController};

fn run(name: &str, config: OscillatorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctrl = SimulationController::new(config)?;
    let period = ctrl.natural_period()?;
    println!("── {name} ──");
    println!("Natural period:    {period:.4} s");
    println!("Natural frequency: {:.4} Hz", ctrl.natural_frequency());

    ctrl.start();
    while ctrl.is_running() {
        for event in ctrl.tick(0.01) {
            match event {
                SimEvent::CycleCompleted(n) => {
                    tracing::debug!(cycles = n, time = ctrl.elapsed_time(), "crossing");
                }
                SimEvent::Stopped {
                    completed_cycles,
                    elapsed_time,
                } => {
                    println!("Stopped after {completed_cycles} cycles at t = {elapsed_time:.3} s\n");
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let pendulum = OscillatorConfig::new(
        ParamsBuilder::pendulum()
            .length(1.0)
            .gravity(9.8)
            .mass(1.0)
            .damping(0.0)
            .build(),
        30.0,
        1,
    );
    run("Pendulum, 30°, 1 cycle", pendulum)?;

    let spring = OscillatorConfig::new(
        ParamsBuilder::spring()
            .mass(1.0)
            .stiffness(40.0)
            .damping(0.0)
            .build(),
        90.0,
        3,
    );
    run("Spring, 20 cm, 3 cycles", spring)?;

    Ok(())
}
