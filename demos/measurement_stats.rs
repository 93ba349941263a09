//! Demo: prepare an equal superposition and measure it repeatedly.
//! Shows the collapse rule converging on the 50/50 split the amplitudes
//! promise, and the measurement log keeping score.

use qvis::scene::layout::SceneLayout;
use qvis::{Gate, Outcome, QubitId, QubitState, QvisError, Scene};

use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), QvisError> {
    println!("--- qvis Demo: Hadamard + Measure statistics ---");

    // Drive the engine directly first: one qubit, one RNG, many shots.
    let mut rng = StdRng::seed_from_u64(2024);
    let mut qubit = QubitState::new();
    let shots = 10_000u32;
    let mut zeros = 0u32;

    for _ in 0..shots {
        qubit.reset();
        qubit.apply_gate(Gate::Hadamard, &mut rng);
        if qubit.measure(&mut rng) == Outcome::Zero {
            zeros += 1;
        }
    }

    println!("\nPrepared H|0> and measured it {} times.", shots);
    println!("  outcome 0: {} ({:.1}%)", zeros, 100.0 * f64::from(zeros) / f64::from(shots));
    println!("  outcome 1: {} ({:.1}%)", shots - zeros, 100.0 * f64::from(shots - zeros) / f64::from(shots));
    println!("Each shot is an independent 50/50 draw; the split drifts toward");
    println!("one half as the shot count grows, but no single outcome is ever");
    println!("predictable from the state alone.");

    // The same experiment through the scene keeps a log for us.
    let mut scene = Scene::with_seed(SceneLayout::two_qubit_default(), 2024)?;
    let q0 = QubitId(0);
    for _ in 0..100 {
        scene.apply_to(q0, Gate::Hadamard)?;
        scene.apply_to(q0, Gate::Measure)?;
    }
    println!("\n100 more shots routed through the scene:");
    println!("{}", scene.log());

    Ok(())
}
