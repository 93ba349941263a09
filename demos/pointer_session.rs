//! Demo: a scripted pointer session against the default two-qubit scene.
//! Replays the click sequence a user of the original visualization would
//! make and prints the scene summary after each press.

use qvis::scene::layout::{Point, SceneLayout};
use qvis::{QvisError, Scene};

fn main() -> Result<(), QvisError> {
    println!("--- qvis Demo: pointer-driven session ---\n");

    let mut scene = Scene::with_seed(SceneLayout::two_qubit_default(), 7)?;
    println!("Initial state:\n{}", scene);

    // (description, press position) pairs for the default 800x600 layout
    let session: [(&str, Point); 6] = [
        ("press the H control", Point::new(90.0, 520.0)),
        ("press the left qubit", Point::new(200.0, 300.0)),
        ("press the X control", Point::new(190.0, 520.0)),
        ("press the right qubit", Point::new(600.0, 300.0)),
        ("press the Measure control", Point::new(300.0, 520.0)),
        ("press the left qubit", Point::new(200.0, 300.0)),
    ];

    for (description, pos) in session {
        let action = scene.handle_press(pos);
        println!("{} -> {:?}", description, action);
        println!("{}", scene);
        // A frame or two of animation between interactions
        scene.tick();
        scene.tick();
    }

    println!("Final measurement history:\n{}", scene.log());

    // Reset everything, as the Reset control would.
    scene.handle_press(Point::new(400.0, 520.0));
    println!("After reset:\n{}", scene);

    Ok(())
}
