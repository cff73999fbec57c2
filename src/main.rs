use gumshoe::display::TerminalDisplay;
use gumshoe::input::StdinInput;
use gumshoe::mansion::build_mansion;
use gumshoe::navigator::Navigator;
use log::{debug, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Assemble the fixed mansion map. The map is the whole game, so a
    // construction failure is fatal.
    let mansion = match build_mansion() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: could not assemble the mansion map: {e}");
            std::process::exit(1);
        }
    };
    debug!("Starting exploration at '{}'", mansion.name());

    println!("Welcome to Gumshoe - mansion exploration!");
    println!("You start at the Entrance. Pick passages and try to find the culprit...");

    let mut input = StdinInput::new();
    let mut display = TerminalDisplay::new();
    let outcome = Navigator::new(&mut input, &mut display).explore(Some(&mansion))?;

    info!(
        "Session over: {:?} after {} room(s)",
        outcome.reason,
        outcome.path.len()
    );

    // Leaf, quit and empty map all count as normal completion.
    println!("\nThanks for playing!");
    Ok(())
}
