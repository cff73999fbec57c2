//! Integration tests for full exploration sessions
//!
//! These drive the real binary with scripted input piped through the shell,
//! the same way a player would run it non-interactively, and check the
//! visible transcript: room announcements, retry messages, the final path
//! listing, and the exit status.
//!
//! Stderr is ignored so RUST_LOG settings in the environment cannot break
//! the assertions.

use std::process::Command;

/// Build the binary once and run it with the given stdin script.
fn run_with_script(script: &str) -> (String, bool) {
    let build_output = Command::new("cargo")
        .args(["build", "--bin", "gumshoe"])
        .output()
        .expect("Failed to build gumshoe");
    assert!(build_output.status.success(), "Failed to build gumshoe");

    let output = Command::new("sh")
        .arg("-c")
        .arg(format!(
            "printf '{}' | ./target/debug/gumshoe 2>/dev/null",
            script
        ))
        .output()
        .expect("Failed to run gumshoe");

    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        output.status.success(),
    )
}

#[test]
fn full_descent_to_the_cellar() {
    let (stdout, ok) = run_with_script("e\\ne\\ne\\n");
    assert!(ok, "expected exit code 0");

    assert!(stdout.contains("Welcome to Gumshoe"), "missing banner");
    assert!(stdout.contains("You are in: Entrance"), "missing entrance");
    assert!(stdout.contains("You are in: Living Room"), "missing living room");
    assert!(stdout.contains("You are in: Kitchen"), "missing kitchen");
    assert!(stdout.contains("You are in: Cellar"), "missing cellar");
    assert!(
        stdout.contains("You have reached a dead end."),
        "missing leaf message"
    );

    // Path listing, 1-indexed and in entry order
    assert!(stdout.contains("--- Path taken ---"), "missing path header");
    assert!(stdout.contains("1. Entrance"), "missing path entry 1");
    assert!(stdout.contains("2. Living Room"), "missing path entry 2");
    assert!(stdout.contains("3. Kitchen"), "missing path entry 3");
    assert!(stdout.contains("4. Cellar"), "missing path entry 4");
    assert!(stdout.contains("Thanks for playing!"), "missing farewell");
}

#[test]
fn quit_at_the_entrance() {
    let (stdout, ok) = run_with_script("s\\n");
    assert!(ok, "expected exit code 0");

    assert!(
        stdout.contains("Exploration ended by the player."),
        "missing quit message"
    );
    assert!(stdout.contains("1. Entrance"), "missing path entry");
    assert!(!stdout.contains("2. "), "quit session should visit one room");
}

#[test]
fn illegal_move_is_retried_at_the_same_room() {
    // Kitchen has no right passage; the 'd' must be refused and the
    // following 'e' still reach the Cellar.
    let (stdout, ok) = run_with_script("e\\ne\\nd\\ne\\n");
    assert!(ok, "expected exit code 0");

    assert!(
        stdout.contains("There is no passage to the right of this room."),
        "missing illegal-move message"
    );
    assert!(stdout.contains("4. Cellar"), "missing final path entry");
}

#[test]
fn unknown_and_blank_input_are_recovered() {
    let (stdout, ok) = run_with_script("x\\n\\nd\\ne\\n");
    assert!(ok, "expected exit code 0");

    assert!(
        stdout.contains("Unknown option 'x'. Use 'e', 'd' or 's'."),
        "missing unknown-option message"
    );
    assert!(
        stdout.contains("Invalid input. Try again."),
        "missing blank-input message"
    );
    assert!(stdout.contains("You are in: Office"), "missing office");
    assert!(stdout.contains("3. Office"), "missing final path entry");
}

#[test]
fn exhausted_input_ends_the_session_cleanly() {
    // One move, then EOF: the session must end as an implicit quit rather
    // than loop on empty reads.
    let (stdout, ok) = run_with_script("e\\n");
    assert!(ok, "expected exit code 0");

    assert!(
        stdout.contains("No more input. Exploration ends here."),
        "missing end-of-input message"
    );
    assert!(stdout.contains("2. Living Room"), "missing path entry");
    assert!(stdout.contains("Thanks for playing!"), "missing farewell");
}
