//=========================================================================
// Aetheric Bricks — Binary Entry Point
//=========================================================================
//
// Thin wrapper over the `Game` facade: logger init, build, run. Logging
// goes to stderr (filtered by `RUST_LOG`) so it never fights the game
// screen on stdout.
//
//=========================================================================

use aetheric_bricks::GameBuilder;

fn main() {
    env_logger::init();

    if let Err(e) = GameBuilder::new().build().run() {
        eprintln!("fatal: {}", e);
        std::process::exit(1);
    }
}
