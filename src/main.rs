//! staffclock main entrypoint.

use staffclock::run;
use staffclock::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
