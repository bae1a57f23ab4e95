//! timesnap main entrypoint.

use timesnap::run;
use timesnap::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
