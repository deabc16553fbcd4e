//! zeitkonto main entrypoint.

use zeitkonto::run;
use zeitkonto::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
