// Sat Oct 17 2026 - Alex

use hex2go::ui;

fn main() {
    if let Err(e) = ui::cli::run() {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
