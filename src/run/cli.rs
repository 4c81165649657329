pub(crate) fn print_usage() {
    println!("Ahorra - single-screen expense and income tracker");
    println!();
    println!("Usage: ahorra [options]");
    println!();
    println!("Options:");
    println!("  --keep-draft                  Keep the form filled in when a save is rejected");
    println!("  --log <path>                  Append diagnostic logs to <path>");
    println!("  --log-level <level>           error, warn, info, debug or trace (default: info)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Entries live in memory only and are gone when the program exits.");
}

pub(crate) fn print_version() {
    println!("ahorra {}", env!("CARGO_PKG_VERSION"));
}
