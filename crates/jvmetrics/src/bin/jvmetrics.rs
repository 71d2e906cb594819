fn main() {
    if let Err(err) = jvmetrics::run() {
        eprintln!("{}", jvmetrics::format_error(&err));
        std::process::exit(1);
    }
}
