//! Grove binary entry point.

fn main() {
    if let Err(err) = grove::cli::run() {
        grove::ui::output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
