use EqConst::Examples::equilibrium_examples::equilibrium_examples;
use EqConst::library_manager::with_table_manager;
use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn main() {
    let level = with_table_manager(|manager| manager.log_level());
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    let task: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);
    if let Err(e) = equilibrium_examples(task) {
        error!("example {} failed: {}", task, e);
        std::process::exit(1);
    }
}
