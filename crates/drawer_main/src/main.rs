use clap::Parser;
use colored::Colorize;
use drawer::{execute, init_tracing, Cli};
use drawer_infra::DrawerInfra;
use drawer_services::FileOperationsManager;

fn main() {
    let cli = Cli::parse();

    let guard = match init_tracing(cli.log_dir.clone(), cli.verbose) {
        Ok(guard) => Some(guard),
        Err(error) => {
            eprintln!("{} {:#}", "Logging disabled:".yellow(), error);
            None
        }
    };

    let mut manager = FileOperationsManager::new(std::sync::Arc::new(DrawerInfra::new()));
    manager.set_debug_mode(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    if let Err(error) = execute(&cli.command, cli.mode(), &manager, &mut stdout) {
        let details = format!("{:#}", error);
        eprintln!("{}", drawer::StatusDisplay::failed("Error", &details).format());
        drop(guard);
        std::process::exit(1);
    }
}
