use algolab::{Args, Command, LabApp, LabConfig, init_tracing, run_menu};
use clap::Parser;
use std::io;
use tracing::warn;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut app = LabApp::new(LabConfig::from(&args));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match args.command {
        Some(Command::Run { algorithm }) => app.run_once(algorithm, args.json, &mut out),
        None => {
            if args.json {
                warn!("--json only applies to `run`, ignoring it in the menu");
            }
            run_menu(&mut app, io::stdin().lock(), &mut out).map(|_| ())
        }
    };

    if let Err(error) = result {
        eprintln!("{} {}", app.colors().error("❌ Error:"), error);
        std::process::exit(1);
    }
}
