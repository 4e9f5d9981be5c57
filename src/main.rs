mod cli;
mod logging;
mod manifest;
mod paths;
mod runner;
mod scaffold;
mod util;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
