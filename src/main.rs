use argh::FromArgs;
use course_planner::Planner;
use env_logger::Env;

#[derive(FromArgs)]
/// Browse a course list and the prerequisites of each course.
struct Args {
    #[argh(option, short = 'f')]
    /// course file to load before the menu is shown.
    file: Option<String>,

    #[argh(switch, short = 'v')]
    /// log diagnostics (skipped lines, duplicate courses) to stderr.
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let mut planner = Planner::default();
    if let Some(file) = args.file {
        planner.load(&file, &mut std::io::stdout())?;
    }
    planner.repl()
}
