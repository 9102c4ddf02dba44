use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::Context as _;
use log::{error, info};
use seahorse::{App, Command, Context, Flag, FlagType};

use visit_rules::input::VisitsFile;
use visit_rules::validation::Pipeline;
use visit_rules::{check_visits, Rejection};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();

    let check_command = Command::new("check")
        .usage(format!("{} check --visits <file> [--json]", args[0]))
        .description("Checks that the visits in the file can be scheduled.")
        .flag(
            Flag::new("visits", FlagType::String)
                .description("Path to a .toml or .json file with the visits."),
        )
        .flag(
            Flag::new("json", FlagType::Bool)
                .description("[optional] Prints the rejected visits as json. Default: false"),
        )
        .action(check_action);

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(check_command);

    app.run(args);
}

trait ContextExt {
    fn context(&self) -> &Context;

    fn required_string_flag(&self, name: &str) -> anyhow::Result<String> {
        self.context()
            .string_flag(name)
            .ok()
            .ok_or_else(|| anyhow::anyhow!("missing required flag \"{}\"", name))
    }

    fn required_path_flag(&self, name: &str) -> anyhow::Result<PathBuf> {
        self.required_string_flag(name).map(PathBuf::from)
    }
}

impl ContextExt for Context {
    fn context(&self) -> &Context {
        self
    }
}

fn check_action(context: &Context) {
    match check(context) {
        Ok(rejections) if rejections.is_empty() => {}
        Ok(rejections) => {
            error!("{} visits can not be scheduled", rejections.len());
            ::std::process::exit(1);
        }
        Err(e) => {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }
}

fn check(context: &Context) -> anyhow::Result<Vec<Rejection>> {
    let path = context.required_path_flag("visits")?;
    let json = context.bool_flag("json");

    let file = VisitsFile::from_path(&path)
        .with_context(|| format!("failed to load visits from \"{}\"", path.display()))?;

    let rejections = check_visits(file.visits(), &Pipeline::visits());

    if json {
        println!("{}", serde_json::to_string_pretty(&rejections)?);
    } else if rejections.is_empty() {
        info!("all {} visits can be scheduled", file.len());
    } else {
        for rejection in &rejections {
            match rejection.id {
                Some(id) => println!("visit #{} (id {}):", rejection.index, id),
                None => println!("visit #{}:", rejection.index),
            }

            for error in &rejection.errors {
                println!("  {}", error);
            }
        }
    }

    Ok(rejections)
}
