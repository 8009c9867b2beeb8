// SPDX-License-Identifier: MPL-2.0
use iced_vqa::app::{self, paths, Flags};

const HELP: &str = "\
Ask questions about images using a visual question answering service.

USAGE:
  iced_vqa [OPTIONS]

OPTIONS:
  --lang <LOCALE>      Interface language, e.g. en-US or fr
  --endpoint <URL>     Prediction endpoint [default: http://127.0.0.1:5000/predict]
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iced_vqa=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
