// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};

const HELP: &str = "\
iced_toasts

USAGE:
  iced_toasts [OPTIONS]

OPTIONS:
  --server <URL>          Verification server base URL
  --csrf-token <TOKEN>    CSRF token sent with resend requests
  --config-dir <DIR>      Directory holding settings.toml
  --failed-verification   Start with the short resend cooldown
  --expired-reset-link    Show the expired reset link screen
  -h, --help              Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        eprintln!("Warning: ignoring unused arguments: {unused:?}");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        failed_verification: args.contains("--failed-verification"),
        expired_reset_link: args.contains("--expired-reset-link"),
        server_url: args.opt_value_from_str("--server")?,
        csrf_token: args.opt_value_from_str("--csrf-token")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
