// SPDX-License-Identifier: MPL-2.0

use breeze_stays::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").ok().flatten(),
        apartment: args.opt_value_from_str("--apt").ok().flatten(),
    };

    app::run(flags)
}
