mod command;
mod events;
mod logging;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
