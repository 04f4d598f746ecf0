mod command;
mod config;
mod logging;
mod storage;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
