use std::{io, path::PathBuf};

use citedex_core::PaperCollection;

use self::{console::InputClosed, session::Session};
use crate::config::Config;

mod console;
mod session;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct InteractiveArg {
    /// Paper list to load before entering papers by hand
    #[arg(long)]
    load: Option<PathBuf>,
}

pub(crate) fn run(arg: &InteractiveArg, config: Config) -> anyhow::Result<()> {
    let InteractiveArg { load } = arg;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdin, stdout, PaperCollection::new(), config);

    match session.run(load.as_deref()) {
        Err(err) if err.downcast_ref::<InputClosed>().is_some() => {
            tracing::debug!("input closed, ending session");
            Ok(())
        }
        result => result,
    }
}
