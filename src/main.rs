//! Track GitHub issue and pull request statistics over time.

use ghstats::{Host, run};
use std::io::{Write, stderr, stdout};

/// Default host that talks to the real process.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
async fn main() {
    run(&mut RealHost, std::env::args()).await;
}
