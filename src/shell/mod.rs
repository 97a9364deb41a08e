//! Shell Module
//!
//! The operator interface: a synchronous menu loop over the library.
//!
//! ## Architecture
//! - `Session` is generic over `BufRead`/`Write`, so the same loop serves
//!   stdin/stdout, script files, and in-memory buffers in tests
//! - Talks to the catalog only through `Library`

mod session;

pub use session::{Session, SessionStats};

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::engine::Library;
use crate::error::Result;

/// Open a script file as operator input
pub fn open_script(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Run an interactive session over stdin/stdout
pub fn run_stdio(config: Config, engine: Arc<Library>) -> Result<SessionStats> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, engine, stdin.lock(), stdout.lock())?;
    session.run()
}

/// Run a script file as operator input, writing output to `writer`
pub fn run_script<W: io::Write>(
    path: &Path,
    config: Config,
    engine: Arc<Library>,
    writer: W,
) -> Result<SessionStats> {
    let reader = open_script(path)?;
    let mut session = Session::new(config, engine, reader, writer)?;
    session.run()
}
