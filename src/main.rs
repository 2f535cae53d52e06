use std::io;

use pwd_check::{run_prompt, PromptError};

fn main() -> Result<(), PromptError> {
    #[cfg(feature = "tracing")]
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_prompt(&mut stdin.lock(), &mut stdout.lock())
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
