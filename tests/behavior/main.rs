use libtest_mimic::Arguments;
pub use libtest_mimic::Trial;

mod operations;
mod utils;

pub use utils::*;

fn main() {
    let args = Arguments::from_args();

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut tests: Vec<Trial> = Vec::new();

    operations::delete::tests(&mut tests);
    operations::warnings::tests(&mut tests);
    operations::notify::tests(&mut tests);
    operations::secret::tests(&mut tests);
    operations::config::tests(&mut tests);

    libtest_mimic::run(&args, tests).exit();
}
