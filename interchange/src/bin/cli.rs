use interchange::InterchangeError;
use interchange::run;

fn main() -> Result<(), InterchangeError> {
    env_logger::init();
    run(std::env::args().collect())
}
