use std::time::Instant;

use cliclack::{spinner, ProgressBar};

use crate::{config::global_config, logger};

/// Shows a spinner while a slow call is in flight.
pub struct Spinner {
    msg: String,
    pb: ProgressBar,
    time: Instant,
}

impl Spinner {
    pub fn new(msg: &str) -> Self {
        let pb = spinner();
        pb.start(msg);
        if global_config().verbose {
            logger::debug(msg);
        }
        Spinner {
            msg: msg.to_owned(),
            pb,
            time: Instant::now(),
        }
    }

    pub fn finish(self) {
        self.pb.stop(format!(
            "{} done in {} secs",
            self.msg,
            self.time.elapsed().as_secs_f64()
        ));
    }

    pub fn fail(self) {
        self.pb.error(format!(
            "{} failed in {} secs",
            self.msg,
            self.time.elapsed().as_secs_f64()
        ));
    }
}
