// Console report adapter - Progress lines on stdout

use std::io::{self, Write};

use tracing::warn;

use crate::domain::model::Video;
use crate::ports::ReportPort;

/// Prints progress in the `(i/n) src => dst... OK` format
#[derive(Debug, Default, Clone)]
pub struct ConsoleReportAdapter;

impl ConsoleReportAdapter {
    pub fn new() -> Self {
        Self
    }

    fn emit(&self, text: &str, newline: bool) {
        if let Err(e) = write_progress(&mut io::stdout().lock(), text, newline) {
            warn!(error = %e, "Failed to write progress to stdout");
        }
    }
}

// Partial lines are finished by a later call, so flush eagerly.
fn write_progress<W: Write>(out: &mut W, text: &str, newline: bool) -> io::Result<()> {
    if newline {
        writeln!(out, "{}", text)?;
    } else {
        write!(out, "{}", text)?;
    }
    out.flush()
}

impl ReportPort for ConsoleReportAdapter {
    fn empty_directory(&self) {
        self.emit("The directory is empty, nothing to do.", true);
    }

    fn discovery_started(&self) {
        self.emit("Videos found... ", false);
    }

    fn discovery_finished(&self, total: usize) {
        self.emit(&total.to_string(), true);
    }

    fn no_videos(&self) {
        self.emit("No videos found, nothing to do.", true);
    }

    fn item_started(&self, index: usize, total: usize, video: &Video) {
        self.emit(
            &format!(
                "({}/{}) {} => {}... ",
                index,
                total,
                video.source_name(),
                video.destination_name()
            ),
            false,
        );
    }

    fn item_finished(&self) {
        self.emit("OK", true);
    }

    fn done(&self) {
        self.emit("Done!", true);
    }
}
