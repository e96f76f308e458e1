use std::io::{self, Write};

/// Receives updates while a pipeline walks its page URLs.
pub trait Progress {
    /// The URL list is resolved; `total` pages will be visited.
    fn begin(&mut self, _total: usize) {}

    /// A message about one page, such as `"<url> failed..."`.
    fn log(&mut self, _msg: &str) {}

    /// Page number `done` (1-based) has been handled, whether it succeeded or not.
    fn item_done(&mut self, _done: usize) {}

    /// No more pages will be visited in this run.
    fn finish(&mut self) {}
}

/// Discards every update; used when nobody is watching the run.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Writes `"\ri of total"` to a terminal-like sink, rewriting the same line
/// after each page. Messages go on a line of their own.
pub struct ConsoleProgress<W: Write = io::Stdout> {
    out: W,
    total: usize,
    mid_line: bool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            total: 0,
            mid_line: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Terminal output is best effort; a closed stdout must not fail the run
    fn end_line(&mut self) {
        if self.mid_line {
            let _ = writeln!(self.out);
            self.mid_line = false;
        }
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.mid_line = false;
    }

    fn log(&mut self, msg: &str) {
        self.end_line();
        let _ = writeln!(self.out, "{msg}");
    }

    fn item_done(&mut self, done: usize) {
        let _ = write!(self.out, "\r{} of {}", done, self.total);
        let _ = self.out.flush();
        self.mid_line = true;
    }

    fn finish(&mut self) {
        self.end_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(progress: ConsoleProgress<Vec<u8>>) -> String {
        String::from_utf8(progress.into_inner()).unwrap()
    }

    #[test]
    fn test_counter_rewrites_one_line() {
        let mut progress = ConsoleProgress::with_writer(Vec::new());
        progress.begin(3);
        progress.item_done(1);
        progress.item_done(2);
        progress.item_done(3);
        progress.finish();

        assert_eq!(output(progress), "\r1 of 3\r2 of 3\r3 of 3\n");
    }

    #[test]
    fn test_messages_break_the_counter_line() {
        let mut progress = ConsoleProgress::with_writer(Vec::new());
        progress.begin(2);
        progress.item_done(1);
        progress.log("https://dnd5e.wikidot.com/spell:gone failed...");
        progress.item_done(2);
        progress.finish();

        assert_eq!(
            output(progress),
            "\r1 of 2\nhttps://dnd5e.wikidot.com/spell:gone failed...\n\r2 of 2\n"
        );
    }

    #[test]
    fn test_finish_without_pages_writes_nothing() {
        let mut progress = ConsoleProgress::with_writer(Vec::new());
        progress.begin(0);
        progress.finish();

        assert_eq!(output(progress), "");
    }
}
