use std::io::{self, BufRead, Write};

use super::ops::{self, Extremal};
use super::{AreaQuery, Command, Reply, parse_command};
use crate::domain::Polygon;
use crate::error::{CommandError, INVALID_COMMAND_MARKER};

/// Default number of fractional digits for area replies
pub const DEFAULT_PRECISION: usize = 1;

/// Owns the working set and answers commands against it
#[derive(Debug, Clone)]
pub struct QueryEngine {
    polygons: Vec<Polygon>,
    precision: usize,
    verbose: bool,
}

impl QueryEngine {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            precision: DEFAULT_PRECISION,
            verbose: false,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Run one parsed command
    ///
    /// Only [`Command::Echo`] touches the working set, and only on success.
    pub fn execute(&mut self, command: &Command) -> Result<Reply, CommandError> {
        let reply = match command {
            Command::Area(AreaQuery::Sum(filter)) => {
                Reply::Area(ops::area_filtered(&self.polygons, *filter))
            }
            Command::Area(AreaQuery::Mean) => Reply::Area(ops::area_mean(&self.polygons)?),
            Command::Extremum(which, measure) => {
                match ops::extremum(&self.polygons, *which, *measure)? {
                    Extremal::Area(value) => Reply::Area(value),
                    Extremal::Vertexes(count) => Reply::Count(count),
                }
            }
            Command::Count(filter) => Reply::Count(ops::count_filtered(&self.polygons, *filter)),
            Command::Echo(target) => Reply::Count(ops::echo(&mut self.polygons, target)),
            Command::Intersections(target) => {
                Reply::Count(ops::intersections(&self.polygons, target))
            }
            Command::RightShapes => Reply::Count(ops::right_shapes(&self.polygons)),
        };
        Ok(reply)
    }

    /// Parse and run one command line, returning the line to print
    pub fn respond(&mut self, line: &str) -> String {
        let result = parse_command(line).and_then(|command| {
            let reply = self.execute(&command)?;
            if self.verbose && command.mutates() {
                eprintln!("  Working set now holds {} polygons", self.polygons.len());
            }
            Ok(reply)
        });

        match result {
            Ok(reply) => reply.render(self.precision),
            Err(err) => {
                if self.verbose {
                    eprintln!("  {}: {}", line.trim(), err.reason());
                }
                INVALID_COMMAND_MARKER.to_string()
            }
        }
    }

    /// Answer every command line from `input`, one reply line per command
    ///
    /// Blank lines produce no output. Reading stops at end of input or on the
    /// first read error; write errors are returned.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    eprintln!("Warning: stopped reading commands: {}", e);
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }

            writeln!(output, "{}", self.respond(&line))?;
        }
        output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_record;
    use std::io::Cursor;

    fn engine(lines: &[&str]) -> QueryEngine {
        QueryEngine::new(lines.iter().map(|l| parse_record(l).unwrap()).collect())
    }

    fn run(engine: &mut QueryEngine, script: &str) -> String {
        let mut out = Vec::new();
        engine.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_identical_triangles() {
        let mut e = engine(&["3 (0;0) (0;2) (2;0)", "3 (0;0) (0;2) (2;0)"]);
        assert_eq!(run(&mut e, "AREA EVEN\nAREA ODD\n"), "0.0\n4.0\n");
    }

    #[test]
    fn test_full_session() {
        let mut e = engine(&["4 (0;0) (0;1) (1;1) (1;0)", "3 (0;0) (5;1) (1;3)"]);
        let script = "AREA MEAN\n\
                      MAX AREA\n\
                      MIN VERTEXES\n\
                      COUNT EVEN\n\
                      COUNT 3\n\
                      RIGHTSHAPES\n\
                      INTERSECTIONS 3 (1;1) (5;5) (1;5)\n\
                      AREA 4\n";
        assert_eq!(run(&mut e, script), "4.0\n7.0\n3\n1\n1\n1\n2\n1.0\n");
    }

    #[test]
    fn test_invalid_command_leaves_set_unchanged() {
        let mut e = engine(&["3 (0;0) (0;2) (2;0)"]);
        assert_eq!(run(&mut e, "FOO\n"), "<INVALID COMMAND>\n");
        assert_eq!(e.polygons().len(), 1);
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let mut e = engine(&[]);
        let script = "AREA MEAN\nMAX AREA\nBOGUS\nCOUNT ODD\nAREA EVEN\n";
        assert_eq!(
            run(&mut e, script),
            "<INVALID COMMAND>\n<INVALID COMMAND>\n<INVALID COMMAND>\n0\n0.0\n"
        );
    }

    #[test]
    fn test_rmecho_grows_working_set() {
        let mut e = engine(&[
            "3 (0;0) (0;2) (2;0)",
            "3 (0;0) (0;2) (2;0)",
            "4 (0;0) (0;1) (1;1) (1;0)",
        ]);
        assert_eq!(run(&mut e, "RMECHO 3 (0;0) (0;2) (2;0)\n"), "2\n");
        assert_eq!(e.polygons().len(), 5);
        assert_eq!(run(&mut e, "COUNT ODD\nAREA ODD\n"), "4\n8.0\n");
    }

    #[test]
    fn test_bad_literal_does_not_mutate() {
        let mut e = engine(&["3 (0;0) (0;2) (2;0)"]);
        assert_eq!(run(&mut e, "RMECHO 3 (0;0) (0;2)\n"), "<INVALID COMMAND>\n");
        assert_eq!(e.polygons().len(), 1);
    }

    #[test]
    fn test_huge_literal_count_keeps_loop_alive() {
        let mut e = engine(&["3 (0;0) (0;2) (2;0)"]);
        let script = "RMECHO 99999999999999 (0;0)\n\
                      INTERSECTIONS 18446744073709551615 (0;0) (1;1) (2;0)\n\
                      COUNT ODD\n";
        assert_eq!(run(&mut e, script), "<INVALID COMMAND>\n<INVALID COMMAND>\n1\n");
        assert_eq!(e.polygons().len(), 1);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut e = engine(&["3 (0;0) (0;2) (2;0)"]);
        assert_eq!(run(&mut e, "\n   \nCOUNT ODD\n\n"), "1\n");
    }

    #[test]
    fn test_precision() {
        let mut e = engine(&["3 (0;0) (0;1) (1;0)"]).with_precision(3);
        assert_eq!(run(&mut e, "AREA ODD\nCOUNT ODD"), "0.500\n1\n");
    }

    #[test]
    fn test_execute_returns_typed_reply() {
        let mut e = engine(&["3 (0;0) (0;2) (2;0)"]);
        assert_eq!(e.execute(&Command::RightShapes), Ok(Reply::Count(1)));
        assert_eq!(e.execute(&Command::Area(AreaQuery::Mean)), Ok(Reply::Area(2.0)));
    }
}
