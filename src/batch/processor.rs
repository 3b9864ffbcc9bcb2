// ============================================================================
// Batch Processor
// Turns lines of text into numbered outcomes, sequentially or in parallel
// ============================================================================

use crate::domain::{BatchConfig, BatchSummary, LineOutcome};
use crate::engine::Operation;
use crate::interfaces::OutcomeHandler;
use crate::numeral::ConfigError;
use std::io::{self, BufRead};
use std::panic;
use std::sync::Arc;

/// First two whitespace-separated tokens of a line.
///
/// A missing token comes back as `""`, which never validates. Anything after
/// the second token is ignored.
pub fn split_operands(line: &str) -> (&str, &str) {
    let mut tokens = line.split_whitespace();
    (tokens.next().unwrap_or(""), tokens.next().unwrap_or(""))
}

/// Lines of `reader` without their `\n` / `\r\n` terminator.
///
/// Bytes that are not UTF-8 become U+FFFD, which no numeral accepts, so such
/// a line yields an invalid-numeral outcome instead of ending the batch.
pub fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        line.map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            String::from_utf8_lossy(&bytes).into_owned()
        })
    })
}

/// Evaluate one line under `operation`.
pub fn evaluate_line(line_number: usize, line: &str, operation: Operation) -> LineOutcome {
    let (a, b) = split_operands(line);
    let outcome = operation.apply(a, b);

    match &outcome {
        Ok(value) => tracing::debug!(line = line_number, %a, %b, %value, "evaluated"),
        Err(e) => tracing::warn!(line = line_number, error = %e, "invalid numeral"),
    }

    LineOutcome::new(line_number, outcome)
}

/// Evaluate already-numbered lines on `workers` scoped threads.
///
/// Lines are split into contiguous chunks, one per worker; outcomes come back
/// in input order.
pub fn evaluate_numbered_parallel(
    lines: &[(usize, &str)],
    operation: Operation,
    workers: usize,
) -> Vec<LineOutcome> {
    if workers <= 1 || lines.len() <= 1 {
        return lines
            .iter()
            .map(|&(n, line)| evaluate_line(n, line, operation))
            .collect();
    }

    let chunk_size = lines.len().div_ceil(workers);

    let scoped = crossbeam::thread::scope(|s| {
        let handles: Vec<_> = lines
            .chunks(chunk_size)
            .map(|chunk| {
                s.spawn(move |_| {
                    chunk
                        .iter()
                        .map(|&(n, line)| evaluate_line(n, line, operation))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|p| panic::resume_unwind(p)))
            .collect::<Vec<_>>()
    });

    scoped.unwrap_or_else(|p| panic::resume_unwind(p))
}

/// Drives a batch of lines through the engine and hands every outcome to the
/// configured handler.
pub struct BatchProcessor {
    config: BatchConfig,
    handler: Arc<dyn OutcomeHandler>,
}

impl BatchProcessor {
    /// # Errors
    /// Returns the validation error of an inconsistent `config`.
    pub fn new(config: BatchConfig, handler: Arc<dyn OutcomeHandler>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, handler })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Number lines from 1, dropping blank ones when configured to.
    fn numbered<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> Vec<(usize, &'a str)> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_ref()))
            .filter(|(_, line)| !(self.config.skip_blank_lines && line.trim().is_empty()))
            .collect()
    }

    /// Evaluate in-memory lines.
    pub fn process_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LineOutcome> {
        self.summarize_lines(lines).0
    }

    /// Evaluate in-memory lines and count what they produced.
    pub fn summarize_lines<S: AsRef<str>>(&self, lines: &[S]) -> (Vec<LineOutcome>, BatchSummary) {
        let numbered = self.numbered(lines);
        let outcomes =
            evaluate_numbered_parallel(&numbered, self.config.operation, self.config.workers);

        self.handler.on_outcomes(&outcomes);
        let summary = BatchSummary::from_outcomes(lines.len(), &outcomes);
        log_summary(&summary);
        (outcomes, summary)
    }

    /// Read lines from `reader` and evaluate them.
    ///
    /// In sequential mode each outcome reaches the handler as soon as its line
    /// is read; in parallel mode the input is read fully first.
    ///
    /// # Errors
    /// Returns the reader's I/O error; lines already handled stay handled.
    pub fn process_reader<R: BufRead>(&self, reader: R) -> io::Result<Vec<LineOutcome>> {
        self.summarize_reader(reader).map(|(outcomes, _)| outcomes)
    }

    /// [`BatchProcessor::process_reader`] plus the batch counts. Skipped blank
    /// lines count as read but produce no outcome.
    ///
    /// # Errors
    /// Returns the reader's I/O error.
    pub fn summarize_reader<R: BufRead>(
        &self,
        reader: R,
    ) -> io::Result<(Vec<LineOutcome>, BatchSummary)> {
        if self.config.is_parallel() {
            let lines = lossy_lines(reader).collect::<io::Result<Vec<_>>>()?;
            return Ok(self.summarize_lines(&lines));
        }

        let mut outcomes = Vec::new();
        let mut lines_read = 0;
        for (i, line) in lossy_lines(reader).enumerate() {
            let line = line?;
            lines_read = i + 1;
            if self.config.skip_blank_lines && line.trim().is_empty() {
                continue;
            }
            let outcome = evaluate_line(i + 1, &line, self.config.operation);
            self.handler.on_outcome(&outcome);
            outcomes.push(outcome);
        }

        let summary = BatchSummary::from_outcomes(lines_read, &outcomes);
        log_summary(&summary);
        Ok((outcomes, summary))
    }
}

fn log_summary(summary: &BatchSummary) {
    tracing::info!(
        lines = summary.lines_read,
        evaluated = summary.evaluated,
        invalid = summary.invalid,
        "batch complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{CollectingOutcomeHandler, NoOpOutcomeHandler};
    use std::io::Cursor;

    const INPUT: &str = "1.5 2.25\n10.0 -0.01\n1.2.3 4\n99.9 0.1\n\n-5 5\n";

    fn processor(config: BatchConfig) -> BatchProcessor {
        BatchProcessor::new(config, Arc::new(NoOpOutcomeHandler)).unwrap()
    }

    fn rendered(outcomes: &[LineOutcome]) -> Vec<String> {
        outcomes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_split_operands() {
        assert_eq!(split_operands("  1.5 \t -2 "), ("1.5", "-2"));
        assert_eq!(split_operands("7"), ("7", ""));
        assert_eq!(split_operands(""), ("", ""));
        assert_eq!(split_operands("1 2 3"), ("1", "2"));
    }

    #[test]
    fn test_evaluate_line() {
        let ok = evaluate_line(3, "5 -3", Operation::Add);
        assert_eq!(ok.line_number, 3);
        assert_eq!(ok.value(), Some("2"));

        let sub = evaluate_line(4, "5 -3", Operation::Subtract);
        assert_eq!(sub.value(), Some("8"));

        let short = evaluate_line(5, "5", Operation::Add);
        assert!(!short.is_ok());
    }

    #[test]
    fn test_invalid_line_does_not_stop_processing() {
        let outcomes = processor(BatchConfig::new())
            .process_reader(Cursor::new(INPUT))
            .unwrap();

        assert_eq!(
            rendered(&outcomes),
            vec![
                "3.75",
                "9.99",
                "Invalid number(s) found in line: 3",
                "100",
                "Invalid number(s) found in line: 5",
                "0",
            ]
        );
    }

    #[test]
    fn test_skip_blank_lines_keeps_numbering() {
        let outcomes = processor(BatchConfig::new().with_skip_blank_lines(true))
            .process_reader(Cursor::new(INPUT))
            .unwrap();

        assert_eq!(outcomes.len(), 5);
        assert_eq!(outcomes[4].line_number, 6);
        assert_eq!(outcomes[4].value(), Some("0"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let lines: Vec<String> = (0..97)
            .map(|i| match i % 4 {
                0 => format!("{i}.{i} -{i}9"),
                1 => format!("-{i} 0.{i}"),
                2 => format!("{i}. 1"),
                _ => format!("99999999999999999999{i} 1"),
            })
            .collect();

        let sequential = processor(BatchConfig::new()).process_lines(&lines);
        for workers in [2, 3, 8, 200] {
            let parallel =
                processor(BatchConfig::new().with_workers(workers)).process_lines(&lines);
            assert_eq!(parallel, sequential, "workers = {workers}");
        }
    }

    #[test]
    fn test_parallel_reader_path() {
        let outcomes = processor(BatchConfig::new().with_workers(3))
            .process_reader(Cursor::new(INPUT))
            .unwrap();
        assert_eq!(outcomes.len(), 6);
        assert_eq!(outcomes[2].line_number, 3);
        assert!(!outcomes[2].is_ok());
    }

    #[test]
    fn test_handler_sees_every_outcome() {
        let handler = Arc::new(CollectingOutcomeHandler::new());
        let processor = BatchProcessor::new(BatchConfig::new(), handler.clone()).unwrap();

        let outcomes = processor.process_reader(Cursor::new(INPUT)).unwrap();
        assert_eq!(handler.take(), outcomes);
    }

    #[test]
    fn test_lossy_lines_strip_terminators() {
        let lines: Vec<String> = lossy_lines(Cursor::new(b"1 2\r\n3 4\n\n5 6"))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["1 2", "3 4", "", "5 6"]);
    }

    #[test]
    fn test_non_utf8_line_is_reported_and_batch_continues() {
        let input: &[u8] = b"1 2\n\xff 3\n4 5\n";

        for workers in [1, 2] {
            let outcomes = processor(BatchConfig::new().with_workers(workers))
                .process_reader(Cursor::new(input))
                .unwrap();

            assert_eq!(
                rendered(&outcomes),
                vec!["3", "Invalid number(s) found in line: 2", "9"],
                "workers = {workers}"
            );
        }
    }

    #[test]
    fn test_summary_counts_skipped_lines_as_read() {
        for workers in [1, 3] {
            let config = BatchConfig::new()
                .with_skip_blank_lines(true)
                .with_workers(workers);
            let (outcomes, summary) = processor(config)
                .summarize_reader(Cursor::new(INPUT))
                .unwrap();

            assert_eq!(outcomes.len(), 5);
            assert_eq!(
                summary,
                BatchSummary {
                    lines_read: 6,
                    evaluated: 4,
                    invalid: 1
                },
                "workers = {workers}"
            );
        }
    }

    #[test]
    fn test_rejects_zero_workers() {
        let result = BatchProcessor::new(
            BatchConfig::new().with_workers(0),
            Arc::new(NoOpOutcomeHandler),
        );
        assert!(matches!(result, Err(ConfigError::ZeroWorkers)));
    }

    #[test]
    fn test_subtract_batch() {
        let outcomes = processor(BatchConfig::new().with_operation(Operation::Subtract))
            .process_lines(&["10.0 0.01", "-5 -5", "3 7"]);
        assert_eq!(rendered(&outcomes), vec!["9.99", "0", "-4"]);
    }
}
