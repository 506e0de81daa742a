use serde::Serialize;
use serde_json::Value;
use std::io::{BufReader, Read, Write};
use thiserror::Error;
use tracing::error;

use crate::domain::Outcome;
use crate::observability::{MetricsRegistry, TimingGuard};
use crate::rules::RuleSet;

/// Errors that stop a document stream.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON input in document {index}: {source}")]
    Json {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One output line.
#[derive(Serialize)]
struct Report<'a> {
    document: usize,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

/// Evaluate a stream of concatenated or newline-delimited JSON documents.
///
/// Each result line is written and flushed before the next document is
/// read, so an input that stays open still produces output as it arrives.
/// Returns the number of documents evaluated.
pub fn evaluate_stream<R: Read, W: Write>(
    ruleset: &RuleSet,
    input: R,
    mut output: W,
    metrics: &MetricsRegistry,
) -> Result<usize, StreamError> {
    let documents =
        serde_json::Deserializer::from_reader(BufReader::new(input)).into_iter::<Value>();

    let mut count = 0;
    for (index, document) in documents.enumerate() {
        let document = document.map_err(|source| {
            metrics.record_invalid_document();
            error!(document = index, error = %source, "Malformed JSON input");
            if source.is_io() {
                StreamError::Io(source.into())
            } else {
                StreamError::Json { index, source }
            }
        })?;

        let outcome = {
            let _timer = TimingGuard::new(metrics);
            ruleset.evaluate(&document)
        };
        metrics.record_outcome(&outcome);

        let report = Report {
            document: index,
            outcome: &outcome,
        };
        serde_json::to_writer(&mut output, &report).map_err(std::io::Error::from)?;
        output.write_all(b"\n")?;
        output.flush()?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValueMatcher;
    use crate::rules::FieldRule;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    fn adult_rules() -> RuleSet {
        let mut ruleset = RuleSet::empty();
        ruleset.push(FieldRule::new("adult", "age", ValueMatcher::at_least(18)));
        ruleset
    }

    #[derive(Clone, Default)]
    struct SharedOutput(Rc<RefCell<Vec<u8>>>);

    impl SharedOutput {
        fn lines(&self) -> usize {
            self.0.borrow().iter().filter(|b| **b == b'\n').count()
        }
    }

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Serves one chunk per read and checks that every earlier chunk's
    /// document has already been answered.
    struct ChunkedInput {
        chunks: VecDeque<&'static str>,
        served: usize,
        output: SharedOutput,
    }

    impl Read for ChunkedInput {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let Some(chunk) = self.chunks.pop_front() else {
                return Ok(0);
            };
            assert_eq!(
                self.output.lines(),
                self.served,
                "input read before earlier results were written"
            );
            self.served += 1;
            buf[..chunk.len()].copy_from_slice(chunk.as_bytes());
            Ok(chunk.len())
        }
    }

    #[test]
    fn test_results_written_before_next_read() {
        let output = SharedOutput::default();
        let input = ChunkedInput {
            chunks: VecDeque::from([
                concat!(r#"{"age": 30}"#, "\n"),
                concat!(r#"{"age": 12}"#, "\n"),
            ]),
            served: 0,
            output: output.clone(),
        };

        let metrics = MetricsRegistry::new();
        let count = evaluate_stream(&adult_rules(), input, output.clone(), &metrics).unwrap();

        assert_eq!(count, 2);
        let text = String::from_utf8(output.0.borrow().clone()).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"document":0,"matched":["adult"],"unmatched":[]}"#,
                "\n",
                r#"{"document":1,"matched":[],"unmatched":["adult"]}"#,
                "\n"
            )
        );
    }

    #[test]
    fn test_concatenated_documents() {
        let mut out = Vec::new();
        let metrics = MetricsRegistry::new();

        let count = evaluate_stream(
            &adult_rules(),
            r#"{"age": 18}{"age": 17} {"name": "x"}"#.as_bytes(),
            &mut out,
            &metrics,
        )
        .unwrap();

        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
        assert!(metrics.to_prometheus().contains("valmatch_documents_total 3"));
    }

    #[test]
    fn test_malformed_document_stops_stream() {
        let mut out = Vec::new();
        let metrics = MetricsRegistry::new();

        let err = evaluate_stream(
            &adult_rules(),
            r#"{"age": 40} {"age": "#.as_bytes(),
            &mut out,
            &metrics,
        )
        .unwrap_err();

        assert!(matches!(err, StreamError::Json { index: 1, .. }));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
        assert!(metrics
            .to_prometheus()
            .contains("valmatch_documents_invalid_total 1"));
    }
}
