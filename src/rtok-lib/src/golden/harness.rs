use super::fixture::Fixture;
use crate::error::RtokError;
use crate::syntax::{mismatch_report, tokenize, TokenizationResult};

/// Tokenizes one fixture and compares it against its baseline.
///
/// A missing baseline is never a pass: it is written from the observed
/// tokens and reported as `BaselineCreated`, unless the tokens contain
/// garbage, in which case nothing is written.
pub fn check_fixture(fixture: &Fixture) -> Result<(), RtokError> {
    let source = fixture.read_source()?;
    let actual = tokenize(&source);
    check_result(fixture, &source, &actual)
}

pub fn check_result(
    fixture: &Fixture,
    source: &str,
    actual: &TokenizationResult,
) -> Result<(), RtokError> {
    if !fixture.exists() {
        if actual.has_garbage() {
            return Err(RtokError::GarbageTokens {
                fixture: fixture.name.clone(),
                report: format!(
                    "{}in tokenization result:\n{actual}",
                    actual.garbage_report(source)
                ),
            });
        }
        fixture.write_expected(actual)?;
        return Err(RtokError::BaselineCreated {
            fixture: fixture.name.clone(),
            path: fixture.expected_path.clone(),
        });
    }

    let expected = fixture.read_expected()?;
    if expected == *actual {
        Ok(())
    } else {
        Err(RtokError::Mismatch {
            fixture: fixture.name.clone(),
            report: mismatch_report(&expected, actual),
        })
    }
}
