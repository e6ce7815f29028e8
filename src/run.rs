use crate::error::Error;
use crate::input::parse;
use crate::output::write;
use crate::split::{calculate, reconcile, Amount, Reconciliation, SplitStrategy};

/// Read participants from `input_stream`, split `total_amount` between them
/// and write the result to `output_stream`.
///
/// A split that doesn't add up to the total is not an error: it gets logged,
/// and the returned reconciliation tells the caller about it.
pub fn run(
    input_stream: impl std::io::Read,
    output_stream: impl std::io::Write,
    total_amount: Amount,
    strategy: SplitStrategy,
) -> Result<Reconciliation, Error> {
    let participants = parse(input_stream)?;
    tracing::debug!(count = participants.len(), %strategy, "read participants");

    let participants = calculate(total_amount, &participants, strategy);
    write(output_stream, &participants)?;

    let reconciliation = reconcile(total_amount, &participants);
    if !reconciliation.is_balanced() {
        tracing::warn!(
            expected = %reconciliation.expected,
            allocated = %reconciliation.allocated,
            difference = %reconciliation.difference,
            "split doesn't add up to the total"
        );
    }

    Ok(reconciliation)
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::error::Error;
    use crate::split::SplitStrategy;

    use rust_decimal_macros::dec;

    #[test]
    fn test_run_equal_split() {
        let data = r#"id,name,included,input
1,Alice,true,
2,Bob,false,
3,Carol,true,
4,Dan,true,"#;
        let mut output_stream = Vec::new();

        let got = run(
            std::io::Cursor::new(data),
            &mut output_stream,
            dec!(100),
            SplitStrategy::Equal,
        )
        .expect("should split");

        assert!(got.is_balanced());
        let want = r#"id,name,included,input,owed
1,Alice,true,,33.34
2,Bob,false,,0.00
3,Carol,true,,33.33
4,Dan,true,,33.33
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    fn test_run_unbalanced_split_is_not_an_error() {
        let data = r#"id,name,included,input
1,Alice,true,abc
2,Bob,true,50"#;
        let mut output_stream = Vec::new();

        let got = run(
            std::io::Cursor::new(data),
            &mut output_stream,
            dec!(100),
            SplitStrategy::ExactAmount,
        )
        .expect("should split");

        assert_eq!(dec!(50), got.difference);
        let want = r#"id,name,included,input,owed
1,Alice,true,abc,0.00
2,Bob,true,50,50.00
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    fn test_run_malformed_csv() {
        let data = r#"id,name,included,input
1,Alice"#;

        let got = run(
            std::io::Cursor::new(data),
            std::io::sink(),
            dec!(100),
            SplitStrategy::Equal,
        );
        assert!(matches!(got, Err(Error::Csv(_))), "{:?}", got);
    }
}
