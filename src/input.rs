use crate::error::Error;
use crate::split::Participant;

use serde::Deserialize;

impl From<<ParticipantRecord as TryInto<Participant>>::Error> for Error {
    fn from(err: <ParticipantRecord as TryInto<Participant>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

// When parsing, I'm making the assumption that we want to completely abort
// on errors.
// When we're reading a CSV file, it makes sense to fix the CSV, then try
// again, rather than splitting a bill between whoever happened to be readable.
//
// Note that this only applies to the structure of the file. The `input`
// column is free text, and garbage there simply counts as 0.
pub fn parse(input_stream: impl std::io::Read) -> Result<Vec<Participant>, Error> {
    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    reader
        .deserialize::<ParticipantRecord>()
        .map(convert)
        .collect()
}

// Convert from a csv deserialise result into a participant result.
fn convert(record: Result<ParticipantRecord, csv::Error>) -> Result<Participant, Error> {
    Ok(record?.try_into()?)
}

#[test]
// Parsing well-formed data should return the participants, in order.
fn test_parse_ok() {
    let data = r#"id,name,included,input
1,Alice,true,60
2,Bob,true,abc
3,Carol,false,
4,Dan,true,"#;
    let reader = std::io::Cursor::new(data);
    let participants = parse(reader).expect("parsing should succeed");

    assert_eq!(
        vec![
            Participant::new("1", "Alice", true, "60"),
            Participant::new("2", "Bob", true, "abc"),
            Participant::new("3", "Carol", false, ""),
            Participant::new("4", "Dan", true, ""),
        ],
        participants
    );
}

#[test]
fn test_parse_ok_with_whitespace() {
    let data = r#"id,    name,   included, input
1 ,  Alice  ,   true ,  12.5
    2,Bob,false,3"#;
    let reader = std::io::Cursor::new(data);
    let participants = parse(reader).expect("parsing should succeed");

    assert_eq!(
        vec![
            Participant::new("1", "Alice", true, "12.5"),
            Participant::new("2", "Bob", false, "3"),
        ],
        participants
    );
}

#[test]
fn test_parse_empty() {
    let reader = std::io::Cursor::new("id,name,included,input\n");
    assert_eq!(Ok(vec![]), parse(reader));
}

#[test]
// Parsing incorrectly formatted data should return an Err.
fn test_parse_invalid_format() {
    for (data, err_contains) in vec![
        (
            r#"id,name,included,input
1,Alice,maybe,10"#,
            "provided string was not `true` or `false`",
        ),
        (
            r#"id,name,included,input
1,Alice,true"#,
            "found record with 3 fields, but the previous record has 4 fields",
        ),
        (
            r#"id,name,included,input
1,Alice,true,10,,,"#,
            "found record with 7 fields, but the previous record has 4 fields",
        ),
    ] {
        let reader = std::io::Cursor::new(data);

        match parse(reader) {
            Err(Error::Csv(msg)) => assert!(msg.contains(err_contains), "{:?}", msg),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

#[test]
// A record without an id can't be told apart from the others.
fn test_parse_invalid_data() {
    let data = r#"id,name,included,input
,Alice,true,10"#;
    let reader = std::io::Cursor::new(data);

    assert_eq!(
        Err(Error::Format("missing participant id".to_string())),
        parse(reader)
    );
}

// I have a ParticipantRecord type because I don't want to deserialise
// straight into my "domain" type, i.e. Participant.
//
// Participant has an owed amount that is the output of the calculation, and
// makes no assumption on how participants are actually formatted, so both
// domain logic and parsing are easier to maintain.
#[derive(Debug, Deserialize)]
pub struct ParticipantRecord {
    id: String,

    #[serde(rename = "name")]
    display_name: String,

    #[serde(rename = "included")]
    is_included: bool,

    #[serde(rename = "input")]
    raw_input: String,
}

impl TryFrom<ParticipantRecord> for Participant {
    type Error = &'static str;
    fn try_from(record: ParticipantRecord) -> Result<Self, Self::Error> {
        if record.id.is_empty() {
            return Err("missing participant id");
        }

        Ok(Self::new(
            record.id,
            record.display_name,
            record.is_included,
            record.raw_input,
        ))
    }
}

#[test]
fn test_participant_record_into_participant() {
    let record = ParticipantRecord {
        id: "42".to_string(),
        display_name: "Alice".to_string(),
        is_included: true,
        raw_input: "1.5".to_string(),
    };

    assert_eq!(
        Ok(Participant::new("42", "Alice", true, "1.5")),
        Participant::try_from(record)
    );
}
