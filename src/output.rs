use crate::error::Error;
use crate::split::{Amount, Participant};

use serde::Serialize;

#[derive(Serialize)]
struct ParticipantRecord<'a> {
    id: &'a str,

    #[serde(rename = "name")]
    display_name: &'a str,

    #[serde(rename = "included")]
    is_included: bool,

    #[serde(rename = "input")]
    raw_input: &'a str,

    #[serde(rename = "owed")]
    owed_amount: Amount,
}

impl<'a> ParticipantRecord<'a> {
    fn new(participant: &'a Participant) -> Self {
        Self {
            id: &participant.id,
            display_name: &participant.display_name,
            is_included: participant.is_included,
            raw_input: &participant.raw_input,
            owed_amount: participant.owed_amount,
        }
    }
}

// Writes the participants, with what they owe, to the given stream.
pub fn write(
    output_stream: impl std::io::Write,
    participants: &[Participant],
) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for participant in participants {
        writer.serialize(ParticipantRecord::new(participant))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod write_tests {
    use crate::split::{round_to_cents, Participant};

    use rust_decimal_macros::dec;

    #[test]
    fn test_write_participants() {
        let mut output_stream = Vec::new();
        let mut participants = Vec::new();
        for (id, name, included, input, owed) in vec![
            ("1", "Alice", true, "60", dec!(60)),
            ("2", "Bob", true, "abc", dec!(0)),
            ("3", "Carol, Jr.", false, "", dec!(33.335)),
        ] {
            let mut participant = Participant::new(id, name, included, input);
            participant.owed_amount = round_to_cents(owed);
            participants.push(participant);
        }

        super::write(&mut output_stream, &participants).unwrap();

        let want = r#"id,name,included,input,owed
1,Alice,true,60,60.00
2,Bob,true,abc,0.00
3,"Carol, Jr.",false,,33.34
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    fn test_write_nobody() {
        let mut output_stream = Vec::new();
        super::write(&mut output_stream, &[]).unwrap();

        assert_eq!("", String::from_utf8(output_stream).unwrap());
    }
}
