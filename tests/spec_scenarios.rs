//! End-to-end scenarios exercising the decoder's documented guarantees:
//! header/record assembly, semantic-tier recovery, note continuation,
//! date/calendar linkage, and lenient-mode level-jump recovery.

use ged_io::{
    calendar, decode, decode_with_diagnostics, diagnostics::DiagnosticCollector, Gedcom,
    GedcomBuilder,
};

#[test]
fn test_minimal_document_assembles_header_and_linked_records() {
    let sample = "0 HEAD\n1 GEDC\n2 VERS 5.5\n1 CHAR UTF-8\n0 @I1@ INDI\n1 NAME John /Smith/\n1 SEX M\n0 @F1@ FAM\n1 HUSB @I1@\n0 TRLR";
    let data = decode(sample).unwrap();

    let header = data.header.as_ref().unwrap();
    assert_eq!(header.version(), Some("5.5"));
    assert_eq!(header.encoding.as_ref().unwrap().value.as_deref(), Some("UTF-8"));

    assert!(data.find_individual("@I1@").is_some());
    assert!(data.find_family("@F1@").is_some());

    let individual = data.find_individual("@I1@").unwrap();
    let name = individual.name.as_ref().unwrap();
    assert_eq!(name.given.as_deref(), Some("John"));
    assert_eq!(name.surname.as_deref(), Some("Smith"));
    assert_eq!(individual.sex.as_ref().unwrap().value.to_string(), "Male");
}

#[test]
fn test_invalid_quay_yields_zero_quality_instead_of_failing_parse() {
    let sample = "\
        0 HEAD\n\
        1 GEDC\n\
        2 VERS 5.5\n\
        0 @S1@ SOUR\n\
        0 @I1@ INDI\n\
        1 NAME Jane /Doe/\n\
        1 SOUR @S1@\n\
        2 QUAY invalid\n\
        0 TRLR";

    let mut collector = DiagnosticCollector::new();
    let data = decode_with_diagnostics(sample, &mut collector).unwrap();

    let individual = data.find_individual("@I1@").unwrap();
    let citation = &individual.source[0];
    assert_eq!(citation.certainty_assessment.as_ref().unwrap().get_int(), None);

    let diagnostics = collector.all();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "invalid-value");
    assert_eq!(diagnostics[0].line, 8);
    assert!(diagnostics[0].message.contains("QUAY"));
    assert_eq!(diagnostics[0].context.as_deref(), Some("invalid"));
}

#[test]
fn test_shared_note_with_continuation_joins_with_newline() {
    let sample = "0 @N1@ NOTE This is a shared note\n1 CONT referenced from multiple records.";
    let mut gedcom = Gedcom::new(sample.chars()).unwrap();
    let data = gedcom.parse_data().unwrap();

    let note = data.find_shared_note("@N1@").unwrap();
    assert_eq!(
        note.text,
        "This is a shared note\nreferenced from multiple records."
    );
}

#[test]
fn test_gregorian_date_matches_calendar_engine() {
    let jdn = calendar::gregorian_to_jdn(1850, 3, 15);
    assert_eq!(calendar::jdn_to_gregorian(jdn), (1850, 3, 15));
}

#[test]
fn test_level_jump_is_fatal_in_strict_mode() {
    let sample = "0 HEAD\n2 GEDC\n0 TRLR";
    let result = GedcomBuilder::new()
        .strict_mode(true)
        .build_from_str(sample);
    assert!(result.is_err());
}

#[test]
fn test_level_jump_recorded_as_diagnostic_in_lenient_mode() {
    let sample = "0 HEAD\n2 GEDC\n0 TRLR";
    let mut collector = DiagnosticCollector::new();
    let lines = ged_io::line::parse_lines(sample, &mut collector);

    assert!(collector.has_errors());
    assert_eq!(collector.errors_only()[0].code, "bad-level-jump");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].tag, "HEAD");
    assert_eq!(lines[1].tag, "TRLR");
}

#[test]
fn test_decode_with_diagnostics_still_assembles_clean_document() {
    let sample = "0 HEAD\n1 GEDC\n2 VERS 5.5\n0 TRLR";
    let mut collector = DiagnosticCollector::new();
    let data = decode_with_diagnostics(sample, &mut collector).unwrap();
    assert!(!collector.has_errors());
    assert_eq!(data.header.unwrap().version(), Some("5.5"));
}

#[test]
fn test_ansel_copyright_decodes_to_copyright_sign() {
    let sample_bytes = b"0 HEAD\n1 GEDC\n2 VERS 5.5\n1 CHAR ANSEL\n1 COPR \xC3\n0 TRLR";
    let (decoded, _) = ged_io::encoding::decode_gedcom_bytes(sample_bytes).unwrap();
    let data = decode(&decoded).unwrap();
    let copr = data.header.unwrap().copyright.unwrap();
    assert!(copr.contains('\u{00A9}'));
}
