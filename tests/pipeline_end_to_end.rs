//! End-to-end tests for corpus generation
//!
//! Runs the full assembler over records and checks the emitted corpus text
//! and the statistics report.

use corpusgen::corpus::pipeline::{records_from_table, CorpusGenerator, Table};
use corpusgen::corpus::rewriter::{AcronymDictionary, ExpressionDictionary};
use corpusgen::corpus::Record;

fn empty_dicts() -> (AcronymDictionary, ExpressionDictionary) {
    (
        AcronymDictionary::default(),
        ExpressionDictionary::default(),
    )
}

#[test]
fn onu_scenario_produces_expected_header_and_body() {
    let records = vec![Record::new(
        "1",
        "Tenho 20 anos e moro no Brasil (ONU)",
    )];
    let acronyms = AcronymDictionary::from_pairs([("onu", "Organização das Nações Unidas")]);
    let expressions = ExpressionDictionary::default();

    let generator = CorpusGenerator::new();
    let out = generator
        .generate("extended", &records, &acronyms, &expressions)
        .unwrap();

    assert_eq!(
        out.corpus,
        "**** *ID_1\ntenho 20 anos e moro no brasil organização das nações unidas\n"
    );
    assert_eq!(out.stats.records, 1);
    assert_eq!(out.stats.acronym_entries, 1);
}

#[test]
fn blank_records_are_excluded_from_output_and_counts() {
    let records = vec![
        Record::new("1", "texto válido"),
        Record::new("2", "   "),
        Record::new("3", ""),
        Record::new("4", "outro texto"),
    ];
    let (acronyms, expressions) = empty_dicts();
    let out = CorpusGenerator::new()
        .generate("extended", &records, &acronyms, &expressions)
        .unwrap();

    assert_eq!(out.stats.records, 2);
    assert!(out.corpus.contains("**** *ID_1"));
    assert!(!out.corpus.contains("**** *ID_2"));
    assert!(!out.corpus.contains("**** *ID_3"));
    assert_eq!(out.corpus.lines().count(), 4);
}

#[test]
fn header_attributes_follow_column_order() {
    let table = Table::from_json(
        r#"{ "columns": ["id", "textos selecionados", "sexo", "faixa etária"],
             "rows": [[10, "resposta curta", "f", "30 a 40"]] }"#,
    )
    .unwrap();
    let records = records_from_table(&table, "id", "textos selecionados").unwrap();
    let (acronyms, expressions) = empty_dicts();
    let out = CorpusGenerator::new()
        .generate("legacy", &records, &acronyms, &expressions)
        .unwrap();

    assert!(out
        .corpus
        .starts_with("**** *ID_10 *sexo_f *faixa_etária_30_a_40\n"));
}

#[test]
fn plain_text_comes_out_lowercased_and_collapsed() {
    let records = vec![Record::new("1", "  Texto   Simples   Aqui ")];
    let (acronyms, expressions) = empty_dicts();
    let out = CorpusGenerator::new()
        .generate("legacy", &records, &acronyms, &expressions)
        .unwrap();
    assert_eq!(out.corpus, "**** *ID_1\ntexto simples aqui\n");
}

#[test]
fn expression_folding_runs_after_acronym_expansion() {
    // The acronym expansion introduces the text the expression then folds.
    let records = vec![Record::new("1", "uso a RS todo dia")];
    let acronyms = AcronymDictionary::from_pairs([("rs", "rede social")]);
    let expressions = ExpressionDictionary::from_pairs([("rede social", "rede_social")]);
    let out = CorpusGenerator::new()
        .generate("extended", &records, &acronyms, &expressions)
        .unwrap();

    assert_eq!(out.corpus, "**** *ID_1\nuso a rede_social todo dia\n");
    assert_eq!(out.stats.expression_hits, 1);
}

#[test]
fn enclitic_splitting_is_configuration_dependent() {
    let records = vec![Record::new("1", "Lembro-me bem")];
    let (acronyms, expressions) = empty_dicts();
    let generator = CorpusGenerator::new();

    let extended = generator
        .generate("extended", &records, &acronyms, &expressions)
        .unwrap();
    assert_eq!(extended.corpus, "**** *ID_1\nme lembro bem\n");

    // The legacy pipeline never splits; the hyphen is swept out instead.
    let legacy = generator
        .generate("legacy", &records, &acronyms, &expressions)
        .unwrap();
    assert_eq!(legacy.corpus, "**** *ID_1\nlembrome bem\n");
}

#[test]
fn percent_handling_differs_between_configs() {
    let records = vec![Record::new("1", "cresceu 10% ao ano")];
    let (acronyms, expressions) = empty_dicts();
    let generator = CorpusGenerator::new();

    let legacy = generator
        .generate("legacy", &records, &acronyms, &expressions)
        .unwrap();
    assert!(legacy.corpus.contains("cresceu 10_ ao ano"));

    let extended = generator
        .generate("extended", &records, &acronyms, &expressions)
        .unwrap();
    assert!(extended.corpus.contains("cresceu 10 ao ano"));
}

#[test]
fn statistics_report_lists_only_seen_characters() {
    let records = vec![Record::new("1", "um-texto; com \"aspas\"")];
    let (acronyms, expressions) = empty_dicts();
    let out = CorpusGenerator::new()
        .generate("extended", &records, &acronyms, &expressions)
        .unwrap();

    assert!(out.report.contains("Records processed: 1"));
    assert!(out.report.contains("Special characters removed: 4"));
    assert!(out.report.contains("Hyphen (-) : 1"));
    assert!(out.report.contains("Semicolon (;) : 1"));
    assert!(out.report.contains("Double quote (\") : 2"));
    assert!(!out.report.contains("Percent"));
    assert!(!out.report.contains("Slash"));
}
