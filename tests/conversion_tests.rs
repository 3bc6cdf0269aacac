mod common;

use common::fixtures::{dictionary_of, rich_word, simple_word};
use common::fo_assertions::{fo_elements, marker_texts, text_of};
use common::{TestResult, render};
use folio::FolioError;
use folio::format::FormatError;
use serde_json::json;

#[test]
fn test_two_words_make_two_partitions_in_sorted_order() -> TestResult {
    let rendered = render(&dictionary_of(vec![simple_word("zz", "二"), simple_word("ab", "一")]), "ja")?;
    let document = rendered.document()?;

    let partition_ids: Vec<_> = fo_elements(&document, "block")
        .into_iter()
        .filter_map(|n| n.attribute("id"))
        .collect();
    assert_eq!(partition_ids, vec!["alphabet-a", "alphabet-z"]);
    assert_eq!(marker_texts(&document, "alphabet"), vec!["a", "z"]);
    assert_eq!(marker_texts(&document, "name"), vec!["ab", "zz"]);
    Ok(())
}

#[test]
fn test_vowels_share_one_partition() -> TestResult {
    let words = vec![
        simple_word("ab", "一"),
        simple_word("eb", "二"),
        simple_word("ib", "三"),
        simple_word("sa", "四"),
    ];
    let rendered = render(&dictionary_of(words), "ja")?;
    let document = rendered.document()?;
    assert_eq!(marker_texts(&document, "alphabet"), vec!["a", "s"]);
    assert_eq!(marker_texts(&document, "name"), vec!["ab", "eb", "ib", "sa"]);
    Ok(())
}

#[test]
fn test_vowel_partition_is_unique_when_consonants_interleave() -> TestResult {
    let words = vec![simple_word("ab", "一"), simple_word("da", "二"), simple_word("eb", "三")];
    let rendered = render(&dictionary_of(words), "ja")?;
    let document = rendered.document()?;

    let partition_ids: Vec<_> = fo_elements(&document, "block")
        .into_iter()
        .filter_map(|n| n.attribute("id"))
        .collect();
    assert_eq!(partition_ids, vec!["alphabet-a", "alphabet-d"]);
    assert_eq!(marker_texts(&document, "alphabet"), vec!["a", "d"]);
    assert_eq!(marker_texts(&document, "name"), vec!["ab", "eb", "da"]);
    Ok(())
}

#[test]
fn test_alphabet_rule_orders_words() -> TestResult {
    let mut dictionary = dictionary_of(vec![simple_word("ab", "一"), simple_word("sa", "二")]);
    dictionary["settings"]["alphabetRule"] = json!("sztdkgfvpbcqxjlrnmyhaeiou");
    let rendered = render(&dictionary, "ja")?;
    let document = rendered.document()?;
    assert_eq!(marker_texts(&document, "name"), vec!["sa", "ab"]);
    Ok(())
}

#[test]
fn test_document_skeleton() -> TestResult {
    let rendered = render(&dictionary_of(vec![simple_word("ab", "一")]), "ja")?;
    let document = rendered.document()?;

    let masters: Vec<_> = fo_elements(&document, "simple-page-master")
        .into_iter()
        .filter_map(|n| n.attribute("master-name"))
        .collect();
    assert_eq!(masters, vec!["main.left", "main.right"]);

    let alternatives: Vec<_> = fo_elements(&document, "conditional-page-master-reference")
        .into_iter()
        .map(|n| (n.attribute("master-reference"), n.attribute("odd-or-even")))
        .collect();
    assert_eq!(
        alternatives,
        vec![(Some("main.left"), Some("even")), (Some("main.right"), Some("odd"))]
    );

    let flows: Vec<_> = fo_elements(&document, "static-content")
        .into_iter()
        .filter_map(|n| n.attribute("flow-name"))
        .collect();
    assert_eq!(
        flows,
        vec![
            "main.left-header",
            "main.right-header",
            "main.left-footer",
            "main.right-footer",
            "main.left-side",
            "main.right-side",
        ]
    );
    assert_eq!(fo_elements(&document, "bookmark").len(), 21);
    assert_eq!(fo_elements(&document, "page-number").len(), 2);
    Ok(())
}

#[test]
fn test_rich_word_sections() -> TestResult {
    let rendered = render(&dictionary_of(vec![rich_word()]), "ja")?;
    let document = rendered.document()?;
    let flow = fo_elements(&document, "flow").into_iter().next().ok_or("no flow")?;
    let text = text_of(flow);

    assert!(text.contains("(aへ)"), "{text}");
    assert!(text.contains("歩く, 進む"), "{text}");
    assert!(!text.contains("hidden"));
    assert!(!text.contains("隠"), "{text}");
    assert!(text.contains("||徒歩で移動する"), "{text}");
    assert!(text.contains("zal と比較"), "{text}");
    assert!(!text.contains("不明"));
    assert!(text.contains("sal a▶行く||口語"), "{text}");
    assert!(text.contains("a sal & b.▶a が歩く。"), "{text}");

    let italic: Vec<_> = fo_elements(&document, "inline")
        .into_iter()
        .filter(|n| n.attribute("font-style") == Some("italic"))
        .map(text_of)
        .collect();
    assert_eq!(italic, vec!["進む"]);
    Ok(())
}

#[test]
fn test_reserved_characters_are_escaped() -> TestResult {
    let rendered = render(&dictionary_of(vec![rich_word()]), "ja")?;
    assert!(rendered.source.contains("a sal</fo:inline> &amp; b."));
    Ok(())
}

#[test]
fn test_words_without_language_are_skipped() -> TestResult {
    let rendered = render(&dictionary_of(vec![simple_word("ab", "一"), simple_word("sa", "二")]), "en")?;
    let document = rendered.document()?;
    assert!(marker_texts(&document, "name").is_empty());
    assert_eq!(fo_elements(&document, "flow").len(), 1);
    Ok(())
}

#[test]
fn test_unsupported_version_produces_no_output() {
    let mut dictionary = dictionary_of(vec![simple_word("ab", "一")]);
    dictionary["settings"]["version"] = json!("T");
    let result = render(&dictionary, "ja");
    assert!(matches!(
        result,
        Err(FolioError::Format(FormatError::UnsupportedVersion(ref version))) if version == "T"
    ));
}

#[test]
fn test_markup_error_reaches_caller() {
    let dictionary = dictionary_of(vec![simple_word("ab", "[unclosed")]);
    match render(&dictionary, "ja") {
        Err(FolioError::Markup(error)) => {
            assert!(error.to_string().contains("[unclosed"));
            assert_eq!(FolioError::Markup(error.clone()).to_string(), error.to_string());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("malformed markup was accepted"),
    }
}
