//! End-to-end tests against the bundled jieba dictionary.

use hancut::segment::default_segmenter;
use hancut::{
    clean_message, convert_full_width_char, cut, cut_with, jieba_cut, jieba_extract,
    jieba_extract_with, jieba_tag, CutMode, CutOptions, Error, ExtractOptions, JiebaSegmenter,
    KeywordMethod, Segmenter,
};
use std::io::Write;

#[test]
fn test_cut_without_chinese_is_identity() {
    for input in ["hello world", "<noun> is here", "3.14", ""] {
        assert_eq!(cut(input).unwrap(), input);
    }
}

#[test]
fn test_cut_isolates_placeholder() {
    let result = cut("你好<noun>世界").unwrap();
    assert!(result.contains(" <noun> "), "got {result:?}");
    assert_eq!(result.replace(' ', ""), "你好<noun>世界");
}

#[test]
fn test_cut_separates_latin_neighbours() {
    let result = cut("hello你好world").unwrap();
    assert!(result.starts_with("hello "), "got {result:?}");
    assert!(result.ends_with(" world"), "got {result:?}");
}

#[test]
fn test_cut_keeps_brackets_tight() {
    let result = cut("(北京)").unwrap();
    assert!(result.starts_with("(北"), "got {result:?}");
    assert!(result.ends_with("京)"), "got {result:?}");
}

#[test]
fn test_cut_never_duplicates_characters() {
    for input in ["我爱中华人民共和国", "x南京市长江大桥y", "(中华人民共和国)|南京市长江大桥"] {
        let result = cut(input).unwrap();
        assert_eq!(result.replace(' ', ""), input, "got {result:?}");
    }
}

#[test]
fn test_cut_keeps_long_words_whole() {
    let result = cut("我爱中华人民共和国").unwrap();
    let tokens: Vec<&str> = result.split(' ').collect();
    assert!(tokens.contains(&"中华人民共和国"), "got {result:?}");
    assert!(!tokens.contains(&"华人"), "got {result:?}");
}

#[test]
fn test_precise_cut() {
    let tokens = jieba_cut("我们中出了一个叛徒", CutOptions::new().without_hmm()).unwrap();
    assert_eq!(tokens, vec!["我们", "中", "出", "了", "一个", "叛徒"]);
}

#[test]
fn test_search_cut_emits_sub_words() {
    let tokens = jieba_cut("南京市长江大桥", CutOptions::search()).unwrap();
    assert!(tokens.iter().any(|t| t == "南京"), "got {tokens:?}");
    assert!(tokens.iter().any(|t| t == "长江大桥"), "got {tokens:?}");
}

#[test]
fn test_all_mode_returns_every_word() {
    let precise = jieba_cut("南京市长江大桥", CutOptions::new()).unwrap();
    let all = jieba_cut(
        "南京市长江大桥",
        CutOptions::new().with_mode(CutMode::All),
    )
    .unwrap();
    assert!(all.len() >= precise.len());
}

#[test]
fn test_tag_covers_input() {
    let text = "我爱北京天安门";
    let tokens = jieba_tag(text).unwrap();
    let joined: String = tokens.iter().map(|t| t.word.as_str()).collect();
    assert_eq!(joined, text);
    assert!(tokens.iter().all(|t| !t.tag.is_empty()));
}

#[test]
fn test_extract_returns_top_keywords() {
    let text = "今天纽约的天气真好啊，京华大酒店的张尧经理吃了一只北京烤鸭。";
    let keywords = jieba_extract(text).unwrap();
    assert!(!keywords.is_empty());
    assert!(keywords.len() <= hancut::segment::DEFAULT_TOP_K);
    assert!(keywords.iter().all(|k| text.contains(k.as_str())));
}

#[test]
fn test_extract_with_textrank_and_top_k() {
    let text = "此外，公司拟对全资子公司吉林欧亚置业有限公司增资4.3亿元，增资后，吉林欧亚置业注册资本由7000万元增加到5亿元。";
    let options = ExtractOptions::new()
        .with_top_k(3)
        .with_method(KeywordMethod::TextRank);
    let keywords = jieba_extract_with(text, &options).unwrap();
    assert!(keywords.len() <= 3);
    assert!(keywords.iter().all(|k| text.contains(k.keyword.as_str())));
}

#[test]
fn test_user_dictionary_file() {
    let mut dict = tempfile::NamedTempFile::new().unwrap();
    writeln!(dict, "蓝莓云朵派 100000 n").unwrap();

    let segmenter = JiebaSegmenter::with_user_dict(dict.path()).unwrap();
    let tokens = segmenter
        .cut("我爱蓝莓云朵派", CutOptions::new().without_hmm())
        .unwrap();
    assert!(tokens.iter().any(|t| t == "蓝莓云朵派"), "got {tokens:?}");

    let result = cut_with(&segmenter, "x蓝莓云朵派").unwrap();
    assert!(result.starts_with("x "), "got {result:?}");
    assert!(result.contains("蓝莓云朵派"), "got {result:?}");
}

#[test]
fn test_missing_user_dictionary() {
    let result = JiebaSegmenter::with_user_dict("/nonexistent/hancut/dict.txt");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_default_segmenter_is_shared() {
    assert!(std::ptr::eq(default_segmenter(), default_segmenter()));
}

#[test]
fn test_conventional_pipeline() {
    let message = convert_full_width_char("我喜欢“<noun>”！");
    let message = clean_message(&message);
    let result = cut(&message).unwrap();
    assert!(result.contains("<noun>"), "got {result:?}");
    assert!(!result.contains('"'), "got {result:?}");
    assert!(!result.contains('!'), "got {result:?}");
}
