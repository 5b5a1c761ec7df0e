use crate::{
    clean::clean_message,
    fullwidth::convert_full_width_char,
    placeholder::fix_parts_of_speech,
    segment::{self, CutMode, CutOptions},
    Error,
};
use pyo3::prelude::*;

fn to_py_err(e: Error) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

fn parse_mode(mode: &str) -> PyResult<CutMode> {
    match mode {
        "precise" => Ok(CutMode::Precise),
        "search" => Ok(CutMode::Search),
        "all" => Ok(CutMode::All),
        other => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Unknown cut mode '{}', expected 'precise', 'search' or 'all'.",
            other
        ))),
    }
}

#[pyfunction(name = "clean_message")]
fn py_clean_message(message: &str) -> String {
    clean_message(message)
}

#[pyfunction(name = "convert_full_width_char")]
fn py_convert_full_width_char(text: &str) -> String {
    convert_full_width_char(text)
}

#[pyfunction(name = "fix_parts_of_speech")]
fn py_fix_parts_of_speech(text: &str) -> String {
    fix_parts_of_speech(text)
}

#[pyfunction]
fn cut(text: &str) -> PyResult<String> {
    segment::cut(text).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (text, mode="precise", hmm=true))]
fn jieba_cut(text: &str, mode: &str, hmm: bool) -> PyResult<Vec<String>> {
    let options = CutOptions {
        mode: parse_mode(mode)?,
        hmm,
    };
    segment::jieba_cut(text, options).map_err(to_py_err)
}

#[pyfunction]
fn jieba_tag(text: &str) -> PyResult<Vec<(String, String)>> {
    let tokens = segment::jieba_tag(text).map_err(to_py_err)?;
    Ok(tokens.into_iter().map(|t| (t.word, t.tag)).collect())
}

#[pyfunction]
#[pyo3(signature = (text, top_k=segment::DEFAULT_TOP_K))]
fn jieba_extract(text: &str, top_k: usize) -> PyResult<Vec<String>> {
    let options = segment::ExtractOptions::new().with_top_k(top_k);
    let keywords = segment::jieba_extract_with(text, &options).map_err(to_py_err)?;
    Ok(keywords.into_iter().map(|k| k.keyword).collect())
}

#[pymodule]
fn _hancut(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("MESSAGE_PLUGIN_DIR", crate::MESSAGE_PLUGIN_DIR)?;
    m.add_function(wrap_pyfunction!(py_clean_message, m)?)?;
    m.add_function(wrap_pyfunction!(py_convert_full_width_char, m)?)?;
    m.add_function(wrap_pyfunction!(py_fix_parts_of_speech, m)?)?;
    m.add_function(wrap_pyfunction!(cut, m)?)?;
    m.add_function(wrap_pyfunction!(jieba_cut, m)?)?;
    m.add_function(wrap_pyfunction!(jieba_tag, m)?)?;
    m.add_function(wrap_pyfunction!(jieba_extract, m)?)?;

    Ok(())
}
