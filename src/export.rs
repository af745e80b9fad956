use anyhow::Result;
use std::io::Write;

use crate::stats::AnalysisResult;

pub const CSV_HEADER: [&str; 6] = [
    "Titles",
    "Top Keywords",
    "Header Links",
    "All Keywords",
    "Repeatable Words",
    "Bi-grams",
];

/// One row per index across the six columns; short columns are padded with
/// empty strings.
pub fn write_csv<W: Write>(result: &AnalysisResult, top: usize, writer: W) -> Result<()> {
    let top_keywords: Vec<&str> = result
        .top_keywords(top)
        .iter()
        .map(|k| k.phrase.as_str())
        .collect();
    let all_keywords: Vec<&str> = result
        .ranked_keywords
        .iter()
        .map(|k| k.phrase.as_str())
        .collect();
    let columns: [Vec<&str>; 6] = [
        result.titles.iter().map(String::as_str).collect(),
        top_keywords,
        result.header_links.iter().map(String::as_str).collect(),
        all_keywords,
        result.repeated_words.iter().map(String::as_str).collect(),
        result.bigrams.iter().map(String::as_str).collect(),
    ];
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for i in 0..rows {
        csv_writer.write_record(columns.iter().map(|col| col.get(i).copied().unwrap_or("")))?;
    }
    csv_writer.flush()?;
    Ok(())
}
