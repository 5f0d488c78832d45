//! Tabular output for the raw corpus, enriched records and reports.
//!
//! Column names follow the Spanish schema consumed downstream. Every file
//! gets its header row, even when it has no records.

use crate::error::CorpusError;
use crate::models::{AggregateReport, CountEntry, EnrichedArticle, RawArticle};
use csv::WriterBuilder;
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument};

pub const RAW_HEADERS: &[&str] = &["titulo", "fecha_publicacion", "url", "autor", "texto"];

pub const PROCESSED_HEADERS: &[&str] = &[
    "titulo",
    "fecha_publicacion",
    "url",
    "autor",
    "tema",
    "pais",
    "top5_palabras_articulo",
    "longitud_palabras",
];

pub const TOPS_HEADERS: &[&str] = &["tipo", "valor", "conteo"];
pub const WORDS_HEADERS: &[&str] = &["palabra", "conteo"];

pub const TOP_TOPICS_KIND: &str = "top-5-topics";
pub const TOP_COUNTRIES_KIND: &str = "top-5-countries";

#[derive(Serialize)]
struct ProcessedRow<'a> {
    titulo: &'a str,
    fecha_publicacion: &'a str,
    url: &'a str,
    autor: &'a str,
    tema: &'a str,
    pais: &'a str,
    top5_palabras_articulo: String,
    longitud_palabras: usize,
}

impl<'a> From<&'a EnrichedArticle> for ProcessedRow<'a> {
    fn from(a: &'a EnrichedArticle) -> Self {
        Self {
            titulo: &a.title,
            fecha_publicacion: &a.date_canonical,
            url: &a.url,
            autor: &a.author,
            tema: &a.topic,
            pais: &a.country,
            top5_palabras_articulo: a.top5_words.join(", "),
            longitud_palabras: a.word_count,
        }
    }
}

#[derive(Serialize)]
struct TopRow<'a> {
    tipo: &'a str,
    valor: &'a str,
    conteo: usize,
}

#[derive(Serialize)]
struct WordRow<'a> {
    palabra: &'a str,
    conteo: usize,
}

fn write_rows<T, I>(path: &Path, headers: &[&str], rows: I) -> Result<usize, CorpusError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(headers)?;
    let mut written = 0;
    for row in rows {
        writer.serialize(row)?;
        written += 1;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = written, "Wrote CSV");
    Ok(written)
}

#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn write_raw_corpus(path: impl AsRef<Path>, corpus: &[RawArticle]) -> Result<usize, CorpusError> {
    write_rows(path.as_ref(), RAW_HEADERS, corpus)
}

/// Read a raw corpus CSV. Missing columns and empty cells become empty strings.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn read_raw_corpus(path: impl AsRef<Path>) -> Result<Vec<RawArticle>, CorpusError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let corpus = reader
        .deserialize::<RawArticle>()
        .collect::<Result<Vec<_>, _>>()?;
    info!(rows = corpus.len(), "Read raw corpus");
    Ok(corpus)
}

#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn write_processed(
    path: impl AsRef<Path>,
    articles: &[EnrichedArticle],
) -> Result<usize, CorpusError> {
    write_rows(
        path.as_ref(),
        PROCESSED_HEADERS,
        articles.iter().map(ProcessedRow::from),
    )
}

/// Topic rows first, then country rows.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn write_tops(path: impl AsRef<Path>, report: &AggregateReport) -> Result<usize, CorpusError> {
    let rows = top_rows(TOP_TOPICS_KIND, &report.top_topics)
        .chain(top_rows(TOP_COUNTRIES_KIND, &report.top_countries));
    write_rows(path.as_ref(), TOPS_HEADERS, rows)
}

fn top_rows<'a>(
    kind: &'static str,
    entries: &'a [CountEntry],
) -> impl Iterator<Item = TopRow<'a>> + 'a {
    entries.iter().map(move |e| TopRow {
        tipo: kind,
        valor: &e.value,
        conteo: e.count,
    })
}

#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn write_top_words(
    path: impl AsRef<Path>,
    report: &AggregateReport,
) -> Result<usize, CorpusError> {
    let rows = report.top_words.iter().map(|e| WordRow {
        palabra: &e.value,
        conteo: e.count,
    });
    write_rows(path.as_ref(), WORDS_HEADERS, rows)
}
