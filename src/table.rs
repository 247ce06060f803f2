//! Read the input table and write the results table
//!
//! Both are CSV files with a header row. The input columns are carried through untouched and
//! the metrics are appended after them.
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use csv;
use errors::*;
use batch::{Analysed, Document};
use metrics::METRIC_COLUMNS;

/// The input table: its header plus one row per document
#[derive(Debug, Clone, PartialEq)]
pub struct InputTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl InputTable {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<InputTable> {
        let file = File::open(path.as_ref())
            .map_err(|err| Error::MissingFile(
                format!("input table {}", path.as_ref().display()), Some(err)))?;
        InputTable::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<InputTable> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.iter().map(|h| h.to_string()).collect();
        let mut rows = vec![];
        for record in reader.records() {
            rows.push(record?.iter().map(|f| f.to_string()).collect());
        }
        Ok(InputTable { headers: headers, rows: rows })
    }

    /// Document ids, in row order
    ///
    /// Numbered `URL_1`, `URL_2`, ... by default, which is how the article files are named when
    /// they are saved. With `id_column` the ids are read from that column instead, and a table
    /// without it is an error.
    pub fn ids(&self, id_column: Option<&str>) -> Result<Vec<String>> {
        let name = match id_column {
            Some(name) => name,
            None => return Ok((0..self.rows.len()).map(numbered_id).collect()),
        };
        let col = self.headers.iter().position(|h| h.trim() == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))?;
        Ok(self.rows.iter().enumerate()
            .map(|(i, row)| match row.get(col).map(|id| id.trim()) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => numbered_id(i),
            })
            .collect())
    }

    /// Pair every row with its article text from `<articles>/<id>.txt`
    pub fn documents<P: AsRef<Path>>(&self, articles: P, id_column: Option<&str>)
        -> Result<Vec<Document>> {
        let articles = articles.as_ref();
        Ok(self.ids(id_column)?.into_iter().zip(self.rows.iter())
            .map(|(url_id, row)| {
                let path = articles.join(format!("{}.txt", url_id));
                let text = match read_text(&path) {
                    Ok(text) => Some(text),
                    Err(err) => {
                        debug!("No article for {} at {}: {}", url_id, path.display(), err);
                        None
                    }
                };
                Document { url_id: url_id, fields: row.clone(), text: text }
            })
            .collect())
    }
}

fn numbered_id(row: usize) -> String {
    format!("URL_{}", row + 1)
}

/// Article files are UTF-8, though a stray bad byte shouldn't lose the whole article
fn read_text(path: &Path) -> io::Result<String> {
    let mut bytes = vec![];
    File::open(path)?.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the input headers and the metric columns, then one row per analysed document
pub fn write_output<W: Write>(writer: W, input_headers: &[String], analysed: &[Analysed])
    -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    let mut header: Vec<&str> = input_headers.iter().map(|h| h.as_str()).collect();
    header.extend(METRIC_COLUMNS.iter().cloned());
    writer.write_record(&header)?;
    for row in analysed.iter() {
        let mut record = row.fields.clone();
        record.extend(row.metrics.values());
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// `write_output` to a file
pub fn save_output<P: AsRef<Path>>(path: P, input_headers: &[String], analysed: &[Analysed])
    -> Result<()> {
    write_output(File::create(path)?, input_headers, analysed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics::MetricsRecord;
    use std::fs;
    use tempfile::TempDir;

    fn record(words: usize) -> MetricsRecord {
        MetricsRecord {
            positive_score: 1,
            negative_score: 0,
            polarity_score: 0.25,
            subjectivity_score: 0.5,
            avg_sentence_length: words as f64,
            percentage_complex_words: 0.0,
            fog_index: 0.4 * words as f64,
            avg_words_per_sentence: words as f64,
            complex_word_count: 0,
            word_count: words,
            syllable_per_word: 1.0,
            personal_pronouns: 0,
            avg_word_length: 4.5,
        }
    }

    #[test]
    fn ids_are_numbered_by_default() {
        let table = InputTable::from_reader("URL_ID,URL\nblackassign0036,https://a\n\
                                             blackassign0037,https://b\n".as_bytes()).unwrap();
        assert_eq!(table.ids(None).unwrap(), vec!["URL_1", "URL_2"]);
        let table = InputTable::from_reader("URL\nhttps://a\nhttps://b\n".as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["URL"]);
        assert_eq!(table.ids(None).unwrap(), vec!["URL_1", "URL_2"]);
    }

    #[test]
    fn ids_can_come_from_a_column() {
        let table = InputTable::from_reader("URL_ID,URL\nblackassign0036,https://a\n\
                                             ,https://b\n".as_bytes()).unwrap();
        assert_eq!(table.ids(Some("URL_ID")).unwrap(), vec!["blackassign0036", "URL_2"]);
        match table.ids(Some("ID")) {
            Err(Error::MissingColumn(ref name)) => assert_eq!(name, "ID"),
            other => panic!("expected a missing column, got {:?}", other),
        }
    }

    #[test]
    fn documents_follow_the_numbered_file_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("URL_2.txt"), "Saved text.").unwrap();
        let table = InputTable::from_reader("URL_ID,URL\nblackassign0036,https://a\n\
                                             blackassign0037,https://b\n".as_bytes()).unwrap();
        let docs = table.documents(dir.path(), None).unwrap();
        assert_eq!(docs[0].text, None);
        assert_eq!(docs[1].url_id, "URL_2");
        assert_eq!(docs[1].text, Some("Saved text.".to_string()));
        assert_eq!(docs[1].fields, vec!["blackassign0037", "https://b"]);
    }

    #[test]
    fn output_appends_metric_columns() {
        let headers = vec!["URL_ID".to_string(), "URL".to_string()];
        let analysed = vec![Analysed {
            url_id: "URL_1".to_string(),
            fields: vec!["URL_1".to_string(), "https://a".to_string()],
            metrics: record(3),
        }];
        let mut out = vec![];
        write_output(&mut out, &headers, &analysed).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("URL_ID,URL,POSITIVE SCORE,NEGATIVE SCORE,"));
        assert!(header.ends_with("PERSONAL PRONOUNS,AVG WORD LENGTH"));
        assert_eq!(lines.next().unwrap(),
            "URL_1,https://a,1,0,0.25,0.5,3,0,1.2000000000000002,3,0,3,1,0,4.5");
        assert!(lines.next().is_none());
    }
}
